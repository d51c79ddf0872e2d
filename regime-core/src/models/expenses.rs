use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deductible expenses, used only by the profit-based regimes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInputs {
    /// Expenses deductible under USN 15% (income minus expenses).
    pub usn_profit_expenses: Decimal,
    /// Expenses deductible under AUSN 20% (income minus expenses).
    pub ausn_profit_expenses: Decimal,
}
