use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Threshold and fixed-cost inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdInputs {
    /// Prior-year revenue, compared against the VAT threshold.
    pub prev_year_revenue: Decimal,
    /// Revenue threshold above which reduced VAT applies.
    pub vat_threshold: Decimal,
    /// Annual cost of the PSN patent covering the sport revenue.
    pub patent_cost: Decimal,
}

impl ThresholdInputs {
    /// The 2026 revenue threshold above which reduced VAT applies, in
    /// rubles. Used as the default when the user does not override it.
    pub const VAT_THRESHOLD_2026: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

    /// Whether the business pays reduced VAT in 2026.
    ///
    /// Strict comparison: prior-year revenue exactly at the threshold is
    /// NOT a VAT payer.
    pub fn is_vat_payer(&self) -> bool {
        self.prev_year_revenue > self.vat_threshold
    }
}
