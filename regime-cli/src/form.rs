//! Interactive form state.
//!
//! Holds the nine raw text fields exactly as typed, reparses them
//! leniently on every edit, and recomputes the comparison only when the
//! parsed input tuple actually changed.

use regime_core::calculations::{ScenarioCalculator, ScenarioInput};
use regime_core::models::Comparison;
use regime_core::money::parse_amount;

/// The nine editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Trainings,
    Camps,
    Royalty,
    Goods,
    UsnExpenses,
    AusnExpenses,
    PrevYearRevenue,
    VatThreshold,
    PatentCost,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Self::Trainings,
        Self::Camps,
        Self::Royalty,
        Self::Goods,
        Self::UsnExpenses,
        Self::AusnExpenses,
        Self::PrevYearRevenue,
        Self::VatThreshold,
        Self::PatentCost,
    ];

    /// Field name, matching the input-file keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trainings => "trainings",
            Self::Camps => "camps",
            Self::Royalty => "royalty",
            Self::Goods => "goods",
            Self::UsnExpenses => "usn_expenses",
            Self::AusnExpenses => "ausn_expenses",
            Self::PrevYearRevenue => "prev_year_revenue",
            Self::VatThreshold => "vat_threshold",
            Self::PatentCost => "patent_cost",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == s)
    }
}

/// Mutable form state for the interactive mode.
///
/// Raw text is kept verbatim; a half-typed value simply parses to zero
/// until the user finishes it. The comparison is cached against the
/// parsed [`ScenarioInput`], so edits that do not change the parsed
/// figures (extra spaces, a trailing comma) cost nothing.
#[derive(Debug)]
pub struct FormState {
    trainings: String,
    camps: String,
    royalty: String,
    goods: String,
    usn_expenses: String,
    ausn_expenses: String,
    prev_year_revenue: String,
    vat_threshold: String,
    patent_cost: String,
    calculator: ScenarioCalculator,
    cache: Option<(ScenarioInput, Comparison)>,
}

impl FormState {
    /// Creates a form pre-filled from an already-parsed input.
    pub fn new(calculator: ScenarioCalculator, input: &ScenarioInput) -> Self {
        Self {
            trainings: input.revenue.trainings.to_string(),
            camps: input.revenue.camps.to_string(),
            royalty: input.revenue.royalty.to_string(),
            goods: input.revenue.goods.to_string(),
            usn_expenses: input.expenses.usn_profit_expenses.to_string(),
            ausn_expenses: input.expenses.ausn_profit_expenses.to_string(),
            prev_year_revenue: input.thresholds.prev_year_revenue.to_string(),
            vat_threshold: input.thresholds.vat_threshold.to_string(),
            patent_cost: input.thresholds.patent_cost.to_string(),
            calculator,
            cache: None,
        }
    }

    /// Stores the raw text of a field, exactly as typed.
    pub fn set(
        &mut self,
        field: Field,
        raw: &str,
    ) {
        let slot = match field {
            Field::Trainings => &mut self.trainings,
            Field::Camps => &mut self.camps,
            Field::Royalty => &mut self.royalty,
            Field::Goods => &mut self.goods,
            Field::UsnExpenses => &mut self.usn_expenses,
            Field::AusnExpenses => &mut self.ausn_expenses,
            Field::PrevYearRevenue => &mut self.prev_year_revenue,
            Field::VatThreshold => &mut self.vat_threshold,
            Field::PatentCost => &mut self.patent_cost,
        };
        *slot = raw.to_string();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Trainings => &self.trainings,
            Field::Camps => &self.camps,
            Field::Royalty => &self.royalty,
            Field::Goods => &self.goods,
            Field::UsnExpenses => &self.usn_expenses,
            Field::AusnExpenses => &self.ausn_expenses,
            Field::PrevYearRevenue => &self.prev_year_revenue,
            Field::VatThreshold => &self.vat_threshold,
            Field::PatentCost => &self.patent_cost,
        }
    }

    /// Leniently parses all nine fields into a calculation input.
    pub fn input(&self) -> ScenarioInput {
        let mut input = ScenarioInput::default();
        input.revenue.trainings = parse_amount(&self.trainings);
        input.revenue.camps = parse_amount(&self.camps);
        input.revenue.royalty = parse_amount(&self.royalty);
        input.revenue.goods = parse_amount(&self.goods);
        input.expenses.usn_profit_expenses = parse_amount(&self.usn_expenses);
        input.expenses.ausn_profit_expenses = parse_amount(&self.ausn_expenses);
        input.thresholds.prev_year_revenue = parse_amount(&self.prev_year_revenue);
        input.thresholds.vat_threshold = parse_amount(&self.vat_threshold);
        input.thresholds.patent_cost = parse_amount(&self.patent_cost);
        input
    }

    /// Brings the cached comparison up to date.
    ///
    /// Returns `true` when a recomputation actually ran, `false` when the
    /// parsed input was unchanged and the cache was reused.
    pub fn refresh(&mut self) -> bool {
        let input = self.input();
        if let Some((cached_input, _)) = &self.cache {
            if *cached_input == input {
                return false;
            }
        }
        let comparison = self.calculator.calculate(&input);
        self.cache = Some((input, comparison));
        true
    }

    /// The comparison for the current field values, recomputing if needed.
    pub fn comparison(&mut self) -> &Comparison {
        self.refresh();
        // refresh() always leaves the cache populated.
        let (_, comparison) = self.cache.as_ref().unwrap();
        comparison
    }
}
