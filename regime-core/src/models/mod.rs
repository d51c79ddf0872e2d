mod expenses;
mod revenue;
mod scenario;
mod thresholds;

pub use expenses::ExpenseInputs;
pub use revenue::{DerivedTotals, RevenueInputs};
pub use scenario::{Comparison, RegimeKind, Scenario, TaxComponent, TaxLine};
pub use thresholds::ThresholdInputs;
