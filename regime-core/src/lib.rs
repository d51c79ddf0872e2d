pub mod calculations;
pub mod models;
pub mod money;

pub use calculations::{RegimeRates, RegimeRatesError, ScenarioCalculator, ScenarioInput};
pub use models::*;
pub use money::{ParseAmountError, format_rub, parse_amount, parse_amount_strict};
