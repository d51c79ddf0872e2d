use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four revenue streams of the business, in whole rubles.
///
/// Missing or unparseable form input defaults each field to zero; the
/// parsing itself lives in [`crate::money`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueInputs {
    /// Revenue from training sessions (patent-covered).
    pub trainings: Decimal,
    /// Revenue from sports camps (patent-covered).
    pub camps: Decimal,
    /// Royalty revenue (taxed under the simplified regimes).
    pub royalty: Decimal,
    /// Goods sales revenue (taxed under the simplified regimes).
    pub goods: Decimal,
}

impl RevenueInputs {
    /// Derives the aggregate figures the scenario formulas work from.
    pub fn totals(&self) -> DerivedTotals {
        let sport = self.trainings + self.camps;
        let taxable = self.royalty + self.goods;
        DerivedTotals {
            sport,
            taxable,
            total: sport + taxable,
        }
    }
}

/// Aggregates derived from [`RevenueInputs`]; never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// Patent-covered revenue: trainings + camps.
    pub sport: Decimal,
    /// Simplified-regime revenue: royalty + goods.
    pub taxable: Decimal,
    /// Everything combined: sport + taxable.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn totals_derive_sport_taxable_and_total() {
        let revenue = RevenueInputs {
            trainings: dec!(8000000),
            camps: dec!(0),
            royalty: dec!(6000000),
            goods: dec!(1000000),
        };

        let totals = revenue.totals();

        assert_eq!(totals.sport, dec!(8000000));
        assert_eq!(totals.taxable, dec!(7000000));
        assert_eq!(totals.total, dec!(15000000));
    }

    #[test]
    fn default_revenue_totals_are_zero() {
        let totals = RevenueInputs::default().totals();

        assert_eq!(totals.sport, Decimal::ZERO);
        assert_eq!(totals.taxable, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
