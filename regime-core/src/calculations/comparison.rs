//! The four-scenario tax comparison.
//!
//! Given the nine business figures, the calculator derives the aggregate
//! revenue, decides VAT status, computes all four regime scenarios, and
//! selects the cheapest one.
//!
//! # Scenario formulas
//!
//! | Key    | Formula                                                          |
//! |--------|------------------------------------------------------------------|
//! | usn6   | patent + taxable × 6% + (taxable × 5% if VAT payer)              |
//! | usn15  | patent + max(0, taxable − usn expenses) × 15% + (taxable × 5% if VAT payer) |
//! | ausn8  | total × 8%                                                       |
//! | ausn20 | max(0, total − ausn expenses) × 20%                              |
//!
//! where `sport = trainings + camps`, `taxable = royalty + goods`,
//! `total = sport + taxable`, and the business is a VAT payer when
//! prior-year revenue strictly exceeds the threshold.
//!
//! AUSN scenarios never carry a patent or VAT line. All four scenarios
//! are always computed, whatever the figures; real-world restrictions on
//! combining regimes are a display-level caveat, not a calculation rule.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::{ScenarioCalculator, ScenarioInput};
//! use regime_core::models::{ExpenseInputs, RegimeKind, RevenueInputs, ThresholdInputs};
//!
//! let input = ScenarioInput {
//!     revenue: RevenueInputs {
//!         trainings: dec!(8000000),
//!         camps: dec!(0),
//!         royalty: dec!(6000000),
//!         goods: dec!(1000000),
//!     },
//!     expenses: ExpenseInputs {
//!         usn_profit_expenses: dec!(1200000),
//!         ausn_profit_expenses: dec!(1200000),
//!     },
//!     thresholds: ThresholdInputs {
//!         prev_year_revenue: dec!(15000000),
//!         vat_threshold: dec!(10000000),
//!         patent_cost: dec!(200000),
//!     },
//! };
//!
//! let comparison = ScenarioCalculator::new().calculate(&input);
//!
//! assert_eq!(comparison.best, RegimeKind::UsnIncome);
//! assert_eq!(comparison.best_scenario().total_tax, dec!(970000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::floor_at_zero;
use crate::calculations::rates::{RegimeRates, RegimeRatesError};
use crate::models::{
    Comparison, ExpenseInputs, RegimeKind, RevenueInputs, Scenario, TaxComponent, TaxLine,
    ThresholdInputs,
};

/// The complete input tuple for one comparison cycle.
///
/// `PartialEq` is derived so callers can memoize: recompute only when the
/// parsed inputs differ from the previous call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub revenue: RevenueInputs,
    pub expenses: ExpenseInputs,
    pub thresholds: ThresholdInputs,
}

/// Calculator for the four 2026 regime scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCalculator {
    rates: RegimeRates,
}

impl ScenarioCalculator {
    /// Creates a calculator with the built-in 2026 rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom rate table.
    ///
    /// # Errors
    ///
    /// Returns [`RegimeRatesError`] if any rate is outside `[0, 1]`.
    pub fn with_rates(rates: RegimeRates) -> Result<Self, RegimeRatesError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// The rate table in effect.
    pub fn rates(&self) -> &RegimeRates {
        &self.rates
    }

    /// Computes all four scenarios and selects the cheapest.
    ///
    /// Pure and infallible: numeric edge cases (zero revenue, expenses
    /// exceeding revenue) degrade gracefully, never to negative tax.
    pub fn calculate(&self, input: &ScenarioInput) -> Comparison {
        let totals = input.revenue.totals();
        let is_vat_payer = input.thresholds.is_vat_payer();
        let patent_cost = input.thresholds.patent_cost;

        let scenarios = [
            self.usn_income_scenario(totals.taxable, patent_cost, is_vat_payer),
            self.usn_profit_scenario(totals.taxable, &input.expenses, patent_cost, is_vat_payer),
            self.ausn_income_scenario(totals.total),
            self.ausn_profit_scenario(totals.total, &input.expenses),
        ];
        let best = Self::best_of(&scenarios);

        Comparison {
            totals,
            is_vat_payer,
            scenarios,
            best,
        }
    }

    /// VAT line for the USN scenarios: 5% of taxable revenue when the
    /// business is a VAT payer, zero otherwise. Never applies to sport
    /// or total revenue.
    fn vat_line(&self, taxable: Decimal, is_vat_payer: bool) -> TaxLine {
        let amount = if is_vat_payer {
            taxable * self.rates.vat_reduced_rate
        } else {
            Decimal::ZERO
        };
        TaxLine {
            component: TaxComponent::Vat,
            amount,
        }
    }

    /// PSN patent + USN 6% on income.
    fn usn_income_scenario(
        &self,
        taxable: Decimal,
        patent_cost: Decimal,
        is_vat_payer: bool,
    ) -> Scenario {
        Scenario::new(
            RegimeKind::UsnIncome,
            vec![
                TaxLine {
                    component: TaxComponent::Patent,
                    amount: patent_cost,
                },
                TaxLine {
                    component: TaxComponent::UsnIncome,
                    amount: taxable * self.rates.usn_income_rate,
                },
                self.vat_line(taxable, is_vat_payer),
            ],
        )
    }

    /// PSN patent + USN 15% on income minus expenses.
    fn usn_profit_scenario(
        &self,
        taxable: Decimal,
        expenses: &ExpenseInputs,
        patent_cost: Decimal,
        is_vat_payer: bool,
    ) -> Scenario {
        let base = floor_at_zero(taxable - expenses.usn_profit_expenses);
        Scenario::new(
            RegimeKind::UsnProfit,
            vec![
                TaxLine {
                    component: TaxComponent::Patent,
                    amount: patent_cost,
                },
                TaxLine {
                    component: TaxComponent::UsnProfit,
                    amount: base * self.rates.usn_profit_rate,
                },
                self.vat_line(taxable, is_vat_payer),
            ],
        )
    }

    /// AUSN 8% on all income. No patent, no VAT.
    fn ausn_income_scenario(&self, total: Decimal) -> Scenario {
        Scenario::new(
            RegimeKind::AusnIncome,
            vec![TaxLine {
                component: TaxComponent::AusnIncome,
                amount: total * self.rates.ausn_income_rate,
            }],
        )
    }

    /// AUSN 20% on all income minus expenses. No patent, no VAT.
    fn ausn_profit_scenario(
        &self,
        total: Decimal,
        expenses: &ExpenseInputs,
    ) -> Scenario {
        let base = floor_at_zero(total - expenses.ausn_profit_expenses);
        Scenario::new(
            RegimeKind::AusnProfit,
            vec![TaxLine {
                component: TaxComponent::AusnProfit,
                amount: base * self.rates.ausn_profit_rate,
            }],
        )
    }

    /// Pairwise minimum over the four totals. Strict less-than keeps the
    /// first-encountered scenario on exact ties.
    fn best_of(scenarios: &[Scenario; 4]) -> RegimeKind {
        let mut best = &scenarios[0];
        for scenario in &scenarios[1..] {
            if scenario.total_tax < best.total_tax {
                best = scenario;
            }
        }
        best.kind
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// The worked example from the tool's default figures: 8M trainings,
    /// 6M royalty, 1M goods, 1.2M expenses each, 15M prior-year revenue
    /// against a 10M threshold, 200k patent.
    fn example_input() -> ScenarioInput {
        ScenarioInput {
            revenue: RevenueInputs {
                trainings: dec!(8000000),
                camps: dec!(0),
                royalty: dec!(6000000),
                goods: dec!(1000000),
            },
            expenses: ExpenseInputs {
                usn_profit_expenses: dec!(1200000),
                ausn_profit_expenses: dec!(1200000),
            },
            thresholds: ThresholdInputs {
                prev_year_revenue: dec!(15000000),
                vat_threshold: dec!(10000000),
                patent_cost: dec!(200000),
            },
        }
    }

    #[test]
    fn derives_totals_from_revenue() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        assert_eq!(comparison.totals.sport, dec!(8000000));
        assert_eq!(comparison.totals.taxable, dec!(7000000));
        assert_eq!(comparison.totals.total, dec!(15000000));
        assert!(comparison.is_vat_payer);
    }

    #[test]
    fn usn_income_is_patent_plus_six_percent_plus_vat() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        let scenario = comparison.scenario(RegimeKind::UsnIncome);
        // 200 000 + 420 000 + 350 000
        assert_eq!(scenario.total_tax, dec!(970000));
    }

    #[test]
    fn usn_profit_deducts_expenses_before_the_rate() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        let scenario = comparison.scenario(RegimeKind::UsnProfit);
        // 200 000 + (7 000 000 − 1 200 000) × 0.15 + 350 000
        assert_eq!(scenario.total_tax, dec!(1420000));
    }

    #[test]
    fn ausn_income_is_eight_percent_of_everything() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        let scenario = comparison.scenario(RegimeKind::AusnIncome);
        assert_eq!(scenario.total_tax, dec!(1200000));
    }

    #[test]
    fn ausn_profit_is_twenty_percent_of_total_minus_expenses() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        let scenario = comparison.scenario(RegimeKind::AusnProfit);
        // (15 000 000 − 1 200 000) × 0.20
        assert_eq!(scenario.total_tax, dec!(2760000));
    }

    #[test]
    fn best_scenario_is_the_cheapest() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        assert_eq!(comparison.best, RegimeKind::UsnIncome);
        assert_eq!(comparison.best_scenario().total_tax, dec!(970000));
    }

    #[test]
    fn equal_prior_year_revenue_is_not_a_vat_payer() {
        let mut input = example_input();
        input.thresholds.prev_year_revenue = dec!(10000000);

        let comparison = ScenarioCalculator::new().calculate(&input);

        assert!(!comparison.is_vat_payer);
        let scenario = comparison.scenario(RegimeKind::UsnIncome);
        // VAT line drops out: 200 000 + 420 000
        assert_eq!(scenario.total_tax, dec!(620000));
    }

    #[test]
    fn vat_never_appears_in_ausn_scenarios() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        for kind in [RegimeKind::AusnIncome, RegimeKind::AusnProfit] {
            let scenario = comparison.scenario(kind);
            assert!(
                scenario
                    .lines
                    .iter()
                    .all(|l| l.component != TaxComponent::Vat && l.component != TaxComponent::Patent)
            );
        }
    }

    #[test]
    fn expenses_above_revenue_floor_the_profit_bases_at_zero() {
        let mut input = example_input();
        input.expenses.usn_profit_expenses = dec!(99000000);
        input.expenses.ausn_profit_expenses = dec!(99000000);

        let comparison = ScenarioCalculator::new().calculate(&input);

        // usn15 keeps only patent and VAT; ausn20 collapses to zero.
        let usn_profit = comparison.scenario(RegimeKind::UsnProfit);
        assert_eq!(usn_profit.total_tax, dec!(550000));
        let ausn_profit = comparison.scenario(RegimeKind::AusnProfit);
        assert_eq!(ausn_profit.total_tax, Decimal::ZERO);
    }

    #[test]
    fn all_zero_input_yields_four_zero_scenarios() {
        let comparison = ScenarioCalculator::new().calculate(&ScenarioInput::default());

        for scenario in &comparison.scenarios {
            assert_eq!(scenario.total_tax, Decimal::ZERO);
        }
        // Four-way tie: the first regime in display order wins.
        assert_eq!(comparison.best, RegimeKind::UsnIncome);
    }

    #[test]
    fn exact_tie_keeps_the_first_encountered_scenario() {
        // taxable = 1 000 000, total = 1 000 000, no VAT, no patent:
        // usn6 = 60 000, ausn8 = 80 000; force a tie by lifting the USN
        // income rate to 8%.
        let rates = RegimeRates {
            usn_income_rate: dec!(0.08),
            ..RegimeRates::default()
        };
        let calculator = ScenarioCalculator::with_rates(rates).unwrap();
        let input = ScenarioInput {
            revenue: RevenueInputs {
                royalty: dec!(1000000),
                ..RevenueInputs::default()
            },
            ..ScenarioInput::default()
        };

        let comparison = calculator.calculate(&input);

        assert_eq!(
            comparison.scenario(RegimeKind::UsnIncome).total_tax,
            comparison.scenario(RegimeKind::AusnIncome).total_tax
        );
        assert_eq!(comparison.best, RegimeKind::UsnIncome);
    }

    #[test]
    fn scenarios_come_back_in_fixed_order() {
        let comparison = ScenarioCalculator::new().calculate(&example_input());

        let kinds: Vec<_> = comparison.scenarios.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, RegimeKind::ALL.to_vec());
    }

    #[test]
    fn invalid_rates_are_rejected_at_construction() {
        let rates = RegimeRates {
            ausn_profit_rate: dec!(2),
            ..RegimeRates::default()
        };

        assert!(ScenarioCalculator::with_rates(rates).is_err());
    }
}
