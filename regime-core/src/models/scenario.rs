use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DerivedTotals;

/// The four predefined regime combinations compared by the tool.
///
/// The set is closed and the iteration order is fixed; every comparison
/// computes all four, whatever the figures are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegimeKind {
    /// PSN patent + USN 6% on income.
    UsnIncome,
    /// PSN patent + USN 15% on income minus expenses.
    UsnProfit,
    /// AUSN 8% on all income.
    AusnIncome,
    /// AUSN 20% on all income minus expenses.
    AusnProfit,
}

impl RegimeKind {
    /// All regimes in display and tie-break order.
    pub const ALL: [RegimeKind; 4] = [
        Self::UsnIncome,
        Self::UsnProfit,
        Self::AusnIncome,
        Self::AusnProfit,
    ];

    /// Stable identifier, usable as a map key or CLI value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsnIncome => "usn6",
            Self::UsnProfit => "usn15",
            Self::AusnIncome => "ausn8",
            Self::AusnProfit => "ausn20",
        }
    }

    /// Human-readable scenario name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UsnIncome => "PSN + USN 6% (income)",
            Self::UsnProfit => "PSN + USN 15% (income minus expenses)",
            Self::AusnIncome => "AUSN 8% (income)",
            Self::AusnProfit => "AUSN 20% (income minus expenses)",
        }
    }

    /// Position in [`RegimeKind::ALL`]; doubles as the scenario index in
    /// a [`Comparison`].
    pub fn index(&self) -> usize {
        match self {
            Self::UsnIncome => 0,
            Self::UsnProfit => 1,
            Self::AusnIncome => 2,
            Self::AusnProfit => 3,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "usn6" => Some(Self::UsnIncome),
            "usn15" => Some(Self::UsnProfit),
            "ausn8" => Some(Self::AusnIncome),
            "ausn20" => Some(Self::AusnProfit),
            _ => None,
        }
    }
}

/// A named tax line item inside a scenario breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxComponent {
    Patent,
    UsnIncome,
    UsnProfit,
    AusnIncome,
    AusnProfit,
    Vat,
}

impl TaxComponent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Patent => "PSN patent",
            Self::UsnIncome => "USN 6% on income",
            Self::UsnProfit => "USN 15% on profit",
            Self::AusnIncome => "AUSN 8% on income",
            Self::AusnProfit => "AUSN 20% on profit",
            Self::Vat => "VAT 5%",
        }
    }
}

/// One component of a scenario's tax burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    pub component: TaxComponent,
    pub amount: Decimal,
}

/// A fully computed scenario: the regime, its component breakdown, and
/// the total burden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: RegimeKind,
    pub lines: Vec<TaxLine>,
    /// Sum of all line amounts. Unrounded; this is what the best-scenario
    /// selection compares.
    pub total_tax: Decimal,
}

impl Scenario {
    /// Builds a scenario from its component lines, totalling as it goes.
    pub fn new(kind: RegimeKind, lines: Vec<TaxLine>) -> Self {
        let total_tax = lines.iter().map(|l| l.amount).sum();
        Self {
            kind,
            lines,
            total_tax,
        }
    }

    /// The breakdown with zero-amount lines filtered out, for display.
    pub fn non_zero_lines(&self) -> impl Iterator<Item = &TaxLine> {
        self.lines.iter().filter(|l| !l.amount.is_zero())
    }
}

/// The result of one comparison cycle: all four scenarios plus the
/// figures they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub totals: DerivedTotals,
    pub is_vat_payer: bool,
    /// Exactly four scenarios, in [`RegimeKind::ALL`] order.
    pub scenarios: [Scenario; 4],
    /// The scenario with the minimum total tax. On an exact tie the
    /// earlier regime in [`RegimeKind::ALL`] wins.
    pub best: RegimeKind,
}

impl Comparison {
    /// Looks up a scenario by regime kind.
    pub fn scenario(&self, kind: RegimeKind) -> &Scenario {
        &self.scenarios[kind.index()]
    }

    /// The cheapest scenario.
    pub fn best_scenario(&self) -> &Scenario {
        self.scenario(self.best)
    }
}
