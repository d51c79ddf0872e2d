//! Text rendering of a comparison: summary, bar chart, advisory note.
//!
//! Rounding to whole rubles happens here and only here; the totals the
//! calculator compares stay unrounded.

use regime_core::models::Comparison;
use regime_core::money::format_rub;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Width of the longest chart bar, in blocks.
const CHART_WIDTH: u32 = 40;

/// Static caveat shown under every report. Regime-combination legality
/// is advisory only and never enforced in the calculation.
pub const ADVISORY: &str = "\
Note: all four scenarios are always shown, even though some regime
combinations (for example PSN together with AUSN) cannot be combined in
practice. The figures assume one fictional business in fiscal year 2026
and are not tax advice.";

/// Renders the revenue figures, VAT status, and the cheapest scenario
/// with its non-zero component breakdown.
pub fn summary(comparison: &Comparison) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Revenue: sport {}, simplified {}, total {}\n",
        format_rub(comparison.totals.sport),
        format_rub(comparison.totals.taxable),
        format_rub(comparison.totals.total),
    ));
    out.push_str(if comparison.is_vat_payer {
        "VAT 5%: payable (prior-year revenue above the threshold)\n"
    } else {
        "VAT 5%: not payable\n"
    });

    let best = comparison.best_scenario();
    out.push_str(&format!("Cheapest scenario: {}\n", best.kind.label()));
    out.push_str(&format!("Total tax: {}\n", format_rub(best.total_tax)));
    for line in best.non_zero_lines() {
        out.push_str(&format!(
            "  {}: {}\n",
            line.component.label(),
            format_rub(line.amount)
        ));
    }
    out
}

/// Renders all four scenario totals as a horizontal bar chart with
/// whole-ruble labels. The cheapest row is marked.
pub fn bar_chart(comparison: &Comparison) -> String {
    let label_width = comparison
        .scenarios
        .iter()
        .map(|s| s.kind.label().chars().count())
        .max()
        .unwrap_or(0);
    let max_total = comparison
        .scenarios
        .iter()
        .map(|s| s.total_tax)
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut out = String::new();
    for scenario in &comparison.scenarios {
        let bar = "█".repeat(bar_len(scenario.total_tax, max_total));
        let marker = if scenario.kind == comparison.best {
            "  (best)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<label_width$}  {} {}{}\n",
            scenario.kind.label(),
            bar,
            format_rub(scenario.total_tax),
            marker,
        ));
    }
    out
}

/// Scales a total to a bar length. Non-zero totals always get at least
/// one block.
fn bar_len(
    total: Decimal,
    max_total: Decimal,
) -> usize {
    if total.is_zero() || max_total.is_zero() {
        return 0;
    }
    let scaled = total / max_total * Decimal::from(CHART_WIDTH);
    let blocks = scaled
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .to_usize()
        .unwrap_or(0);
    blocks.max(1)
}

/// The full report: summary, chart, advisory.
pub fn report(comparison: &Comparison) -> String {
    format!(
        "{}\n{}\n{}\n",
        summary(comparison),
        bar_chart(comparison),
        ADVISORY
    )
}
