use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use regime_cli::form::{Field, FormState};
use regime_cli::input_file::InputFile;
use regime_cli::render;
use regime_core::calculations::{ScenarioCalculator, ScenarioInput};
use regime_core::models::ThresholdInputs;
use regime_core::money::parse_amount_strict;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tax-regime comparison for fiscal year 2026.
///
/// Computes the total tax burden under four predefined regime scenarios
/// (PSN + USN 6%, PSN + USN 15%, AUSN 8%, AUSN 20%) and highlights the
/// cheapest one. Amounts accept spaces as thousands separators and a
/// comma decimal mark, e.g. `--royalty "6 000 000"`.
#[derive(Debug, Parser)]
struct Cli {
    /// Revenue from training sessions.
    #[arg(long, value_parser = parse_amount_strict)]
    trainings: Option<Decimal>,

    /// Revenue from sports camps.
    #[arg(long, value_parser = parse_amount_strict)]
    camps: Option<Decimal>,

    /// Royalty revenue.
    #[arg(long, value_parser = parse_amount_strict)]
    royalty: Option<Decimal>,

    /// Goods sales revenue.
    #[arg(long, value_parser = parse_amount_strict)]
    goods: Option<Decimal>,

    /// Expenses deductible under USN 15%.
    #[arg(long, value_parser = parse_amount_strict)]
    usn_expenses: Option<Decimal>,

    /// Expenses deductible under AUSN 20%.
    #[arg(long, value_parser = parse_amount_strict)]
    ausn_expenses: Option<Decimal>,

    /// Prior-year revenue, compared against the VAT threshold.
    #[arg(long, value_parser = parse_amount_strict)]
    prev_year_revenue: Option<Decimal>,

    /// Revenue threshold above which reduced VAT applies
    /// [default: 10 000 000].
    #[arg(long, value_parser = parse_amount_strict)]
    vat_threshold: Option<Decimal>,

    /// Annual cost of the PSN patent.
    #[arg(long, value_parser = parse_amount_strict)]
    patent_cost: Option<Decimal>,

    /// TOML file with the same nine keys; flags override file values.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Interactive form mode: edit fields and watch the comparison
    /// recompute.
    #[arg(long)]
    interactive: bool,
}

impl Cli {
    /// Merges flags over file values over defaults (zero everywhere,
    /// except the 2026 VAT threshold).
    fn scenario_input(
        &self,
        file: &InputFile,
    ) -> ScenarioInput {
        let pick = |flag: &Option<Decimal>, file_value: &Option<Decimal>| {
            flag.or(*file_value).unwrap_or(Decimal::ZERO)
        };

        let mut input = ScenarioInput::default();
        input.revenue.trainings = pick(&self.trainings, &file.trainings);
        input.revenue.camps = pick(&self.camps, &file.camps);
        input.revenue.royalty = pick(&self.royalty, &file.royalty);
        input.revenue.goods = pick(&self.goods, &file.goods);
        input.expenses.usn_profit_expenses = pick(&self.usn_expenses, &file.usn_expenses);
        input.expenses.ausn_profit_expenses = pick(&self.ausn_expenses, &file.ausn_expenses);
        input.thresholds.prev_year_revenue =
            pick(&self.prev_year_revenue, &file.prev_year_revenue);
        input.thresholds.vat_threshold = self
            .vat_threshold
            .or(file.vat_threshold)
            .unwrap_or(ThresholdInputs::VAT_THRESHOLD_2026);
        input.thresholds.patent_cost = pick(&self.patent_cost, &file.patent_cost);
        input
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── interactive mode ────────────────────────────────────────────────────────

/// Reads `field = value` lines from stdin, recomputing and reprinting
/// after every change. `quit` exits.
fn run_interactive(
    mut form: FormState,
    stdin: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "Fields:")?;
    for field in Field::ALL {
        writeln!(out, "  {} = {}", field.as_str(), form.get(field))?;
    }
    writeln!(out, "Enter `field = value` to change a field, `quit` to exit.\n")?;

    write!(out, "{}", render::report(form.comparison()))?;

    for line in stdin.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let Some((name, value)) = line.split_once('=') else {
            writeln!(out, "expected `field = value`, got '{line}'")?;
            continue;
        };
        let Some(field) = Field::parse(name.trim()) else {
            writeln!(out, "unknown field '{}'", name.trim())?;
            continue;
        };

        form.set(field, value.trim());
        if form.refresh() {
            writeln!(out)?;
            write!(out, "{}", render::report(form.comparison()))?;
        } else {
            debug!(field = field.as_str(), "input unchanged, comparison reused");
        }
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let file = match &cli.input {
        Some(path) => InputFile::load(path)?,
        None => InputFile::default(),
    };
    let input = cli.scenario_input(&file);
    let calculator = ScenarioCalculator::new();

    if cli.interactive {
        let form = FormState::new(calculator, &input);
        let stdin = std::io::stdin();
        run_interactive(form, stdin.lock(), std::io::stdout())?;
    } else {
        let comparison = calculator.calculate(&input);
        print!("{}", render::report(&comparison));
    }

    Ok(())
}
