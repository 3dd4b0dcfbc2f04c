//! Compound Calc CLI
//!
//! Command-line front end for the calculators: clamps inputs to the form
//! limits, runs the calculation and prints the result with its projection.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use compound_calc::format::{format_amount, format_compact, format_percent};
use compound_calc::inputs::{load_scenarios, templates, Template};
use compound_calc::scenario::{CalculationResult, ScenarioOutcome};
use compound_calc::{
    AnnualizedReturnInput, CompoundGrowthInput, CompoundingPeriod, ContributionFrequency,
    DurationUnit, NamedScenario, ProjectionConfig, SavingsPlanInput, Scenario, ScenarioRunner,
};

/// Compound growth, savings plan and annualized return calculator
#[derive(Parser)]
#[command(name = "compound-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Keep at most about this many projection points
    #[arg(long, default_value_t = compound_calc::projection::DEFAULT_MAX_POINTS, global = true)]
    max_points: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grow a principal with periodic contributions
    Growth {
        #[arg(long, default_value_t = 0.0)]
        principal: f64,
        /// Amount paid in at each contribution date
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
        /// monthly or yearly
        #[arg(long, default_value = "monthly")]
        frequency: ContributionFrequency,
        /// Nominal annual rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,
        #[arg(long)]
        duration: f64,
        /// year, month or day
        #[arg(long, default_value = "month")]
        unit: DurationUnit,
        /// year, month, day or closed
        #[arg(long, default_value = "month")]
        compounding: CompoundingPeriod,
    },

    /// Solve the monthly contribution needed to reach a target
    Savings {
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long)]
        target: f64,
        /// Expected annual rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,
        #[arg(long)]
        duration: f64,
        #[arg(long, default_value = "month")]
        unit: DurationUnit,
    },

    /// Infer the annualized rate between two amounts
    Annual {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        final_amount: f64,
        #[arg(long)]
        duration: f64,
        #[arg(long, default_value = "year")]
        unit: DurationUnit,
    },

    /// Run a built-in template
    Template {
        id: String,
    },

    /// List built-in templates
    Templates {
        /// Only list templates for this mode (growth, savings, annualized)
        #[arg(long)]
        mode: Option<String>,
    },

    /// Run every scenario in a CSV file
    Batch {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary and point table
    Text,
    /// JSON outcome
    Json,
    /// Projection points as CSV
    Csv,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::with_config(ProjectionConfig {
        max_points: cli.max_points,
    });

    let batch = matches!(cli.command, Commands::Batch { .. });
    let scenarios = match cli.command {
        Commands::Growth {
            principal,
            contribution,
            frequency,
            rate,
            duration,
            unit,
            compounding,
        } => vec![NamedScenario::new(
            "Compound growth",
            Scenario::Growth(CompoundGrowthInput {
                principal,
                contribution_amount: contribution,
                contribution_frequency: frequency,
                nominal_annual_rate: rate / 100.0,
                duration,
                duration_unit: unit,
                compounding_period: compounding,
            }),
        )],
        Commands::Savings {
            current,
            target,
            rate,
            duration,
            unit,
        } => vec![NamedScenario::new(
            "Savings plan",
            Scenario::Savings(SavingsPlanInput {
                current_deposit: current,
                target_deposit: target,
                expected_annual_rate: rate / 100.0,
                duration,
                duration_unit: unit,
            }),
        )],
        Commands::Annual {
            principal,
            final_amount,
            duration,
            unit,
        } => vec![NamedScenario::new(
            "Annualized return",
            Scenario::Annualized(AnnualizedReturnInput {
                principal,
                final_amount,
                duration,
                duration_unit: unit,
            }),
        )],
        Commands::Template { id } => vec![templates::find(&id)?.to_named()],
        Commands::Templates { mode } => {
            let listed: Vec<&Template> = match mode.as_deref() {
                Some(mode) => templates::for_mode(mode).collect(),
                None => templates::all().iter().collect(),
            };
            for template in listed {
                println!("{:<20} {:<11} {}", template.id, template.scenario.mode(), template.description);
            }
            return Ok(());
        }
        Commands::Batch { path } => load_scenarios(&path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()))?,
    };

    // Same limits the input forms enforce
    let scenarios: Vec<NamedScenario> = scenarios
        .into_iter()
        .map(|named| NamedScenario {
            scenario: named.scenario.clamped().0,
            ..named
        })
        .collect();

    let outcomes = if batch {
        runner.run_batch(&scenarios)
    } else {
        scenarios.iter().map(|s| runner.run(s)).collect()
    };

    match cli.format {
        OutputFormat::Text => outcomes.iter().for_each(print_text),
        OutputFormat::Json => println!("{}", outcomes_json(&outcomes, batch)?),
        OutputFormat::Csv => write_csv(&outcomes)?,
    }

    Ok(())
}

/// A batch always prints an array, a single calculation a bare object
fn outcomes_json(outcomes: &[ScenarioOutcome], batch: bool) -> serde_json::Result<String> {
    match outcomes {
        [outcome] if !batch => serde_json::to_string_pretty(outcome),
        _ => serde_json::to_string_pretty(outcomes),
    }
}

fn print_text(outcome: &ScenarioOutcome) {
    println!("{}", outcome.name);
    println!("{}", "=".repeat(outcome.name.len().max(20)));

    match outcome.result {
        CalculationResult::Growth(r) => {
            println!("  Total Investment:   {}", format_amount(r.total_investment));
            println!("  Final Assets:       {}", format_amount(r.final_assets));
            println!("  Final Return:       {}", format_amount(r.final_return));
            println!("  Total Return Rate:  {}", format_percent(r.total_return_rate));
            println!("  Annualized Return:  {}", format_percent(r.annualized_return_rate));
        }
        CalculationResult::Savings(r) => {
            println!("  Monthly Deposit:    {}", format_amount(r.required_periodic_contribution));
            println!("  Total Investment:   {}", format_amount(r.total_investment));
            println!("  Final Assets:       {}", format_amount(r.final_assets));
            println!("  Final Return:       {}", format_amount(r.final_return));
            println!("  Total Return Rate:  {}", format_percent(r.total_return_rate));
        }
        CalculationResult::Annualized(r) => {
            println!("  Total Return:       {}", format_amount(r.total_return));
            println!("  Total Return Rate:  {}", format_percent(r.total_return_rate));
            println!("  Annualized Rate:    {}", format_percent(r.annualized_rate));
        }
    }

    if outcome.points.is_empty() {
        println!("\n  (no projection)\n");
        return;
    }

    println!();
    println!("{:>8} {:>14} {:>14} {:>14}", "Month", "Assets", "Invested", "Return");
    println!("{}", "-".repeat(53));
    for point in &outcome.points {
        println!(
            "{:>8} {:>14} {:>14} {:>14}",
            format_amount(point.time),
            format_compact(point.total_assets),
            format_compact(point.total_investment),
            format_compact(point.total_return),
        );
    }
    println!();
}

/// Write every projection point, tagged with its scenario name
fn write_csv(outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["scenario", "time", "total_assets", "total_investment", "total_return"])?;

    for outcome in outcomes {
        for point in &outcome.points {
            writer.write_record([
                outcome.name.clone(),
                point.time.to_string(),
                format!("{:.8}", point.total_assets),
                format!("{:.8}", point.total_investment),
                format!("{:.8}", point.total_return),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
