//! Compound Sim CLI
//!
//! Command-line interface for simulating a single investment and printing
//! its evolution tables and summary

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compound_sim::{
    CompoundingFrequency, Contribution, Investment, SimulateInvestmentUseCase,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFrequency {
    Daily,
    Monthly,
    Yearly,
}

impl From<CliFrequency> for CompoundingFrequency {
    fn from(value: CliFrequency) -> Self {
        match value {
            CliFrequency::Daily => CompoundingFrequency::Daily,
            CliFrequency::Monthly => CompoundingFrequency::Monthly,
            CliFrequency::Yearly => CompoundingFrequency::Yearly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "compound_sim",
    about = "Compound interest simulator with monthly and yearly evolution reports"
)]
struct Cli {
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,
    #[arg(
        long,
        default_value_t = 0.06,
        help = "Annual interest rate as a fraction, e.g. 0.06 for 6%"
    )]
    annual_rate: f64,
    #[arg(long, default_value_t = 120, help = "Number of compounding periods")]
    periods: u32,
    #[arg(long, value_enum, default_value_t = CliFrequency::Monthly)]
    frequency: CliFrequency,
    #[arg(long, help = "Recurring contribution amount; omit for none")]
    contribution: Option<f64>,
    #[arg(
        long,
        value_enum,
        help = "Contribution frequency; defaults to the compounding frequency"
    )]
    contribution_frequency: Option<CliFrequency>,
    #[arg(
        long,
        default_value_t = 24,
        help = "Monthly rows to print before truncating the table"
    )]
    detail_rows: usize,
    #[arg(long, help = "Emit the full report as JSON instead of tables")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let contribution = cli.contribution.map(|amount| {
        let frequency = cli.contribution_frequency.unwrap_or(cli.frequency);
        Contribution::new(amount, frequency.into())
    });

    let investment = Investment::with_contribution(
        cli.principal,
        cli.annual_rate,
        cli.periods,
        cli.frequency.into(),
        contribution,
    );

    let use_case = SimulateInvestmentUseCase::new();
    let report = use_case
        .execute(&investment)
        .context("simulation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Compound Sim v0.1.0");
    println!("===================\n");

    println!("Investment:");
    println!("  Principal: ${:.2}", investment.principal);
    println!("  Annual Rate: {:.2}%", investment.annual_rate * 100.0);
    println!(
        "  Periods: {} ({:?} compounding)",
        investment.total_periods, investment.compounding_frequency
    );
    if let Some(c) = &investment.contribution {
        println!("  Contribution: ${:.2} ({:?})", c.amount, c.frequency);
    }
    println!();

    // Monthly table, clamped to the first detail_rows entries
    println!("Monthly Evolution ({} rows):", report.monthly_evolution.len());
    println!(
        "{:>6} {:>14} {:>14} {:>12} {:>14} {:>12} {:>14}",
        "Month", "Initial", "Final", "Deposit", "DepTotal", "Interest", "IntTotal"
    );
    println!("{}", "-".repeat(92));

    for row in report.monthly_evolution.iter().take(cli.detail_rows) {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>12.2} {:>14.2} {:>12.2} {:>14.2}",
            row.month,
            row.initial_balance,
            row.final_balance,
            row.deposits_this_month,
            row.deposits_total,
            row.interest_this_month,
            row.interest_total,
        );
    }

    if report.monthly_evolution.len() > cli.detail_rows {
        println!(
            "... ({} more rows)",
            report.monthly_evolution.len() - cli.detail_rows
        );
    }

    println!("\nYearly Evolution ({} rows):", report.yearly_evolution.len());
    println!(
        "{:>6} {:>14} {:>14} {:>12} {:>14} {:>12} {:>14}",
        "Year", "Initial", "Final", "Deposits", "DepTotal", "Interest", "IntTotal"
    );
    println!("{}", "-".repeat(92));

    for row in &report.yearly_evolution {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>12.2} {:>14.2} {:>12.2} {:>14.2}",
            row.year,
            row.initial_balance,
            row.final_balance,
            row.deposits_this_year,
            row.deposits_total,
            row.interest_this_year,
            row.interest_total,
        );
    }

    let summary = &report.summary;
    println!("\nSummary:");
    println!("  Final Balance: ${:.2}", summary.final_balance);
    println!("  Total Invested: ${:.2}", summary.total_invested);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Total Deposits: ${:.2}", summary.total_deposits);
    println!(
        "  Effective Annual Rate: {:.4}%",
        summary.effective_annual_rate * 100.0
    );

    Ok(())
}
