//! Sweep annual rates and contribution levels over a fixed horizon
//!
//! Runs the full rate x contribution grid in parallel and writes one CSV row
//! per combination. Supports JSON output for API integration via --json flag.
//! Accepts config via environment variables:
//!   SWEEP_PRINCIPAL, SWEEP_PERIODS, SWEEP_RATE_MIN, SWEEP_RATE_MAX,
//!   SWEEP_RATE_STEPS, SWEEP_CONTRIBUTIONS (comma-separated amounts)

use anyhow::Context;
use compound_sim::{
    CompoundingFrequency, Contribution, Investment, ReportError, SimulateInvestmentUseCase,
};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Serialize, Clone)]
struct SweepRow {
    annual_rate: f64,
    monthly_contribution: f64,
    final_balance: f64,
    total_invested: f64,
    total_interest: f64,
    effective_annual_rate: f64,
}

#[derive(Serialize)]
struct SweepResponse {
    principal: f64,
    periods: u32,
    combinations: usize,
    rows: Vec<SweepRow>,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    // Read config from environment or use defaults
    let principal: f64 = env::var("SWEEP_PRINCIPAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000.0);

    let periods: u32 = env::var("SWEEP_PERIODS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(360);

    let rate_min: f64 = env::var("SWEEP_RATE_MIN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.01);

    let rate_max: f64 = env::var("SWEEP_RATE_MAX")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.10);

    let rate_steps: u32 = env::var("SWEEP_RATE_STEPS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let contributions: Vec<f64> = env::var("SWEEP_CONTRIBUTIONS")
        .ok()
        .map(|s| s.split(',').filter_map(|v| v.trim().parse().ok()).collect())
        .unwrap_or_else(|| vec![0.0, 100.0, 250.0, 500.0, 1000.0]);

    let mut grid: Vec<(f64, f64)> = Vec::new();
    for step in 0..rate_steps {
        let annual_rate = if rate_steps > 1 {
            rate_min + (rate_max - rate_min) * step as f64 / (rate_steps - 1) as f64
        } else {
            rate_min
        };
        for &monthly_contribution in &contributions {
            grid.push((annual_rate, monthly_contribution));
        }
    }

    if !json_output {
        println!(
            "Sweeping {} rate x contribution combinations over {} months...",
            grid.len(),
            periods
        );
    }

    let use_case = SimulateInvestmentUseCase::new();
    let sweep_start = Instant::now();

    // Run the grid in parallel; every run is independent
    let rows: Result<Vec<SweepRow>, ReportError> = grid
        .par_iter()
        .map(|&(annual_rate, monthly_contribution)| {
            let contribution = if monthly_contribution > 0.0 {
                Some(Contribution::new(
                    monthly_contribution,
                    CompoundingFrequency::Monthly,
                ))
            } else {
                None
            };
            let investment = Investment::with_contribution(
                principal,
                annual_rate,
                periods,
                CompoundingFrequency::Monthly,
                contribution,
            );
            let report = use_case.execute(&investment)?;

            Ok(SweepRow {
                annual_rate,
                monthly_contribution,
                final_balance: report.summary.final_balance,
                total_invested: report.summary.total_invested,
                total_interest: report.summary.total_interest,
                effective_annual_rate: report.summary.effective_annual_rate,
            })
        })
        .collect();
    let rows = rows?;

    if !json_output {
        println!("Sweep complete in {:?}", sweep_start.elapsed());
    }

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let response = SweepResponse {
            principal,
            periods,
            combinations: rows.len(),
            rows,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    // Write output
    let output_path = "rate_sweep_output.csv";
    let mut file =
        File::create(output_path).with_context(|| format!("creating {}", output_path))?;

    writeln!(
        file,
        "AnnualRate,MonthlyContribution,FinalBalance,TotalInvested,TotalInterest,EffectiveAnnualRate"
    )?;

    for row in &rows {
        writeln!(
            file,
            "{:.4},{:.2},{:.2},{:.2},{:.2},{:.6}",
            row.annual_rate,
            row.monthly_contribution,
            row.final_balance,
            row.total_invested,
            row.total_interest,
            row.effective_annual_rate,
        )?;
    }

    println!("Output written to {}", output_path);

    // Print the grid corners for a quick sanity read
    if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
        println!("\nSweep Summary:");
        println!(
            "  Rate {:.2}% / ${:.0} monthly: final ${:.2} (EAR {:.4}%)",
            first.annual_rate * 100.0,
            first.monthly_contribution,
            first.final_balance,
            first.effective_annual_rate * 100.0
        );
        println!(
            "  Rate {:.2}% / ${:.0} monthly: final ${:.2} (EAR {:.4}%)",
            last.annual_rate * 100.0,
            last.monthly_contribution,
            last.final_balance,
            last.effective_annual_rate * 100.0
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
