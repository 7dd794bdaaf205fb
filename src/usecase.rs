//! Use case composing the simulator with the report builders
//!
//! Always runs a detailed simulation, then derives both evolution rollups
//! and the summary in one pass.

use log::debug;

use crate::investment::Investment;
use crate::report::{FullSimulationReport, ReportBuilder, ReportError};
use crate::simulation::Simulator;

/// Orchestrates one detailed simulation into a full report
///
/// # Example
/// ```ignore
/// let use_case = SimulateInvestmentUseCase::new();
///
/// let report = use_case.execute(&investment)?;
/// println!("final balance: {:.2}", report.summary.final_balance);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulateInvestmentUseCase {
    simulator: Simulator,
}

impl SimulateInvestmentUseCase {
    /// Create a new use case
    pub fn new() -> Self {
        Self {
            simulator: Simulator::new(),
        }
    }

    /// Run one investment end to end
    ///
    /// Detail is always requested, so the builders' ledger precondition
    /// holds for every result produced here. A zero-period investment
    /// yields a report with empty evolution sequences, not an error.
    pub fn execute(&self, investment: &Investment) -> Result<FullSimulationReport, ReportError> {
        debug!(
            "simulating {} periods at {} ({:?} compounding)",
            investment.total_periods, investment.annual_rate, investment.compounding_frequency
        );
        let result = self.simulator.simulate(investment, true);

        let builder = ReportBuilder::new(&result);
        let monthly_evolution = builder.build_monthly_evolution()?;
        let yearly_evolution = builder.build_yearly_evolution(investment.compounding_frequency)?;
        let summary = ReportBuilder::build_summary(&result, investment);

        debug!(
            "report ready: {} monthly rows, {} yearly rows",
            monthly_evolution.len(),
            yearly_evolution.len()
        );

        Ok(FullSimulationReport {
            summary,
            yearly_evolution,
            monthly_evolution,
        })
    }

    /// Run a slice of investments in order, stopping at the first error
    pub fn execute_batch(
        &self,
        investments: &[Investment],
    ) -> Result<Vec<FullSimulationReport>, ReportError> {
        investments
            .iter()
            .map(|investment| self.execute(investment))
            .collect()
    }
}
