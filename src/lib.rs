//! Compound Sim - Compound-interest simulation engine with evolution reports
//!
//! This library provides:
//! - Period-by-period compound interest simulation with optional contributions
//! - Monthly and yearly evolution rollups with running totals
//! - Summary statistics including an effective annual rate
//! - Batch execution over independent investment definitions

pub mod investment;
pub mod simulation;
pub mod report;
pub mod usecase;

// Re-export commonly used types
pub use investment::{CompoundingFrequency, Contribution, Investment};
pub use simulation::{Simulator, SimulationResult, PeriodDetail};
pub use report::{ReportBuilder, ReportError, FullSimulationReport, SimulationSummary};
pub use usecase::SimulateInvestmentUseCase;
