//! Evolution rollups and summary derivation over simulation ledgers

mod types;
mod builder;

pub use types::{FullSimulationReport, MonthlySummary, SimulationSummary, YearSummary};
pub use builder::{ReportBuilder, ReportError};
