//! Compounding simulation engine and its per-period ledger

mod ledger;
mod engine;

pub use ledger::{PeriodDetail, SimulationResult};
pub use engine::Simulator;
