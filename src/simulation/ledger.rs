//! Ledger output structures for simulations

use serde::{Deserialize, Serialize};

/// One simulated period of output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodDetail {
    /// Period index, 1-based
    pub period: u32,

    /// Balance after this period's contribution and interest
    pub balance: f64,

    /// Interest earned this period
    pub interest_earned: f64,

    /// Contribution applied this period (0.0 when none applied)
    pub contribution: f64,
}

/// Complete simulation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Balance at the end of the simulation
    pub final_amount: f64,

    /// Principal plus every applied contribution
    pub total_invested: f64,

    /// `final_amount - total_invested`
    pub total_interest: f64,

    /// Per-period ledger, present only when detail was requested
    ///
    /// `None` means the run was not detailed; `Some` of an empty vec is a
    /// detailed zero-period run. The rollup builders accept the latter and
    /// reject the former.
    pub period_details: Option<Vec<PeriodDetail>>,
}

impl SimulationResult {
    /// Ledger slice, if detail was requested
    pub fn details(&self) -> Option<&[PeriodDetail]> {
        self.period_details.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_details_are_distinct() {
        let absent = SimulationResult {
            final_amount: 100.0,
            total_invested: 100.0,
            total_interest: 0.0,
            period_details: None,
        };
        let empty = SimulationResult {
            period_details: Some(Vec::new()),
            ..absent.clone()
        };

        assert!(absent.details().is_none());
        assert_eq!(empty.details(), Some(&[][..]));
    }
}
