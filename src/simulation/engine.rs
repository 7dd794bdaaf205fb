//! Core compounding engine for period-by-period balance simulation

use crate::investment::Investment;
use super::ledger::{PeriodDetail, SimulationResult};

/// Main simulation engine
///
/// Stateless; every run takes its inputs from the [`Investment`] alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Create a new simulator
    pub fn new() -> Self {
        Self
    }

    /// Run the compounding loop for a single investment
    ///
    /// Each period applies the contribution first, then credits interest on
    /// the updated balance, so a deposit compounds in the same period it is
    /// made. With `detailed` set, one [`PeriodDetail`] is captured per
    /// period; otherwise the ledger is absent from the result.
    ///
    /// No input validation is performed; pathological rates propagate as
    /// non-finite outputs rather than errors.
    pub fn simulate(&self, investment: &Investment, detailed: bool) -> SimulationResult {
        let period_rate = investment.period_rate();
        let contribution = investment.contribution_per_period();

        let mut balance = investment.principal;
        let mut total_invested = investment.principal;
        let mut ledger = if detailed {
            Some(Vec::with_capacity(investment.total_periods as usize))
        } else {
            None
        };

        for period in 1..=investment.total_periods {
            // Contribution lands before interest is credited
            balance += contribution;
            total_invested += contribution;

            let interest = balance * period_rate;
            balance += interest;

            if let Some(ledger) = ledger.as_mut() {
                ledger.push(PeriodDetail {
                    period,
                    balance,
                    interest_earned: interest,
                    contribution,
                });
            }
        }

        SimulationResult {
            final_amount: balance,
            total_invested,
            total_interest: balance - total_invested,
            period_details: ledger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::{CompoundingFrequency, Contribution};
    use approx::assert_relative_eq;

    #[test]
    fn test_simulate_basic_growth() {
        let investment = Investment::new(1000.0, 0.12, 12, CompoundingFrequency::Monthly);
        let result = Simulator::new().simulate(&investment, false);

        assert_eq!(result.total_invested, 1000.0);
        assert!(result.final_amount > 1000.0);
        assert_relative_eq!(
            result.final_amount,
            1000.0 * 1.01_f64.powi(12),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            result.total_interest,
            result.final_amount - result.total_invested,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_detail_absent_unless_requested() {
        let investment = Investment::new(1000.0, 0.12, 12, CompoundingFrequency::Monthly);

        let plain = Simulator::new().simulate(&investment, false);
        assert!(plain.period_details.is_none());

        let detailed = Simulator::new().simulate(&investment, true);
        assert_eq!(detailed.details().map(|d| d.len()), Some(12));
    }

    #[test]
    fn test_contribution_compounds_same_period() {
        // First period interest is earned on principal plus the deposit
        let investment = Investment::with_contribution(
            1000.0,
            0.12,
            1,
            CompoundingFrequency::Monthly,
            Some(Contribution::new(100.0, CompoundingFrequency::Monthly)),
        );
        let result = Simulator::new().simulate(&investment, true);
        let first = &result.details().unwrap()[0];

        assert_relative_eq!(first.interest_earned, 1100.0 * 0.01, max_relative = 1e-12);
        assert_eq!(first.contribution, 100.0);
        assert_eq!(result.total_invested, 1100.0);
    }

    #[test]
    fn test_simulate_with_monthly_contributions() {
        let investment = Investment::with_contribution(
            1000.0,
            0.12,
            12,
            CompoundingFrequency::Monthly,
            Some(Contribution::new(100.0, CompoundingFrequency::Monthly)),
        );
        let result = Simulator::new().simulate(&investment, true);

        assert_eq!(result.total_invested, 2200.0);
        for detail in result.details().unwrap() {
            assert_eq!(detail.contribution, 100.0);
        }
    }

    #[test]
    fn test_zero_principal_accrues_from_contributions() {
        let investment = Investment::with_contribution(
            0.0,
            0.06,
            72,
            CompoundingFrequency::Monthly,
            Some(Contribution::new(6000.0, CompoundingFrequency::Monthly)),
        );
        let result = Simulator::new().simulate(&investment, true);

        assert_eq!(result.total_invested, 432_000.0);
        assert!(result.final_amount > result.total_invested);
        assert_eq!(result.details().map(|d| d.len()), Some(72));
        assert!(result.details().unwrap()[0].interest_earned > 0.0);
    }

    #[test]
    fn test_zero_periods_returns_principal() {
        let investment = Investment::new(5000.0, 0.08, 0, CompoundingFrequency::Yearly);

        let result = Simulator::new().simulate(&investment, true);
        assert_eq!(result.final_amount, 5000.0);
        assert_eq!(result.total_invested, 5000.0);
        assert_eq!(result.total_interest, 0.0);
        // Detail was requested, so the ledger is present but empty
        assert_eq!(result.details(), Some(&[][..]));

        let plain = Simulator::new().simulate(&investment, false);
        assert!(plain.period_details.is_none());
    }

    #[test]
    fn test_ledger_invariants() {
        let investment = Investment::with_contribution(
            2500.0,
            0.07,
            36,
            CompoundingFrequency::Monthly,
            Some(Contribution::new(150.0, CompoundingFrequency::Monthly)),
        );
        let result = Simulator::new().simulate(&investment, true);
        let details = result.details().unwrap();

        // Periods are contiguous, 1-based
        for (i, detail) in details.iter().enumerate() {
            assert_eq!(detail.period, i as u32 + 1);
        }

        let interest_sum: f64 = details.iter().map(|d| d.interest_earned).sum();
        assert_relative_eq!(interest_sum, result.total_interest, max_relative = 1e-9);

        let contribution_sum: f64 = details.iter().map(|d| d.contribution).sum();
        assert_eq!(contribution_sum, result.total_invested - investment.principal);

        assert_eq!(details.last().unwrap().balance, result.final_amount);
    }

    #[test]
    fn test_mismatched_contribution_never_applies() {
        let investment = Investment::with_contribution(
            1000.0,
            0.12,
            12,
            CompoundingFrequency::Monthly,
            Some(Contribution::new(100.0, CompoundingFrequency::Yearly)),
        );
        let result = Simulator::new().simulate(&investment, true);

        assert_eq!(result.total_invested, 1000.0);
        for detail in result.details().unwrap() {
            assert_eq!(detail.contribution, 0.0);
        }
    }

    #[test]
    fn test_negative_rate_simulates_as_is() {
        let investment = Investment::new(1000.0, -0.12, 12, CompoundingFrequency::Monthly);
        let result = Simulator::new().simulate(&investment, false);

        assert!(result.final_amount < 1000.0);
        assert!(result.final_amount > 0.0);
        assert!(result.total_interest < 0.0);
    }

    #[test]
    fn test_daily_compounding_beats_yearly() {
        let daily = Simulator::new().simulate(
            &Investment::new(1000.0, 0.06, 365, CompoundingFrequency::Daily),
            false,
        );
        let yearly = Simulator::new().simulate(
            &Investment::new(1000.0, 0.06, 1, CompoundingFrequency::Yearly),
            false,
        );

        assert!(daily.final_amount > yearly.final_amount);
        assert_relative_eq!(yearly.final_amount, 1060.0, max_relative = 1e-12);
    }
}
