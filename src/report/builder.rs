//! Rollup builders turning a detailed ledger into evolution reports

use thiserror::Error;

use crate::investment::{CompoundingFrequency, Investment};
use crate::simulation::{PeriodDetail, SimulationResult};
use super::types::{MonthlySummary, SimulationSummary, YearSummary};

/// Errors raised by the rollup builders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Rollups need the per-period ledger, which only detailed runs carry.
    /// A present-but-empty ledger is fine; a missing one is a caller bug.
    #[error("detailed simulation required: result carries no period ledger")]
    DetailRequired,
}

/// Builds evolution rollups from a detailed simulation result
///
/// Both rollups are left-folds over the ledger producing immutable snapshot
/// rows, so rebuilding from the same result always yields the same rows.
pub struct ReportBuilder<'a> {
    result: &'a SimulationResult,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder over a simulation result
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result }
    }

    fn ledger(&self) -> Result<&'a [PeriodDetail], ReportError> {
        self.result
            .period_details
            .as_deref()
            .ok_or(ReportError::DetailRequired)
    }

    /// Roll the ledger up into one row per period with running totals
    ///
    /// Each row's initial balance is the previous row's final balance,
    /// starting from 0.0. An empty ledger yields an empty sequence.
    pub fn build_monthly_evolution(&self) -> Result<Vec<MonthlySummary>, ReportError> {
        let ledger = self.ledger()?;

        let mut monthly = Vec::with_capacity(ledger.len());
        let mut previous_balance = 0.0;
        let mut deposits_total = 0.0;
        let mut interest_total = 0.0;

        for detail in ledger {
            deposits_total += detail.contribution;
            interest_total += detail.interest_earned;

            monthly.push(MonthlySummary {
                month: detail.period,
                initial_balance: previous_balance,
                final_balance: detail.balance,
                deposits_this_month: detail.contribution,
                deposits_total,
                interest_this_month: detail.interest_earned,
                interest_total,
            });

            previous_balance = detail.balance;
        }

        Ok(monthly)
    }

    /// Roll the ledger up into consecutive year-sized windows
    ///
    /// The window size is the frequency's periods per year; the final window
    /// may be shorter when the period count is not a full multiple. Year
    /// indices count emitted windows, so a zero-period ledger emits none.
    pub fn build_yearly_evolution(
        &self,
        frequency: CompoundingFrequency,
    ) -> Result<Vec<YearSummary>, ReportError> {
        let ledger = self.ledger()?;
        let periods_per_year = frequency.periods_per_year() as usize;

        let mut years = Vec::new();
        let mut previous_balance = 0.0;
        let mut deposits_total = 0.0;
        let mut interest_total = 0.0;

        for window in ledger.chunks(periods_per_year) {
            let Some(last) = window.last() else {
                continue;
            };

            let deposits_this_year: f64 = window.iter().map(|d| d.contribution).sum();
            let interest_this_year: f64 = window.iter().map(|d| d.interest_earned).sum();
            deposits_total += deposits_this_year;
            interest_total += interest_this_year;

            years.push(YearSummary {
                year: years.len() as u32 + 1,
                initial_balance: previous_balance,
                final_balance: last.balance,
                deposits_this_year,
                deposits_total,
                interest_this_year,
                interest_total,
            });

            previous_balance = last.balance;
        }

        Ok(years)
    }

    /// Derive topline totals and the effective annual rate
    ///
    /// The effective rate inverts the compound growth factor over the
    /// fractional years simulated, making runs with different compounding
    /// frequencies and horizons comparable. It is 0.0 when nothing was
    /// invested or no time elapsed.
    pub fn build_summary(result: &SimulationResult, investment: &Investment) -> SimulationSummary {
        let total_deposits = result.total_invested - investment.principal;
        let years = investment.years();

        let effective_annual_rate = if result.total_invested > 0.0 && years > 0.0 {
            (result.final_amount / result.total_invested).powf(1.0 / years) - 1.0
        } else {
            0.0
        };

        SimulationSummary {
            final_balance: result.final_amount,
            total_invested: result.total_invested,
            total_interest: result.total_interest,
            total_deposits,
            effective_annual_rate,
        }
    }
}
