//! Report row and summary structures

use serde::{Deserialize, Serialize};

/// One rollup row per simulated period
///
/// Named for the monthly case, but the granularity follows whatever was
/// simulated: one row per period, with the period index as the month number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Period index, 1-based
    pub month: u32,

    /// Previous period's closing balance (0.0 for the first row)
    pub initial_balance: f64,

    /// Closing balance for this period
    pub final_balance: f64,

    /// Deposit applied this period
    pub deposits_this_month: f64,

    /// Running deposit total through this period
    pub deposits_total: f64,

    /// Interest earned this period
    pub interest_this_month: f64,

    /// Running interest total through this period
    pub interest_total: f64,
}

/// One rollup row per year-sized window of periods
///
/// A window spans `periods_per_year` consecutive periods; the last one may
/// be shorter. The year index counts emitted windows, not calendar time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Window index, 1-based in emission order
    pub year: u32,

    /// Closing balance of the preceding window (0.0 for the first)
    pub initial_balance: f64,

    /// Closing balance of this window's last period
    pub final_balance: f64,

    /// Deposits applied inside this window
    pub deposits_this_year: f64,

    /// Running deposit total through this window
    pub deposits_total: f64,

    /// Interest earned inside this window
    pub interest_this_year: f64,

    /// Running interest total through this window
    pub interest_total: f64,
}

/// Topline totals plus the annualized growth rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Balance at the end of the simulation
    pub final_balance: f64,

    /// Principal plus every applied contribution
    pub total_invested: f64,

    /// `final_balance - total_invested`
    pub total_interest: f64,

    /// `total_invested` minus the principal
    pub total_deposits: f64,

    /// Annualized rate implied by total growth over the simulated years
    ///
    /// 0.0 when nothing was invested or no time elapsed, where the growth
    /// factor is undefined.
    pub effective_annual_rate: f64,
}

/// Aggregate output of one end-to-end simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullSimulationReport {
    /// Topline summary
    pub summary: SimulationSummary,

    /// One row per year window, in emission order
    pub yearly_evolution: Vec<YearSummary>,

    /// One row per period, in period order
    pub monthly_evolution: Vec<MonthlySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_with_expected_fields() {
        let report = FullSimulationReport {
            summary: SimulationSummary {
                final_balance: 1126.83,
                total_invested: 1000.0,
                total_interest: 126.83,
                total_deposits: 0.0,
                effective_annual_rate: 0.1268,
            },
            yearly_evolution: vec![YearSummary {
                year: 1,
                initial_balance: 0.0,
                final_balance: 1126.83,
                deposits_this_year: 0.0,
                deposits_total: 0.0,
                interest_this_year: 126.83,
                interest_total: 126.83,
            }],
            monthly_evolution: Vec::new(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"effective_annual_rate\""));
        assert!(json.contains("\"yearly_evolution\""));
        assert!(json.contains("\"monthly_evolution\""));
        assert!(json.contains("\"deposits_this_year\""));
    }
}
