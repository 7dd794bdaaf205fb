//! Investment input structures for compound interest simulations

use serde::{Deserialize, Serialize};

/// How often interest compounds over a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    /// 365 periods per year
    Daily,
    /// 12 periods per year
    Monthly,
    /// 1 period per year
    Yearly,
}

impl CompoundingFrequency {
    /// Number of compounding periods in one year
    ///
    /// The same value sizes the yearly-rollup window: one reported year
    /// spans this many consecutive periods.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Yearly => 1,
        }
    }

    /// Convert an annual rate to the rate applied each period
    pub fn period_rate(&self, annual_rate: f64) -> f64 {
        annual_rate / self.periods_per_year() as f64
    }
}

/// A recurring deposit made during the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Amount deposited each time the contribution applies
    pub amount: f64,

    /// How often the deposit is made
    ///
    /// The simulation loop steps once per compounding period and applies the
    /// contribution only when this matches the investment's compounding
    /// frequency; any other frequency never fires.
    pub frequency: CompoundingFrequency,
}

impl Contribution {
    /// Create a recurring contribution
    pub fn new(amount: f64, frequency: CompoundingFrequency) -> Self {
        Self { amount, frequency }
    }
}

/// Immutable definition of one investment to simulate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Starting balance
    pub principal: f64,

    /// Annual interest rate as a fraction (0.12 = 12%)
    pub annual_rate: f64,

    /// Number of compounding periods to simulate
    pub total_periods: u32,

    /// Compounding frequency; also sizes the yearly-rollup window
    pub compounding_frequency: CompoundingFrequency,

    /// Optional recurring deposit
    #[serde(default)]
    pub contribution: Option<Contribution>,
}

impl Investment {
    /// Create an investment without a recurring contribution
    pub fn new(
        principal: f64,
        annual_rate: f64,
        total_periods: u32,
        compounding_frequency: CompoundingFrequency,
    ) -> Self {
        Self::with_contribution(
            principal,
            annual_rate,
            total_periods,
            compounding_frequency,
            None,
        )
    }

    /// Create an investment with an optional recurring contribution
    pub fn with_contribution(
        principal: f64,
        annual_rate: f64,
        total_periods: u32,
        compounding_frequency: CompoundingFrequency,
        contribution: Option<Contribution>,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            total_periods,
            compounding_frequency,
            contribution,
        }
    }

    /// Interest rate applied in a single period
    pub fn period_rate(&self) -> f64 {
        self.compounding_frequency.period_rate(self.annual_rate)
    }

    /// Deposit applied in a single period
    ///
    /// Zero unless a contribution is configured with the same frequency as
    /// the compounding schedule.
    pub fn contribution_per_period(&self) -> f64 {
        match &self.contribution {
            Some(c) if c.frequency == self.compounding_frequency => c.amount,
            _ => 0.0,
        }
    }

    /// Fractional years covered by the simulation
    pub fn years(&self) -> f64 {
        self.total_periods as f64 / self.compounding_frequency.periods_per_year() as f64
    }
}
