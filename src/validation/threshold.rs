//! Dependant-adjusted income threshold calculation.
//!
//! Converts a dependants count into the annual, monthly and weekly income
//! thresholds every category validator compares against. The tiers come from
//! the configured [`ThresholdSchedule`]; they are irregular real-world
//! figures, with a linear extrapolation beyond the documented table.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ThresholdSchedule;

/// Computes income thresholds for a dependants count.
///
/// A pure function of its inputs with no failure modes.
///
/// # Example
///
/// ```
/// use income_engine::config::ThresholdSchedule;
/// use income_engine::validation::ThresholdCalculator;
/// use rust_decimal::Decimal;
///
/// let calculator = ThresholdCalculator::new(ThresholdSchedule::default());
/// assert_eq!(calculator.yearly_threshold(0), Decimal::from(18_600));
/// assert_eq!(calculator.yearly_threshold(2), Decimal::from(24_800));
/// assert_eq!(calculator.monthly_threshold(0), Decimal::from(1_550));
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdCalculator {
    schedule: ThresholdSchedule,
}

impl ThresholdCalculator {
    /// Creates a calculator over the given schedule.
    pub fn new(schedule: ThresholdSchedule) -> Self {
        ThresholdCalculator { schedule }
    }

    /// The annual threshold for a dependants count.
    ///
    /// Zero dependants uses the base tier; one dependant its own tier; each
    /// further dependant adds the configured increment. The result never
    /// falls below the base tier.
    pub fn yearly_threshold(&self, dependants: u32) -> Decimal {
        let threshold = if dependants == 0 {
            self.schedule.base_annual
        } else {
            self.schedule.one_dependant_annual
                + self.schedule.per_additional_dependant * Decimal::from(dependants - 1)
        };
        threshold.max(self.schedule.base_annual)
    }

    /// The monthly threshold: annual / 12, rounded to 2 dp.
    pub fn monthly_threshold(&self, dependants: u32) -> Decimal {
        (self.yearly_threshold(dependants) / Decimal::from(12))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// The weekly threshold: annual / 52, rounded to 2 dp.
    pub fn weekly_threshold(&self, dependants: u32) -> Decimal {
        (self.yearly_threshold(dependants) / Decimal::from(52))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
