//! Configuration types for income validation.
//!
//! The defaults encode the documented rules; the structures also deserialize
//! from YAML so a deployment can carry an amended schedule without a rebuild.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The dependant-adjusted annual income threshold schedule.
///
/// The tiers are irregular real-world figures, not derived from a formula:
/// a fixed base, a distinct first-dependant tier, then a linear increment
/// per additional dependant.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdSchedule {
    /// Annual threshold with no dependants.
    pub base_annual: Decimal,
    /// Annual threshold with exactly one dependant.
    pub one_dependant_annual: Decimal,
    /// Increment added for each dependant beyond the first.
    pub per_additional_dependant: Decimal,
}

impl Default for ThresholdSchedule {
    fn default() -> Self {
        ThresholdSchedule {
            base_annual: Decimal::from(18_600),
            one_dependant_annual: Decimal::from(22_400),
            per_additional_dependant: Decimal::from(2_400),
        }
    }
}

/// Assessment-window lengths and minimum record counts for each rule-set.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentWindows {
    /// Calendar months assessed by the Category A salaried monthly rules.
    pub salaried_monthly_months: u32,
    /// Distinct pay-weeks required by the Category A salaried weekly rules.
    /// The window length is this many seven-day weeks.
    pub salaried_weekly_weeks: u32,
    /// Calendar months assessed by the Category A non-salaried rules.
    pub non_salaried_months: u32,
    /// Days looked back by the Category B salaried rules. A fixed day count,
    /// deliberately not a calendar-year subtraction.
    pub cat_b_days: i64,
    /// Monthly payment records and consecutive monthly buckets required by
    /// the Category B salaried rules.
    pub cat_b_months: u32,
    /// Days before the raised date from which an employment-check payment
    /// counts, inclusive.
    pub employment_check_days: i64,
}

impl Default for AssessmentWindows {
    fn default() -> Self {
        AssessmentWindows {
            salaried_monthly_months: 6,
            salaried_weekly_weeks: 26,
            non_salaried_months: 6,
            cat_b_days: 366,
            cat_b_months: 12,
            employment_check_days: 32,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    /// The annual threshold schedule.
    #[serde(default)]
    pub thresholds: ThresholdSchedule,
    /// Window lengths and minimum record counts.
    #[serde(default)]
    pub windows: AssessmentWindows,
}
