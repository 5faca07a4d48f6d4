//! Employment-continuity check.
//!
//! A precondition gate used by the salaried Category B rules: confirms each
//! party currently has qualifying ongoing employment before the deeper period
//! analysis runs. A party qualifies when their payments dated within the
//! look-back window sum to at least the monthly threshold; a payment dated
//! exactly on the assessment start date counts (inclusive boundary).

use chrono::Duration;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::models::{
    CheckedIndividual, IncomeValidationRequest, IncomeValidationResult, IncomeValidationStatus,
};

use super::helpers::{filter_incomes_by_dates, total_payment, value_passes_threshold};
use super::threshold::ThresholdCalculator;

const CATEGORY: &str = "B";
const CALCULATION_TYPE: &str = "Employment Check";

/// Verifies each party has recent income consistent with ongoing employment.
#[derive(Debug, Clone)]
pub struct EmploymentCheckValidator {
    threshold_calculator: ThresholdCalculator,
    assessment_start_days_previous: i64,
}

impl EmploymentCheckValidator {
    /// Creates the validator from the engine configuration.
    pub fn new(config: &ValidationConfig) -> Self {
        EmploymentCheckValidator {
            threshold_calculator: ThresholdCalculator::new(config.thresholds.clone()),
            assessment_start_days_previous: config.windows.employment_check_days,
        }
    }

    /// Runs the employment check for every party of the request.
    ///
    /// Passes when at least one party's in-window payments reach the monthly
    /// threshold. The passing result lists only the qualifying parties,
    /// applicant first; a failing result lists every party.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        let raised_date = request.application_raised_date();
        let assessment_start_date =
            raised_date - Duration::days(self.assessment_start_days_previous);
        let monthly_threshold = self
            .threshold_calculator
            .monthly_threshold(request.dependants());

        let qualifying: Vec<CheckedIndividual> = request
            .all_income()
            .iter()
            .filter(|applicant_income| {
                let recent = filter_incomes_by_dates(
                    &applicant_income.income_record.paye,
                    assessment_start_date,
                    raised_date,
                );
                value_passes_threshold(total_payment(&recent), monthly_threshold)
            })
            .map(|applicant_income| applicant_income.checked_individual())
            .collect();

        let (status, individuals) = if qualifying.is_empty() {
            debug!(%assessment_start_date, "no party had qualifying recent income");
            (
                IncomeValidationStatus::EmploymentCheckFailed,
                request.checked_individuals(),
            )
        } else {
            (IncomeValidationStatus::EmploymentCheckPassed, qualifying)
        };

        IncomeValidationResult {
            status,
            threshold: monthly_threshold,
            individuals,
            application_raised_date: raised_date,
            assessment_start_date,
            category: CATEGORY,
            calculation_type: CALCULATION_TYPE,
        }
    }
}
