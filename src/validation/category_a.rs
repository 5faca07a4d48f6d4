//! Category A composition.
//!
//! One Category A check is emitted per request, whichever sub-variant fires.
//! The primary applicant's classified pay frequency selects the salaried
//! rules (monthly or weekly); when no salaried variant applies or the
//! salaried assessment fails, the non-salaried assessment runs as the
//! fallback route. Of two failures, the more informative one is reported:
//! a salaried verdict on the actual pay pattern beats the non-salaried one,
//! except when the salaried rules never had enough records to judge.

use tracing::debug;

use crate::config::ValidationConfig;
use crate::models::{IncomeValidationRequest, IncomeValidationResult, IncomeValidationStatus};

use super::cat_a_non_salaried::CatANonSalariedValidator;
use super::cat_a_salaried_monthly::CatASalariedMonthlyValidator;
use super::cat_a_salaried_weekly::CatASalariedWeeklyValidator;
use super::frequency::{Frequency, calculate_frequency};

/// Runs the applicable Category A sub-variants.
#[derive(Debug, Clone)]
pub struct CategoryAValidator {
    salaried_monthly: CatASalariedMonthlyValidator,
    salaried_weekly: CatASalariedWeeklyValidator,
    non_salaried: CatANonSalariedValidator,
}

impl CategoryAValidator {
    /// Creates the validator and its sub-validators from the engine
    /// configuration.
    pub fn new(config: &ValidationConfig) -> Self {
        CategoryAValidator {
            salaried_monthly: CatASalariedMonthlyValidator::new(config),
            salaried_weekly: CatASalariedWeeklyValidator::new(config),
            non_salaried: CatANonSalariedValidator::new(config),
        }
    }

    /// Classifies the primary applicant's pay frequency, runs the matching
    /// salaried rules, and falls back to the non-salaried assessment when
    /// they do not carry the request.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        let frequency = calculate_frequency(&request.applicant_income().income_record);
        debug!(?frequency, "classified primary applicant pay frequency");

        let salaried = match frequency {
            Frequency::CalendarMonthly => Some(self.salaried_monthly.validate(request)),
            Frequency::Weekly => Some(self.salaried_weekly.validate(request)),
            // Fortnightly, four-weekly and changed patterns have no salaried
            // variant; irregular pay is what the non-salaried rules exist
            // for.
            Frequency::Fortnightly | Frequency::FourWeekly | Frequency::Changed => None,
        };

        match salaried {
            Some(result) if result.status.is_passed() => result,
            salaried_failure => {
                let non_salaried = self.non_salaried.validate(request);
                match salaried_failure {
                    // A specific salaried verdict on the classified pattern
                    // beats a failed fallback, unless the salaried rules
                    // never had enough records to judge.
                    Some(result)
                        if !non_salaried.status.is_passed()
                            && result.status != IncomeValidationStatus::NotEnoughRecords =>
                    {
                        result
                    }
                    _ => non_salaried,
                }
            }
        }
    }
}
