//! Validation outcome models.
//!
//! Every rule violation is encoded as an [`IncomeValidationStatus`] value
//! returned to the caller; validation failure is an expected, first-class
//! outcome, not an error. Each category validator produces an
//! [`IncomeValidationResult`], which the service projects into the
//! [`CategoryCheck`] handed to the API layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The closed set of outcome codes a validator can produce.
///
/// Serialized as SCREAMING_SNAKE_CASE strings, wire-compatible with the
/// upstream consumer of the validation response.
///
/// # Example
///
/// ```
/// use income_engine::models::IncomeValidationStatus;
///
/// assert!(IncomeValidationStatus::MonthlySalariedPassed.is_passed());
/// assert!(!IncomeValidationStatus::NotEnoughRecords.is_passed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeValidationStatus {
    /// Category A salaried monthly: every month met the threshold.
    MonthlySalariedPassed,
    /// Category A salaried weekly: every pay-week met the threshold.
    WeeklySalariedPassed,
    /// Category A non-salaried: the period total met the threshold.
    CataNonSalariedPassed,
    /// Category B salaried: twelve consecutive months met the threshold.
    CatbSalariedPassed,
    /// The employment-continuity gate was satisfied.
    EmploymentCheckPassed,
    /// The employment-continuity gate was not satisfied.
    EmploymentCheckFailed,
    /// A month in the assessed run fell below the monthly threshold.
    MonthlyValueBelowThreshold,
    /// A pay-week in the assessed run fell below the weekly threshold.
    WeeklyValueBelowThreshold,
    /// Category A non-salaried: the period total fell below the threshold.
    CataNonSalariedBelowThreshold,
    /// Category B salaried: a month fell below the monthly threshold.
    CatbSalariedBelowThreshold,
    /// The assessed period had a gap of more than one calendar month.
    NonConsecutiveMonths,
    /// Too few usable pay records in the assessment window.
    NotEnoughRecords,
    /// Income was spread over several employers with no single employer
    /// meeting the threshold alone.
    MultipleEmployers,
}

impl IncomeValidationStatus {
    /// Whether this status represents a passing outcome.
    ///
    /// Exactly the `*_PASSED` and `*_CHECK_PASSED` codes pass; everything
    /// else is a failure.
    pub fn is_passed(self) -> bool {
        matches!(
            self,
            IncomeValidationStatus::MonthlySalariedPassed
                | IncomeValidationStatus::WeeklySalariedPassed
                | IncomeValidationStatus::CataNonSalariedPassed
                | IncomeValidationStatus::CatbSalariedPassed
                | IncomeValidationStatus::EmploymentCheckPassed
        )
    }
}

/// The person(s) a category judged, with the employers they were judged
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedIndividual {
    /// The national insurance number, as supplied in the request.
    pub nino: String,
    /// Distinct employer names, in first-seen order.
    pub employers: Vec<String>,
}

/// The outcome of one category validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeValidationResult {
    /// The outcome code.
    pub status: IncomeValidationStatus,
    /// The threshold figure this validator's rules compared against.
    pub threshold: Decimal,
    /// Who was judged, and against which employers.
    pub individuals: Vec<CheckedIndividual>,
    /// The date the application was raised.
    pub application_raised_date: NaiveDate,
    /// The computed lower bound of the assessment window.
    pub assessment_start_date: NaiveDate,
    /// The category code, "A" or "B".
    pub category: &'static str,
    /// Human-readable label for the rule-set that produced this result.
    pub calculation_type: &'static str,
}

/// The per-category value returned to the caller.
///
/// A straight projection of an [`IncomeValidationResult`] with the derived
/// pass flag; this is what the API layer serializes into the JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCheck {
    /// The category code, "A" or "B".
    pub category: String,
    /// Human-readable label for the rule-set that produced this result.
    pub calculation_type: String,
    /// Whether the category check passed.
    pub passed: bool,
    /// The date the application was raised.
    pub application_raised_date: NaiveDate,
    /// The computed lower bound of the assessment window.
    pub assessment_start_date: NaiveDate,
    /// The outcome code.
    pub status: IncomeValidationStatus,
    /// The threshold figure the category compared against.
    pub threshold: Decimal,
    /// Who was judged, and against which employers.
    pub individuals: Vec<CheckedIndividual>,
}

impl CategoryCheck {
    /// Projects a validator result into the caller-facing check.
    pub fn from_result(result: IncomeValidationResult) -> Self {
        CategoryCheck {
            category: result.category.to_string(),
            calculation_type: result.calculation_type.to_string(),
            passed: result.status.is_passed(),
            application_raised_date: result.application_raised_date,
            assessment_start_date: result.assessment_start_date,
            status: result.status,
            threshold: result.threshold,
            individuals: result.individuals,
        }
    }
}
