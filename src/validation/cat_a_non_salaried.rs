//! Category A non-salaried rules.
//!
//! Assesses the six months up to the application-raised date without any
//! periodicity requirement: the parties' combined income over the window is
//! compared against the half-year equivalent of the annual threshold. Each
//! party's income resolves to a single contribution first; a party paid by
//! several employers only contributes their largest single-employer total,
//! and if the combined contributions then miss the threshold the outcome is
//! MULTIPLE_EMPLOYERS rather than a plain threshold failure.

use chrono::Months;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::models::{
    CheckedIndividual, Income, IncomeValidationRequest, IncomeValidationResult,
    IncomeValidationStatus,
};

use super::helpers::{
    filter_incomes_by_dates, largest_single_employer_income, remove_duplicates, total_payment,
    value_passes_threshold,
};
use super::threshold::ThresholdCalculator;

const CATEGORY: &str = "A";
const CALCULATION_TYPE: &str = "Category A Non Salaried";

/// Validates the Category A non-salaried rules.
#[derive(Debug, Clone)]
pub struct CatANonSalariedValidator {
    threshold_calculator: ThresholdCalculator,
    assessment_start_months_previous: u32,
}

impl CatANonSalariedValidator {
    /// Creates the validator from the engine configuration.
    pub fn new(config: &ValidationConfig) -> Self {
        CatANonSalariedValidator {
            threshold_calculator: ThresholdCalculator::new(config.thresholds.clone()),
            assessment_start_months_previous: config.windows.non_salaried_months,
        }
    }

    /// Compares the parties' combined in-window income against the half-year
    /// threshold.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        let raised_date = request.application_raised_date();
        let assessment_start_date = raised_date - Months::new(self.assessment_start_months_previous);
        let yearly_threshold = self
            .threshold_calculator
            .yearly_threshold(request.dependants());
        let half_year_threshold = yearly_threshold / Decimal::from(2);

        let mut combined_income = Decimal::ZERO;
        let mut any_multiple_employers = false;
        let mut contributors: Vec<CheckedIndividual> = Vec::new();

        for applicant_income in request.all_income() {
            let in_range = filter_incomes_by_dates(
                &applicant_income.income_record.paye,
                assessment_start_date,
                raised_date,
            );
            let incomes = remove_duplicates(&in_range);
            if incomes.is_empty() {
                continue;
            }

            combined_income += Self::party_contribution(&incomes, &mut any_multiple_employers);
            contributors.push(applicant_income.checked_individual());
        }

        let (status, individuals) = if contributors.is_empty() {
            (
                IncomeValidationStatus::NotEnoughRecords,
                request.checked_individuals(),
            )
        } else if value_passes_threshold(combined_income, half_year_threshold) {
            (IncomeValidationStatus::CataNonSalariedPassed, contributors)
        } else if any_multiple_employers {
            debug!(%combined_income, %half_year_threshold, "largest single-employer income below threshold");
            (
                IncomeValidationStatus::MultipleEmployers,
                request.checked_individuals(),
            )
        } else {
            (
                IncomeValidationStatus::CataNonSalariedBelowThreshold,
                request.checked_individuals(),
            )
        };

        IncomeValidationResult {
            status,
            threshold: yearly_threshold,
            individuals,
            application_raised_date: raised_date,
            assessment_start_date,
            category: CATEGORY,
            calculation_type: CALCULATION_TYPE,
        }
    }

    /// A party's income counts in full when it comes from one employer;
    /// otherwise only the largest single employer's total counts.
    fn party_contribution(incomes: &[Income], any_multiple_employers: &mut bool) -> Decimal {
        let mut references: Vec<String> = incomes
            .iter()
            .map(Income::normalized_employer_reference)
            .collect();
        references.sort_unstable();
        references.dedup();

        if references.len() > 1 {
            *any_multiple_employers = true;
            largest_single_employer_income(incomes)
        } else {
            total_payment(incomes)
        }
    }
}
