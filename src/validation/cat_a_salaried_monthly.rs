//! Category A salaried rules, calendar-monthly variant.
//!
//! Assesses a six-calendar-month window ending at the application-raised
//! date. Each party is checked solo, applicant first: the window must hold
//! six consecutive monthly pay buckets from a single employer, each bucket's
//! combined payment meeting the monthly threshold.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ValidationConfig;
use crate::models::{
    ApplicantIncome, IncomeValidationRequest, IncomeValidationResult, IncomeValidationStatus,
};

use super::helpers::{
    EmployerThresholdCheck, check_employer_consistency_and_threshold, filter_incomes_by_dates,
    group_by_month, is_successive_months, remove_duplicates,
};
use super::threshold::ThresholdCalculator;

const CATEGORY: &str = "A";
const CALCULATION_TYPE: &str = "Category A Monthly Salary";

/// Validates the Category A salaried rules for calendar-monthly payees.
#[derive(Debug, Clone)]
pub struct CatASalariedMonthlyValidator {
    threshold_calculator: ThresholdCalculator,
    number_of_months: u32,
}

impl CatASalariedMonthlyValidator {
    /// Creates the validator from the engine configuration.
    pub fn new(config: &ValidationConfig) -> Self {
        CatASalariedMonthlyValidator {
            threshold_calculator: ThresholdCalculator::new(config.thresholds.clone()),
            number_of_months: config.windows.salaried_monthly_months,
        }
    }

    /// Checks each party solo, applicant first, returning the first passing
    /// party's result; when no party passes, the last party's failure with
    /// every party listed.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        let raised_date = request.application_raised_date();
        let assessment_start_date = raised_date - Months::new(self.number_of_months);
        let monthly_threshold = self
            .threshold_calculator
            .monthly_threshold(request.dependants());

        let mut status = IncomeValidationStatus::NotEnoughRecords;
        for applicant_income in request.all_income() {
            status = self.check_party(
                applicant_income,
                assessment_start_date,
                raised_date,
                monthly_threshold,
            );
            if status.is_passed() {
                return self.result(
                    status,
                    monthly_threshold,
                    vec![applicant_income.checked_individual()],
                    request,
                    assessment_start_date,
                );
            }
        }

        self.result(
            status,
            monthly_threshold,
            request.checked_individuals(),
            request,
            assessment_start_date,
        )
    }

    fn check_party(
        &self,
        applicant_income: &ApplicantIncome,
        assessment_start_date: NaiveDate,
        raised_date: NaiveDate,
        monthly_threshold: Decimal,
    ) -> IncomeValidationStatus {
        let in_range = filter_incomes_by_dates(
            &applicant_income.income_record.paye,
            assessment_start_date,
            raised_date,
        );
        let deduped = remove_duplicates(&in_range);
        let buckets = group_by_month(&deduped);

        if (buckets.len() as u32) < self.number_of_months {
            return IncomeValidationStatus::NotEnoughRecords;
        }

        // The window can straddle a partial month at each end; only the most
        // recent N monthly buckets are assessed.
        let newest = &buckets[buckets.len() - self.number_of_months as usize..];

        for pair in newest.windows(2) {
            if !is_successive_months(&pair[1][0], &pair[0][0]) {
                return IncomeValidationStatus::NonConsecutiveMonths;
            }
        }

        match check_employer_consistency_and_threshold(newest, monthly_threshold) {
            EmployerThresholdCheck::Pass => IncomeValidationStatus::MonthlySalariedPassed,
            EmployerThresholdCheck::FailedThreshold => {
                IncomeValidationStatus::MonthlyValueBelowThreshold
            }
            EmployerThresholdCheck::FailedEmployer => IncomeValidationStatus::MultipleEmployers,
        }
    }

    fn result(
        &self,
        status: IncomeValidationStatus,
        threshold: Decimal,
        individuals: Vec<crate::models::CheckedIndividual>,
        request: &IncomeValidationRequest,
        assessment_start_date: NaiveDate,
    ) -> IncomeValidationResult {
        IncomeValidationResult {
            status,
            threshold,
            individuals,
            application_raised_date: request.application_raised_date(),
            assessment_start_date,
            category: CATEGORY,
            calculation_type: CALCULATION_TYPE,
        }
    }
}
