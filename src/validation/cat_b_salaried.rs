//! Category B salaried rules.
//!
//! Sustained-income assessment over a 366-day window ending at the
//! application-raised date. The employment-continuity gate runs first and any
//! failure there is returned unchanged. Each party is then checked solo,
//! applicant first; incomes are never combined across parties. A party needs
//! twelve payment records forming twelve consecutive monthly buckets from a
//! single employer, each bucket meeting the monthly threshold.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ValidationConfig;
use crate::models::{
    ApplicantIncome, CheckedIndividual, IncomeValidationRequest, IncomeValidationResult,
    IncomeValidationStatus,
};

use super::employment_check::EmploymentCheckValidator;
use super::helpers::{
    EmployerThresholdCheck, check_employer_consistency_and_threshold, filter_incomes_by_dates,
    group_by_month, is_successive_months, remove_duplicates,
};
use super::threshold::ThresholdCalculator;

const CATEGORY: &str = "B";
const CALCULATION_TYPE: &str = "Category B salaried";

/// Validates the Category B salaried rules.
#[derive(Debug, Clone)]
pub struct CatBSalariedValidator {
    employment_check: EmploymentCheckValidator,
    threshold_calculator: ThresholdCalculator,
    income_period_days_previous: i64,
    number_of_months: u32,
}

impl CatBSalariedValidator {
    /// Creates the validator from the engine configuration.
    pub fn new(config: &ValidationConfig) -> Self {
        CatBSalariedValidator {
            employment_check: EmploymentCheckValidator::new(config),
            threshold_calculator: ThresholdCalculator::new(config.thresholds.clone()),
            income_period_days_previous: config.windows.cat_b_days,
            number_of_months: config.windows.cat_b_months,
        }
    }

    /// Runs the employment gate, then checks each party solo, applicant
    /// first. The first passing party's result is returned with that party
    /// as the sole checked individual; when no party passes, the last
    /// party's failure with every party listed.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        let employment_check_validation = self.employment_check.validate(request);
        if !employment_check_validation.status.is_passed() {
            return employment_check_validation;
        }

        let raised_date = request.application_raised_date();
        let assessment_start_date = raised_date - Duration::days(self.income_period_days_previous);
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
                    vec![applicant_income.checked_individual()],
                    request,
                    assessment_start_date,
                );
            }
        }

        self.result(
            status,
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
        let paye = remove_duplicates(&in_range);

        if (paye.len() as u32) < self.number_of_months {
            return IncomeValidationStatus::NotEnoughRecords;
        }

        let monthly_incomes = group_by_month(&paye);
        if (monthly_incomes.len() as u32) < self.number_of_months {
            return IncomeValidationStatus::NotEnoughRecords;
        }

        if Self::month_missing(&monthly_incomes) {
            return IncomeValidationStatus::NonConsecutiveMonths;
        }

        match check_employer_consistency_and_threshold(&monthly_incomes, monthly_threshold) {
            EmployerThresholdCheck::Pass => IncomeValidationStatus::CatbSalariedPassed,
            EmployerThresholdCheck::FailedThreshold => {
                IncomeValidationStatus::CatbSalariedBelowThreshold
            }
            EmployerThresholdCheck::FailedEmployer => IncomeValidationStatus::MultipleEmployers,
        }
    }

    fn month_missing(monthly_incomes: &[Vec<crate::models::Income>]) -> bool {
        monthly_incomes
            .windows(2)
            .any(|pair| !is_successive_months(&pair[1][0], &pair[0][0]))
    }

    fn result(
        &self,
        status: IncomeValidationStatus,
        individuals: Vec<CheckedIndividual>,
        request: &IncomeValidationRequest,
        assessment_start_date: NaiveDate,
    ) -> IncomeValidationResult {
        IncomeValidationResult {
            status,
            // The annual figure is reported even though months are compared
            // against the monthly one.
            threshold: self
                .threshold_calculator
                .yearly_threshold(request.dependants()),
            individuals,
            application_raised_date: request.application_raised_date(),
            assessment_start_date,
            category: CATEGORY,
            calculation_type: CALCULATION_TYPE,
        }
    }
}
