//! Category A salaried rules, weekly variant.
//!
//! Assesses a 26-week window ending at the application-raised date. Each
//! party is checked solo, applicant first: the window must hold 26 distinct
//! pay-weeks from a single employer, each week's combined payment meeting the
//! weekly threshold. Multiple payments in the same week are summed before the
//! comparison.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ValidationConfig;
use crate::models::{
    ApplicantIncome, CheckedIndividual, Income, IncomeValidationRequest, IncomeValidationResult,
    IncomeValidationStatus,
};

use super::helpers::{
    EmployerThresholdCheck, check_employer_consistency_and_threshold, filter_incomes_by_dates,
    remove_duplicates,
};
use super::threshold::ThresholdCalculator;

const CATEGORY: &str = "A";
const CALCULATION_TYPE: &str = "Category A Weekly Salary";
const DAYS_PER_WEEK: i64 = 7;

/// Validates the Category A salaried rules for weekly payees.
#[derive(Debug, Clone)]
pub struct CatASalariedWeeklyValidator {
    threshold_calculator: ThresholdCalculator,
    number_of_weeks: u32,
}

impl CatASalariedWeeklyValidator {
    /// Creates the validator from the engine configuration.
    pub fn new(config: &ValidationConfig) -> Self {
        CatASalariedWeeklyValidator {
            threshold_calculator: ThresholdCalculator::new(config.thresholds.clone()),
            number_of_weeks: config.windows.salaried_weekly_weeks,
        }
    }

    /// Checks each party solo, applicant first, returning the first passing
    /// party's result; when no party passes, the last party's failure with
    /// every party listed.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        let raised_date = request.application_raised_date();
        let assessment_start_date =
            raised_date - Duration::days(i64::from(self.number_of_weeks) * DAYS_PER_WEEK);
        let weekly_threshold = self
            .threshold_calculator
            .weekly_threshold(request.dependants());

        let mut status = IncomeValidationStatus::NotEnoughRecords;
        for applicant_income in request.all_income() {
            status = self.check_party(
                applicant_income,
                assessment_start_date,
                raised_date,
                weekly_threshold,
            );
            if status.is_passed() {
                return self.result(
                    status,
                    weekly_threshold,
                    vec![applicant_income.checked_individual()],
                    request,
                    assessment_start_date,
                );
            }
        }

        self.result(
            status,
            weekly_threshold,
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
        weekly_threshold: Decimal,
    ) -> IncomeValidationStatus {
        let in_range = filter_incomes_by_dates(
            &applicant_income.income_record.paye,
            assessment_start_date,
            raised_date,
        );
        let deduped = remove_duplicates(&in_range);
        let buckets = group_by_week(&deduped, assessment_start_date);

        if (buckets.len() as u32) < self.number_of_weeks {
            return IncomeValidationStatus::NotEnoughRecords;
        }

        match check_employer_consistency_and_threshold(&buckets, weekly_threshold) {
            EmployerThresholdCheck::Pass => IncomeValidationStatus::WeeklySalariedPassed,
            EmployerThresholdCheck::FailedThreshold => {
                IncomeValidationStatus::WeeklyValueBelowThreshold
            }
            EmployerThresholdCheck::FailedEmployer => IncomeValidationStatus::MultipleEmployers,
        }
    }

    fn result(
        &self,
        status: IncomeValidationStatus,
        threshold: Decimal,
        individuals: Vec<CheckedIndividual>,
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

/// Buckets incomes by pay-week, ordered ascending by week.
///
/// The record's week-pay-number is the key when present; records without one
/// (date-gap-classified data) key on the payment date's week offset from the
/// assessment start.
fn group_by_week(incomes: &[Income], assessment_start_date: NaiveDate) -> Vec<Vec<Income>> {
    let mut buckets: BTreeMap<i32, Vec<Income>> = BTreeMap::new();
    for income in incomes {
        let week = income.week_pay_number.unwrap_or_else(|| {
            ((income.payment_date - assessment_start_date).num_days() / DAYS_PER_WEEK) as i32
        });
        buckets.entry(week).or_default().push(income.clone());
    }
    buckets.into_values().collect()
}
