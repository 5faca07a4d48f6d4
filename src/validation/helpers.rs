//! Shared primitives for the category validators.
//!
//! Date-range filtering, duplicate removal, month grouping, summation and the
//! successor/consecutiveness tests. These are contracts shared by the
//! rule-sets, not a component with state of their own; every function is a
//! pure transformation over immutable input collections.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Income, IncomeValidationRequest};

/// Outcome of the per-bucket threshold and employer-consistency sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployerThresholdCheck {
    /// Every bucket met the threshold with a consistent employer.
    Pass,
    /// A bucket's combined payment fell below the threshold.
    FailedThreshold,
    /// A bucket's employer reference differed from the first bucket's.
    FailedEmployer,
}

/// Months between two dates at calendar-month granularity.
///
/// Both dates are truncated to the first of their month before subtracting,
/// so any same-month pair is 0 months apart and cross-month pairs count whole
/// calendar months regardless of day-of-month. 2015-07-14 and 2015-06-17 are
/// 1 month apart even though fewer than 31 days separate them.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use income_engine::validation::difference_in_months;
///
/// let july = NaiveDate::from_ymd_opt(2015, 7, 14).unwrap();
/// let june = NaiveDate::from_ymd_opt(2015, 6, 17).unwrap();
/// assert_eq!(difference_in_months(july, june), 1);
/// ```
pub fn difference_in_months(date1: NaiveDate, date2: NaiveDate) -> i64 {
    let months1 = i64::from(date1.year()) * 12 + i64::from(date1.month0());
    let months2 = i64::from(date2.year()) * 12 + i64::from(date2.month0());
    months1 - months2
}

/// Whether `first` was paid exactly one calendar month after `second`.
pub fn is_successive_months(first: &Income, second: &Income) -> bool {
    difference_in_months(first.payment_date, second.payment_date) == 1
}

/// Filters incomes to the inclusive `[lower, upper]` date range, most recent
/// first.
///
/// The descending sort has no effect on which records survive, but callers
/// that truncate the result depend on it.
pub fn filter_incomes_by_dates(incomes: &[Income], lower: NaiveDate, upper: NaiveDate) -> Vec<Income> {
    let mut sorted: Vec<Income> = incomes.to_vec();
    sorted.sort_by(|income1, income2| income2.payment_date.cmp(&income1.payment_date));
    sorted
        .into_iter()
        .filter(|income| income.payment_date >= lower && income.payment_date <= upper)
        .collect()
}

/// Removes exact-value duplicates, keeping the first occurrence of each
/// record in order.
///
/// Two records collapse only when every field matches; re-applying the
/// function is a no-op.
pub fn remove_duplicates(incomes: &[Income]) -> Vec<Income> {
    let mut seen: HashSet<Income> = HashSet::new();
    incomes
        .iter()
        .filter(|income| seen.insert((*income).clone()))
        .cloned()
        .collect()
}

/// Groups incomes into per-calendar-month buckets, buckets ordered ascending
/// by (year, month).
///
/// Within a bucket, records keep their input order, so a bucket's first
/// element is the caller's chosen representative for that month.
pub fn group_by_month(incomes: &[Income]) -> Vec<Vec<Income>> {
    let mut buckets: BTreeMap<(i32, u32), Vec<Income>> = BTreeMap::new();
    for income in incomes {
        buckets
            .entry(income.year_and_month())
            .or_default()
            .push(income.clone());
    }
    buckets.into_values().collect()
}

/// Checks that every period bucket sums to at least `threshold` and that
/// every bucket's representative employer reference matches the first
/// bucket's, case- and whitespace-insensitively.
///
/// The threshold is checked before the employer within each bucket, so an
/// under-threshold bucket masks a same-bucket employer mismatch.
pub fn check_employer_consistency_and_threshold(
    buckets: &[Vec<Income>],
    threshold: Decimal,
) -> EmployerThresholdCheck {
    let Some(first_bucket) = buckets.first() else {
        return EmployerThresholdCheck::Pass;
    };
    let employer_reference = first_bucket[0].normalized_employer_reference();

    for periodic_income in buckets {
        let payment = total_payment(periodic_income);
        if !value_passes_threshold(payment, threshold) {
            debug!(%payment, %threshold, "income value below threshold");
            return EmployerThresholdCheck::FailedThreshold;
        }

        let bucket_reference = periodic_income[0].normalized_employer_reference();
        if employer_reference != bucket_reference {
            debug!(
                expected = %employer_reference,
                found = %bucket_reference,
                "employer reference differs between periods"
            );
            return EmployerThresholdCheck::FailedEmployer;
        }
    }
    EmployerThresholdCheck::Pass
}

/// Whether `value` meets `threshold`; the comparison is inclusive.
pub fn value_passes_threshold(value: Decimal, threshold: Decimal) -> bool {
    value >= threshold
}

/// Sums payment amounts; zero for empty input, negative entries supported.
pub fn total_payment(incomes: &[Income]) -> Decimal {
    incomes.iter().map(|income| income.amount).sum()
}

/// The largest per-employer payment total, grouping by normalized employer
/// reference; zero for empty input.
pub fn largest_single_employer_income(incomes: &[Income]) -> Decimal {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for income in incomes {
        *totals
            .entry(income.normalized_employer_reference())
            .or_insert(Decimal::ZERO) += income.amount;
    }
    totals.into_values().max().unwrap_or(Decimal::ZERO)
}

/// Every party's PAYE records, applicant first, in record order.
pub fn all_paye_incomes(request: &IncomeValidationRequest) -> Vec<Income> {
    request
        .all_income()
        .iter()
        .flat_map(|applicant_income| applicant_income.income_record.paye.iter().cloned())
        .collect()
}

/// Every party's PAYE records dated within `[assessment_start_date, raised]`,
/// most recent first.
pub fn all_paye_in_date_range(
    request: &IncomeValidationRequest,
    assessment_start_date: NaiveDate,
) -> Vec<Income> {
    let paye = all_paye_incomes(request);
    filter_incomes_by_dates(&paye, assessment_start_date, request.application_raised_date())
}
