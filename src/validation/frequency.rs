//! Pay-frequency classification.
//!
//! Classifies an income record's PAYE payments into a pay-frequency category.
//! Explicit week/month numbering on the records always beats date-gap
//! inference; the date-gap fallback only runs when the numbering is absent or
//! inconclusive.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Income, IncomeRecord};

/// A classified pay frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Paid every week.
    Weekly,
    /// Paid every two weeks.
    Fortnightly,
    /// Paid every four weeks.
    FourWeekly,
    /// Paid once per calendar month.
    CalendarMonthly,
    /// The records mix more than one numbering style; the pay pattern
    /// changed within the record.
    Changed,
}

/// The numbering style carried by a single payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NumberStyle {
    HasMonthlyNumber,
    HasWeeklyNumber,
    HasNone,
}

fn number_style(income: &Income) -> NumberStyle {
    if income.month_pay_number.is_some() {
        NumberStyle::HasMonthlyNumber
    } else if income.week_pay_number.is_some() {
        NumberStyle::HasWeeklyNumber
    } else {
        NumberStyle::HasNone
    }
}

/// Classifies the pay frequency of an income record.
///
/// In priority order:
/// 1. more than one numbering style in use → [`Frequency::Changed`];
/// 2. every record carries a month number → [`Frequency::CalendarMonthly`];
/// 3. every record carries a week number and the sorted distinct week
///    numbers are uniformly 1, 2 or 4 apart → weekly, fortnightly or
///    four-weekly respectively;
/// 4. otherwise, infer from the average gap between payment dates.
pub fn calculate_frequency(income_record: &IncomeRecord) -> Frequency {
    if has_different_frequencies(income_record) {
        return Frequency::Changed;
    }
    if let Some(frequency) = calculate_by_month_numbers(income_record) {
        return frequency;
    }
    if let Some(frequency) = calculate_by_week_numbers(income_record) {
        return frequency;
    }
    calculate_by_payment_dates(income_record)
}

fn has_different_frequencies(income_record: &IncomeRecord) -> bool {
    let styles: HashSet<NumberStyle> = income_record.paye.iter().map(number_style).collect();
    styles.len() > 1
}

fn calculate_by_month_numbers(income_record: &IncomeRecord) -> Option<Frequency> {
    if !income_record.paye.is_empty()
        && income_record
            .paye
            .iter()
            .all(|income| income.month_pay_number.is_some())
    {
        return Some(Frequency::CalendarMonthly);
    }
    None
}

fn calculate_by_week_numbers(income_record: &IncomeRecord) -> Option<Frequency> {
    if income_record.paye.is_empty()
        || !income_record
            .paye
            .iter()
            .all(|income| income.week_pay_number.is_some())
    {
        return None;
    }

    let week_numbers = unique_week_numbers_sorted(income_record);
    if is_difference_always(&week_numbers, 1) {
        return Some(Frequency::Weekly);
    }
    if is_difference_always(&week_numbers, 2) {
        return Some(Frequency::Fortnightly);
    }
    if is_difference_always(&week_numbers, 4) {
        return Some(Frequency::FourWeekly);
    }
    None
}

fn unique_week_numbers_sorted(income_record: &IncomeRecord) -> Vec<i32> {
    let mut week_numbers: Vec<i32> = income_record
        .paye
        .iter()
        .filter_map(|income| income.week_pay_number)
        .collect::<HashSet<i32>>()
        .into_iter()
        .collect();
    week_numbers.sort_unstable();
    week_numbers
}

fn is_difference_always(week_numbers: &[i32], difference: i32) -> bool {
    week_numbers
        .windows(2)
        .all(|pair| pair[1] - pair[0] == difference)
}

/// Infers frequency from the average day gap between the earliest and latest
/// payments. Fewer than two payments default to calendar monthly.
fn calculate_by_payment_dates(income_record: &IncomeRecord) -> Frequency {
    let dates: Vec<NaiveDate> = income_record
        .paye
        .iter()
        .map(|income| income.payment_date)
        .collect();

    let number_of_payments = dates.len() as i64;
    if number_of_payments < 2 {
        return log_frequency(Frequency::CalendarMonthly);
    }

    let max = dates.iter().max().copied().unwrap();
    let min = dates.iter().min().copied().unwrap();
    let days_in_range = (max - min).num_days();

    let average_days_between_payments =
        ((days_in_range as f64) / ((number_of_payments - 1) as f64)).round() as i64;

    log_frequency(nearest_frequency(average_days_between_payments))
}

/// Maps an average day gap to the nearest known frequency bucket
/// (centres 7, 14, 28 and 31 days).
fn nearest_frequency(average_days_between_payments: i64) -> Frequency {
    match average_days_between_payments {
        d if d <= 10 => Frequency::Weekly,
        d if d <= 20 => Frequency::Fortnightly,
        d if d <= 29 => Frequency::FourWeekly,
        _ => Frequency::CalendarMonthly,
    }
}

fn log_frequency(frequency: Frequency) -> Frequency {
    debug!(?frequency, "frequency calculated from payment dates");
    frequency
}
