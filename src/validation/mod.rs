//! Validation logic for the Income Validation Engine.
//!
//! This module contains the category-specific eligibility algorithms and the
//! building blocks they share: the dependant-adjusted threshold calculator,
//! the pay-frequency classifier, the date-range/grouping/deduplication
//! primitives, the employment-continuity gate, the four category rule-sets
//! (salaried weekly, salaried monthly, non-salaried, Category B salaried)
//! and the service that orchestrates them.

mod cat_a_non_salaried;
mod cat_a_salaried_monthly;
mod cat_a_salaried_weekly;
mod cat_b_salaried;
mod category_a;
mod employment_check;
mod frequency;
mod helpers;
mod service;
mod threshold;

pub use cat_a_non_salaried::CatANonSalariedValidator;
pub use cat_a_salaried_monthly::CatASalariedMonthlyValidator;
pub use cat_a_salaried_weekly::CatASalariedWeeklyValidator;
pub use cat_b_salaried::CatBSalariedValidator;
pub use category_a::CategoryAValidator;
pub use employment_check::EmploymentCheckValidator;
pub use frequency::{Frequency, calculate_frequency};
pub use helpers::{
    EmployerThresholdCheck, all_paye_in_date_range, all_paye_incomes,
    check_employer_consistency_and_threshold, difference_in_months, filter_incomes_by_dates,
    group_by_month, is_successive_months, largest_single_employer_income, remove_duplicates,
    total_payment, value_passes_threshold,
};
pub use service::{CategoryValidator, IncomeValidationService};
pub use threshold::ThresholdCalculator;
