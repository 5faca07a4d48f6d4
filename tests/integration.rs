//! Integration tests for the Income Validation Engine.
//!
//! Each scenario drives the full service: frequency classification, category
//! dispatch, window filtering, deduplication, grouping, consecutiveness and
//! threshold checks, down to the projected category checks. Covers:
//! - Category A non-salaried pass and multiple-employer failure
//! - Category B record-count and consecutiveness outcomes
//! - Employment-check boundary behavior
//! - Joint applications and ordering guarantees
//! - Dependant-adjusted thresholds

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

use income_engine::config::ValidationConfig;
use income_engine::models::{
    Applicant, ApplicantIncome, CategoryCheck, Employer, Employment, Income,
    IncomeRecord, IncomeValidationRequest, IncomeValidationStatus,
};
use income_engine::validation::IncomeValidationService;

// =============================================================================
// Test Helpers
// =============================================================================

const NINO: &str = "AA123456A";
const NINO_PARTNER: &str = "BB123456B";
const PIZZA_HUT: &str = "Pizza Hut";
const BURGER_KING: &str = "Burger King";

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn raised_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 8, 24).unwrap()
}

fn service() -> IncomeValidationService {
    IncomeValidationService::new(&ValidationConfig::default())
}

fn payment(amount: &str, payment_date: NaiveDate, employer_ref: &str) -> Income {
    Income {
        amount: dec(amount),
        payment_date,
        week_pay_number: None,
        month_pay_number: None,
        employer_paye_reference: employer_ref.to_string(),
    }
}

fn monthly_payments(count: u32, amount: &str, last_date: NaiveDate, employer_ref: &str) -> Vec<Income> {
    (0..count)
        .map(|i| payment(amount, last_date - Months::new(i), employer_ref))
        .collect()
}

fn party(nino: &str, employer_name: &str, paye: Vec<Income>) -> ApplicantIncome {
    ApplicantIncome {
        applicant: Applicant {
            forename: "Duncan".to_string(),
            surname: "Smith".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            nino: nino.to_string(),
        },
        income_record: IncomeRecord {
            paye,
            self_assessment: vec![],
            employments: vec![Employment {
                employer: Employer {
                    name: employer_name.to_string(),
                    paye_reference: format!("{employer_name}/ref"),
                },
            }],
            individual: None,
        },
    }
}

fn solo_request(paye: Vec<Income>) -> IncomeValidationRequest {
    IncomeValidationRequest::new(vec![party(NINO, PIZZA_HUT, paye)], raised_date(), 0).unwrap()
}

fn category_a(checks: &[CategoryCheck]) -> &CategoryCheck {
    &checks[0]
}

fn category_b(checks: &[CategoryCheck]) -> &CategoryCheck {
    &checks[1]
}

// =============================================================================
// Category A non-salaried scenarios
// =============================================================================

#[test]
fn test_cat_a_non_salaried_pass_scenario() {
    // Two 9300 payments just before the raised date, same employer. The
    // one-day gap classifies weekly, the weekly rules cannot judge two weeks
    // of data, and the non-salaried fallback meets the half-year threshold
    // (9300 for no dependants).
    let paye = vec![
        payment("9300", raised_date() - Duration::days(1), "an employer ref"),
        payment("9300", raised_date() - Duration::days(2), "an employer ref"),
    ];

    let checks = service().validate(&solo_request(paye));
    let check = category_a(&checks);

    assert_eq!(check.status, IncomeValidationStatus::CataNonSalariedPassed);
    assert!(check.passed);
    assert_eq!(check.threshold, dec("18600"));
    assert_eq!(check.individuals.len(), 1);
    assert_eq!(check.individuals[0].nino, NINO);
    assert_eq!(check.individuals[0].employers, vec![PIZZA_HUT]);
}

#[test]
fn test_cat_a_multiple_employers_scenario() {
    // Combined total reaches the threshold but no single employer's total
    // does.
    let paye = vec![
        payment("9299.99", raised_date() - Duration::days(1), "an employer ref"),
        payment("0.01", raised_date() - Duration::days(2), "another employer ref"),
    ];

    let checks = service().validate(&solo_request(paye));
    let check = category_a(&checks);

    assert_eq!(check.status, IncomeValidationStatus::MultipleEmployers);
    assert!(!check.passed);
}

#[test]
fn test_cat_a_joint_combined_income_passes() {
    let applicant_paye = vec![payment("4650", raised_date() - Duration::days(1), "an employer ref")];
    let partner_paye = vec![payment(
        "4650",
        raised_date() - Duration::days(2),
        "another employer ref",
    )];
    let request = IncomeValidationRequest::new(
        vec![
            party(NINO, PIZZA_HUT, applicant_paye),
            party(NINO_PARTNER, BURGER_KING, partner_paye),
        ],
        raised_date(),
        0,
    )
    .unwrap();

    let checks = service().validate(&request);
    let check = category_a(&checks);

    assert_eq!(check.status, IncomeValidationStatus::CataNonSalariedPassed);
    // Applicant-before-partner ordering is preserved into the check.
    assert_eq!(check.individuals.len(), 2);
    assert_eq!(check.individuals[0].nino, NINO);
    assert_eq!(check.individuals[1].nino, NINO_PARTNER);
}

// =============================================================================
// Category A salaried scenarios
// =============================================================================

#[test]
fn test_cat_a_salaried_monthly_pass() {
    let paye: Vec<Income> = (0..6)
        .map(|i| {
            let mut p = payment(
                "1550",
                raised_date() - Duration::days(1) - Months::new(i),
                "Pizza Hut/ref",
            );
            p.month_pay_number = Some(6 - i as i32);
            p
        })
        .collect();

    let checks = service().validate(&solo_request(paye));
    let check = category_a(&checks);

    assert_eq!(check.status, IncomeValidationStatus::MonthlySalariedPassed);
    assert_eq!(check.calculation_type, "Category A Monthly Salary");
    assert_eq!(check.threshold, dec("1550"));
}

#[test]
fn test_cat_a_salaried_weekly_pass() {
    let paye: Vec<Income> = (0..26)
        .map(|i| {
            let mut p = payment(
                "400",
                raised_date() - Duration::days(3) - Duration::weeks(i as i64),
                "Pizza Hut/ref",
            );
            p.week_pay_number = Some(26 - i as i32);
            p
        })
        .collect();

    let checks = service().validate(&solo_request(paye));
    let check = category_a(&checks);

    assert_eq!(check.status, IncomeValidationStatus::WeeklySalariedPassed);
    assert_eq!(check.calculation_type, "Category A Weekly Salary");
    assert_eq!(check.threshold, dec("357.69"));
}

#[test]
fn test_cat_a_weekly_value_below_threshold() {
    // One week paid well short of the weekly threshold, and a 26-week total
    // that also misses the half-year figure: the weekly verdict names the
    // defect.
    let paye: Vec<Income> = (0..26)
        .map(|i| {
            let amount = if i == 25 { "200" } else { "357.69" };
            let mut p = payment(
                amount,
                raised_date() - Duration::days(3) - Duration::weeks(i as i64),
                "Pizza Hut/ref",
            );
            p.week_pay_number = Some(26 - i as i32);
            p
        })
        .collect();

    let checks = service().validate(&solo_request(paye));

    assert_eq!(
        category_a(&checks).status,
        IncomeValidationStatus::WeeklyValueBelowThreshold
    );
}

// =============================================================================
// Category B scenarios
// =============================================================================

#[test]
fn test_cat_b_missing_twelfth_month_is_not_enough_records() {
    // Eleven consecutive qualifying months: too few records, judged before
    // consecutiveness.
    let paye = monthly_payments(11, "2000", raised_date() - Duration::days(1), "Pizza Hut/ref");

    let checks = service().validate(&solo_request(paye));
    let check = category_b(&checks);

    assert_eq!(check.status, IncomeValidationStatus::NotEnoughRecords);
    assert!(!check.passed);
}

#[test]
fn test_cat_b_gap_is_non_consecutive_months() {
    let last = raised_date() - Duration::days(1);
    let mut paye = monthly_payments(6, "2000", last, "Pizza Hut/ref");
    paye.extend(monthly_payments(6, "2000", last - Months::new(7), "Pizza Hut/ref"));

    let checks = service().validate(&solo_request(paye));

    assert_eq!(
        category_b(&checks).status,
        IncomeValidationStatus::NonConsecutiveMonths
    );
}

#[test]
fn test_cat_b_twelve_months_pass() {
    let paye = monthly_payments(12, "2000", raised_date() - Duration::days(1), "Pizza Hut/ref");

    let checks = service().validate(&solo_request(paye));
    let check = category_b(&checks);

    assert_eq!(check.status, IncomeValidationStatus::CatbSalariedPassed);
    assert_eq!(check.calculation_type, "Category B salaried");
    assert_eq!(check.threshold, dec("18600"));
    assert_eq!(
        check.assessment_start_date,
        raised_date() - Duration::days(366)
    );
}

// =============================================================================
// Employment check boundary scenarios
// =============================================================================

#[test]
fn test_employment_check_boundary_payment_on_start_date_passes_the_gate() {
    // A single threshold-level payment exactly 32 days back satisfies the
    // gate; the category B rules then fail on record count, proving the
    // gate itself passed.
    let paye = vec![payment("1550", raised_date() - Duration::days(32), "Pizza Hut/ref")];

    let checks = service().validate(&solo_request(paye));
    let check = category_b(&checks);

    assert_eq!(check.status, IncomeValidationStatus::NotEnoughRecords);
    assert_ne!(check.status, IncomeValidationStatus::EmploymentCheckFailed);
}

#[test]
fn test_employment_check_boundary_payment_one_day_earlier_fails() {
    let paye = vec![payment("1550", raised_date() - Duration::days(33), "Pizza Hut/ref")];

    let checks = service().validate(&solo_request(paye));
    let check = category_b(&checks);

    assert_eq!(check.status, IncomeValidationStatus::EmploymentCheckFailed);
    assert_eq!(check.calculation_type, "Employment Check");
    assert_eq!(
        check.assessment_start_date,
        raised_date() - Duration::days(32)
    );
    assert_eq!(check.threshold, dec("1550"));
}

// =============================================================================
// Cross-cutting behavior
// =============================================================================

#[test]
fn test_both_categories_always_reported_in_order() {
    let checks = service().validate(&solo_request(vec![]));

    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0].category, "A");
    assert_eq!(checks[1].category, "B");
    assert_eq!(checks[0].application_raised_date, raised_date());
    assert_eq!(checks[1].application_raised_date, raised_date());
}

#[test]
fn test_dependants_raise_thresholds_across_categories() {
    let request = IncomeValidationRequest::new(
        vec![party(NINO, PIZZA_HUT, vec![])],
        raised_date(),
        2,
    )
    .unwrap();

    let checks = service().validate(&request);

    // Category A ends at the non-salaried assessment for an empty record
    // and reports the annual figure for two dependants.
    assert_eq!(checks[0].threshold, dec("24800"));
    // The failed employment gate reports the monthly figure, 24800 / 12.
    assert_eq!(checks[1].threshold, dec("2066.67"));
}

#[test]
fn test_duplicate_records_do_not_double_count() {
    let single = payment("4650", raised_date() - Duration::days(1), "an employer ref");
    let paye = vec![single.clone(), single];

    let checks = service().validate(&solo_request(paye));

    assert_eq!(
        category_a(&checks).status,
        IncomeValidationStatus::CataNonSalariedBelowThreshold
    );
}

#[test]
fn test_category_checks_serialize_to_wire_statuses() {
    let paye = monthly_payments(12, "2000", raised_date() - Duration::days(1), "Pizza Hut/ref");
    let checks = service().validate(&solo_request(paye));

    let json = serde_json::to_value(&checks).unwrap();
    assert_eq!(json[1]["status"], "CATB_SALARIED_PASSED");
    assert_eq!(json[1]["passed"], true);
    assert_eq!(json[1]["threshold"], "18600");
}
