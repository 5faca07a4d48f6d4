//! Performance benchmarks for the Income Validation Engine.
//!
//! The engine runs synchronously per request, so the interesting figures are
//! the single-request latencies:
//! - Solo applicant, twelve months of records
//! - Joint application, twelve months of records each
//! - Weekly-paid applicant, 26 weeks of records
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;

use income_engine::config::ValidationConfig;
use income_engine::models::{
    Applicant, ApplicantIncome, Employer, Employment, Income, IncomeRecord,
    IncomeValidationRequest,
};
use income_engine::validation::IncomeValidationService;

fn raised_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 8, 24).unwrap()
}

fn party(nino: &str, paye: Vec<Income>) -> ApplicantIncome {
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
                    name: "Pizza Hut".to_string(),
                    paye_reference: "Pizza Hut/ref".to_string(),
                },
            }],
            individual: None,
        },
    }
}

fn monthly_paye(count: u32) -> Vec<Income> {
    (0..count)
        .map(|i| Income {
            amount: Decimal::from(2_000),
            payment_date: raised_date() - Duration::days(1) - Months::new(i),
            week_pay_number: None,
            month_pay_number: Some(12 - i as i32),
            employer_paye_reference: "Pizza Hut/ref".to_string(),
        })
        .collect()
}

fn weekly_paye(count: u32) -> Vec<Income> {
    (0..count)
        .map(|i| Income {
            amount: Decimal::from(400),
            payment_date: raised_date() - Duration::days(3) - Duration::weeks(i as i64),
            week_pay_number: Some(26 - i as i32),
            month_pay_number: None,
            employer_paye_reference: "Pizza Hut/ref".to_string(),
        })
        .collect()
}

fn bench_solo_monthly(c: &mut Criterion) {
    let service = IncomeValidationService::new(&ValidationConfig::default());
    let request =
        IncomeValidationRequest::new(vec![party("AA123456A", monthly_paye(12))], raised_date(), 0)
            .unwrap();

    c.bench_function("solo_monthly_12_months", |b| {
        b.iter(|| black_box(service.validate(black_box(&request))))
    });
}

fn bench_joint_monthly(c: &mut Criterion) {
    let service = IncomeValidationService::new(&ValidationConfig::default());
    let request = IncomeValidationRequest::new(
        vec![
            party("AA123456A", monthly_paye(12)),
            party("BB123456B", monthly_paye(12)),
        ],
        raised_date(),
        2,
    )
    .unwrap();

    c.bench_function("joint_monthly_12_months", |b| {
        b.iter(|| black_box(service.validate(black_box(&request))))
    });
}

fn bench_solo_weekly(c: &mut Criterion) {
    let service = IncomeValidationService::new(&ValidationConfig::default());
    let request =
        IncomeValidationRequest::new(vec![party("AA123456A", weekly_paye(26))], raised_date(), 0)
            .unwrap();

    c.bench_function("solo_weekly_26_weeks", |b| {
        b.iter(|| black_box(service.validate(black_box(&request))))
    });
}

criterion_group!(
    benches,
    bench_solo_monthly,
    bench_joint_monthly,
    bench_solo_weekly
);
criterion_main!(benches);
