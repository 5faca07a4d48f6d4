//! Pay record models supplied by the tax authority.
//!
//! An [`IncomeRecord`] is produced per applicant by the external tax-authority
//! client and carries the PAYE payment history, any self-assessment returns
//! and the known employments. The engine treats all of these as immutable
//! input data.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::HmrcIndividual;

/// A single employer-reported PAYE payment.
///
/// Equality is by full field match, which is what the duplicate-removal
/// primitive relies on: two records are duplicates only when every field is
/// identical. Amounts may be negative (adjustments).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Income {
    /// The payment amount. May be negative for adjustments.
    pub amount: Decimal,
    /// The date the payment was made.
    pub payment_date: NaiveDate,
    /// The tax week number the payment was reported against, if weekly paid.
    pub week_pay_number: Option<i32>,
    /// The tax month number the payment was reported against, if monthly paid.
    pub month_pay_number: Option<i32>,
    /// The employer's PAYE scheme reference.
    pub employer_paye_reference: String,
}

impl Income {
    /// Returns the (year, month) of the payment date, the grouping key for
    /// monthly bucketing.
    pub fn year_and_month(&self) -> (i32, u32) {
        (self.payment_date.year(), self.payment_date.month())
    }

    /// Returns the employer PAYE reference normalized for comparison.
    ///
    /// References compare trimmed and case-insensitively; upstream systems are
    /// not consistent about either.
    pub fn normalized_employer_reference(&self) -> String {
        self.employer_paye_reference.trim().to_lowercase()
    }
}

/// An employer as reported by the tax authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    /// The employer's registered name.
    pub name: String,
    /// The employer's PAYE scheme reference.
    pub paye_reference: String,
}

/// One employment relationship; a person may have many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    /// The employer for this employment.
    pub employer: Employer,
}

/// A declared self-assessment tax return for one tax year.
///
/// Not PAYE income: excluded from all current validators' threshold math, so
/// a self-assessment-only applicant is treated as having insufficient records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSelfAssessmentTaxReturn {
    /// The tax year the return covers, e.g. "2017/18".
    pub tax_year: String,
    /// The declared annual amount.
    pub self_assessment: Decimal,
}

/// The complete income history the tax authority holds for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// PAYE payments, unordered as received.
    pub paye: Vec<Income>,
    /// Self-assessment returns, unordered as received.
    pub self_assessment: Vec<AnnualSelfAssessmentTaxReturn>,
    /// Known employments.
    pub employments: Vec<Employment>,
    /// The identity the tax authority matched, when one was returned.
    pub individual: Option<HmrcIndividual>,
}
