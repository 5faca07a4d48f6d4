//! Validation request models.
//!
//! A request pairs each party with their tax-authority income record and
//! carries the application-raised date and dependants count. The party order
//! is significant: the first entry is always the primary applicant and the
//! downstream consumer relies on applicant-before-partner ordering being
//! preserved end-to-end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Applicant, CheckedIndividual, IncomeRecord};

/// One party of a validation request: an applicant together with their
/// tax-authority income record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantIncome {
    /// The applicant as identified by the caller.
    pub applicant: Applicant,
    /// The income record the tax authority returned for the applicant.
    pub income_record: IncomeRecord,
}

impl ApplicantIncome {
    /// Builds the [`CheckedIndividual`] summary for this party: the nino as
    /// supplied in the request and the distinct employer names from the
    /// party's employments, in first-seen order.
    pub fn checked_individual(&self) -> CheckedIndividual {
        let mut employers: Vec<String> = Vec::new();
        for employment in &self.income_record.employments {
            if !employers.contains(&employment.employer.name) {
                employers.push(employment.employer.name.clone());
            }
        }
        CheckedIndividual {
            nino: self.applicant.nino.clone(),
            employers,
        }
    }
}

/// A single income validation request.
///
/// Holds one (solo) or exactly two (joint: applicant, then partner) parties,
/// the application-raised date and the dependants count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeValidationRequest {
    applicant_incomes: Vec<ApplicantIncome>,
    application_raised_date: NaiveDate,
    dependants: u32,
}

impl IncomeValidationRequest {
    /// Creates a validation request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRequest`] when `applicant_incomes` is
    /// empty or holds more than two parties.
    pub fn new(
        applicant_incomes: Vec<ApplicantIncome>,
        application_raised_date: NaiveDate,
        dependants: u32,
    ) -> EngineResult<Self> {
        if applicant_incomes.is_empty() {
            return Err(EngineError::InvalidRequest {
                message: "a request must contain at least one applicant".to_string(),
            });
        }
        if applicant_incomes.len() > 2 {
            return Err(EngineError::InvalidRequest {
                message: format!(
                    "a request holds an applicant and at most one partner, got {} parties",
                    applicant_incomes.len()
                ),
            });
        }
        Ok(Self {
            applicant_incomes,
            application_raised_date,
            dependants,
        })
    }

    /// All parties, primary applicant first.
    pub fn all_income(&self) -> &[ApplicantIncome] {
        &self.applicant_incomes
    }

    /// The primary applicant's party.
    pub fn applicant_income(&self) -> &ApplicantIncome {
        &self.applicant_incomes[0]
    }

    /// The partner's party, for joint requests.
    pub fn partner_income(&self) -> Option<&ApplicantIncome> {
        self.applicant_incomes.get(1)
    }

    /// Whether this is a joint (applicant plus partner) request.
    pub fn is_joint_request(&self) -> bool {
        self.applicant_incomes.len() == 2
    }

    /// The date the application was raised; the upper bound of every
    /// assessment window.
    pub fn application_raised_date(&self) -> NaiveDate {
        self.application_raised_date
    }

    /// The number of dependants the thresholds are adjusted for.
    pub fn dependants(&self) -> u32 {
        self.dependants
    }

    /// [`CheckedIndividual`] summaries for every party, in request order.
    pub fn checked_individuals(&self) -> Vec<CheckedIndividual> {
        self.applicant_incomes
            .iter()
            .map(ApplicantIncome::checked_individual)
            .collect()
    }
}
