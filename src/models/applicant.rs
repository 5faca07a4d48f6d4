//! Applicant identity models.
//!
//! Two views of the same person exist in a validation request: the identity
//! supplied by the caller ([`Applicant`]) and the identity confirmed by the
//! tax authority ([`HmrcIndividual`]). The two may legitimately carry
//! different names for the same national insurance number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person as identified by the caller of the validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// The applicant's forename.
    pub forename: String,
    /// The applicant's surname.
    pub surname: String,
    /// The applicant's date of birth.
    pub date_of_birth: NaiveDate,
    /// The applicant's national insurance number.
    pub nino: String,
}

/// A person as confirmed by the tax authority.
///
/// May carry a different name than the [`Applicant`] for the same nino; the
/// engine never bases a decision on this identity, it is echoed through for
/// the caller's benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmrcIndividual {
    /// The forename held by the tax authority.
    pub first_name: String,
    /// The surname held by the tax authority.
    pub last_name: String,
    /// The national insurance number the record was matched on.
    pub nino: String,
    /// The date of birth held by the tax authority.
    pub date_of_birth: NaiveDate,
}
