//! Core data models for the Income Validation Engine.
//!
//! This module contains all the domain types used throughout the engine:
//! applicant identities, tax-authority pay records, validation requests and
//! validation results. All types are immutable once constructed and are
//! created per-request from upstream collaborator data.

mod applicant;
mod income;
mod request;
mod result;

pub use applicant::{Applicant, HmrcIndividual};
pub use income::{AnnualSelfAssessmentTaxReturn, Employer, Employment, Income, IncomeRecord};
pub use request::{ApplicantIncome, IncomeValidationRequest};
pub use result::{
    CategoryCheck, CheckedIndividual, IncomeValidationResult, IncomeValidationStatus,
};
