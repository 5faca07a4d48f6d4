//! Income Validation Engine
//!
//! This crate decides whether a person (optionally together with a partner)
//! meets a minimum-income requirement for an immigration application, based on
//! historical pay records obtained from the tax authority. It implements the
//! Category A and Category B eligibility rule-sets, the dependant-adjusted
//! threshold calculator, the pay-frequency classifier and the
//! employment-continuity check.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
