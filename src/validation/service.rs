//! The income validation service.
//!
//! Runs the fixed, ordered set of category validators for a request and
//! projects each result into the caller-facing [`CategoryCheck`]. Exactly two
//! top-level categories run per request, [A, B], whichever sub-variant of A
//! fires internally. This layer adds no error handling of its own: every
//! sub-validator outcome is a status, so the service cannot fail.

use tracing::info;

use crate::config::ValidationConfig;
use crate::models::{CategoryCheck, IncomeValidationRequest, IncomeValidationResult};

use super::cat_b_salaried::CatBSalariedValidator;
use super::category_a::CategoryAValidator;

/// The closed set of top-level category validators.
///
/// Each variant is a pure function from request to result; the service holds
/// an ordered list of them and folds the request over it.
#[derive(Debug, Clone)]
pub enum CategoryValidator {
    /// Category A: recent short-window assessment, sub-variant dispatched on
    /// pay frequency.
    CategoryA(CategoryAValidator),
    /// Category B: sustained twelve-month salaried assessment.
    CategoryB(CatBSalariedValidator),
}

impl CategoryValidator {
    /// Runs the validator.
    pub fn validate(&self, request: &IncomeValidationRequest) -> IncomeValidationResult {
        match self {
            CategoryValidator::CategoryA(validator) => validator.validate(request),
            CategoryValidator::CategoryB(validator) => validator.validate(request),
        }
    }
}

/// The sole entry point consumed by the API layer.
///
/// # Example
///
/// ```
/// use income_engine::config::ValidationConfig;
/// use income_engine::validation::IncomeValidationService;
///
/// let service = IncomeValidationService::new(&ValidationConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct IncomeValidationService {
    validators: Vec<CategoryValidator>,
}

impl IncomeValidationService {
    /// Creates the service with the fixed [A, B] validator composition.
    pub fn new(config: &ValidationConfig) -> Self {
        IncomeValidationService {
            validators: vec![
                CategoryValidator::CategoryA(CategoryAValidator::new(config)),
                CategoryValidator::CategoryB(CatBSalariedValidator::new(config)),
            ],
        }
    }

    /// Runs every category validator, in order, and returns one
    /// [`CategoryCheck`] per category.
    pub fn validate(&self, request: &IncomeValidationRequest) -> Vec<CategoryCheck> {
        self.validators
            .iter()
            .map(|validator| {
                let result = validator.validate(request);
                info!(
                    category = result.category,
                    calculation_type = result.calculation_type,
                    status = ?result.status,
                    "category check complete"
                );
                CategoryCheck::from_result(result)
            })
            .collect()
    }
}
