//! Configuration for the Income Validation Engine.
//!
//! The threshold schedule and assessment-window lengths are named
//! configuration values passed into each validator at construction, never
//! hidden globals, so tests can substitute alternate schedules without
//! touching shared state.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AssessmentWindows, ThresholdSchedule, ValidationConfig};
