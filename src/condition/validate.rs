//! Strict shape validation for condition trees.
//!
//! Counterpart to the lenient text parser: the validator refuses everything
//! the parser papered over, including the legacy string shorthand.

use thiserror::Error;

use super::types::{Condition, ConditionInput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("condition must be structured, not a string")]
    StringForm,
    #[error("composite condition must have at least one sub-condition")]
    EmptyComposite,
    #[error("condition left-hand field must not be empty")]
    EmptyField,
    #[error("condition right-hand value must be present")]
    MissingValue,
    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),
}

/// Validate a condition as supplied on a node.
pub fn validate(input: &ConditionInput) -> Result<(), ConditionError> {
    match input {
        ConditionInput::Text(_) => Err(ConditionError::StringForm),
        ConditionInput::Structured(condition) => validate_condition(condition),
    }
}

/// Validate a structured condition tree. Fail-fast: walks depth-first,
/// left-to-right, and returns the first violation found.
pub fn validate_condition(condition: &Condition) -> Result<(), ConditionError> {
    match condition {
        Condition::Simple(simple) => {
            if simple.left.trim().is_empty() {
                return Err(ConditionError::EmptyField);
            }
            if simple.right.is_null() {
                return Err(ConditionError::MissingValue);
            }
            Ok(())
        }
        Condition::Composite(composite) => {
            if composite.conditions.is_empty() {
                return Err(ConditionError::EmptyComposite);
            }
            for child in &composite.conditions {
                validate_condition(child)?;
            }
            Ok(())
        }
    }
}
