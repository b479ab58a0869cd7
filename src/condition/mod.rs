//! Recursive boolean-condition model for branch nodes.
//!
//! A condition is either a single comparison (`SimpleCondition`) or an
//! AND/OR composite of sub-conditions, nested to arbitrary depth. This module
//! converts between the compact text form and the structured tree and checks
//! tree shape; it does not evaluate conditions against data.

mod text;
pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{ConditionError, validate, validate_condition};
