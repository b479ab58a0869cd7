//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::condition::{Condition, ConditionInput, SimpleCondition};
use crate::error::ValidatorError;

/// Validate a workflow JSON document: parse + structural validation.
/// Returns `{isValid, errors}` where errors are human-readable strings.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let report = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> ReportDto {
    let workflow = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(errors) => return ReportDto::from_errors(errors),
    };

    let report = crate::validate::validate_workflow(&workflow.nodes, &workflow.edges);
    ReportDto {
        is_valid: report.is_valid(),
        errors: report.messages(),
    }
}

/// Parse the compact condition text form (`"score > 70"`). Lenient:
/// malformed text yields the fixed fallback condition, never an error.
#[wasm_bindgen]
pub fn parse_condition_text(text: &str) -> JsValue {
    let condition = SimpleCondition::from_text(text);
    serde_wasm_bindgen::to_value(&condition).unwrap_or(JsValue::NULL)
}

/// Render a structured condition JSON value to its text form.
/// Returns null if the input is not a valid condition shape.
#[wasm_bindgen]
pub fn condition_to_text(condition_json: &str) -> Option<String> {
    let condition = serde_json::from_str::<Condition>(condition_json).ok()?;
    Some(condition.to_string())
}

/// Strictly validate a condition JSON value (structured form or the legacy
/// string shorthand). Returns `{valid, error}`.
#[wasm_bindgen]
pub fn validate_condition(condition_json: &str) -> JsValue {
    let result = validate_condition_inner(condition_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_condition_inner(json: &str) -> ConditionCheckDto {
    let input = match serde_json::from_str::<ConditionInput>(json) {
        Ok(input) => input,
        Err(e) => {
            return ConditionCheckDto {
                valid: false,
                error: Some(format!("Failed to parse condition JSON: {}", e)),
            };
        }
    };

    match crate::condition::validate(&input) {
        Ok(()) => ConditionCheckDto {
            valid: true,
            error: None,
        },
        Err(e) => ConditionCheckDto {
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportDto {
    is_valid: bool,
    errors: Vec<String>,
}

impl ReportDto {
    fn from_errors(errors: Vec<ValidatorError>) -> Self {
        ReportDto {
            is_valid: false,
            errors: errors.into_iter().map(|e| e.message).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ConditionCheckDto {
    valid: bool,
    error: Option<String>,
}
