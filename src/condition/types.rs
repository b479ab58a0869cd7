//! Condition grammar types.
//!
//! The editor builds and edits these trees; the validator only checks shape.
//! The discriminant is explicit (`kind`) so the simple and composite shapes
//! can never be confused, even if their field sets were to overlap.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::validate::ConditionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Condition {
    Simple(SimpleCondition),
    Composite(CompositeCondition),
}

/// A single comparison between a field reference and a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleCondition {
    pub operator: ComparisonOp,
    pub left: String,
    /// Any scalar or array. `Value::Null` means "absent" and fails validation;
    /// `0`, `false`, and `""` are present and accepted.
    pub right: Value,
}

/// An AND/OR combination of sub-conditions, nested arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeCondition {
    pub combine_with: LogicCombinator,
    pub conditions: Vec<Condition>,
}

/// A condition as it arrives on a node: structured, or the legacy text
/// shorthand (`"score > 70"`). The parser accepts the shorthand; the
/// validator rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionInput {
    Structured(Condition),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "contains")]
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicCombinator {
    And,
    Or,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::In => "in",
            ComparisonOp::Contains => "contains",
        }
    }
}

impl std::fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComparisonOp {
    type Err = ConditionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "==" => Ok(ComparisonOp::Eq),
            "!=" => Ok(ComparisonOp::Ne),
            ">" => Ok(ComparisonOp::Gt),
            ">=" => Ok(ComparisonOp::Gte),
            "<" => Ok(ComparisonOp::Lt),
            "<=" => Ok(ComparisonOp::Lte),
            "in" => Ok(ComparisonOp::In),
            "contains" => Ok(ComparisonOp::Contains),
            _ => Err(ConditionError::UnknownOperator(token.to_string())),
        }
    }
}

impl std::fmt::Display for LogicCombinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicCombinator::And => f.write_str("AND"),
            LogicCombinator::Or => f.write_str("OR"),
        }
    }
}

impl From<SimpleCondition> for Condition {
    fn from(simple: SimpleCondition) -> Self {
        Condition::Simple(simple)
    }
}

impl From<CompositeCondition> for Condition {
    fn from(composite: CompositeCondition) -> Self {
        Condition::Composite(composite)
    }
}

impl From<Condition> for ConditionInput {
    fn from(condition: Condition) -> Self {
        ConditionInput::Structured(condition)
    }
}
