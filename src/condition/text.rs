//! Text form of the condition grammar: `"<left> <operator> <right>"`.
//!
//! Parsing is deliberately lenient so the editor stays usable on partial
//! input: malformed text degrades to a fixed fallback condition instead of
//! failing. Strict checking lives in [`crate::condition::validate`].

use serde_json::Value;

use super::types::{ComparisonOp, Condition, SimpleCondition};

impl SimpleCondition {
    /// The fixed fallback produced when the text form cannot be parsed.
    pub fn fallback() -> Self {
        SimpleCondition {
            operator: ComparisonOp::Gt,
            left: "score".to_string(),
            right: Value::from(0),
        }
    }

    /// Parse the compact text form. Only the first three whitespace-delimited
    /// tokens are consulted; trailing tokens are ignored. Never fails: fewer
    /// than three tokens or an unrecognized operator yield
    /// [`SimpleCondition::fallback`].
    pub fn from_text(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        let (Some(left), Some(op), Some(right)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Self::fallback();
        };
        let Ok(operator) = op.parse::<ComparisonOp>() else {
            return Self::fallback();
        };
        SimpleCondition {
            operator,
            left: left.to_string(),
            right: parse_right(right),
        }
    }
}

/// Integer first, then finite float, then any JSON literal (quoted string,
/// array, boolean), then the raw token as a string. The JSON step makes
/// rendered conditions read back losslessly.
fn parse_right(token: &str) -> Value {
    if let Ok(i) = token.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = token.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    if let Ok(value) = serde_json::from_str::<Value>(token) {
        return value;
    }
    Value::String(token.to_string())
}

impl std::fmt::Display for SimpleCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let right = serde_json::to_string(&self.right).unwrap_or_default();
        write!(f, "{} {} {}", self.left, self.operator, right)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Simple(simple) => simple.fmt(f),
            Condition::Composite(composite) => {
                // No parenthesization: nesting beyond one level flattens in
                // the text form. The structured tree is the source of truth.
                for (i, child) in composite.conditions.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", composite.combine_with)?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}
