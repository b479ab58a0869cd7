//! Unified validator error type used across all phases.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidatorError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.phase, self.code, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.phase, self.code, self.message),
        }
    }
}

impl std::error::Error for ValidatorError {}

impl ValidatorError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        ValidatorError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn validate(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        ValidatorError {
            code: code.into(),
            phase: Phase::Validate,
            message: message.into(),
            node_id,
        }
    }
}
