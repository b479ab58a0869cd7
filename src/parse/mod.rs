//! Parse phase: editor JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use crate::error::ValidatorError;

/// Deserialize a workflow JSON document into a `Workflow` struct.
pub fn parse(json: &str) -> Result<Workflow, Vec<ValidatorError>> {
    serde_json::from_str::<Workflow>(json).map_err(|e| {
        vec![ValidatorError::parse(
            "P001",
            format!("Failed to parse workflow JSON: {}", e),
        )]
    })
}
