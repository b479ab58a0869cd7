//! Workflow graph validation.
//!
//! Checks a node/edge snapshot for structural correctness before the
//! workflow is allowed to run. All problems are reported through the
//! returned [`ValidationReport`]; this module never panics on a malformed
//! workflow. The validator is a pure function over its inputs: no mutation,
//! no state across calls.

pub mod structural;

use crate::error::ValidatorError;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{Edge, Node};

/// Outcome of validating one workflow snapshot.
#[derive(Debug)]
pub struct ValidationReport {
    pub errors: Vec<ValidatorError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Flat human-readable error strings, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// Validate the workflow graph. Every applicable check contributes its own
/// errors to the same report; only the empty-graph check short-circuits.
pub fn validate_workflow(nodes: &[Node], edges: &[Edge]) -> ValidationReport {
    if nodes.is_empty() {
        return ValidationReport {
            errors: vec![ValidatorError::validate(
                "V001",
                "Workflow must have at least one node",
                None,
            )],
        };
    }

    // Duplicate node ids and dangling edge references violate the snapshot's
    // preconditions; they surface as Parse-phase errors in the same report.
    let graph = match WorkflowGraph::build(nodes, edges) {
        Ok(graph) => graph,
        Err(errors) => return ValidationReport { errors },
    };

    ValidationReport {
        errors: structural::validate_structural(nodes, &graph),
    }
}
