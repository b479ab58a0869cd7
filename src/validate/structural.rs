//! Graph-level structural validation rules (V002–V006).

use petgraph::algo::has_path_connecting;

use crate::condition;
use crate::error::ValidatorError;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::Node;

/// Run all structural rules. Returns all errors found, in check order.
pub fn validate_structural(nodes: &[Node], graph: &WorkflowGraph) -> Vec<ValidatorError> {
    let mut errors = Vec::new();

    v002_has_input_node(nodes, &mut errors);
    v003_has_output_node(nodes, &mut errors);
    v004_role_connectivity(nodes, graph, &mut errors);
    v005_outputs_reachable(nodes, graph, &mut errors);
    v006_branch_conditions(nodes, &mut errors);

    errors
}

fn v002_has_input_node(nodes: &[Node], errors: &mut Vec<ValidatorError>) {
    if !nodes.iter().any(|n| n.is_input()) {
        errors.push(ValidatorError::validate(
            "V002",
            "Workflow must have at least one input node",
            None,
        ));
    }
}

fn v003_has_output_node(nodes: &[Node], errors: &mut Vec<ValidatorError>) {
    if !nodes.iter().any(|n| n.is_output()) {
        errors.push(ValidatorError::validate(
            "V003",
            "Workflow must have at least one output node",
            None,
        ));
    }
}

/// Connectivity rules by role, evaluated for every node in iteration order.
/// Roles are mutually exclusive: a branch node used as a sink still trips the
/// no-outgoing rule, because only an `output` role exempts a node from it.
fn v004_role_connectivity(
    nodes: &[Node],
    graph: &WorkflowGraph,
    errors: &mut Vec<ValidatorError>,
) {
    for node in nodes {
        let incoming = graph.incoming_count(&node.id);
        let outgoing = graph.outgoing_count(&node.id);

        if node.is_input() && incoming > 0 {
            errors.push(ValidatorError::validate(
                "V004",
                format!("Input node '{}' must not have incoming connections", node.id),
                Some(node.id.clone()),
            ));
        }
        if node.is_output() && outgoing > 0 {
            errors.push(ValidatorError::validate(
                "V004",
                format!("Output node '{}' must not have outgoing connections", node.id),
                Some(node.id.clone()),
            ));
        }
        if !node.is_input() && incoming == 0 {
            errors.push(ValidatorError::validate(
                "V004",
                format!("Node '{}' has no incoming connections", node.id),
                Some(node.id.clone()),
            ));
        }
        if !node.is_output() && outgoing == 0 {
            errors.push(ValidatorError::validate(
                "V004",
                format!("Node '{}' has no outgoing connections", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

/// Every output node must be reachable from at least one input node by
/// forward directed traversal. Each (input, output) pair is checked with
/// fresh visited state, so cycles cannot loop the walk.
fn v005_outputs_reachable(
    nodes: &[Node],
    graph: &WorkflowGraph,
    errors: &mut Vec<ValidatorError>,
) {
    let input_indices: Vec<_> = nodes
        .iter()
        .filter(|n| n.is_input())
        .filter_map(|n| graph.node_indices.get(&n.id).copied())
        .collect();

    for node in nodes.iter().filter(|n| n.is_output()) {
        let Some(&target) = graph.node_indices.get(&node.id) else {
            continue;
        };
        let reachable = input_indices
            .iter()
            .any(|&source| has_path_connecting(&graph.graph, source, target, None));
        if !reachable {
            errors.push(ValidatorError::validate(
                "V005",
                format!("Output node '{}' is not reachable from any input node", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

/// Every branch node must carry a condition that passes strict validation.
fn v006_branch_conditions(nodes: &[Node], errors: &mut Vec<ValidatorError>) {
    for node in nodes.iter().filter(|n| n.is_branch()) {
        match &node.condition {
            None => {
                errors.push(ValidatorError::validate(
                    "V006",
                    format!("Branch node '{}' is missing a condition", node.id),
                    Some(node.id.clone()),
                ));
            }
            Some(input) => {
                if let Err(e) = condition::validate(input) {
                    errors.push(ValidatorError::validate(
                        "V006",
                        format!("Branch node '{}' has an invalid condition: {}", node.id, e),
                        Some(node.id.clone()),
                    ));
                }
            }
        }
    }
}
