//! petgraph-based directed graph wrapper for the visual workflow.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Edge, Node};
use crate::error::ValidatorError;

#[derive(Debug)]
pub struct WorkflowGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Result<Self, Vec<ValidatorError>> {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut errors = Vec::new();

        // Add all nodes
        for node in nodes {
            let id = node.id.clone();
            let idx = graph.add_node(id.clone());
            if node_indices.insert(id, idx).is_some() {
                errors.push(ValidatorError::parse(
                    "P002",
                    format!("Duplicate node id '{}'", node.id),
                ));
            }
        }

        // Add all edges
        for edge in edges {
            let source_idx = node_indices.get(&edge.source);
            let target_idx = node_indices.get(&edge.target);

            match (source_idx, target_idx) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(s, t, ());
                }
                (None, _) => {
                    errors.push(ValidatorError::parse(
                        "P003",
                        format!(
                            "Edge '{}' references unknown source node '{}'",
                            edge.id, edge.source
                        ),
                    ));
                }
                (_, None) => {
                    errors.push(ValidatorError::parse(
                        "P003",
                        format!(
                            "Edge '{}' references unknown target node '{}'",
                            edge.id, edge.target
                        ),
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(WorkflowGraph { graph, node_indices })
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.neighbor_count(node_id, petgraph::Direction::Incoming)
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.neighbor_count(node_id, petgraph::Direction::Outgoing)
    }

    fn neighbor_count(&self, node_id: &str, dir: petgraph::Direction) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph.neighbors_directed(idx, dir).count()
    }
}
