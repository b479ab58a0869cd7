//! Rust types mirroring the editor's workflow JSON.
//!
//! These types are the serde target for node/edge snapshots produced by the
//! visual editor. Editor-only fields (canvas positions, callback handles) may
//! or may not have been stripped by the export transform; either way they are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::condition::ConditionInput;

/// A node/edge snapshot as exported by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub role: NodeRole,
    #[serde(default)]
    pub label: String,
    /// Required on `branch` nodes, meaningless elsewhere. May arrive as the
    /// legacy text shorthand; validation rejects that form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionInput>,
}

/// Classification that drives a node's connectivity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Input,
    Output,
    Branch,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// `"true"`/`"false"` on edges leaving a branch node. Routing metadata
    /// for the editor and executor; not consulted by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
}

impl Node {
    pub fn is_input(&self) -> bool {
        self.role == NodeRole::Input
    }

    pub fn is_output(&self) -> bool {
        self.role == NodeRole::Output
    }

    pub fn is_branch(&self) -> bool {
        self.role == NodeRole::Branch
    }
}
