//! Shared builders for integration tests.

#![allow(dead_code)]

use flowcheck::condition::{
    ComparisonOp, CompositeCondition, Condition, ConditionInput, LogicCombinator, SimpleCondition,
};
use flowcheck::parse::{Edge, Node, NodeRole};
use serde_json::Value;

pub fn node(id: &str, role: NodeRole) -> Node {
    Node {
        id: id.to_string(),
        role,
        label: id.to_string(),
        condition: None,
    }
}

pub fn branch(id: &str, condition: impl Into<ConditionInput>) -> Node {
    Node {
        id: id.to_string(),
        role: NodeRole::Branch,
        label: id.to_string(),
        condition: Some(condition.into()),
    }
}

pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
    }
}

pub fn simple(operator: ComparisonOp, left: &str, right: impl Into<Value>) -> Condition {
    Condition::Simple(SimpleCondition {
        operator,
        left: left.to_string(),
        right: right.into(),
    })
}

pub fn all_of(conditions: Vec<Condition>) -> Condition {
    Condition::Composite(CompositeCondition {
        combine_with: LogicCombinator::And,
        conditions,
    })
}
