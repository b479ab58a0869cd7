//! Integration tests for the parse phase: JSON deserialization and graph
//! construction.

mod helpers;

use flowcheck::condition::{ComparisonOp, Condition, ConditionInput, LogicCombinator};
use flowcheck::parse::{NodeRole, Workflow, WorkflowGraph, parse};
use helpers::{edge, node};

const EXAMPLE_WORKFLOW: &str = include_str!("fixtures/example_workflow.json");

#[test]
fn parses_example_workflow() {
    let workflow = parse(EXAMPLE_WORKFLOW).unwrap();

    assert_eq!(workflow.nodes.len(), 5);
    assert_eq!(workflow.edges.len(), 4);

    assert_eq!(workflow.nodes[0].id, "intake");
    assert_eq!(workflow.nodes[0].role, NodeRole::Input);
    assert_eq!(workflow.nodes[0].label, "Lead Intake");
    assert_eq!(workflow.nodes[1].role, NodeRole::Processing);
    assert_eq!(workflow.nodes[3].role, NodeRole::Output);

    let gate = &workflow.nodes[2];
    assert_eq!(gate.role, NodeRole::Branch);
    let Some(ConditionInput::Structured(Condition::Composite(composite))) = &gate.condition else {
        panic!("score-gate should carry a structured composite condition");
    };
    assert_eq!(composite.combine_with, LogicCombinator::And);
    assert_eq!(composite.conditions.len(), 2);
    let Condition::Simple(first) = &composite.conditions[0] else {
        panic!("first sub-condition should be simple");
    };
    assert_eq!(first.operator, ComparisonOp::Gt);
    assert_eq!(first.left, "score");
    assert_eq!(first.right, serde_json::json!(70));

    assert_eq!(workflow.edges[2].source, "score-gate");
    assert_eq!(workflow.edges[2].source_handle.as_deref(), Some("true"));
}

#[test]
fn workflow_round_trips_through_json() {
    let workflow = parse(EXAMPLE_WORKFLOW).unwrap();
    let json = serde_json::to_string(&workflow).unwrap();
    let reparsed: Workflow = serde_json::from_str(&json).unwrap();
    assert_eq!(workflow, reparsed);
}

#[test]
fn invalid_json_is_a_parse_error() {
    let errors = parse("{ not json").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "P001");
    assert!(errors[0].message.starts_with("Failed to parse workflow JSON"));
}

#[test]
fn editor_only_fields_are_ignored() {
    let json = r#"{
        "nodes": [
            { "id": "a", "role": "input", "label": "A", "position": { "x": 10, "y": 20 } },
            { "id": "b", "role": "output", "label": "B", "style": { "color": "red" } }
        ],
        "edges": [
            { "id": "e1", "source": "a", "target": "b", "animated": true }
        ],
        "viewport": { "zoom": 1.5 }
    }"#;

    let workflow = parse(json).unwrap();
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.edges.len(), 1);
}

#[test]
fn missing_nodes_and_edges_default_to_empty() {
    let workflow = parse("{}").unwrap();
    assert!(workflow.nodes.is_empty());
    assert!(workflow.edges.is_empty());
}

#[test]
fn string_condition_parses_as_text_shorthand() {
    let json = r#"{
        "nodes": [
            { "id": "gate", "role": "branch", "label": "Gate", "condition": "score > 70" }
        ],
        "edges": []
    }"#;

    let workflow = parse(json).unwrap();
    assert_eq!(
        workflow.nodes[0].condition,
        Some(ConditionInput::Text("score > 70".to_string()))
    );
}

#[test]
fn graph_counts_incoming_and_outgoing_edges() {
    let workflow = parse(EXAMPLE_WORKFLOW).unwrap();
    let graph = WorkflowGraph::build(&workflow.nodes, &workflow.edges).unwrap();

    assert_eq!(graph.incoming_count("intake"), 0);
    assert_eq!(graph.outgoing_count("intake"), 1);
    assert_eq!(graph.incoming_count("score-gate"), 1);
    assert_eq!(graph.outgoing_count("score-gate"), 2);
    assert_eq!(graph.outgoing_count("qualified"), 0);
}

#[test]
fn dangling_edge_is_a_parse_error() {
    let nodes = vec![node("a", NodeRole::Input), node("b", NodeRole::Output)];
    let edges = vec![edge("e1", "a", "b"), edge("e2", "a", "ghost")];

    let errors = WorkflowGraph::build(&nodes, &edges).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "P003");
    assert_eq!(
        errors[0].message,
        "Edge 'e2' references unknown target node 'ghost'"
    );
}

#[test]
fn duplicate_node_id_is_a_parse_error() {
    let nodes = vec![
        node("a", NodeRole::Input),
        node("a", NodeRole::Processing),
        node("b", NodeRole::Output),
    ];

    let errors = WorkflowGraph::build(&nodes, &[]).unwrap_err();
    assert_eq!(errors[0].code, "P002");
    assert_eq!(errors[0].message, "Duplicate node id 'a'");
}
