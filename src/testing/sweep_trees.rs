//! Proptest strategies for nested parameter trees.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

use crate::domain::{ConfigNode, Scalar};

/// Key layout of a subtree. Every alternative generated for a shape has
/// exactly the same key-paths.
#[derive(Debug, Clone)]
enum Shape {
    Leaf,
    Mapping(BTreeMap<String, Shape>),
}

fn key() -> impl Strategy<Value = String> {
    "k[a-z0-9]{0,3}"
}

fn scalar() -> BoxedStrategy<Scalar> {
    prop_oneof![
        any::<i64>().prop_map(Scalar::Int),
        any::<bool>().prop_map(Scalar::Bool),
        "s_[a-z]{0,4}".prop_map(Scalar::Str),
        // Eighths survive a YAML dump exactly.
        (-1000i32..1000).prop_map(|i| Scalar::Float(f64::from(i) / 8.0)),
    ]
    .boxed()
}

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(3, 16, 3, |inner| {
        prop::collection::btree_map(key(), inner, 0..3).prop_map(Shape::Mapping)
    })
}

fn node_for(shape: &Shape) -> BoxedStrategy<ConfigNode> {
    match shape {
        Shape::Leaf => prop_oneof![
            scalar().prop_map(ConfigNode::Scalar),
            prop::collection::vec(scalar().prop_map(ConfigNode::Scalar), 1..4)
                .prop_map(ConfigNode::Sequence),
        ]
        .boxed(),
        Shape::Mapping(fields) => {
            let mapping = mapping_for(fields);
            prop_oneof![
                mapping.clone(),
                prop::collection::vec(mapping, 1..3).prop_map(ConfigNode::Sequence),
            ]
            .boxed()
        }
    }
}

fn mapping_for(fields: &BTreeMap<String, Shape>) -> BoxedStrategy<ConfigNode> {
    let entries: Vec<BoxedStrategy<(String, ConfigNode)>> = fields
        .iter()
        .map(|(key, shape)| {
            let key = key.clone();
            node_for(shape).prop_map(move |node| (key.clone(), node)).boxed()
        })
        .collect();
    entries.prop_map(ConfigNode::Mapping).boxed()
}

/// Parameter trees with nested mappings, scalar sequences, and sequences of
/// same-shape mapping alternatives. Sequences are never empty.
pub fn param_tree() -> impl Strategy<Value = ConfigNode> {
    prop::collection::btree_map(key(), shape(), 0..4)
        .prop_flat_map(|fields| mapping_for(&fields))
}

/// Number of flat mappings a tree expands to.
pub fn combinations(node: &ConfigNode) -> usize {
    match node {
        ConfigNode::Scalar(_) => 1,
        ConfigNode::Sequence(items) => items.iter().map(combinations).sum(),
        ConfigNode::Mapping(entries) => {
            entries.iter().map(|(_, child)| combinations(child)).product()
        }
    }
}

/// Render a tree as the YAML value a config file would hold.
pub fn to_yaml_value(node: &ConfigNode) -> Value {
    match node {
        ConfigNode::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        ConfigNode::Scalar(Scalar::Int(i)) => Value::Number((*i).into()),
        ConfigNode::Scalar(Scalar::Float(x)) => Value::Number((*x).into()),
        ConfigNode::Scalar(Scalar::Str(s)) => Value::String(s.clone()),
        ConfigNode::Sequence(items) => Value::Sequence(items.iter().map(to_yaml_value).collect()),
        ConfigNode::Mapping(entries) => Value::Mapping(
            entries
                .iter()
                .map(|(key, child)| (Value::String(key.clone()), to_yaml_value(child)))
                .collect::<Mapping>(),
        ),
    }
}
