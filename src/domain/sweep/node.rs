//! Configuration tree model: scalars, sequences, and ordered mappings.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

use crate::domain::AppError;

/// A leaf value in the parameter tree.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    fn rank(&self) -> u8 {
        match self {
            Scalar::Bool(_) => 0,
            Scalar::Int(_) | Scalar::Float(_) => 1,
            Scalar::Str(_) => 2,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            // Keep integral floats distinguishable from integers (`1.0`, not `1`).
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// Total order used for run keys: booleans, then numbers compared
/// numerically, then strings. An integer sorts before an equal float.
impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
            (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
            (Scalar::Float(a), Scalar::Float(b)) => a.total_cmp(b),
            (Scalar::Int(a), Scalar::Float(b)) => {
                (*a as f64).total_cmp(b).then(Ordering::Less)
            }
            (Scalar::Float(a), Scalar::Int(b)) => {
                a.total_cmp(&(*b as f64)).then(Ordering::Greater)
            }
            (Scalar::Str(a), Scalar::Str(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

/// A node of the parameter tree.
///
/// Sequence members are alternatives for the same key-path; mapping entries
/// are independent axes. Mapping entries keep their configuration order.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    Scalar(Scalar),
    Sequence(Vec<ConfigNode>),
    Mapping(Vec<(String, ConfigNode)>),
}

impl ConfigNode {
    /// Convert a YAML value rooted at `path` into a tree node.
    pub fn from_yaml(value: &Value, path: &str) -> Result<Self, AppError> {
        match value {
            Value::Bool(b) => Ok(ConfigNode::Scalar(Scalar::Bool(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ConfigNode::Scalar(Scalar::Int(i)))
                } else if n.is_f64() {
                    let x = n.as_f64().unwrap_or(f64::NAN);
                    Ok(ConfigNode::Scalar(Scalar::Float(x)))
                } else {
                    let reason = format!("integer {} is out of range", n);
                    Err(AppError::shape(display_path(path), reason))
                }
            }
            Value::String(s) => Ok(ConfigNode::Scalar(Scalar::Str(s.clone()))),
            Value::Sequence(items) => items
                .iter()
                .map(|item| ConfigNode::from_yaml(item, path))
                .collect::<Result<Vec<_>, _>>()
                .map(ConfigNode::Sequence),
            Value::Mapping(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, child) in map {
                    let key = mapping_key(key, path)?;
                    let child_path = join_key_path(path, &key);
                    entries.push((key, ConfigNode::from_yaml(child, &child_path)?));
                }
                Ok(ConfigNode::Mapping(entries))
            }
            Value::Null => Err(AppError::shape(display_path(path), "value is null")),
            Value::Tagged(tagged) => Err(AppError::shape(
                display_path(path),
                format!("tagged value '{}' is not supported", tagged.tag),
            )),
        }
    }
}

fn mapping_key(key: &Value, path: &str) -> Result<String, AppError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        other => Err(AppError::shape(
            display_path(path),
            format!("mapping key {:?} is not a string", other),
        )),
    }
}

/// Join a key onto an accumulated key-path with `.`.
pub fn join_key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() { key.to_string() } else { format!("{}.{}", prefix, key) }
}

/// Key-path as shown in error messages.
pub(crate) fn display_path(path: &str) -> &str {
    if path.is_empty() { "<top level>" } else { path }
}
