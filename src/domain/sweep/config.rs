//! Sweep configuration document (`config.yaml`).

use std::path::PathBuf;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

use super::node::ConfigNode;

/// Top-level keys that carry metadata instead of parameter axes.
pub const RESERVED_KEYS: [&str; 3] = ["prologue", "epilogue", "root"];

/// A loaded sweep configuration.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    document: Value,
    prologue: String,
    epilogue: String,
    root: Option<PathBuf>,
    params: ConfigNode,
}

impl SweepConfig {
    /// Shell text placed before the runs of every script.
    pub fn prologue(&self) -> &str {
        &self.prologue
    }

    /// Shell text placed after the runs of every script.
    pub fn epilogue(&self) -> &str {
        &self.epilogue
    }

    /// Root directory requested by the config, if any.
    pub fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }

    /// The parameter tree, reserved keys excluded.
    pub fn params(&self) -> &ConfigNode {
        &self.params
    }

    /// The full configuration as loaded.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Serialize the full configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.document).map_err(|e| AppError::Io(std::io::Error::other(e)))
    }
}

/// Parse and validate sweep configuration content.
///
/// `source` names the content in error messages (usually the file path).
pub fn parse_sweep_config(source: &str, content: &str) -> Result<SweepConfig, AppError> {
    let document: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::ConfigLoad { path: source.to_string(), details: e.to_string() })?;

    let Value::Mapping(top) = &document else {
        return Err(AppError::shape("<top level>", "config must be a mapping"));
    };

    let prologue = reserved_string(top, "prologue")?.unwrap_or_default();
    let epilogue = reserved_string(top, "epilogue")?.unwrap_or_default();
    let root = reserved_string(top, "root")?.map(PathBuf::from);

    let mut axes = Mapping::new();
    for (key, value) in top {
        if key.as_str().is_some_and(|k| RESERVED_KEYS.contains(&k)) {
            continue;
        }
        axes.insert(key.clone(), value.clone());
    }
    let params = ConfigNode::from_yaml(&Value::Mapping(axes), "")?;

    Ok(SweepConfig { document, prologue, epilogue, root, params })
}

fn reserved_string(top: &Mapping, key: &str) -> Result<Option<String>, AppError> {
    match top.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::shape(key, "must be a string")),
    }
}
