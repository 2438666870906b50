//! Cartesian-product expansion of the parameter tree.
//!
//! - A scalar at key-path `p` yields `[{p: value}]`.
//! - A sequence yields the concatenation of its members' expansions, all at
//!   the same key-path: members are alternatives, not axes.
//! - A mapping expands each entry at `p.key` and takes the cartesian product
//!   of the results, earlier keys varying slowest.
//!
//! An alternative may expand to nothing as long as its sequence still
//! yields something; a whole axis with no values is an error.

use crate::domain::AppError;

use super::node::{ConfigNode, display_path, join_key_path};
use super::params::ParamSet;

/// Expand a parameter tree into flat parameter mappings.
///
/// A tree with no axes yields a single empty mapping. A sequence whose
/// alternatives together yield nothing is rejected with
/// [`AppError::EmptyExpansion`] naming its key-path.
pub fn expand(tree: &ConfigNode) -> Result<Vec<ParamSet>, AppError> {
    expand_at(tree, "", false)
}

fn expand_at(
    node: &ConfigNode,
    path: &str,
    in_alternative: bool,
) -> Result<Vec<ParamSet>, AppError> {
    match node {
        ConfigNode::Scalar(value) => {
            let mut set = ParamSet::new();
            set.insert(path.to_string(), value.clone()).map_err(duplicate_path)?;
            Ok(vec![set])
        }
        ConfigNode::Sequence(items) => {
            let mut out = Vec::new();
            for item in items {
                out.extend(expand_at(item, path, true)?);
            }
            if out.is_empty() && !in_alternative {
                return Err(AppError::EmptyExpansion { path: display_path(path).to_string() });
            }
            Ok(out)
        }
        ConfigNode::Mapping(entries) => {
            let mut product = vec![ParamSet::new()];
            for (key, child) in entries {
                let child_sets = expand_at(child, &join_key_path(path, key), in_alternative)?;
                product = cross(&product, &child_sets)?;
            }
            Ok(product)
        }
    }
}

fn cross(left: &[ParamSet], right: &[ParamSet]) -> Result<Vec<ParamSet>, AppError> {
    let mut out = Vec::with_capacity(left.len() * right.len());
    for l in left {
        for r in right {
            let mut merged = l.clone();
            for (k, v) in r.iter() {
                merged.insert(k.to_string(), v.clone()).map_err(duplicate_path)?;
            }
            out.push(merged);
        }
    }
    Ok(out)
}

fn duplicate_path(path: String) -> AppError {
    AppError::shape(display_path(&path), "key-path is defined more than once")
}
