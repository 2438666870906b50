mod fixed_clock;
mod memory_artifact_store;
mod sweep_trees;

pub use fixed_clock::FixedClock;
pub use memory_artifact_store::MemoryArtifactStore;
pub use sweep_trees::{combinations, param_tree, to_yaml_value};
