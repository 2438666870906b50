mod artifact_store;
mod clock;

pub use artifact_store::ArtifactStore;
pub use clock::Clock;
