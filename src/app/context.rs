use crate::ports::{ArtifactStore, Clock};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: ArtifactStore, C: Clock> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
