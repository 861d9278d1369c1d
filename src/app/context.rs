use crate::ports::{ConfigFileStore, EnvSource, EnvVerifier};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: EnvSource, V: EnvVerifier, S: ConfigFileStore> {
    env: E,
    verifier: V,
    store: S,
}

impl<E: EnvSource, V: EnvVerifier, S: ConfigFileStore> AppContext<E, V, S> {
    /// Create a new application context.
    pub fn new(env: E, verifier: V, store: S) -> Self {
        Self { env, verifier, store }
    }

    /// Get a reference to the environment source.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the environment verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Get a reference to the output store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
