mod config_file_store;
mod env_source;
mod env_verifier;

pub use config_file_store::ConfigFileStore;
pub use env_source::EnvSource;
pub use env_verifier::EnvVerifier;
