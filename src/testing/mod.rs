mod map_env;
mod memory_config_store;
mod mock_verifier;

pub use map_env::MapEnv;
pub use memory_config_store::MemoryConfigStore;
pub use mock_verifier::MockVerifier;
