mod config_filesystem;
mod dotenv_verifier;
mod process_env;

pub use config_filesystem::FilesystemConfigStore;
pub use dotenv_verifier::DotenvVerifier;
pub use process_env::ProcessEnv;
