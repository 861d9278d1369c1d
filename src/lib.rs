//! shopify-app-toml: materialize `shopify.app.toml` from environment variables.

pub mod app;
pub mod domain;
pub mod observability;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use app::AppContext;
use services::{DotenvVerifier, FilesystemConfigStore, ProcessEnv};

pub use app::commands::generate::{
    DEFAULT_EXTENSION_DIR, GenerateOptions, GenerateOutcome, RenderedFile,
};
pub use domain::{AppConfig, AppError, ApiVersion, EnvInputs, RenderTarget, render_for_target};

/// Default dotenv file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Where to load extra environment variables from before reading inputs.
#[derive(Debug, Clone)]
pub enum EnvFile {
    /// Load the file if it exists.
    Optional(PathBuf),
    /// Load the file; fail if it is missing.
    Required(PathBuf),
    /// Use the process environment only.
    Disabled,
}

impl Default for EnvFile {
    fn default() -> Self {
        EnvFile::Optional(PathBuf::from(DEFAULT_ENV_FILE))
    }
}

/// Generate `shopify.app.toml` files from the process environment.
pub fn generate(
    options: &GenerateOptions,
    env_file: &EnvFile,
) -> Result<GenerateOutcome, AppError> {
    let verifier = match env_file {
        EnvFile::Optional(path) => DotenvVerifier::optional(path),
        EnvFile::Required(path) => DotenvVerifier::required(path),
        EnvFile::Disabled => DotenvVerifier::disabled(),
    };
    let ctx = AppContext::new(ProcessEnv, verifier, FilesystemConfigStore);

    app::commands::generate::execute(&ctx, options)
}
