use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::EnvVerifier;

/// Loads a dotenv file into the process environment before inputs are read.
///
/// Variables already present in the environment are never overridden. Lines that do not
/// parse are skipped with a warning; only a missing or unreadable file fails.
#[derive(Debug, Clone)]
pub struct DotenvVerifier {
    path: Option<PathBuf>,
    required: bool,
}

impl DotenvVerifier {
    /// Load `path` if it exists; a missing file is not an error.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), required: false }
    }

    /// Load `path`; a missing file fails verification.
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), required: true }
    }

    /// Skip dotenv loading entirely.
    pub fn disabled() -> Self {
        Self { path: None, required: false }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl EnvVerifier for DotenvVerifier {
    fn verify(&self) -> Result<(), AppError> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        if !self.required && !path.exists() {
            tracing::debug!(path = %path.display(), "no dotenv file, using process environment");
            return Ok(());
        }

        let entries = dotenvy::from_path_iter(path).map_err(|err| {
            AppError::environment(format!(
                "Failed to load environment from {}: {}",
                path.display(),
                err
            ))
        })?;

        for entry in entries {
            match entry {
                Ok((key, value)) => {
                    if std::env::var_os(&key).is_none() {
                        unsafe {
                            std::env::set_var(&key, value);
                        }
                    }
                }
                Err(dotenvy::Error::Io(err)) => {
                    return Err(AppError::environment(format!(
                        "Failed to read environment from {}: {}",
                        path.display(),
                        err
                    )));
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unparsable dotenv line");
                }
            }
        }
        tracing::debug!(path = %path.display(), "loaded dotenv file");
        Ok(())
    }
}
