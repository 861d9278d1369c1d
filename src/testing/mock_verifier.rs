use std::cell::Cell;

use crate::domain::AppError;
use crate::ports::EnvVerifier;

/// Mock environment verifier for testing.
#[derive(Default)]
pub struct MockVerifier {
    pub failure: Option<String>,
    pub calls: Cell<usize>,
}

impl MockVerifier {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), calls: Cell::new(0) }
    }
}

impl EnvVerifier for MockVerifier {
    fn verify(&self) -> Result<(), AppError> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(message) => Err(AppError::environment(message.clone())),
            None => Ok(()),
        }
    }
}
