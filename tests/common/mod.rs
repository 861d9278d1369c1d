//! Shared testing utilities for shopify-app-toml CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ADVISORY: &str = "# Avoid writing to toml directly. Use your .env file instead\n\n";

/// Testing harness providing an isolated `<root>/app` + `<root>/extension` layout.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    app_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with only the app directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let app_dir = root.path().join("app");
        fs::create_dir_all(&app_dir).expect("Failed to create app directory");
        Self { root, app_dir }
    }

    /// Create the sibling extension directory.
    pub fn with_extension_dir(self) -> Self {
        fs::create_dir_all(self.extension_dir()).expect("Failed to create extension directory");
        self
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn extension_dir(&self) -> PathBuf {
        self.root.path().join("extension")
    }

    pub fn app_toml(&self) -> PathBuf {
        self.app_dir.join("shopify.app.toml")
    }

    pub fn extension_toml(&self) -> PathBuf {
        self.extension_dir().join("shopify.app.toml")
    }

    pub fn write_env_file(&self, content: &str) {
        fs::write(self.app_dir.join(".env"), content).expect("Failed to write .env");
    }

    /// Command for the compiled binary in the app directory with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("shopify-app-toml").expect("Failed to locate binary");
        cmd.current_dir(&self.app_dir).env_clear();
        cmd
    }

    /// `cli()` with a complete, valid set of app variables.
    pub fn cli_with_valid_env(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("SHOPIFY_APP_URL", "https://example.com/")
            .env("APP_NAME", "Example App")
            .env("APP_HANDLE", "example-app")
            .env("SHOPIFY_API_KEY", "key-123")
            .env("SHOPIFY_API_SCOPES", "read_products,write_products")
            .env("SHOPIFY_API_VERSION", "2024-01");
        cmd
    }

    pub fn read_app_toml(&self) -> String {
        fs::read_to_string(self.app_toml()).expect("shopify.app.toml should exist")
    }

    pub fn read_extension_toml(&self) -> String {
        fs::read_to_string(self.extension_toml()).expect("extension shopify.app.toml should exist")
    }
}
