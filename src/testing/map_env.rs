use std::collections::HashMap;

use crate::ports::EnvSource;

/// In-memory environment for testing.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Baseline environment with every identity variable set and a valid API version.
    pub fn valid() -> Self {
        Self::new()
            .with("SHOPIFY_APP_URL", "https://example.com/")
            .with("APP_NAME", "Example App")
            .with("APP_HANDLE", "example-app")
            .with("SHOPIFY_API_KEY", "key-123")
            .with("SHOPIFY_API_SCOPES", "read_products,write_products")
            .with("SHOPIFY_API_VERSION", "2024-01")
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
