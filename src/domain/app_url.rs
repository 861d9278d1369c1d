/// Externally reachable base URL of the app, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUrl(String);

impl AppUrl {
    /// Strip exactly one trailing `/`. Scheme, casing and repeated slashes are left alone.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.strip_suffix('/').unwrap_or(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append an absolute route (`/api/...`) to the base URL.
    pub fn join(&self, route: &str) -> String {
        format!("{}{}", self.0, route)
    }
}
