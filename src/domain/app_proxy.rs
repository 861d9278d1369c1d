//! App proxy prefixes reserved by the storefront.

/// Prefixes the storefront reserves for app proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppProxyPrefix {
    Apps,
    A,
    Community,
    Tools,
}

impl AppProxyPrefix {
    pub const ALL: [AppProxyPrefix; 4] =
        [AppProxyPrefix::Apps, AppProxyPrefix::A, AppProxyPrefix::Community, AppProxyPrefix::Tools];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppProxyPrefix::Apps => "apps",
            AppProxyPrefix::A => "a",
            AppProxyPrefix::Community => "community",
            AppProxyPrefix::Tools => "tools",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prefix| prefix.as_str() == value)
    }

    /// Whether `value` is one of the reserved prefixes.
    ///
    /// Unknown prefixes are still written as-is; callers only warn about them.
    pub fn is_known(value: &str) -> bool {
        Self::parse(value).is_some()
    }
}
