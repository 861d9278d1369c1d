//! Webhook API versions accepted by the Shopify CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::AppError;

/// Webhook event API version. Always matches the app's Admin API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V2024_01,
    V2023_10,
    V2023_07,
    V2023_04,
    V2024_04,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 5] = [
        ApiVersion::V2024_01,
        ApiVersion::V2023_10,
        ApiVersion::V2023_07,
        ApiVersion::V2023_04,
        ApiVersion::V2024_04,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V2024_01 => "2024-01",
            ApiVersion::V2023_10 => "2023-10",
            ApiVersion::V2023_07 => "2023-07",
            ApiVersion::V2023_04 => "2023-04",
            ApiVersion::V2024_04 => "2024-04",
        }
    }
}

impl FromStr for ApiVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiVersion::ALL
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| AppError::InvalidApiVersion(s.to_string()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
