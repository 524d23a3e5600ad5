//! Linode API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Linode API version.
///
/// The version becomes the first path segment of every request
/// (`https://api.linode.com/v4/...`).
///
/// # Example
///
/// ```rust
/// use linode_api::ApiVersion;
///
/// let version: ApiVersion = "v4beta".parse().unwrap();
/// assert_eq!(version, ApiVersion::V4Beta);
/// assert_eq!(ApiVersion::default().to_string(), "v4");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The stable v4 API.
    #[default]
    V4,
    /// The beta channel exposing features ahead of general availability.
    V4Beta,
    /// Any other version segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for the stable API.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V4)
    }

    /// Returns the base path for this version (e.g. `/v4`).
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/{self}")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("v4"),
            Self::V4Beta => f.write_str("v4beta"),
            Self::Custom(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        match trimmed {
            "v4" => Ok(Self::V4),
            "v4beta" => Ok(Self::V4Beta),
            "" => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
            other if other.contains(['/', '?', '#', ' ']) => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}
