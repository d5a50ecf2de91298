//! Deployment types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the running application was packaged.
///
/// The literal form of the active variant is what a provider writes under
/// [`crate::DEPLOY_TYPE_PROPERTY`] at installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeployType {
    /// Local developer build.
    #[default]
    Development,
    /// Build distributed to testers.
    Test,
    /// Store/production build.
    Production,
}

impl DeployType {
    /// Returns the lower-case literal form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployType::Development => "development",
            DeployType::Test => "test",
            DeployType::Production => "production",
        }
    }

    /// Returns all known deploy types.
    pub fn all() -> &'static [DeployType] {
        &[
            DeployType::Development,
            DeployType::Test,
            DeployType::Production,
        ]
    }
}

impl std::fmt::Display for DeployType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown deploy type literal.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown deploy type: {0}")]
pub struct ParseDeployTypeError(String);

impl std::str::FromStr for DeployType {
    type Err = ParseDeployTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(DeployType::Development),
            "test" => Ok(DeployType::Test),
            "production" => Ok(DeployType::Production),
            other => Err(ParseDeployTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_round_trip() {
        for dt in DeployType::all() {
            assert_eq!(dt.as_str().parse::<DeployType>().unwrap(), *dt);
        }
    }

    #[test]
    fn test_unknown_literal_is_an_error() {
        assert!("staging".parse::<DeployType>().is_err());
        assert!("Test".parse::<DeployType>().is_err());
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(DeployType::default(), DeployType::Development);
    }
}
