//! Authentication mode flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Which backend strategy the client is built with.
///
/// Resolved once at startup from configuration; never changed at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Simulated in-process backend with a fixed demo credential pair.
    #[default]
    Mock,
    /// Network-backed backend speaking the JSON auth API.
    Api,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Mock => "mock",
            AuthMode::Api => "api",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mock" => Ok(AuthMode::Mock),
            "api" => Ok(AuthMode::Api),
            other => Err(InvalidInputError::AuthMode {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("mock".parse::<AuthMode>().unwrap(), AuthMode::Mock);
        assert_eq!("api".parse::<AuthMode>().unwrap(), AuthMode::Api);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("staging".parse::<AuthMode>().is_err());
    }

    #[test]
    fn defaults_to_mock() {
        assert_eq!(AuthMode::default(), AuthMode::Mock);
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(AuthMode::Api.to_string(), "api");
        assert_eq!("api".parse::<AuthMode>().unwrap().to_string(), "api");
    }
}
