use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a chain network in the address registry (e.g. `local`, `sepolia`).
///
/// Always lowercase and restricted to `[a-z0-9_-]`, so registry files, environment
/// overrides and command line arguments agree on a single spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network(String);

/// Rejected network identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNetwork(pub String);

impl fmt::Display for InvalidNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid network identifier '{}', expected [a-z0-9_-]+", self.0)
    }
}

impl std::error::Error for InvalidNetwork {}

impl Network {
    /// Network used when nothing else is configured.
    pub const DEFAULT: &'static str = "local";

    /// Validates and normalizes a network identifier.
    ///
    /// # Errors
    /// Returns [`InvalidNetwork`] for empty identifiers or unsupported characters.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidNetwork> {
        let normalized = raw.as_ref().trim().to_ascii_lowercase();
        let valid = !normalized.is_empty()
            && normalized
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');

        if valid { Ok(Self(normalized)) } else { Err(InvalidNetwork(raw.as_ref().to_owned())) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Network {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Network {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Network {
    type Err = InvalidNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}
