use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Adaptive Card schema version (`major.minor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    pub const V1_0: SchemaVersion = SchemaVersion::new(1, 0);
    pub const V1_1: SchemaVersion = SchemaVersion::new(1, 1);
    pub const V1_2: SchemaVersion = SchemaVersion::new(1, 2);

    /// Highest schema version whose properties this model understands.
    pub const LATEST: SchemaVersion = SchemaVersion::V1_2;

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// True when a feature introduced in `since` is available at this version.
    pub fn supports(self, since: SchemaVersion) -> bool {
        self >= since
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::LATEST
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid schema version `{0}`")]
pub struct InvalidSchemaVersion(pub String);

impl FromStr for SchemaVersion {
    type Err = InvalidSchemaVersion;

    /// Accepts `M`, `M.m` and `M.m.p`; the patch component is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSchemaVersion(value.to_string());
        let mut parts = value.trim().split('.');
        let major = parts
            .next()
            .filter(|part| !part.is_empty())
            .and_then(|part| part.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(part) => part.parse::<u32>().map_err(|_| invalid())?,
            None => 0,
        };
        if let Some(patch) = parts.next() {
            patch.parse::<u32>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(SchemaVersion::new(major, minor))
    }
}
