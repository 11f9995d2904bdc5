use std::env;

use crate::version::SchemaVersion;

pub const SCHEMA_VERSION_ENV: &str = "GREENTIC_CARD_SCHEMA_VERSION";
pub const MAX_FALLBACK_DEPTH_ENV: &str = "GREENTIC_CARD_MAX_FALLBACK_DEPTH";

const DEFAULT_MAX_FALLBACK_DEPTH: usize = 16;

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Properties and types introduced after this version are ignored.
    pub target_version: SchemaVersion,
    /// Record a warning for every property the model does not know.
    pub report_unknown_properties: bool,
    /// Longest `fallback` chain followed before giving up on a node.
    pub max_fallback_depth: usize,
}

impl ParseConfig {
    pub fn new(target_version: SchemaVersion) -> Self {
        Self {
            target_version,
            ..Self::default()
        }
    }

    /// Reads overrides from `GREENTIC_CARD_SCHEMA_VERSION` and
    /// `GREENTIC_CARD_MAX_FALLBACK_DEPTH`; unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let target_version = lookup(SCHEMA_VERSION_ENV)
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.target_version);
        let max_fallback_depth = lookup(MAX_FALLBACK_DEPTH_ENV)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.max_fallback_depth);
        Self {
            target_version,
            max_fallback_depth,
            ..defaults
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            target_version: SchemaVersion::LATEST,
            report_unknown_properties: true,
            max_fallback_depth: DEFAULT_MAX_FALLBACK_DEPTH,
        }
    }
}
