//! Typed, version-aware access to one JSON object during parsing.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ParseConfig;
use crate::enums::CardEnum;
use crate::version::SchemaVersion;
use crate::warnings::{ParseWarning, WarningCode};

/// Required property absent (or unusable) on a node being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MissingRequiredField {
    pub property: &'static str,
}

pub(crate) type NodeResult<T> = Result<T, MissingRequiredField>;

/// Shared state for one parse call.
#[derive(Debug)]
pub(crate) struct ParseContext {
    pub config: ParseConfig,
    pub warnings: Vec<ParseWarning>,
    /// Current depth of nested `fallback` resolution.
    pub fallback_depth: usize,
}

impl ParseContext {
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
            fallback_depth: 0,
        }
    }

    pub fn target_version(&self) -> SchemaVersion {
        self.config.target_version
    }

    pub fn supports(&self, since: SchemaVersion) -> bool {
        self.config.target_version.supports(since)
    }

    pub fn warn(&mut self, code: WarningCode, path: impl Into<String>, message: impl Into<String>) {
        let warning = ParseWarning::new(code, path, message);
        debug!(code = ?warning.code, path = %warning.path, "{}", warning.message);
        self.warnings.push(warning);
    }
}

pub(crate) fn child_path(parent: &str, segment: impl std::fmt::Display) -> String {
    format!("{parent}/{segment}")
}

/// Reads properties of a single JSON object, remembering which keys were used
/// so the rest can be reported as unknown.
pub(crate) struct ObjectReader<'a, 'c> {
    object: &'a Map<String, Value>,
    path: String,
    consumed: BTreeSet<&'a str>,
    ctx: &'c mut ParseContext,
}

impl<'a, 'c> ObjectReader<'a, 'c> {
    pub fn new(object: &'a Map<String, Value>, path: impl Into<String>, ctx: &'c mut ParseContext) -> Self {
        let mut consumed = BTreeSet::new();
        if let Some((key, _)) = object.get_key_value("type") {
            consumed.insert(key.as_str());
        }
        Self {
            object,
            path: path.into(),
            consumed,
            ctx,
        }
    }

    pub fn child_path(&self, key: &str) -> String {
        child_path(&self.path, key)
    }

    pub fn ctx(&mut self) -> &mut ParseContext {
        &mut *self.ctx
    }

    /// Marks a key as known without reading it.
    pub fn skip(&mut self, key: &str) {
        let object: &'a Map<String, Value> = self.object;
        if let Some((key, _)) = object.get_key_value(key) {
            self.consumed.insert(key.as_str());
        }
    }

    fn invalid(&mut self, key: &str, expected: &str) {
        let path = self.child_path(key);
        self.ctx.warn(
            WarningCode::InvalidValue,
            path,
            format!("`{key}` must be {expected}; using the default"),
        );
    }

    /// Raw lookup with version gating; `null` counts as absent.
    pub fn value(&mut self, key: &str, since: SchemaVersion) -> Option<&'a Value> {
        let object: &'a Map<String, Value> = self.object;
        let (stored_key, value) = object.get_key_value(key)?;
        self.consumed.insert(stored_key.as_str());
        if !self.ctx.supports(since) {
            let path = self.child_path(key);
            let target = self.ctx.target_version();
            self.ctx.warn(
                WarningCode::UnsupportedInVersion,
                path,
                format!("`{key}` requires schema {since}, target is {target}"),
            );
            return None;
        }
        if value.is_null() { None } else { Some(value) }
    }

    pub fn optional_string(&mut self, key: &str, since: SchemaVersion) -> Option<String> {
        match self.value(key, since)? {
            Value::String(value) => Some(value.clone()),
            _ => {
                self.invalid(key, "a string");
                None
            }
        }
    }

    pub fn string(&mut self, key: &str, since: SchemaVersion) -> String {
        self.optional_string(key, since).unwrap_or_default()
    }

    pub fn required_string(&mut self, key: &'static str) -> NodeResult<String> {
        self.optional_string(key, SchemaVersion::V1_0)
            .ok_or(MissingRequiredField { property: key })
    }

    /// Like [`Self::required_string`], but an empty id counts as missing.
    pub fn required_id(&mut self, key: &'static str) -> NodeResult<String> {
        let id = self.required_string(key)?;
        if id.is_empty() {
            return Err(MissingRequiredField { property: key });
        }
        Ok(id)
    }

    pub fn bool(&mut self, key: &str, default: bool, since: SchemaVersion) -> bool {
        match self.value(key, since) {
            None => default,
            Some(Value::Bool(value)) => *value,
            Some(_) => {
                self.invalid(key, "a boolean");
                default
            }
        }
    }

    /// Non-negative integer counter; `0` when absent.
    pub fn count(&mut self, key: &str, since: SchemaVersion) -> u32 {
        match self.value(key, since) {
            None => 0,
            Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(count) => count,
                None => {
                    self.invalid(key, "a non-negative integer");
                    0
                }
            },
        }
    }

    pub fn enumeration<E: CardEnum>(&mut self, key: &str, since: SchemaVersion) -> E {
        let Some(value) = self.value(key, since) else {
            return E::default();
        };
        match value.as_str().and_then(E::parse) {
            Some(member) => member,
            None => {
                let path = self.child_path(key);
                self.ctx.warn(
                    WarningCode::InvalidValue,
                    path,
                    format!("{value} is not a valid {}; using {}", E::NAME, E::default().as_str()),
                );
                E::default()
            }
        }
    }

    pub fn array(&mut self, key: &str, since: SchemaVersion) -> Option<&'a [Value]> {
        match self.value(key, since)? {
            Value::Array(items) => Some(items.as_slice()),
            _ => {
                self.invalid(key, "an array");
                None
            }
        }
    }

    pub fn object(&mut self, key: &str, since: SchemaVersion) -> Option<&'a Map<String, Value>> {
        match self.value(key, since)? {
            Value::Object(map) => Some(map),
            _ => {
                self.invalid(key, "an object");
                None
            }
        }
    }

    /// Reports every key nobody asked for.
    pub fn finish(self) {
        if !self.ctx.config.report_unknown_properties {
            return;
        }
        for key in self.object.keys() {
            if !self.consumed.contains(key.as_str()) {
                let path = child_path(&self.path, key);
                self.ctx.warn(
                    WarningCode::UnknownProperty,
                    path,
                    format!("unknown property `{key}`"),
                );
            }
        }
    }
}
