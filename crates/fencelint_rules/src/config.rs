//! markdownlint-style rule configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::RuleError;
use crate::names::canonical_id;

/// Key that decides whether rules missing from the map are enabled.
pub const DEFAULT_KEY: &str = "default";

/// Keys a markdownlint configuration may carry besides rule names.
const NON_RULE_KEYS: &[&str] = &[DEFAULT_KEY, "extends", "$schema"];

/// Configuration for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleSetting {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with severity string ("error", "warning", "off").
    Severity(String),
    /// Rule is enabled with specific options object.
    Options(serde_json::Value),
}

impl RuleSetting {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleSetting::Enabled(enabled) => *enabled,
            RuleSetting::Severity(s) => s != "off",
            RuleSetting::Options(v) => !v.is_null(),
        }
    }
}

/// Mapping from rule identifier (id or alias) to its setting.
///
/// Keys keep their insertion order; when several keys name the same rule,
/// the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleConfig {
    entries: IndexMap<String, RuleSetting>,
}

impl RuleConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a JSON value, which must be an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RuleError> {
        if !value.is_object() {
            return Err(RuleError::config(format!(
                "expected an object, found {}",
                json_type_name(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| RuleError::config(e.to_string()))
    }

    /// Sets a key, replacing any previous value under the exact same key.
    pub fn insert(&mut self, key: impl Into<String>, setting: RuleSetting) {
        self.entries.insert(key.into(), setting);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, setting: RuleSetting) -> Self {
        self.insert(key, setting);
        self
    }

    /// Returns the setting stored under the exact key.
    pub fn get(&self, key: &str) -> Option<&RuleSetting> {
        self.entries.get(key)
    }

    /// Removes every key naming any of `names`, compared case-insensitively.
    pub fn remove_matching(&mut self, names: &[&str]) {
        self.entries
            .retain(|key, _| !names.iter().any(|name| name.eq_ignore_ascii_case(key)));
    }

    /// Resolves the setting for a rule known under `names`.
    pub fn resolve(&self, names: &[&str]) -> Option<&RuleSetting> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| names.iter().any(|name| name.eq_ignore_ascii_case(key)))
            .map(|(_, setting)| setting)
    }

    /// Whether rules that are not listed run. Defaults to true.
    pub fn default_enabled(&self) -> bool {
        self.resolve(&[DEFAULT_KEY])
            .is_none_or(RuleSetting::is_enabled)
    }

    /// Keys that name neither a known rule nor a configuration directive.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str).filter(|key| {
            !NON_RULE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
                && canonical_id(key).is_none()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
