//! Deployment context.
//!
//! The deployment context is the loosely typed key-value store a deployment
//! is started with (CDK context in `cdk.json`, `cdk.context.json` and
//! `--context key=value` flags). The resolver only ever reads optional
//! string fields from it: a present value of any other JSON type is treated
//! exactly like an absent one.

pub mod loader;

pub use loader::{load_context, load_context_file, parse_override, ContextPaths};

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Well-known context keys.
pub mod keys {
    /// Stage name (`development`, `preview`, `staging`, `production`, ...).
    pub const ENVIRONMENT: &str = "environment";
    /// Pull request number. This is the canonical key.
    pub const PR_NUMBER: &str = "prNumber";
    /// Legacy snake_case spelling of [`PR_NUMBER`], read only when the
    /// canonical key is absent.
    pub const PR_NUMBER_LEGACY: &str = "pr_number";
    /// Release version.
    pub const VERSION: &str = "version";
    /// Commit identifier, used when `version` is absent.
    pub const SHA: &str = "sha";
    /// Acting developer.
    pub const USERNAME: &str = "username";
}

/// A read-only snapshot of the deployment context.
///
/// # Example
///
/// ```
/// use stackname::context::DeploymentContext;
///
/// let mut ctx = DeploymentContext::new();
/// ctx.insert("environment", "staging");
/// ctx.insert("prNumber", 42);
///
/// assert_eq!(ctx.get_str("environment"), Some("staging"));
/// // Numbers are not strings: treated as absent.
/// assert_eq!(ctx.get_str("prNumber"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeploymentContext {
    values: BTreeMap<String, Value>,
}

impl DeploymentContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { values }
    }

    /// Build a context from a JSON object map.
    pub fn from_json_map(map: serde_json::Map<String, Value>) -> Self {
        Self {
            values: map.into_iter().collect(),
        }
    }

    /// Set a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Layer `other` on top of this context. Keys in `other` win.
    pub fn extend(&mut self, other: DeploymentContext) {
        self.values.extend(other.values);
    }

    /// Read an optional string field.
    ///
    /// Returns `None` when the key is absent or holds a non-string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            Value::String(s) => Some(s.as_str()),
            other => {
                tracing::warn!(
                    "Ignoring context value '{}': expected a string, found {}",
                    key,
                    json_type_name(other)
                );
                None
            }
        }
    }

    /// Read an optional string field with surrounding whitespace removed,
    /// treating a blank string as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get_str(key).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Check whether a key is present, whatever its type.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_pairs_stores_strings() {
        let ctx = DeploymentContext::from_pairs([("environment", "preview"), ("prNumber", "17")]);
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get_str(keys::ENVIRONMENT), Some("preview"));
        assert_eq!(ctx.get_str(keys::PR_NUMBER), Some("17"));
    }

    #[test]
    fn wrong_typed_values_read_as_absent() {
        let mut ctx = DeploymentContext::new();
        ctx.insert("prNumber", 17);
        ctx.insert("version", json!(["1.0"]));
        ctx.insert("username", Value::Null);
        ctx.insert("environment", true);

        assert!(ctx.contains("prNumber"));
        assert_eq!(ctx.get_str("prNumber"), None);
        assert_eq!(ctx.get_str("version"), None);
        assert_eq!(ctx.get_str("username"), None);
        assert_eq!(ctx.get_str("environment"), None);
    }

    #[test]
    fn get_non_empty_skips_blank_values() {
        let ctx = DeploymentContext::from_pairs([("username", ""), ("sha", "  "), ("version", "1.2")]);
        assert_eq!(ctx.get_str("username"), Some(""));
        assert_eq!(ctx.get_non_empty("username"), None);
        assert_eq!(ctx.get_non_empty("sha"), None);
        assert_eq!(ctx.get_non_empty("version"), Some("1.2"));
    }

    #[test]
    fn get_non_empty_trims_values() {
        let ctx = DeploymentContext::from_pairs([("environment", " staging\n"), ("username", "\talice ")]);
        assert_eq!(ctx.get_str("environment"), Some(" staging\n"));
        assert_eq!(ctx.get_non_empty("environment"), Some("staging"));
        assert_eq!(ctx.get_non_empty("username"), Some("alice"));
    }

    #[test]
    fn missing_key_is_none() {
        let ctx = DeploymentContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get_str("environment"), None);
        assert!(!ctx.contains("environment"));
    }

    #[test]
    fn extend_overrides_existing_keys() {
        let mut base = DeploymentContext::from_pairs([("environment", "staging"), ("version", "1.0")]);
        let overlay = DeploymentContext::from_pairs([("environment", "production")]);
        base.extend(overlay);

        assert_eq!(base.get_str("environment"), Some("production"));
        assert_eq!(base.get_str("version"), Some("1.0"));
    }

    #[test]
    fn from_json_map_keeps_types() {
        let value = json!({"environment": "staging", "prNumber": 5});
        let map = value.as_object().cloned().unwrap();
        let ctx = DeploymentContext::from_json_map(map);

        assert_eq!(ctx.get_str("environment"), Some("staging"));
        assert_eq!(ctx.get_str("prNumber"), None);
    }

    #[test]
    fn keys_are_sorted() {
        let ctx = DeploymentContext::from_pairs([("version", "1"), ("environment", "x"), ("sha", "y")]);
        let keys: Vec<&str> = ctx.keys().collect();
        assert_eq!(keys, vec!["environment", "sha", "version"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let ctx = DeploymentContext::from_pairs([("environment", "staging")]);
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, r#"{"environment":"staging"}"#);
    }
}
