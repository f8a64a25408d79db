//! Resource tags.
//!
//! Every provisioned resource carries the same tag set so cost reports can
//! be split by environment and preview builds can be found and cleaned up.

use std::collections::BTreeMap;

use crate::environment::Environment;

/// A tag set. Sorted, so rendered output is stable.
pub type Tags = BTreeMap<String, String>;

/// Value of the `ManagedBy` tag.
pub const MANAGED_BY: &str = "CDK";

/// Tag keys.
pub mod tag_keys {
    pub const ENVIRONMENT: &str = "Environment";
    pub const MANAGED_BY: &str = "ManagedBy";
    pub const PREVIEW: &str = "Preview";
    pub const PR: &str = "PR";
    pub const VERSION: &str = "Version";
}

impl Environment {
    /// The tags for this environment.
    ///
    /// Always `Environment` and `ManagedBy`; `Preview` and `PR` for preview
    /// builds; `Version` when the version is known.
    ///
    /// # Example
    ///
    /// ```
    /// use stackname::environment::Environment;
    ///
    /// let tags = Environment::new("preview", "ci").with_pr_number("42").tags();
    /// assert_eq!(tags["Preview"], "true");
    /// assert_eq!(tags["PR"], "42");
    /// assert!(!tags.contains_key("Version"));
    /// ```
    pub fn tags(&self) -> Tags {
        let mut tags = Tags::new();
        tags.insert(tag_keys::ENVIRONMENT.to_string(), self.name().to_string());
        tags.insert(tag_keys::MANAGED_BY.to_string(), MANAGED_BY.to_string());

        if let Some(pr) = self.pr_number() {
            tags.insert(tag_keys::PREVIEW.to_string(), "true".to_string());
            tags.insert(tag_keys::PR.to_string(), pr.to_string());
        }

        if !self.version().is_empty() {
            tags.insert(tag_keys::VERSION.to_string(), self.version().to_string());
        }

        tags
    }

    /// The environment tags layered over project-level extras.
    ///
    /// Computed tags win on conflict.
    pub fn tags_with(&self, extra: &Tags) -> Tags {
        let mut tags = extra.clone();
        for (key, value) in self.tags() {
            if let Some(previous) = tags.insert(key.clone(), value) {
                tracing::debug!("Tag '{}' overrides configured value '{}'", key, previous);
            }
        }
        tags
    }
}
