//! Project configuration validation.
//!
//! Bad values are rejected when the config is loaded, before any name is
//! derived from them.

use std::collections::BTreeMap;

use crate::config::schema::ProjectConfig;
use crate::domain::validate_domain;
use crate::error::{Result, StacknameError};
use crate::naming::{dns_label, kebab_case};

/// Validate a config and return its normalized form.
///
/// Checks:
/// - the root domain is a valid DNS name
/// - stack names are non-empty and do not collide once kebab-cased
/// - app names are non-empty, DNS-safe, and unique
/// - domain overrides name a configured app and are valid DNS names
/// - tag keys are non-empty
pub fn validate(config: ProjectConfig) -> Result<ProjectConfig> {
    let mut config = config;
    config.domain = config.domain.normalized()?;

    check_unique(
        "stack",
        config.stacks.iter().map(|s| (s.as_str(), kebab_case(s.trim()))),
    )?;

    for app in &config.apps {
        if dns_label(app) != *app {
            return Err(invalid(format!(
                "app '{}' must be a lowercase DNS label (try '{}')",
                app,
                dns_label(app)
            )));
        }
    }
    check_unique("app", config.apps.iter().map(|a| (a.as_str(), a.clone())))?;

    for (app, domain) in &config.domain_overrides {
        if !config.apps.contains(app) {
            return Err(invalid(format!(
                "domain override for unknown app '{}'",
                app
            )));
        }
        validate_domain(domain)?;
    }

    if config.tags.keys().any(|k| k.trim().is_empty()) {
        return Err(invalid("tag keys must not be empty".to_string()));
    }

    Ok(config)
}

fn check_unique<'a>(
    kind: &str,
    names: impl Iterator<Item = (&'a str, String)>,
) -> Result<()> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();

    for (original, normalized) in names {
        if normalized.is_empty() {
            return Err(invalid(format!("{} names must not be empty", kind)));
        }
        if let Some(previous) = seen.insert(normalized.clone(), original) {
            return Err(invalid(format!(
                "{} names '{}' and '{}' both normalize to '{}'",
                kind, previous, original, normalized
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> StacknameError {
    StacknameError::ConfigValidationError { message }
}
