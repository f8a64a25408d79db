//! Domain name derivation.
//!
//! Every environment gets its own label under a fixed root domain, and every
//! application a label under that:
//!
//! ```text
//! <env-prefix>.<root>          staging.ebbo.dev
//! <app>.<env-prefix>.<root>    vault.staging.ebbo.dev
//! ```
//!
//! The environment label is [`Environment::env_prefix`], the DNS-safe form of
//! the same prefix stack names use. Two environments that share stacks always
//! share DNS names. The reverse does not hold: sanitizing is lossy, so
//! `john.doe` and `john_doe` get separate stacks but the same
//! `development-john-doe` label.
//!
//! Labels that are empty or longer than 63 characters after sanitizing are
//! rejected rather than rendered.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::{Result, StacknameError};
use crate::naming::dns_label;

/// Root domain used when no project config names one.
pub const DEFAULT_ROOT_DOMAIN: &str = "ebbo.dev";

/// Hosted zone of [`DEFAULT_ROOT_DOMAIN`].
pub const DEFAULT_HOSTED_ZONE_ID: &str = "Z02287733RP9AY57D3IRQ";

/// Maximum length of a full DNS name.
const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of a single DNS label.
const MAX_LABEL_LENGTH: usize = 63;

/// One or more dot-separated labels, each 1-63 characters of `[a-z0-9-]`
/// not starting or ending with a hyphen.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?)*$")
        .expect("DOMAIN_REGEX must compile")
});

/// DNS configuration for the whole deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// The root domain name (e.g., "ebbo.dev").
    pub root_domain: String,

    /// The hosted zone ID for the root domain.
    #[serde(default)]
    pub hosted_zone_id: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
            hosted_zone_id: DEFAULT_HOSTED_ZONE_ID.to_string(),
        }
    }
}

impl DomainConfig {
    /// Create a validated domain config.
    ///
    /// The root domain is lowercased and a trailing dot is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`StacknameError::InvalidDomain`] if the root domain is empty
    /// or not a valid DNS name.
    pub fn new(root_domain: impl Into<String>, hosted_zone_id: impl Into<String>) -> Result<Self> {
        let config = Self {
            root_domain: root_domain.into(),
            hosted_zone_id: hosted_zone_id.into(),
        };
        config.normalized()
    }

    /// Validate and normalize a config (e.g., one just deserialized).
    pub fn normalized(mut self) -> Result<Self> {
        self.root_domain = self.root_domain.trim().trim_end_matches('.').to_lowercase();
        validate_domain(&self.root_domain)?;
        Ok(self)
    }

    /// Base domain of an environment: `<env-prefix>.<root>`.
    ///
    /// # Errors
    ///
    /// Returns [`StacknameError::InvalidDomain`] if the environment label is
    /// empty or too long, or the full name is not a valid DNS name.
    pub fn environment_domain(&self, env: &Environment) -> Result<String> {
        let domain = format!("{}.{}", env_label(env)?, self.root_domain);
        validate_domain(&domain)?;
        Ok(domain)
    }

    /// Domain of an application: `<app>.<env-prefix>.<root>`.
    ///
    /// # Example
    ///
    /// ```
    /// use stackname::domain::DomainConfig;
    /// use stackname::environment::Environment;
    ///
    /// let config = DomainConfig::new("ebbo.dev", "Z123").unwrap();
    /// let env = Environment::new("staging", "alice");
    /// assert_eq!(config.app_domain("vault", &env).unwrap(), "vault.staging.ebbo.dev");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StacknameError::InvalidDomain`] if the app or environment
    /// label is empty or longer than 63 characters after sanitizing.
    pub fn app_domain(&self, app_name: &str, env: &Environment) -> Result<String> {
        let domain = format!("{}.{}", app_label(app_name)?, self.environment_domain(env)?);
        validate_domain(&domain)?;
        Ok(domain)
    }

    /// Record name of an application relative to the hosted zone:
    /// `<app>.<env-prefix>`.
    pub fn app_record_name(&self, app_name: &str, env: &Environment) -> Result<String> {
        Ok(format!("{}.{}", app_label(app_name)?, env_label(env)?))
    }

    /// Wildcard certificate subject for an environment: `*.<env-prefix>.<root>`.
    pub fn wildcard_domain(&self, env: &Environment) -> Result<String> {
        Ok(format!("*.{}", self.environment_domain(env)?))
    }
}

fn app_label(app_name: &str) -> Result<String> {
    checked_label(app_name, dns_label(app_name), "application name")
}

fn env_label(env: &Environment) -> Result<String> {
    checked_label(&env.name_prefix(), env.env_prefix(), "environment")
}

fn checked_label(source: &str, label: String, what: &str) -> Result<String> {
    let invalid = |reason: String| StacknameError::InvalidDomain {
        domain: source.to_string(),
        reason,
    };

    if label.is_empty() {
        return Err(invalid(format!("{} has no DNS-safe characters", what)));
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err(invalid(format!(
            "{} label '{}' is longer than {} characters",
            what, label, MAX_LABEL_LENGTH
        )));
    }
    Ok(label)
}

/// Check that a string is a usable DNS name.
pub fn validate_domain(domain: &str) -> Result<()> {
    let invalid = |reason: &str| StacknameError::InvalidDomain {
        domain: domain.to_string(),
        reason: reason.to_string(),
    };

    if domain.is_empty() {
        return Err(invalid("root domain must not be empty"));
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid("longer than 253 characters"));
    }
    if !DOMAIN_REGEX.is_match(domain) {
        return Err(invalid("not a valid DNS name"));
    }
    Ok(())
}
