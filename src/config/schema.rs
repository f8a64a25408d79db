//! Project configuration schema.
//!
//! Lives in `.stackname/config.yml`. Every field is optional; an absent file
//! means all defaults.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::DomainConfig;

/// Stacks the deployment is made of when the config lists none.
pub const DEFAULT_STACKS: [&str; 3] = ["CoreStack", "LambdaStack", "VaultwardenStack"];

/// Applications that get their own hostname when the config lists none.
pub const DEFAULT_APPS: [&str; 2] = ["api", "vault"];

/// Directory scanned for function folders when the config names none.
pub const DEFAULT_FUNCTIONS_DIR: &str = "functions";

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use stackname::config::ProjectConfig;
///
/// let yaml = r#"
/// domain:
///   root_domain: example.org
///   hosted_zone_id: Z123
/// stacks: [CoreStack]
/// "#;
/// let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.domain.root_domain, "example.org");
/// assert_eq!(config.stacks, vec!["CoreStack"]);
/// assert_eq!(config.apps, vec!["api", "vault"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// DNS zone all hostnames live under.
    pub domain: DomainConfig,

    /// Directory (relative to the project root) holding one folder per function.
    pub functions_dir: PathBuf,

    /// Base names of the stacks to deploy.
    pub stacks: Vec<String>,

    /// Applications that get a hostname under the environment domain.
    pub apps: Vec<String>,

    /// Extra tags for every resource. Environment tags take precedence.
    pub tags: BTreeMap<String, String>,

    /// Fixed hostnames per application, replacing the derived one.
    pub domain_overrides: BTreeMap<String, String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            domain: DomainConfig::default(),
            functions_dir: PathBuf::from(DEFAULT_FUNCTIONS_DIR),
            stacks: DEFAULT_STACKS.iter().map(|s| s.to_string()).collect(),
            apps: DEFAULT_APPS.iter().map(|s| s.to_string()).collect(),
            tags: BTreeMap::new(),
            domain_overrides: BTreeMap::new(),
        }
    }
}
