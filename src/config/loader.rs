//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. Project config (`.stackname/config.yml`)
//! 2. Local overrides (`.stackname/config.local.yml`)
//!
//! Neither file is required; without them every setting takes its default.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::ProjectConfig;
use crate::config::validator::validate;
use crate::error::{Result, StacknameError};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".stackname";

/// Paths to configuration files in priority order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .stackname/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .stackname/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StacknameError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StacknameError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| StacknameError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, merge and validate the project config.
///
/// With `config_override` only that file is read (it must exist). Otherwise
/// the project and local files are discovered and merged.
///
/// # Example
///
/// ```
/// use stackname::config::load_project_config;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let config = load_project_config(temp.path(), None).unwrap();
/// assert_eq!(config.domain.root_domain, "ebbo.dev");
/// ```
pub fn load_project_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProjectConfig> {
    let (paths, source): (Vec<PathBuf>, PathBuf) = match config_override {
        Some(path) => (vec![path.to_path_buf()], path.to_path_buf()),
        None => {
            let discovered = ConfigPaths::discover(project_root);
            let paths: Vec<PathBuf> = discovered.all_existing().into_iter().cloned().collect();
            (paths, project_root.join(CONFIG_DIR).join("config.yml"))
        }
    };

    if paths.is_empty() {
        tracing::debug!("No project config; using defaults");
        return Ok(ProjectConfig::default());
    }

    let mut values = Vec::with_capacity(paths.len());
    for path in &paths {
        tracing::debug!("Loading config from {}", path.display());
        values.push(load_config_value(path)?);
    }

    let merged = merge_configs(&values);
    let config: ProjectConfig =
        serde_yaml::from_value(merged).map_err(|e| StacknameError::ConfigParseError {
            path: source,
            message: e.to_string(),
        })?;

    validate(config)
}
