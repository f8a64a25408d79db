//! Shared project state for commands.
//!
//! Every command needs the same three inputs: the project config, the
//! deployment context and an identity provider. [`Workspace`] loads them
//! the same way for all of them.

use std::path::{Path, PathBuf};

use crate::config::{load_project_config, ProjectConfig};
use crate::context::{load_context, DeploymentContext};
use crate::environment::{Environment, IdentityProvider, SystemIdentity};
use crate::error::{Result, StacknameError};

/// Project root plus the global CLI overrides.
pub struct Workspace {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    context_overrides: Vec<String>,
    identity: Box<dyn IdentityProvider>,
}

impl Workspace {
    /// Create a workspace for `project_root` using the OS identity.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_override: None,
            context_overrides: Vec::new(),
            identity: Box::new(SystemIdentity::new()),
        }
    }

    /// Use an explicit config file instead of `.stackname/config.yml`.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Add `key=value` context overrides.
    pub fn with_context_overrides(mut self, overrides: Vec<String>) -> Self {
        self.context_overrides = overrides;
        self
    }

    /// Replace the identity provider.
    pub fn with_identity(mut self, identity: impl IdentityProvider + 'static) -> Self {
        self.identity = Box::new(identity);
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the project config.
    pub fn config(&self) -> Result<ProjectConfig> {
        load_project_config(&self.project_root, self.config_override.as_deref())
    }

    /// Load the deployment context, failing when there is none.
    pub fn context(&self) -> Result<DeploymentContext> {
        load_context(&self.project_root, &self.context_overrides)?.ok_or_else(|| {
            StacknameError::ContextMissing {
                hint: format!(
                    "no cdk.json or cdk.context.json in {} and no --context given",
                    self.project_root.display()
                ),
            }
        })
    }

    /// Resolve the deployment environment.
    pub fn environment(&self) -> Result<Environment> {
        let context = self.context()?;
        Environment::resolve(Some(&context), self.identity.as_ref())
    }
}
