//! Stack and resource naming.
//!
//! Names are derived from the resolved [`Environment`] and a base name:
//!
//! | environment | name |
//! |---|---|
//! | preview build (PR set) | `preview-<pr>-<base>` |
//! | `development` | `development-<username>-<base>` |
//! | any other stage | `<stage>-<base>` |
//!
//! The base name is kebab-cased first. The PR rule is checked before the
//! development rule, so a PR build never lands on a developer's personal
//! stack even if it also names the development stage.
//!
//! # Example
//!
//! ```
//! use stackname::environment::Environment;
//!
//! let env = Environment::new("preview", "alice").with_pr_number("17");
//! assert_eq!(env.stack_name("LambdaStack").unwrap(), "preview-17-lambda-stack");
//!
//! let env = Environment::new("development", "alice");
//! assert_eq!(env.resource_name("VaultCluster").unwrap(), "development-alice-vault-cluster");
//! ```

pub mod case;
pub mod tags;

pub use case::{dns_label, kebab_case, pascal_case};
pub use tags::{tag_keys, Tags, MANAGED_BY};

use crate::environment::{Environment, PREVIEW_STAGE};
use crate::error::{Result, StacknameError};

impl Environment {
    /// The identity prefix shared by every name in this environment.
    ///
    /// `preview-<pr>`, `development-<username>` or `<stage>`.
    pub fn name_prefix(&self) -> String {
        match self.pr_number() {
            Some(pr) => format!("{}-{}", PREVIEW_STAGE, pr),
            None if self.is_development() => format!("{}-{}", self.name(), self.username()),
            None => self.name().to_string(),
        }
    }

    /// The DNS-safe form of [`name_prefix`](Self::name_prefix).
    ///
    /// Used as the environment label under the root domain. Environments that
    /// share stacks share this label; sanitizing is lossy, so some distinct
    /// environments share it too.
    pub fn env_prefix(&self) -> String {
        dns_label(&self.name_prefix())
    }

    /// Name of a stack in this environment.
    ///
    /// # Errors
    ///
    /// Returns [`StacknameError::EmptyBaseName`] for an empty or blank base.
    pub fn stack_name(&self, base_name: &str) -> Result<String> {
        self.qualify(base_name)
    }

    /// Name of a resource in this environment.
    ///
    /// Same policy as [`stack_name`](Self::stack_name); kept separate so
    /// callers say which kind of name they are producing.
    pub fn resource_name(&self, base_name: &str) -> Result<String> {
        self.qualify(base_name)
    }

    fn qualify(&self, base_name: &str) -> Result<String> {
        let base_name = base_name.trim();
        if base_name.is_empty() {
            return Err(StacknameError::EmptyBaseName);
        }
        Ok(format!("{}-{}", self.name_prefix(), kebab_case(base_name)))
    }
}
