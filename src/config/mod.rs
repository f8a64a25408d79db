//! Project configuration for stackname.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.stackname/config.yml`)
//! 2. Local overrides (`.stackname/config.local.yml`)
//!
//! Both are optional.

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{load_config_value, load_project_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ProjectConfig, DEFAULT_APPS, DEFAULT_FUNCTIONS_DIR, DEFAULT_STACKS};
pub use validator::validate;
