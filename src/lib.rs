//! stackname - Environment-aware names for cloud deployments.
//!
//! stackname derives deterministic, collision-free stack names, resource
//! names, tags and DNS names from a deployment context, so that concurrent
//! preview deployments in a shared account never step on each other.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading, merging, and validation
//! - [`context`] - Deployment context and CDK context file loading
//! - [`domain`] - Root domain configuration and DNS names
//! - [`environment`] - Environment resolution and user identity
//! - [`error`] - Error types and result aliases
//! - [`naming`] - Stack names, resource names, and tags
//! - [`plan`] - Naming plan for a whole project
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use stackname::context::DeploymentContext;
//! use stackname::domain::DomainConfig;
//! use stackname::environment::{Environment, StaticIdentity};
//!
//! let ctx = DeploymentContext::from_pairs([
//!     ("environment", "preview"),
//!     ("prNumber", "17"),
//! ]);
//! let env = Environment::resolve(Some(&ctx), &StaticIdentity::new("alice")).unwrap();
//!
//! assert_eq!(env.stack_name("LambdaStack").unwrap(), "preview-17-lambda-stack");
//! assert_eq!(env.tags()["PR"], "17");
//!
//! let domain = DomainConfig::default();
//! assert_eq!(domain.app_domain("vault", &env).unwrap(), "vault.preview-17.ebbo.dev");
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod domain;
pub mod environment;
pub mod error;
pub mod naming;
pub mod plan;
pub mod ui;

pub use error::{Result, StacknameError};
