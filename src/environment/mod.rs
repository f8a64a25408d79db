//! Environment resolution.
//!
//! Turns a [`DeploymentContext`](crate::context::DeploymentContext) into an
//! immutable [`Environment`]. Each field falls back independently:
//!
//! 1. `environment` → stage name, default `"development"`
//! 2. `prNumber` (or legacy `pr_number`) → preview build when non-empty
//! 3. `version` → else `sha` → else empty
//! 4. `username` → else OS identity (`USER`, `USERNAME`) → else `"default"`
//!
//! Only a structurally absent context is an error.

pub mod identity;
pub mod resolver;

pub use identity::{Identity, IdentityProvider, StaticIdentity, SystemIdentity};
pub use resolver::{
    Environment, UsernameSource, DEFAULT_USERNAME, DEVELOPMENT_STAGE, PREVIEW_STAGE,
};
