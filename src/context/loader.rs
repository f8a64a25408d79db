//! Context file discovery and loading.
//!
//! Context layers are merged in this order (later overrides earlier):
//!
//! 1. `cdk.json` (its `context` object)
//! 2. `cdk.context.json` (the whole top-level object)
//! 3. `--context key=value` overrides
//!
//! If none of the three exists the context is structurally absent and
//! [`load_context`] returns `Ok(None)`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::DeploymentContext;
use crate::error::{Result, StacknameError};

/// Paths to context files in merge order.
#[derive(Debug, Clone)]
pub struct ContextPaths {
    /// Project manifest: `cdk.json`
    pub cdk_json: Option<PathBuf>,

    /// Cached/generated context: `cdk.context.json`
    pub cdk_context: Option<PathBuf>,
}

impl ContextPaths {
    /// Discover context files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            cdk_json: existing(project_root.join("cdk.json")),
            cdk_context: existing(project_root.join("cdk.context.json")),
        }
    }

    /// Check if any context file exists.
    pub fn has_any(&self) -> bool {
        self.cdk_json.is_some() || self.cdk_context.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse a `key=value` override.
///
/// The value may itself contain `=`; only the first one splits.
///
/// # Example
///
/// ```
/// use stackname::context::parse_override;
///
/// let (key, value) = parse_override("version=1.2.0").unwrap();
/// assert_eq!(key, "version");
/// assert_eq!(value, "1.2.0");
/// assert!(parse_override("version").is_err());
/// ```
pub fn parse_override(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(StacknameError::InvalidContextOverride {
            value: arg.to_string(),
        }),
    }
}

/// Load one context file.
///
/// With `section` set, only that key of the top-level object is read (a
/// missing section is an empty layer). Without it, the top-level object is
/// the context.
pub fn load_context_file(path: &Path, section: Option<&str>) -> Result<DeploymentContext> {
    let content = fs::read_to_string(path)?;

    let parse_error = |message: String| StacknameError::ContextParseError {
        path: path.to_path_buf(),
        message,
    };

    let root: Value = serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?;

    let object = match section {
        Some(key) => match root.get(key) {
            None | Some(Value::Null) => return Ok(DeploymentContext::new()),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => return Err(parse_error(format!("'{}' must be an object", key))),
        },
        None => match root {
            Value::Object(map) => map,
            _ => return Err(parse_error("top level must be an object".to_string())),
        },
    };

    Ok(DeploymentContext::from_json_map(object))
}

/// Load and merge the deployment context for a project.
///
/// Returns `Ok(None)` when no context file exists and no overrides were
/// given; callers decide whether that is fatal.
pub fn load_context(project_root: &Path, overrides: &[String]) -> Result<Option<DeploymentContext>> {
    let paths = ContextPaths::discover(project_root);

    if !paths.has_any() && overrides.is_empty() {
        tracing::debug!("No deployment context under {}", project_root.display());
        return Ok(None);
    }

    let mut context = DeploymentContext::new();

    if let Some(path) = &paths.cdk_json {
        tracing::debug!("Loading context from {}", path.display());
        context.extend(load_context_file(path, Some("context"))?);
    }

    if let Some(path) = &paths.cdk_context {
        tracing::debug!("Loading context from {}", path.display());
        context.extend(load_context_file(path, None)?);
    }

    for arg in overrides {
        let (key, value) = parse_override(arg)?;
        tracing::debug!("Context override {}={}", key, value);
        context.insert(key, value);
    }

    Ok(Some(context))
}
