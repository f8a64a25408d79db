//! Environment resolution from a deployment context.

use serde::Serialize;

use super::identity::IdentityProvider;
use crate::context::{keys, DeploymentContext};
use crate::error::{Result, StacknameError};

/// Stage used when the context names none. Developer stacks are per-user.
pub const DEVELOPMENT_STAGE: &str = "development";

/// Stage marker used in names of PR-triggered preview builds.
pub const PREVIEW_STAGE: &str = "preview";

/// Username used when neither the context nor the OS supplies one.
pub const DEFAULT_USERNAME: &str = "default";

/// How the username was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameSource {
    /// Explicit `username` context value.
    Context,
    /// OS identity, with the variable it came from.
    Os(String),
    /// Nothing was available.
    Fallback,
}

impl std::fmt::Display for UsernameSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context => write!(f, "context"),
            Self::Os(var) => write!(f, "detected via {}", var),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved deployment environment.
///
/// Immutable once constructed. `name` and `username` are never empty, and
/// the environment is a preview build exactly when a PR number is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pr_number: Option<String>,
    version: String,
    username: String,
    #[serde(skip)]
    username_source: UsernameSource,
}

impl Environment {
    /// Create an environment for a named stage.
    ///
    /// Empty names and usernames are replaced by their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use stackname::environment::Environment;
    ///
    /// let env = Environment::new("staging", "tester").with_version("1.4.0");
    /// assert_eq!(env.name(), "staging");
    /// assert!(!env.is_preview());
    ///
    /// let env = Environment::new("", "").with_pr_number("17");
    /// assert_eq!(env.name(), "development");
    /// assert_eq!(env.username(), "default");
    /// assert!(env.is_preview());
    /// ```
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        let name = non_empty_or(name.into(), DEVELOPMENT_STAGE);
        let username: String = username.into();
        let username = username.trim();
        let (username, username_source) = if username.is_empty() {
            (DEFAULT_USERNAME.to_string(), UsernameSource::Fallback)
        } else {
            (username.to_string(), UsernameSource::Context)
        };

        Self {
            name,
            pr_number: None,
            version: String::new(),
            username,
            username_source,
        }
    }

    /// Mark this as a preview build for the given PR. Empty numbers are ignored.
    pub fn with_pr_number(mut self, pr_number: impl Into<String>) -> Self {
        let pr_number: String = pr_number.into();
        let pr_number = pr_number.trim();
        self.pr_number = if pr_number.is_empty() {
            None
        } else {
            Some(pr_number.to_string())
        };
        self
    }

    /// Set the build version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Resolve an environment from a deployment context.
    ///
    /// Individual fields never fail: they fall back as described in the
    /// [module docs](crate::environment). A `None` context means no context could be
    /// obtained at all and is rejected with
    /// [`StacknameError::ContextMissing`] rather than silently deploying
    /// under a default identity.
    ///
    /// # Example
    ///
    /// ```
    /// use stackname::context::DeploymentContext;
    /// use stackname::environment::{Environment, StaticIdentity};
    ///
    /// let ctx = DeploymentContext::from_pairs([
    ///     ("environment", "preview"),
    ///     ("prNumber", "17"),
    ///     ("sha", "abc123"),
    /// ]);
    /// let env = Environment::resolve(Some(&ctx), &StaticIdentity::new("dev")).unwrap();
    /// assert!(env.is_preview());
    /// assert_eq!(env.version(), "abc123");
    ///
    /// assert!(Environment::resolve(None, &StaticIdentity::new("dev")).is_err());
    /// ```
    pub fn resolve(
        context: Option<&DeploymentContext>,
        identity: &dyn IdentityProvider,
    ) -> Result<Self> {
        let context = context.ok_or_else(|| StacknameError::ContextMissing {
            hint: "no context was supplied".to_string(),
        })?;
        Ok(Self::resolve_context(context, identity))
    }

    /// Resolve from a context that is known to be present. Never fails.
    pub fn resolve_context(context: &DeploymentContext, identity: &dyn IdentityProvider) -> Self {
        // 1. Stage name
        let name = context
            .get_non_empty(keys::ENVIRONMENT)
            .unwrap_or(DEVELOPMENT_STAGE)
            .to_string();

        // 2. PR number, canonical key first
        let pr_number = context
            .get_non_empty(keys::PR_NUMBER)
            .or_else(|| {
                let legacy = context.get_non_empty(keys::PR_NUMBER_LEGACY);
                if legacy.is_some() {
                    tracing::debug!(
                        "Using legacy '{}' context key; prefer '{}'",
                        keys::PR_NUMBER_LEGACY,
                        keys::PR_NUMBER
                    );
                }
                legacy
            })
            .map(str::to_string);

        // 3. Version, falling back to the commit
        let version = context
            .get_non_empty(keys::VERSION)
            .or_else(|| context.get_non_empty(keys::SHA))
            .unwrap_or_default()
            .to_string();

        // 4. Username
        let (username, username_source) = match context.get_non_empty(keys::USERNAME) {
            Some(username) => (username.to_string(), UsernameSource::Context),
            None => match identity
                .current_user()
                .filter(|user| !user.name.trim().is_empty())
            {
                Some(user) => (user.name.trim().to_string(), UsernameSource::Os(user.detected_via)),
                None => (DEFAULT_USERNAME.to_string(), UsernameSource::Fallback),
            },
        };

        let env = Self {
            name,
            pr_number,
            version,
            username,
            username_source,
        };

        tracing::debug!(
            "Resolved environment '{}' (preview: {}, user: {} from {})",
            env.name,
            env.is_preview(),
            env.username,
            env.username_source
        );

        env
    }

    /// The stage name. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The PR number for preview builds.
    pub fn pr_number(&self) -> Option<&str> {
        self.pr_number.as_deref()
    }

    /// The build version; empty when unknown.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The acting user. Never empty.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// How the username was determined.
    pub fn username_source(&self) -> &UsernameSource {
        &self.username_source
    }

    /// True exactly when a PR number is set.
    pub fn is_preview(&self) -> bool {
        self.pr_number.is_some()
    }

    /// True when the stage is the per-user development stage.
    pub fn is_development(&self) -> bool {
        self.name == DEVELOPMENT_STAGE
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}
