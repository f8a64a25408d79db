//! Acting-user identity.
//!
//! The resolver never reads process environment variables directly; it asks
//! an [`IdentityProvider`]. [`SystemIdentity`] checks `USER` then
//! `USERNAME`, [`StaticIdentity`] returns a fixed answer.

/// The current user as reported by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The user name.
    pub name: String,
    /// Where the name came from (e.g., the environment variable).
    pub detected_via: String,
}

/// Supplies the identity of the user running the deployment.
pub trait IdentityProvider {
    /// Return the current user, or `None` if it cannot be determined.
    fn current_user(&self) -> Option<Identity>;
}

/// Identity from the process environment.
///
/// # Example
///
/// ```
/// use stackname::environment::SystemIdentity;
///
/// let identity = SystemIdentity::new().detect_with_env(|key| match key {
///     "USERNAME" => Ok("carol".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert_eq!(identity.unwrap().name, "carol");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    /// Variables checked, in order.
    pub const VARIABLES: [&'static str; 2] = ["USER", "USERNAME"];

    /// Create a provider backed by the process environment.
    pub fn new() -> Self {
        Self
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(&self, env_fn: F) -> Option<Identity>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        Self::VARIABLES.iter().find_map(|var| {
            env_fn(var)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|name| Identity {
                    name,
                    detected_via: var.to_string(),
                })
        })
    }
}

impl IdentityProvider for SystemIdentity {
    fn current_user(&self) -> Option<Identity> {
        self.detect_with_env(|key| std::env::var(key))
    }
}

/// A provider with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    name: Option<String>,
}

impl StaticIdentity {
    /// A provider that always reports `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// A provider that never finds a user.
    pub fn unavailable() -> Self {
        Self { name: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<Identity> {
        self.name.as_ref().map(|name| Identity {
            name: name.clone(),
            detected_via: "static".to_string(),
        })
    }
}
