//! Resolve command implementation.
//!
//! The `stackname resolve` command shows the environment the current
//! context resolves to.

use serde_json::json;

use crate::cli::args::ResolveArgs;
use crate::environment::Environment;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    workspace: &'a Workspace,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(workspace: &'a Workspace, args: ResolveArgs) -> Self {
        Self { workspace, args }
    }

    fn to_json(env: &Environment) -> serde_json::Value {
        json!({
            "name": env.name(),
            "pr_number": env.pr_number(),
            "version": env.version(),
            "username": env.username(),
            "username_source": env.username_source().to_string(),
            "is_preview": env.is_preview(),
            "prefix": env.env_prefix(),
        })
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.workspace.environment()?;

        if self.args.json {
            let text = serde_json::to_string_pretty(&Self::to_json(&env))
                .map_err(anyhow::Error::from)?;
            ui.result(&text);
            return Ok(CommandResult::success());
        }

        let version = if env.version().is_empty() {
            "(unknown)"
        } else {
            env.version()
        };

        ui.show_header("Environment");
        ui.result(&format!("environment: {}", env.name()));
        if let Some(pr) = env.pr_number() {
            ui.result(&format!("pr_number:   {}", pr));
        }
        ui.result(&format!("version:     {}", version));
        ui.result(&format!("username:    {}", env.username()));
        ui.result(&format!("preview:     {}", env.is_preview()));
        ui.result(&format!("prefix:      {}", env.env_prefix()));
        ui.detail(
            "Username",
            env.username(),
            Some(&env.username_source().to_string()),
        );

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticIdentity;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn shows_preview_environment() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("cdk.context.json"),
            r#"{"environment": "preview", "prNumber": "17", "sha": "abc123", "username": ""}"#,
        )
        .unwrap();
        let ws = Workspace::new(temp.path()).with_identity(StaticIdentity::new("alice"));

        let mut ui = MockUI::new();
        ResolveCommand::new(&ws, ResolveArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_result("environment: preview"));
        assert!(ui.has_result("pr_number:   17"));
        assert!(ui.has_result("version:     abc123"));
        assert!(ui.has_result("prefix:      preview-17"));
        assert_eq!(ui.headers(), &["Environment".to_string()]);
    }

    #[test]
    fn reports_username_source() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path())
            .with_context_overrides(vec!["environment=development".to_string()])
            .with_identity(StaticIdentity::unavailable());

        let mut ui = MockUI::new();
        ResolveCommand::new(&ws, ResolveArgs::default())
            .execute(&mut ui)
            .unwrap();

        let (key, value, note) = &ui.details()[0];
        assert_eq!(key, "Username");
        assert_eq!(value, "default");
        assert_eq!(note.as_deref(), Some("default"));
        assert!(ui.has_result("version:     (unknown)"));
    }

    #[test]
    fn json_output_is_machine_readable() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path())
            .with_context_overrides(vec![
                "environment=staging".to_string(),
                "version=1.4.0".to_string(),
            ])
            .with_identity(StaticIdentity::new("alice"));

        let mut ui = MockUI::new();
        ResolveCommand::new(&ws, ResolveArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["name"], "staging");
        assert_eq!(value["version"], "1.4.0");
        assert_eq!(value["is_preview"], false);
        assert!(value["pr_number"].is_null());
        assert!(ui.headers().is_empty());
    }
}
