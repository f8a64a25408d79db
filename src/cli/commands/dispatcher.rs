//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::workspace::Workspace;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    workspace: Workspace,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given workspace.
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    /// Get the workspace commands run against.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ws = &self.workspace;
        match &cli.command {
            Commands::Resolve(args) => super::resolve::ResolveCommand::new(ws, args.clone()).execute(ui),
            Commands::Name(args) => super::name::NameCommand::new(ws, args.clone()).execute(ui),
            Commands::Tags(args) => super::tags::TagsCommand::new(ws, args.clone()).execute(ui),
            Commands::Domain(args) => super::domain::DomainCommand::new(ws, args.clone()).execute(ui),
            Commands::Plan(args) => super::plan::PlanCommand::new(ws, args.clone()).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticIdentity;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(Workspace::new("/test"));
        assert_eq!(dispatcher.workspace().project_root(), std::path::Path::new("/test"));
    }

    #[test]
    fn dispatches_name_command() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "stackname",
            "-c",
            "environment=staging",
            "name",
            "CoreStack",
        ])
        .unwrap();
        let ws = Workspace::new(temp.path())
            .with_context_overrides(cli.context.clone())
            .with_identity(StaticIdentity::new("alice"));

        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(ws).dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.results(), &["staging-core-stack".to_string()]);
    }
}
