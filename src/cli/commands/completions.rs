//! Shell completions generation.
//!
//! The `stackname completions` command generates shell completion scripts.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script.
    pub fn script(&self) -> Result<String> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "stackname", &mut buf);
        String::from_utf8(buf).map_err(|e| anyhow::Error::from(e).into())
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.result(self.script()?.trim_end());
        Ok(CommandResult::success())
    }
}
