//! Tags command implementation.
//!
//! The `stackname tags` command prints the tags every resource of the
//! environment carries, as `Key=Value` lines or JSON.

use crate::cli::args::TagsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The tags command implementation.
pub struct TagsCommand<'a> {
    workspace: &'a Workspace,
    args: TagsArgs,
}

impl<'a> TagsCommand<'a> {
    /// Create a new tags command.
    pub fn new(workspace: &'a Workspace, args: TagsArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for TagsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.workspace.config()?;
        let env = self.workspace.environment()?;
        let tags = env.tags_with(&config.tags);

        if self.args.json {
            let text = serde_json::to_string_pretty(&tags).map_err(anyhow::Error::from)?;
            ui.result(&text);
        } else {
            for (key, value) in &tags {
                ui.result(&format!("{}={}", key, value));
            }
        }

        Ok(CommandResult::success())
    }
}
