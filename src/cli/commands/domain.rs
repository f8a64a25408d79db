//! Domain command implementation.
//!
//! The `stackname domain` command prints the environment domain, an
//! application's domain, or the wildcard certificate domain.

use crate::cli::args::DomainArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The domain command implementation.
pub struct DomainCommand<'a> {
    workspace: &'a Workspace,
    args: DomainArgs,
}

impl<'a> DomainCommand<'a> {
    /// Create a new domain command.
    pub fn new(workspace: &'a Workspace, args: DomainArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for DomainCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.workspace.config()?;
        let env = self.workspace.environment()?;
        let domain = &config.domain;

        let name = match &self.args.app {
            Some(app) => match config.domain_overrides.get(app) {
                Some(fixed) => {
                    ui.detail(app, fixed, Some("override"));
                    fixed.clone()
                }
                None => domain.app_domain(app, &env)?,
            },
            None if self.args.wildcard => domain.wildcard_domain(&env)?,
            None => domain.environment_domain(&env)?,
        };

        ui.result(&name);
        ui.detail("Hosted zone", &domain.hosted_zone_id, Some(&domain.root_domain));

        Ok(CommandResult::success())
    }
}
