//! Name command implementation.
//!
//! The `stackname name` command prints one environment-qualified name per
//! base name, one per line, so the output can be captured by scripts.

use crate::cli::args::{NameArgs, NameKind};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The name command implementation.
pub struct NameCommand<'a> {
    workspace: &'a Workspace,
    args: NameArgs,
}

impl<'a> NameCommand<'a> {
    /// Create a new name command.
    pub fn new(workspace: &'a Workspace, args: NameArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for NameCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.workspace.environment()?;

        // Validate every base before printing anything.
        let names = self
            .args
            .bases
            .iter()
            .map(|base| match self.args.kind {
                NameKind::Stack => env.stack_name(base),
                NameKind::Resource => env.resource_name(base),
            })
            .collect::<Result<Vec<_>>>()?;

        for (base, name) in self.args.bases.iter().zip(&names) {
            ui.result(name);
            ui.detail(base, name, None);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticIdentity;
    use crate::error::StacknameError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir, context: &[&str]) -> Workspace {
        Workspace::new(temp.path())
            .with_context_overrides(context.iter().map(|s| s.to_string()).collect())
            .with_identity(StaticIdentity::new("alice"))
    }

    fn args(bases: &[&str], kind: NameKind) -> NameArgs {
        NameArgs {
            bases: bases.iter().map(|s| s.to_string()).collect(),
            kind,
        }
    }

    #[test]
    fn prints_one_name_per_base() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, &["environment=preview", "prNumber=17"]);
        let cmd = NameCommand::new(&ws, args(&["LambdaStack", "CoreStack"], NameKind::Stack));

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert_eq!(
            ui.results(),
            &["preview-17-lambda-stack".to_string(), "preview-17-core-stack".to_string()]
        );
    }

    #[test]
    fn development_names_include_username() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, &["environment=development"]);
        let cmd = NameCommand::new(&ws, args(&["VaultCluster"], NameKind::Resource));

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert_eq!(ui.output(), "development-alice-vault-cluster");
    }

    #[test]
    fn empty_base_prints_nothing() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, &["environment=staging"]);
        let cmd = NameCommand::new(&ws, args(&["CoreStack", ""], NameKind::Stack));

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, StacknameError::EmptyBaseName));
        assert!(ui.results().is_empty());
    }
}
