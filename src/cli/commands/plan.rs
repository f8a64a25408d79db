//! Plan command implementation.
//!
//! The `stackname plan` command shows every name a deployment of the
//! project would use: stacks, the shared API, app domains, functions, tags
//! and stack outputs.

use crate::cli::args::PlanArgs;
use crate::error::Result;
use crate::plan::DeploymentPlan;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The plan command implementation.
pub struct PlanCommand<'a> {
    workspace: &'a Workspace,
    args: PlanArgs,
}

impl<'a> PlanCommand<'a> {
    /// Create a new plan command.
    pub fn new(workspace: &'a Workspace, args: PlanArgs) -> Self {
        Self { workspace, args }
    }

    fn render_tables(plan: &DeploymentPlan, ui: &mut dyn UserInterface) {
        let env = &plan.environment;
        ui.show_header(&format!("Deployment plan: {}", env.env_prefix()));
        ui.result(&format!("Domain:      {}", plan.environment_domain));
        ui.result(&format!("Certificate: {}", plan.certificate_domain));
        ui.result(&format!("API:         {}", plan.api_name));
        ui.detail("Hosted zone", &plan.hosted_zone_id, Some(&plan.root_domain));
        ui.result("");

        let mut stacks = Table::new(&["Stack", "Name"]);
        for stack in &plan.stacks {
            stacks.add_row(&[stack.base_name.as_str(), stack.stack_name.as_str()]);
        }
        ui.result(&stacks.render());

        let mut apps = Table::new(&["App", "Domain", "URL"]);
        for app in &plan.apps {
            let domain = if app.overridden {
                format!("{} (override)", app.domain)
            } else {
                app.domain.clone()
            };
            apps.add_row(&[app.app.as_str(), domain.as_str(), app.url.as_str()]);
        }
        ui.result(&apps.render());

        if plan.functions.is_empty() {
            ui.message("No functions found");
        } else {
            let mut functions = Table::new(&["Function", "Name", "Endpoint", "URL"]);
            for f in &plan.functions {
                functions.add_row(&[
                    f.folder.as_str(),
                    f.function_name.as_str(),
                    f.endpoint_name.as_str(),
                    f.endpoint_url.as_str(),
                ]);
            }
            ui.result(&functions.render());
        }

        let mut tags = Table::new(&["Tag", "Value"]);
        for (key, value) in &plan.tags {
            tags.add_row(&[key.as_str(), value.as_str()]);
        }
        ui.result(&tags.render());

        let mut outputs = Table::new(&["Output", "Value"]);
        for (key, value) in &plan.outputs {
            outputs.add_row(&[key.as_str(), value.as_str()]);
        }
        ui.result(&outputs.render());
    }
}

impl Command for PlanCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.workspace.config()?;
        let env = self.workspace.environment()?;
        let plan = DeploymentPlan::build(&env, &config, self.workspace.project_root())?;

        if self.args.json {
            let text = serde_json::to_string_pretty(&plan).map_err(anyhow::Error::from)?;
            ui.result(&text);
        } else if self.args.yaml {
            let text = serde_yaml::to_string(&plan).map_err(anyhow::Error::from)?;
            ui.result(text.trim_end());
        } else {
            Self::render_tables(&plan, ui);
        }

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

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("functions").join("blank-go")).unwrap();
        fs::create_dir_all(temp.path().join("functions").join("gin-server")).unwrap();
        fs::write(
            temp.path().join("cdk.json"),
            r#"{"context": {"environment": "preview", "prNumber": "17", "sha": "abc123"}}"#,
        )
        .unwrap();
        temp
    }

    fn run(temp: &TempDir, args: PlanArgs) -> MockUI {
        let ws = Workspace::new(temp.path()).with_identity(StaticIdentity::new("alice"));
        let mut ui = MockUI::new();
        PlanCommand::new(&ws, args).execute(&mut ui).unwrap();
        ui
    }

    #[test]
    fn table_output_lists_all_names() {
        let temp = setup_project();
        let ui = run(&temp, PlanArgs::default());

        assert_eq!(ui.headers(), &["Deployment plan: preview-17".to_string()]);
        assert!(ui.has_result("preview-17-lambda-stack"));
        assert!(ui.has_result("preview-17-gin-server-lambda-fn"));
        assert!(ui.has_result("https://vault.preview-17.ebbo.dev"));
        assert!(ui.has_result("*.preview-17.ebbo.dev"));
        assert!(ui.has_result("preview-17-api"));
        assert!(ui.has_result("https://api.preview-17.ebbo.dev/gin-server"));
    }

    #[test]
    fn json_output() {
        let temp = setup_project();
        let ui = run(
            &temp,
            PlanArgs {
                json: true,
                yaml: false,
            },
        );

        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["api_name"], "preview-17-api");
        assert_eq!(value["functions"].as_array().unwrap().len(), 2);
        assert_eq!(value["outputs"]["PRNumber"], "17");
    }

    #[test]
    fn yaml_output() {
        let temp = setup_project();
        let ui = run(
            &temp,
            PlanArgs {
                json: false,
                yaml: true,
            },
        );

        let value: serde_yaml::Value = serde_yaml::from_str(&ui.output()).unwrap();
        assert_eq!(value["environment_domain"].as_str(), Some("preview-17.ebbo.dev"));
    }

    #[test]
    fn reports_missing_functions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cdk.context.json"), r#"{"environment": "staging"}"#).unwrap();
        let ui = run(&temp, PlanArgs::default());
        assert_eq!(ui.messages(), &["No functions found".to_string()]);
    }
}
