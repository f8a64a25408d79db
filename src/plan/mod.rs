//! Deployment naming plan.
//!
//! Applies the naming policy to the whole project layout: every configured
//! stack, every function folder, every application hostname, plus the tags
//! and stack outputs. The plan is what a deployment would create, expressed
//! only as names; nothing is provisioned.

pub mod functions;

pub use functions::discover_functions;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::environment::Environment;
use crate::error::Result;
use crate::naming::{pascal_case, Tags};

/// App whose domain serves the function endpoints.
const API_APP: &str = "api";

/// A stack and its environment-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackPlan {
    pub base_name: String,
    pub stack_name: String,
}

/// A function and the names derived for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionPlan {
    /// Folder under the functions dir.
    pub folder: String,
    /// Name of the function resource.
    pub function_name: String,
    /// Name of its API endpoint resource.
    pub endpoint_name: String,
    /// Route on the shared API.
    pub route: String,
    /// Build artifact the function is deployed from.
    pub asset: String,
    /// Public URL of the function under the API domain.
    pub endpoint_url: String,
}

/// An application hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppPlan {
    pub app: String,
    pub domain: String,
    /// Record name relative to the hosted zone; absent for overridden domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_name: Option<String>,
    pub url: String,
    pub overridden: bool,
}

/// The full set of names for one environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentPlan {
    pub environment: Environment,
    pub root_domain: String,
    pub hosted_zone_id: String,
    pub environment_domain: String,
    pub certificate_domain: String,
    pub api_name: String,
    pub stacks: Vec<StackPlan>,
    pub apps: Vec<AppPlan>,
    pub functions: Vec<FunctionPlan>,
    pub tags: Tags,
    pub outputs: BTreeMap<String, String>,
}

impl DeploymentPlan {
    /// Build the plan for a project on disk.
    ///
    /// Function folders are discovered under the configured functions dir,
    /// relative to `project_root`.
    pub fn build(env: &Environment, config: &ProjectConfig, project_root: &Path) -> Result<Self> {
        let folders = discover_functions(&project_root.join(&config.functions_dir))?;
        Self::from_parts(env, config, &folders)
    }

    /// Build the plan from an explicit list of function folders.
    ///
    /// # Example
    ///
    /// ```
    /// use stackname::config::ProjectConfig;
    /// use stackname::environment::Environment;
    /// use stackname::plan::DeploymentPlan;
    ///
    /// let env = Environment::new("staging", "alice");
    /// let plan = DeploymentPlan::from_parts(
    ///     &env,
    ///     &ProjectConfig::default(),
    ///     &["gin-server".to_string()],
    /// )
    /// .unwrap();
    /// assert_eq!(plan.api_name, "staging-api");
    /// assert_eq!(plan.functions[0].function_name, "staging-gin-server-lambda-fn");
    /// ```
    pub fn from_parts(env: &Environment, config: &ProjectConfig, folders: &[String]) -> Result<Self> {
        let domain = &config.domain;
        let environment_domain = domain.environment_domain(env)?;
        let certificate_domain = domain.wildcard_domain(env)?;
        let api_domain = match config.domain_overrides.get(API_APP) {
            Some(fixed) => fixed.clone(),
            None => domain.app_domain(API_APP, env)?,
        };

        let stacks = config
            .stacks
            .iter()
            .map(|base| -> Result<StackPlan> {
                Ok(StackPlan {
                    base_name: base.clone(),
                    stack_name: env.stack_name(base)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let apps = config
            .apps
            .iter()
            .map(|app| -> Result<AppPlan> {
                let (domain_name, record_name, overridden) =
                    match config.domain_overrides.get(app) {
                        Some(fixed) => (fixed.clone(), None, true),
                        None => (
                            domain.app_domain(app, env)?,
                            Some(domain.app_record_name(app, env)?),
                            false,
                        ),
                    };
                Ok(AppPlan {
                    app: app.clone(),
                    url: format!("https://{}", domain_name),
                    domain: domain_name,
                    record_name,
                    overridden,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let functions = folders
            .iter()
            .map(|folder| -> Result<FunctionPlan> {
                Ok(FunctionPlan {
                    folder: folder.clone(),
                    function_name: env.resource_name(&format!("{}LambdaFn", pascal_case(folder)))?,
                    endpoint_name: env.resource_name(&format!("{}Endpoint", folder))?,
                    route: format!("/{}", folder),
                    asset: format!("build/dist/{}.zip", folder),
                    endpoint_url: format!("https://{}/{}", api_domain, folder),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut outputs = BTreeMap::new();
        outputs.insert("Username".to_string(), env.username().to_string());
        if let Some(pr) = env.pr_number() {
            outputs.insert("EnvironmentType".to_string(), "Preview".to_string());
            outputs.insert("PRNumber".to_string(), pr.to_string());
        }

        Ok(Self {
            environment: env.clone(),
            root_domain: domain.root_domain.clone(),
            hosted_zone_id: domain.hosted_zone_id.clone(),
            environment_domain,
            certificate_domain,
            api_name: format!("{}-api", env.env_prefix()),
            stacks,
            apps,
            functions,
            tags: env.tags_with(&config.tags),
            outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn folders() -> Vec<String> {
        vec!["blank-go".to_string(), "gin-server".to_string()]
    }

    #[test]
    fn preview_plan_names_everything_by_pr() {
        let env = Environment::new("preview", "alice")
            .with_pr_number("17")
            .with_version("abc123");
        let plan = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &folders()).unwrap();

        let names: Vec<&str> = plan.stacks.iter().map(|s| s.stack_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "preview-17-core-stack",
                "preview-17-lambda-stack",
                "preview-17-vaultwarden-stack"
            ]
        );
        assert_eq!(plan.api_name, "preview-17-api");
        assert_eq!(plan.environment_domain, "preview-17.ebbo.dev");
        assert_eq!(plan.certificate_domain, "*.preview-17.ebbo.dev");
        assert_eq!(plan.tags["PR"], "17");
        assert_eq!(plan.tags["Version"], "abc123");
    }

    #[test]
    fn function_names_follow_folder() {
        let env = Environment::new("production", "alice");
        let plan = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &folders()).unwrap();

        let gin = &plan.functions[1];
        assert_eq!(gin.folder, "gin-server");
        assert_eq!(gin.function_name, "production-gin-server-lambda-fn");
        assert_eq!(gin.endpoint_name, "production-gin-server-endpoint");
        assert_eq!(gin.route, "/gin-server");
        assert_eq!(gin.asset, "build/dist/gin-server.zip");
        assert_eq!(gin.endpoint_url, "https://api.production.ebbo.dev/gin-server");
    }

    #[test]
    fn endpoint_url_follows_api_override() {
        let env = Environment::new("staging", "alice");
        let mut config = ProjectConfig::default();
        config
            .domain_overrides
            .insert("api".to_string(), "api.example.com".to_string());

        let plan = DeploymentPlan::from_parts(&env, &config, &folders()).unwrap();
        assert_eq!(plan.functions[0].endpoint_url, "https://api.example.com/blank-go");
    }

    #[test]
    fn environment_without_dns_label_fails() {
        let env = Environment::new("_", "alice");
        let err = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &[]).unwrap_err();
        assert!(matches!(err, crate::error::StacknameError::InvalidDomain { .. }));
    }

    #[test]
    fn app_domains_and_urls() {
        let env = Environment::new("staging", "alice");
        let plan = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &[]).unwrap();

        let vault = plan.apps.iter().find(|a| a.app == "vault").unwrap();
        assert_eq!(vault.domain, "vault.staging.ebbo.dev");
        assert_eq!(vault.record_name.as_deref(), Some("vault.staging"));
        assert_eq!(vault.url, "https://vault.staging.ebbo.dev");
        assert!(!vault.overridden);
    }

    #[test]
    fn domain_override_replaces_derived_domain() {
        let env = Environment::new("staging", "alice");
        let mut config = ProjectConfig::default();
        config
            .domain_overrides
            .insert("vault".to_string(), "vault.example.com".to_string());

        let plan = DeploymentPlan::from_parts(&env, &config, &[]).unwrap();
        let vault = plan.apps.iter().find(|a| a.app == "vault").unwrap();
        assert_eq!(vault.domain, "vault.example.com");
        assert!(vault.record_name.is_none());
        assert!(vault.overridden);
    }

    #[test]
    fn outputs_mark_preview_builds() {
        let env = Environment::new("preview", "alice").with_pr_number("9");
        let plan = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &[]).unwrap();
        assert_eq!(plan.outputs["EnvironmentType"], "Preview");
        assert_eq!(plan.outputs["PRNumber"], "9");
        assert_eq!(plan.outputs["Username"], "alice");
    }

    #[test]
    fn outputs_for_regular_builds_only_carry_username() {
        let env = Environment::new("development", "alice");
        let plan = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &[]).unwrap();
        assert_eq!(plan.outputs.len(), 1);
        assert_eq!(plan.api_name, "development-alice-api");
    }

    #[test]
    fn config_tags_are_merged() {
        let env = Environment::new("staging", "alice");
        let mut config = ProjectConfig::default();
        config
            .tags
            .insert("Project".to_string(), "sandbox".to_string());

        let plan = DeploymentPlan::from_parts(&env, &config, &[]).unwrap();
        assert_eq!(plan.tags["Project"], "sandbox");
        assert_eq!(plan.tags["Environment"], "staging");
    }

    #[test]
    fn build_discovers_functions_on_disk() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("functions").join("blank-go")).unwrap();

        let env = Environment::new("staging", "alice");
        let plan = DeploymentPlan::build(&env, &ProjectConfig::default(), temp.path()).unwrap();
        assert_eq!(plan.functions.len(), 1);
        assert_eq!(plan.functions[0].function_name, "staging-blank-go-lambda-fn");
    }

    #[test]
    fn build_without_functions_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let env = Environment::new("staging", "alice");
        let plan = DeploymentPlan::build(&env, &ProjectConfig::default(), temp.path()).unwrap();
        assert!(plan.functions.is_empty());
    }

    #[test]
    fn serializes_to_json() {
        let env = Environment::new("staging", "alice");
        let plan = DeploymentPlan::from_parts(&env, &ProjectConfig::default(), &folders()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["environment"]["name"], "staging");
        assert_eq!(json["stacks"][0]["stack_name"], "staging-core-stack");
        assert_eq!(json["functions"][0]["route"], "/blank-go");
    }
}
