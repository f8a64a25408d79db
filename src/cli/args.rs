//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// stackname - Environment-aware names for cloud deployments.
#[derive(Debug, Parser)]
#[command(name = "stackname")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .stackname/config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true, env = "STACKNAME_PROJECT")]
    pub project: Option<PathBuf>,

    /// Deployment context value as key=value (repeatable, highest priority)
    #[arg(short = 'c', long = "context", global = true, value_name = "KEY=VALUE")]
    pub context: Vec<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved deployment environment
    Resolve(ResolveArgs),

    /// Print environment-qualified names for base names
    Name(NameArgs),

    /// Print the tag set for the environment
    Tags(TagsArgs),

    /// Print the environment or application domain
    Domain(DomainArgs),

    /// Show every name a deployment of this project would use
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Which naming policy to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum NameKind {
    /// Deployment stack name
    #[default]
    Stack,
    /// Resource name inside a stack
    Resource,
}

/// Arguments for the `name` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NameArgs {
    /// Base names, e.g. LambdaStack
    #[arg(required = true)]
    pub bases: Vec<String>,

    /// Kind of name to produce
    #[arg(short, long, value_enum, default_value_t = NameKind::Stack)]
    pub kind: NameKind,
}

/// Arguments for the `tags` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TagsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `domain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DomainArgs {
    /// Application name; omit for the environment domain
    pub app: Option<String>,

    /// Print the wildcard certificate domain
    #[arg(long, conflicts_with = "app")]
    pub wildcard: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlanArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output as YAML
    #[arg(long, conflicts_with = "json")]
    pub yaml: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_context_overrides() {
        let cli = Cli::try_parse_from([
            "stackname",
            "-c",
            "environment=preview",
            "--context",
            "prNumber=17",
            "resolve",
        ])
        .unwrap();
        assert_eq!(cli.context, vec!["environment=preview", "prNumber=17"]);
        assert!(matches!(cli.command, Commands::Resolve(_)));
    }

    #[test]
    fn context_flag_is_global() {
        let cli = Cli::try_parse_from(["stackname", "tags", "-c", "environment=staging"]).unwrap();
        assert_eq!(cli.context, vec!["environment=staging"]);
    }

    #[test]
    fn name_defaults_to_stack_kind() {
        let cli = Cli::try_parse_from(["stackname", "name", "CoreStack", "LambdaStack"]).unwrap();
        match cli.command {
            Commands::Name(args) => {
                assert_eq!(args.bases, vec!["CoreStack", "LambdaStack"]);
                assert_eq!(args.kind, NameKind::Stack);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn name_accepts_resource_kind() {
        let cli =
            Cli::try_parse_from(["stackname", "name", "--kind", "resource", "VaultCluster"]).unwrap();
        match cli.command {
            Commands::Name(args) => assert_eq!(args.kind, NameKind::Resource),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn name_requires_a_base() {
        assert!(Cli::try_parse_from(["stackname", "name"]).is_err());
    }

    #[test]
    fn domain_wildcard_conflicts_with_app() {
        assert!(Cli::try_parse_from(["stackname", "domain", "vault", "--wildcard"]).is_err());
    }

    #[test]
    fn plan_json_conflicts_with_yaml() {
        assert!(Cli::try_parse_from(["stackname", "plan", "--json", "--yaml"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["stackname", "-q", "-v", "resolve"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["stackname"]).is_err());
    }
}
