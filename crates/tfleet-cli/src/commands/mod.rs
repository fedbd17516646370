//! CLI command definitions and dispatch.

pub mod generate;
pub mod info;
pub mod plan;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tfleet_common::config::GeneratorConfig;
use tfleet_common::constants::BIN_NAME;
use tfleet_common::settings::GlobalSettings;

/// tfleet — Terraform JSON fleet generator.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Environment name recorded in the process-wide settings.
    #[arg(
        short,
        long,
        global = true,
        env = "TFLEET_ENVIRONMENT",
        default_value = tfleet_common::constants::DEFAULT_ENVIRONMENT
    )]
    pub environment: String,

    /// Extra setting as KEY=VALUE (repeatable).
    #[arg(long = "set", global = true, value_parser = parse_setting)]
    pub settings: Vec<(String, String)>,

    /// Generator configuration file (YAML or JSON).
    #[arg(long, global = true, env = "TFLEET_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble fleets and groups and write the Terraform JSON document.
    Generate(generate::GenerateArgs),
    /// Display the resources and modules declared by a generated document.
    Plan(plan::PlanArgs),
    /// Show the process-wide settings.
    Info(info::InfoArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let settings: BTreeMap<String, String> = cli.settings.into_iter().collect();
    let global = GlobalSettings::instance(cli.environment, settings);

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    tracing::debug!(environment = global.environment(), ?config, "resolved configuration");

    match cli.command {
        Command::Generate(args) => generate::execute(args, &config),
        Command::Plan(args) => plan::execute(args, &config),
        Command::Info(args) => info::execute(args, &global),
    }
}

fn parse_setting(value: &str) -> Result<(String, String), String> {
    let (key, val) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got \"{value}\""))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in \"{value}\""));
    }
    Ok((key.to_string(), val.to_string()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), BIN_NAME);
    }

    #[test]
    fn parse_setting_splits_on_first_equals() {
        assert_eq!(
            parse_setting("owner=team=infra"),
            Ok(("owner".to_string(), "team=infra".to_string()))
        );
        assert!(parse_setting("novalue").is_err());
        assert!(parse_setting("=x").is_err());
    }

    #[test]
    fn generate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "tfleet",
            "--set",
            "owner=infra",
            "generate",
            "--fleet",
            "app=3",
            "--group",
            "net=2",
            "-o",
            "out/main.tf.json",
        ])
        .expect("should parse");

        assert_eq!(cli.settings, vec![("owner".into(), "infra".into())]);
        let Command::Generate(args) = cli.command else {
            unreachable!("expected generate")
        };
        assert_eq!(args.fleets.len(), 1);
        assert_eq!(args.fleets[0].count, 3);
        assert_eq!(args.groups[0].name.as_str(), "net");
        assert_eq!(args.output, Some(PathBuf::from("out/main.tf.json")));
    }

    #[test]
    fn invalid_fleet_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["tfleet", "generate", "--fleet", "9app=3"]);
        assert!(result.is_err());
    }
}
