//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use appdeploy_config::capture_std_env;
use appdeploy_infra::ConfigSources;
use clap::{Args, Parser, Subcommand};
use commands::config::ConfigFormatArg;
use commands::{ResolveCommandInput, run_apps, run_config_show, run_resolve};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "appdeploy",
    version,
    about = "Resolve deployment options for a set of apps",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags selecting where the deploy config comes from.
#[derive(Debug, Args)]
struct SourceArgs {
    /// Config file path (JSON/TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the apps; overrides config and env.
    #[arg(long)]
    base_path: Option<PathBuf>,
}

impl SourceArgs {
    fn to_sources(&self) -> ConfigSources {
        ConfigSources {
            env: capture_std_env(),
            config_path: self.config.clone(),
            base_path_override: self.base_path.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize deploy options and print the result.
    Resolve {
        /// App names to deploy.
        apps: Vec<String>,
        /// Deploy every app found under the base path.
        #[arg(long)]
        all_apps: bool,
        /// Target environment (defaults to `dev`).
        #[arg(long)]
        environment: Option<String>,
        /// Extra option as KEY=VALUE (`true`/`false` become booleans).
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        assignments: Vec<String>,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// List every app found under the base path.
    Apps {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config after merging file, env, and flags.
    Show {
        #[command(flatten)]
        sources: SourceArgs,
        /// Serialization format.
        #[arg(long, value_enum, default_value_t)]
        format: ConfigFormatArg,
    },
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);
    logging::init_tracing(mode.verbose);

    match run(&cli.command, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::debug!(target: "appdeploy.cli", %error, "command failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: &Commands, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        Commands::Resolve {
            apps,
            all_apps,
            environment,
            assignments,
            sources,
        } => run_resolve(
            mode,
            ResolveCommandInput {
                apps,
                all_apps: *all_apps,
                environment: environment.as_deref(),
                assignments,
                sources: sources.to_sources(),
            },
        ),
        Commands::Apps { sources } => run_apps(mode, &sources.to_sources()),
        Commands::Config { command } => match command {
            ConfigCommands::Show { sources, format } => {
                run_config_show(&sources.to_sources(), *format)
            },
        },
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    if !output.stderr.is_empty() {
        io::stderr().write_all(output.stderr.as_bytes())?;
    }
    Ok(())
}
