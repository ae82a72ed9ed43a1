//! CLI binary entrypoint.

mod attr_arg;
mod commands;
mod error;
mod wiring;

use attr_arg::{AttrArg, parse_attr_arg, parse_level_arg};
use clap::{Parser, Subcommand};
use commands::{ConfigFormat, EmitCommandInput, run_config_show, run_demo, run_emit};
use error::{CliError, ExitCode};
use logbridge_config::load_logger_config_std_env;
use logbridge_ports::Level;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "logbridge",
    version,
    about = "Structured logging bridge onto a leveled JSON event logger",
    long_about = None
)]
struct Cli {
    /// Logger config file (JSON/TOML). Env vars `LOGBRIDGE_*` override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log the demo records through the bridge.
    Demo,
    /// Log one record through the bridge.
    Emit {
        /// Level name (`trace` … `fatal`) or integer rank.
        #[arg(long, default_value = "info", value_parser = parse_level_arg)]
        level: Level,
        /// Record message.
        #[arg(long)]
        message: String,
        /// Attribute as `key=value`; repeatable. Values are typed by inference.
        #[arg(long = "attr", value_parser = parse_attr_arg)]
        attrs: Vec<AttrArg>,
        /// Group to open before logging; repeatable, outermost first.
        #[arg(long = "group")]
        groups: Vec<String>,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config (file + env + defaults).
    Show {
        /// Output format.
        #[arg(long, value_enum, default_value_t = ConfigFormat::Json)]
        format: ConfigFormat,
    },
}

#[derive(Debug)]
pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        let _ = writeln!(io::stderr(), "warning: tracing subscriber already installed");
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::debug!(exit_code = error.exit_code().as_u8(), "command failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(cli: &Cli) -> Result<CliOutput, CliError> {
    let config = load_logger_config_std_env(cli.config.as_deref()).map_err(CliError::Config)?;

    match &cli.command {
        Commands::Demo => run_demo(&config),
        Commands::Emit {
            level,
            message,
            attrs,
            groups,
        } => run_emit(
            &config,
            &EmitCommandInput {
                level: *level,
                message,
                attrs,
                groups,
            },
        ),
        Commands::Config { command } => match command {
            ConfigCommands::Show { format } => run_config_show(&config, *format),
        },
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
