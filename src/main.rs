//! @ai:module:intent CLI entry point for the number processing terminal
//! @ai:module:layer presentation
//! @ai:module:depends_on app, config, display

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use numproc::{AppConfig, OutputFormat, Session, TerminalPresenter};
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "numproc.toml";

#[derive(Parser)]
#[command(name = "numproc")]
#[command(about = "Interactive number processing terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable cosmetic delays
    #[arg(long)]
    no_delay: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format for result summaries
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("numproc=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init { output }) => init_config(output.clone()),
        None => run_terminal(&cli),
    }
}

/// @ai:intent Run the interactive session over stdin/stdout
/// @ai:effects io
fn run_terminal(cli: &Cli) -> Result<()> {
    let mut config = load_or_default_config(cli.config.clone())?;

    if cli.no_delay {
        config.display.pacing.enabled = false;
    }

    if cli.no_color {
        config.display.color = false;
    }

    if let Some(format) = cli.format {
        config.display.format = format.into();
    }

    tracing::debug!(?config, "starting terminal");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let presenter = TerminalPresenter::new(stdout.lock(), config.display);

    let mut session = Session::new(stdin.lock(), presenter);
    session.run().context("terminal session failed")?;
    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = AppConfig::default();
    config
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(&p).with_context(|| format!("failed to load {}", p.display())),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG);

            if default_path.exists() {
                AppConfig::load(&default_path)
                    .with_context(|| format!("failed to load {}", default_path.display()))
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}
