use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use hemo_cli::commands;
use hemo_cli::config::{self, ConfigOrigin, LogFormat, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "hemo",
    version,
    about = "Heuristic CBC screening: scores a Complete Blood Count report",
    long_about = "hemo scores Complete Blood Count reports against fixed normal ranges\n\
        and clinical threshold rules, and prints a risk level, the abnormal\n\
        parameters, matched indicators and recommendations.\n\n\
        EXAMPLES:\n\
        \n  hemo analyze report.json            Analyse one report\n\
        \n  hemo batch reports.json             Analyse a JSON array of reports\n\
        \n  hemo --output pretty form form.json Validate raw form input and analyse\n\
        \n  cat report.json | hemo analyze      Read the report from stdin\n\n\
        This is a screening aid, not a diagnosis."
)]
struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (defaults to the config file setting)
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Config file path (defaults to $HEMO_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse one report (JSON) from FILE or stdin
    Analyze { file: Option<PathBuf> },

    /// Analyse a JSON array of reports from FILE or stdin
    Batch { file: Option<PathBuf> },

    /// Validate a raw form submission (string values) and analyse it
    Form { file: Option<PathBuf> },

    /// Print the normal-range table
    Ranges,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective config and where it was loaded from
    Show,
    /// Write a config file with default settings
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8, json: bool) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr; stdout carries the results.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_path = config::config_path(cli.config.as_deref())?;
    let loaded = config::load_config(&config_path)?;
    let config = loaded.config;

    init_logging(cli.verbose, cli.log_json || config.log_format == LogFormat::Json);
    match loaded.origin {
        ConfigOrigin::Defaults => {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        }
        ConfigOrigin::File => {
            tracing::debug!(path = %config_path.display(), ?config, "config loaded");
        }
        ConfigOrigin::Migrated { from } => {
            tracing::info!(
                path = %config_path.display(),
                from,
                to = config.config_version,
                "migrated config from an older version"
            );
        }
    }

    let output_format = cli.output.unwrap_or(config.output);

    let output = match cli.command {
        Command::Analyze { file } => commands::analyze(&commands::read_input(file.as_deref())?)?,
        Command::Batch { file } => {
            commands::batch(&commands::read_input(file.as_deref())?, config.max_batch)?
        }
        Command::Form { file } => {
            let today = jiff::Zoned::now().date();
            commands::form(&commands::read_input(file.as_deref())?, today)?
        }
        Command::Ranges => commands::ranges(),
        Command::Config { action } => {
            match action {
                ConfigAction::Show => {
                    println!("# {}", config_path.display());
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                ConfigAction::Init { force } => {
                    config::init_config(&config_path, force)?;
                    println!("wrote {}", config_path.display());
                }
            }
            return Ok(());
        }
    };

    println!("{}", output.render(output_format)?);
    Ok(())
}
