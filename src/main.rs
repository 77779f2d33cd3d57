use clap::{Parser, Subcommand};
use cmdr::commands;
use cmdr::config::{self, Config};
use cmdr::logging::{self, LogHandle, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use cmdr::panel::FormFactor;
use cmdr::tui;

#[derive(Parser)]
#[command(name = "cmdr")]
#[command(
    about = "Command manager settings panel",
    long_about = "Command manager settings panel\n\nIf no command is specified, the program opens the settings panel."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use the compact layout (tab list with a back control)
    #[arg(long, global = true, conflicts_with = "full")]
    compact: bool,

    /// Use the full layout (title header and tab strip)
    #[arg(long, global = true)]
    full: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current configuration
    Config,
    /// List the panel's tabs
    Tabs,
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn resolve_form_factor(cli: &Cli, config: &Config) -> FormFactor {
    if cli.compact {
        FormFactor::Compact
    } else if cli.full {
        FormFactor::Full
    } else {
        config.form_factor
    }
}

fn init_logging(log_level: &str, log_file: &str, debug: bool) -> Option<LogHandle> {
    let handle = match logging::init_logging(log_level, log_file) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{}", e);
            return None;
        }
    };
    if debug {
        if let Err(e) = handle.set_debug(true) {
            eprintln!("{}", e);
        }
    }
    Some(handle)
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();
    config.form_factor = resolve_form_factor(&cli, &config);

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    let log = if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file, config.settings.debug)
    } else {
        None
    };

    let result = match cli.command {
        None => tui::run(config, log).await.map_err(anyhow::Error::from),
        Some(Commands::Config) => commands::config::run(&config),
        Some(Commands::Tabs) => commands::tabs::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
