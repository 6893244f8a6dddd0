use clap::{ArgAction, Parser, Subcommand};
use commands::{config, list, show, Settings};
use film_config::PathManager;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod view;

#[derive(Parser)]
#[command(name = "ghiblist")]
#[command(about = "ghiblist - Browse the Studio Ghibli film catalogue from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Films endpoint URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to a daily-rotated file instead of stderr
    /// (`--log-file` uses the platform log directory, `--log-file=PATH` a custom file)
    #[arg(long, global = true, value_name = "PATH", num_args = 0..=1, require_equals = true)]
    log_file: Option<Option<PathBuf>>,

    /// Never offer to retry a failed fetch
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    no_retry: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all films (default)
    #[command(long_about = "Fetch the film collection and list it in server order. On failure the reason is shown and, in an interactive terminal, a retry is offered.")]
    List,
    /// Show the detail view for one film
    #[command(long_about = "Fetch the film collection and show every available detail of the film with the given id.")]
    Show {
        /// Film id, as shown by `ghiblist list --output json`
        id: String,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .map(|path| path.unwrap_or_else(|| PathManager::default().log_file()));
    logging::init_logging_with_file(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let command = cli.command.unwrap_or(Commands::List);

    // `config init` must be able to replace a config file that no longer parses
    let settings = match &command {
        Commands::Config {
            cmd: Some(ConfigCommands::Init { .. }),
        } => Settings::without_file(cli.config, cli.endpoint, cli.no_retry),
        _ => Settings::resolve(cli.config, cli.endpoint, cli.no_retry)?,
    };

    match command {
        Commands::List => list::run_list(&settings, &output).await,
        Commands::Show { id } => show::run_show(&settings, &id, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &settings, &output)
        }
    }
}
