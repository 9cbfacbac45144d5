#![forbid(unsafe_code)]

mod cmd;
mod output;
mod source;

use anyhow::Context as _;
use board_core::config::{load_user_config, resolve_prefs_path};
use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "bv: ticket board viewer with persistent grouping and ordering",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Output format (overrides --json and the FORMAT env var).
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    format: Option<OutputMode>,

    /// Preference file to read and write.
    #[arg(long, global = true, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Keep preference changes in memory for this run only.
    #[arg(long, global = true, conflicts_with = "prefs")]
    no_persist: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Board",
        about = "Render the board",
        long_about = "Load tickets and users, then render them grouped and ordered by the saved preferences.",
        after_help = "EXAMPLES:\n    # Fetch from the configured endpoint\n    bv board\n\n    # Render a local snapshot grouped by assignee\n    bv board --input board.json --group-by by-user\n\n    # Emit machine-readable output\n    bv board --input board.json --json"
    )]
    Board(cmd::board::BoardArgs),

    #[command(
        next_help_heading = "Preferences",
        about = "Change how tickets are grouped",
        after_help = "EXAMPLES:\n    # Columns per assignee\n    bv group by-user\n\n    # Stored labels work too\n    bv group \"By Priority\""
    )]
    Group(cmd::group::GroupArgs),

    #[command(
        next_help_heading = "Preferences",
        about = "Change how tickets are ordered within a column",
        after_help = "EXAMPLES:\n    # Alphabetical\n    bv sort title\n\n    # Most urgent first\n    bv sort priority"
    )]
    Sort(cmd::sort::SortArgs),

    #[command(
        next_help_heading = "Preferences",
        about = "Show the saved view preferences",
        after_help = "EXAMPLES:\n    bv prefs\n\n    bv prefs --json"
    )]
    Prefs,

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash\n    bv completions bash > ~/.local/share/bash-completion/completions/bv\n\n    # Zsh\n    bv completions zsh > ~/.zfunc/_bv"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

/// Initialize tracing subscriber with env filter and format selection.
///
/// `BOARDVIEW_LOG` takes precedence; otherwise `--verbose` or `DEBUG` turns on
/// debug output for this workspace. `BOARDVIEW_LOG_FORMAT=json` switches the
/// format. Logs go to stderr.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BOARDVIEW_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "board_core=debug,bv=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("BOARDVIEW_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn build_context(cli: &Cli, output: OutputMode) -> anyhow::Result<cmd::Context> {
    let config = load_user_config().context("failed to load boardview config")?;

    let prefs_path = if cli.no_persist {
        None
    } else {
        let resolved = resolve_prefs_path(cli.prefs.as_deref(), &config);
        if resolved.is_none() {
            warn!("no config directory available; preferences will not persist");
        }
        resolved
    };

    debug!(?prefs_path, endpoint = %config.source.endpoint, "resolved context");
    Ok(cmd::Context {
        output,
        quiet: cli.quiet,
        config,
        prefs_path,
    })
}

fn run(cli: &Cli, ctx: &cmd::Context) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Board(args) => cmd::board::run_board(args, ctx),
        Commands::Group(args) => cmd::group::run_group(args, ctx),
        Commands::Sort(args) => cmd::sort::run_sort(args, ctx),
        Commands::Prefs => cmd::prefs::run_prefs(ctx),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    let result = build_context(&cli, output).and_then(|ctx| run(&cli, &ctx));

    if let Err(err) = result {
        let cli_err = err
            .downcast_ref::<board_core::error::BoardError>()
            .map_or_else(|| CliError::new(format!("{err:#}")), CliError::from);
        render_error(output, &cli_err)?;
        std::process::exit(1);
    }
    Ok(())
}
