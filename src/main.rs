//! CLI entry point and command handlers for confirma.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use confirma::check::{builtin_assertions, Checker, SUCCESS_MESSAGE};
use confirma::config::Config;
use confirma::intent::{Intent, PatternSet};
use confirma::ui::{self, colors};

#[derive(Parser)]
#[command(name = "confirma")]
#[command(version)]
#[command(about = "Smoke checks for confirmation phrase patterns", long_about = None)]
#[command(
    after_help = "With no command, runs the built-in checks and exits 0 if every pattern\nmatches its sample, 1 otherwise."
)]
struct Cli {
    /// Config file overriding pattern sources (default: .confirma/config.md if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Suppress the success line
    #[arg(long, short, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in checks (default)
    Run,
    /// Test one phrase against the pattern for an intent
    Match {
        /// affirmative, with-invoice or without-invoice
        intent: Intent,
        /// Phrase to test
        text: String,
    },
    /// List the active pattern for each intent
    Patterns,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("CONFIRMA_QUIET", "1");
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(cli.config.as_deref()),
        Commands::Match { intent, text } => cmd_match(cli.config.as_deref(), intent, &text),
        Commands::Patterns => cmd_patterns(cli.config.as_deref()),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
    }
}

/// Diagnostics go to stderr so stdout stays limited to command output.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the pattern set from an explicit config path, or the default
/// config file when one exists.
fn load_patterns(config_path: Option<&Path>) -> Result<PatternSet> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.pattern_set()
}

fn cmd_run(config_path: Option<&Path>) -> Result<()> {
    let patterns = load_patterns(config_path)?;
    let assertions = builtin_assertions();

    match Checker::new(&patterns).run(&assertions) {
        Ok(report) => {
            tracing::info!(passed = report.passed, total = report.total, "checks passed");
            if !ui::is_quiet() {
                println!("{}", SUCCESS_MESSAGE);
            }
            Ok(())
        }
        Err(failure) => {
            tracing::info!(
                index = failure.index,
                skipped = failure.skipped,
                "check failed"
            );
            eprintln!("{}", failure.message);
            std::process::exit(1);
        }
    }
}

fn cmd_match(config_path: Option<&Path>, intent: Intent, text: &str) -> Result<()> {
    let patterns = load_patterns(config_path)?;
    let pattern = patterns.get(intent);

    match pattern.find(text) {
        Some(matched) => {
            println!(
                "{} {}",
                colors::success("match"),
                colors::secondary(&format!("({:?})", matched))
            );
            Ok(())
        }
        None => {
            println!("{}", colors::error("no match"));
            std::process::exit(1);
        }
    }
}

fn cmd_patterns(config_path: Option<&Path>) -> Result<()> {
    let patterns = load_patterns(config_path)?;

    for pattern in patterns.iter() {
        println!(
            "{:<16} {:<8} {}",
            colors::identifier(&pattern.intent().to_string()),
            ui::origin_marker(pattern.origin()),
            pattern.source()
        );
    }

    Ok(())
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "confirma", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("confirma {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}
