mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{add, launch, list, path, remove, rename, update};

#[derive(Parser)]
#[command(
    name = "urun",
    version,
    about = "Launch files, programs and folders by short aliases",
    arg_required_else_help = true
)]
struct Cli {
    /// Use this alias store instead of ~/urun_data/config
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Print debug diagnostics (overridden by URUN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an alias; prompts for the target when --target is omitted
    Add {
        /// Name to launch the target by
        name: String,

        /// Path to a file, program or folder, or `browsify` / `browsefolder`
        #[arg(long, short)]
        target: Option<String>,

        /// Directory to start the target in (default: its parent folder)
        #[arg(long, value_name = "DIR")]
        cwd: Option<String>,
    },

    /// Remove an alias
    Remove {
        name: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List all aliases in the order they were added
    List,

    /// Give an alias a new name
    Rename { old: String, new: String },

    /// Point an existing alias at a new target
    Update {
        name: String,

        /// New target path, or `browsify` / `browsefolder`
        #[arg(long, short)]
        target: Option<String>,

        /// New working directory
        #[arg(long, value_name = "DIR")]
        cwd: Option<String>,
    },

    /// Print the alias store location
    Path,

    /// Launch an alias: `urun <name>`
    #[command(external_subcommand)]
    Launch(Vec<String>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = cli.store.as_deref();
    match cli.command {
        Commands::Add { name, target, cwd } => add::cmd_add(store, &name, target, cwd)?,
        Commands::Remove { name, yes } => remove::cmd_remove(store, &name, yes)?,
        Commands::List => list::cmd_list(store)?,
        Commands::Rename { old, new } => rename::cmd_rename(store, &old, &new)?,
        Commands::Update { name, target, cwd } => update::cmd_update(store, &name, target, cwd)?,
        Commands::Path => path::cmd_path(store)?,
        Commands::Launch(args) => launch::cmd_launch(store, &args)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("URUN_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// One line on stderr, and an exit code chosen by the library error if
/// there is one underneath the context.
fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("error: {err:#}");
    match err.downcast_ref::<urun::Error>() {
        Some(e) => ExitCode::from(e.exit_code().max(1)),
        None => ExitCode::FAILURE,
    }
}
