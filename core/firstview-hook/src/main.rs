//! firstview-hook: CLI host adapter for Firstview first-view tracking.
//!
//! Editor integration glue calls this binary at the lifecycle points the
//! host exposes:
//!
//! - `activate`: workspace window opened; runs the first-view check
//! - `reset`: the `firstview.cmd.reset` command
//! - `config-changed`: the mirrored seen setting was edited externally
//! - `status`: diagnostics for the current workspace

mod logging;

use clap::{Parser, Subcommand};
use firstview_core::{
    ActivationOutcome, CommandNotifier, FirstviewEngine, FirstviewError, StorageConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firstview-hook")]
#[command(about = "First-view README tracker")]
#[command(version)]
struct Cli {
    /// Project workspace root (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    workspace: Option<PathBuf>,

    /// Command used to open the README instead of the platform opener
    #[arg(long, global = true, value_name = "CMD")]
    open_with: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the first-view check for the workspace
    Activate,

    /// Clear the seen marker and the mirrored flag
    Reset,

    /// Re-derive the mirrored flag after an external settings edit
    ConfigChanged,

    /// Report tracking state for the workspace
    Status {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let storage = StorageConfig::default();
    let _logging_guard = logging::init(&storage);

    let workspace = cli.workspace.or_else(|| std::env::current_dir().ok());
    let notifier = match cli.open_with {
        Some(command) => CommandNotifier::with_command(command),
        None => CommandNotifier::new(),
    };
    let mut engine = FirstviewEngine::with_storage(storage, workspace, Box::new(notifier));

    let result = match cli.command {
        Commands::Activate => run_activate(&mut engine),
        Commands::Reset => engine.reset(),
        Commands::ConfigChanged => engine.reconcile().map(|_| ()),
        Commands::Status { json } => run_status(&engine, json),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "firstview-hook failed");
        eprintln!("firstview: {e}");
        std::process::exit(1);
    }
}

fn run_activate(engine: &mut FirstviewEngine) -> firstview_core::Result<()> {
    match engine.activate()? {
        ActivationOutcome::FirstShown => {
            tracing::info!("README shown for the first time")
        }
        ActivationOutcome::AlreadySeen => {
            tracing::debug!("README seen before; nothing to do")
        }
        ActivationOutcome::NoReadme => tracing::debug!("Workspace has no README"),
        ActivationOutcome::AlreadyChecked => {
            tracing::debug!("Check already ran this activation")
        }
    }
    Ok(())
}

fn run_status(engine: &FirstviewEngine, json: bool) -> firstview_core::Result<()> {
    let report = engine.status()?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|source| FirstviewError::Json {
                context: "serializing status report".to_string(),
                source,
            })?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Workspace:   {}", report.workspace);
    println!("README:      {}", if report.readme_found { "found" } else { "missing" });
    println!("Seen:        {}", report.seen);
    println!("Flag:        {}", report.flag);
    if !report.in_sync {
        println!("             (flag drifted; `config-changed` will repair it)");
    }
    println!("Marker:      {}", report.marker_path);
    println!("Storage:     {}", report.storage_root);
    Ok(())
}
