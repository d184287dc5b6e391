//! Command-line front end for vault status edits.
//!
//! # Responsibility
//! - Expose the status transitions as subcommands over an on-disk vault.
//! - Wire the vault store, metadata API and system clock into the service.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use notestatus_core::{
    default_log_level, init_logging, open_vault, parse_status, tracked_property_keys, Clock,
    DocumentStore, FrontMatterApi, MetadataApi, Status, StatusService, SystemClock,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notestatus")]
#[command(about = "Track workflow status in markdown front matter", long_about = None)]
#[command(version)]
struct Cli {
    /// Vault directory holding the notes
    #[arg(long, default_value = ".", global = true)]
    vault: PathBuf,

    /// Absolute directory for rolling log files; logging stays off without it
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the workflow status of a note
    Set {
        /// Target status (someday, todo, in-progress, waiting, completed)
        #[arg(value_parser = parse_status_arg)]
        status: Status,

        /// Vault-relative note path
        note: PathBuf,
    },

    /// Remove all tracked workflow properties from a note
    Clear {
        /// Vault-relative note path
        note: PathBuf,
    },

    /// Show the tracked workflow properties of a note
    Show {
        /// Vault-relative note path
        note: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|message| anyhow!(message))?;
    }

    let mut store = open_vault(&cli.vault)
        .with_context(|| format!("failed to open vault `{}`", cli.vault.display()))?;

    match cli.command {
        Commands::Set { status, note } => {
            store.set_active(Some(note.clone()));
            let meta = FrontMatterApi::new(&store);
            let service = StatusService::new(&store, meta, SystemClock);

            apply_transition(&service, status)
                .with_context(|| format!("failed to set status on `{}`", note.display()))?;

            info!(
                "event=cli_set module=cli status=ok vault_root={} note={} value={}",
                store.root().display(),
                note.display(),
                status.as_str()
            );
            println!("{}: status set to {}", note.display(), status.as_str());
        }
        Commands::Clear { note } => {
            store.set_active(Some(note.clone()));
            let meta = FrontMatterApi::new(&store);
            let service = StatusService::new(&store, meta, SystemClock);

            service
                .delete_status()
                .with_context(|| format!("failed to clear status on `{}`", note.display()))?;

            info!(
                "event=cli_clear module=cli status=ok vault_root={} note={}",
                store.root().display(),
                note.display()
            );
            println!("{}: cleared workflow properties", note.display());
        }
        Commands::Show { note } => {
            let meta = FrontMatterApi::new(&store);
            let properties = meta
                .properties(&note)
                .with_context(|| format!("failed to read `{}`", note.display()))?;

            let mut shown = false;
            for key in tracked_property_keys() {
                if let Some(property) = properties.iter().find(|property| property.key == *key) {
                    println!("{}: {}", property.key, property.value);
                    shown = true;
                }
            }
            if !shown {
                println!("no tracked workflow properties");
            }
        }
    }

    Ok(())
}

fn apply_transition<S: DocumentStore, M: MetadataApi, C: Clock>(
    service: &StatusService<'_, S, M, C>,
    status: Status,
) -> Result<()> {
    match status {
        Status::Someday => service.set_status_someday(),
        Status::Todo => service.set_status_todo(),
        Status::InProgress => service.set_status_in_progress(),
        Status::Waiting => service.set_status_waiting(),
        Status::Completed => service.set_status_completed(),
    }?;
    Ok(())
}

fn parse_status_arg(value: &str) -> Result<Status, String> {
    parse_status(value).map_err(|err| err.to_string())
}
