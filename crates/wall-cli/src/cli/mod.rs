//! CLI for ShortcutWall: serve the landing page and administer shortcuts.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wall_core::config;
use wall_core::listing::SortMode;
use wall_core::RecordKind;

use commands::{run_add, run_export, run_list, run_remove, run_serve, run_update};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "shortcut-wall")]
#[command(about = "ShortcutWall: website and network-folder shortcuts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the HTTP server.
    Serve {
        /// Override the configured port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Manage website shortcuts.
    Site {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage network-folder shortcuts.
    Folder {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Write a record's `.url` file to disk.
    Export {
        /// Record kind.
        #[arg(value_enum)]
        kind: KindArg,
        /// Record identifier.
        id: String,
        /// Output directory (default: current directory).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RecordAction {
    /// Add a record.
    Add {
        /// Display name.
        name: String,
        /// URL for sites, UNC or drive path for folders.
        target: String,
        #[arg(long)]
        description: Option<String>,
        /// Logo URL, or `/uploads/<file>` for an uploaded image.
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Update fields of a record; omitted fields are kept.
    Update {
        /// Record identifier.
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Remove a record (and its uploaded image).
    Remove {
        /// Record identifier.
        id: String,
    },

    /// List records.
    List {
        /// Ordering: alpha or recent.
        #[arg(long, value_enum, default_value_t = SortArg::Alpha)]
        sort: SortArg,
        /// Only show records whose name or description contains this text.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Site,
    Folder,
}

impl From<KindArg> for RecordKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Site => RecordKind::Site,
            KindArg::Folder => RecordKind::Folder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Alpha,
    Recent,
}

impl From<SortArg> for SortMode {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Alpha => SortMode::Alpha,
            SortArg::Recent => SortMode::Recent,
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { port } => {
                if let Some(port) = port {
                    cfg.port = port;
                }
                run_serve(cfg).await?
            }
            CliCommand::Site { action } => run_action(&cfg, RecordKind::Site, action).await?,
            CliCommand::Folder { action } => run_action(&cfg, RecordKind::Folder, action).await?,
            CliCommand::Export { kind, id, out } => {
                let out = match out {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_export(&cfg, kind.into(), &id, &out).await?
            }
        }

        Ok(())
    }
}

async fn run_action(cfg: &config::WallConfig, kind: RecordKind, action: RecordAction) -> Result<()> {
    let store = commands::open_store(cfg).await?;
    match action {
        RecordAction::Add {
            name,
            target,
            description,
            image_url,
        } => run_add(&store, kind, name, target, description, image_url).await,
        RecordAction::Update {
            id,
            name,
            target,
            description,
            image_url,
        } => run_update(&store, kind, &id, name, target, description, image_url).await,
        RecordAction::Remove { id } => run_remove(&store, kind, &id).await,
        RecordAction::List { sort, search } => {
            run_list(&store, kind, sort.into(), search.as_deref().unwrap_or_default()).await
        }
    }
}

#[cfg(test)]
mod tests;
