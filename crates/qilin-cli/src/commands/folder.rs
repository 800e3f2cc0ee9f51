//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use qilin_client::Persistable;
use qilin_core::error::AppError;
use qilin_core::types::ResourceId;
use qilin_entity::folder::{Folder, FolderResponse};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent_id: Option<u64>,
    },
    /// Rename or move an existing folder
    Update {
        /// Folder ID
        #[arg(short, long)]
        id: u64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New parent folder ID
        #[arg(short, long, conflicts_with = "root")]
        parent_id: Option<u64>,
        /// Move the folder to the root
        #[arg(long)]
        root: bool,
    },
    /// Delete a folder
    Delete {
        /// Folder ID
        #[arg(short, long)]
        id: u64,
    },
    /// Show the tree reconstructed from a saved folder response
    Inspect {
        /// Path to a JSON file holding a folder response
        #[arg(short = 'F', long)]
        file: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Parent ID
    parent: String,
    /// Subfolder count
    children: usize,
    /// Document count
    documents: usize,
    /// Created at
    created_at: String,
    /// Updated at
    updated_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            name: f.name().unwrap_or("-").to_string(),
            parent: f
                .parent()
                .and_then(Folder::id)
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            children: f.child_count(),
            documents: f.document_count(),
            created_at: super::format_timestamp(f.created_at()),
            updated_at: super::format_timestamp(f.updated_at()),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::Create { name, parent_id } => {
            let client = super::build_client(config_path)?;

            let mut folder = Folder::new().with_client(client);
            folder.set_name(name.clone());
            if let Some(pid) = parent_id {
                let mut parent = Folder::new();
                parent.set_id(Some(ResourceId(*pid)));
                folder.set_parent(Some(parent));
            }

            let response = folder.save().await?;
            print_response(response.into_data(), format)?;
        }
        FolderCommand::Update {
            id,
            name,
            parent_id,
            root,
        } => {
            let client = super::build_client(config_path)?;

            let mut folder = Folder::new().with_client(client);
            folder.set_id(Some(ResourceId(*id)));
            if let Some(name) = name {
                folder.set_name(name.clone());
            }
            if let Some(pid) = parent_id {
                let mut parent = Folder::new();
                parent.set_id(Some(ResourceId(*pid)));
                folder.set_parent(Some(parent));
            }

            let mut payload = folder.save_payload();
            if *root {
                payload.parent = Some(None);
            }
            if payload == Default::default() {
                return Err(AppError::validation(
                    "Nothing to update: pass --name, --parent-id or --root",
                ));
            }

            let response = folder.save_with(&payload).await?;
            print_response(response.into_data(), format)?;
        }
        FolderCommand::Delete { id } => {
            let client = super::build_client(config_path)?;

            let mut folder = Folder::new().with_client(client);
            folder.set_id(Some(ResourceId(*id)));
            folder.destroy().await?;

            output::print_success(&format!("Folder {} deleted", id));
        }
        FolderCommand::Inspect { file } => {
            let raw = tokio::fs::read_to_string(file)
                .await
                .map_err(|e| AppError::validation(format!("Failed to read '{}': {}", file, e)))?;
            let response: FolderResponse = serde_json::from_str(&raw)?;
            let folder = Folder::from_response(response, None);

            let rendered = match format {
                OutputFormat::Json => {
                    let mut rows: Vec<FolderRow> = vec![FolderRow::from(&folder)];
                    rows.extend(folder.children().iter().map(FolderRow::from));
                    output::render_rows(&rows, format)?
                }
                OutputFormat::Table => output::render_tree(&folder),
            };
            output::emit(&rendered);
        }
    }

    Ok(())
}

fn print_response(response: FolderResponse, format: OutputFormat) -> Result<(), AppError> {
    let folder = Folder::from_response(response, None);
    output::emit(&output::render_row(&FolderRow::from(&folder), format)?);
    Ok(())
}
