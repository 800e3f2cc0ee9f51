//! Document management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use qilin_client::Persistable;
use qilin_core::error::AppError;
use qilin_core::types::ResourceId;
use qilin_entity::document::{Document, DocumentResponse};

/// Arguments for document commands
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Document subcommand
    #[command(subcommand)]
    pub command: DocumentCommand,
}

/// Document subcommands
#[derive(Debug, Subcommand)]
pub enum DocumentCommand {
    /// Create a new document
    Create,
    /// Delete a document
    Delete {
        /// Document ID
        #[arg(short, long)]
        id: u64,
    },
}

/// Document display row
#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    /// Document ID
    id: String,
    /// Number of versions
    versions: usize,
    /// Created at
    created_at: String,
    /// Updated at
    updated_at: String,
}

impl From<DocumentResponse> for DocumentRow {
    fn from(d: DocumentResponse) -> Self {
        Self {
            id: d.id.to_string(),
            versions: d.document_versions.len(),
            created_at: super::format_timestamp(d.created_at),
            updated_at: super::format_timestamp(d.updated_at),
        }
    }
}

/// Execute document commands
pub async fn execute(
    args: &DocumentArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::build_client(config_path)?;

    match &args.command {
        DocumentCommand::Create => {
            let document = Document::new().with_client(client);
            let response = document.save().await?;
            output::emit(&output::render_row(
                &DocumentRow::from(response.into_data()),
                format,
            )?);
        }
        DocumentCommand::Delete { id } => {
            let mut document = Document::new().with_client(client);
            document.set_id(Some(ResourceId(*id)));
            let response = document.destroy().await?;

            match response.data {
                Some(data) => output::emit(&output::render_row(&DocumentRow::from(data), format)?),
                None => output::print_success(&format!("Document {} deleted", id)),
            }
        }
    }

    Ok(())
}
