//! CLI command definitions and dispatch.

pub mod config;
pub mod document;
pub mod folder;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use qilin_client::QilinClient;
use qilin_core::config::ClientConfig;
use qilin_core::error::AppError;

/// Qilin: manage folders and documents on a Qilin Engine backend
#[derive(Debug, Parser)]
#[command(name = "qilin", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/qilin.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Document management
    Document(document::DocumentArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, &self.config, self.format).await,
            Commands::Document(args) => document::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<ClientConfig, AppError> {
    ClientConfig::load(config_path)
}

/// Helper: build a shared client from configuration
pub fn build_client(config_path: &str) -> Result<Arc<QilinClient>, AppError> {
    let config = load_config(config_path)?;
    let client = QilinClient::from_config(&config)?;
    tracing::debug!(endpoint = %client.endpoint(), "Client ready");
    Ok(Arc::new(client))
}

/// Format a timestamp for table output
pub fn format_timestamp(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
