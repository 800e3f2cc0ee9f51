//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use qilin_client::QilinClient;
use qilin_core::config::ClientConfig;
use qilin_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration (credentials masked)
    Show,
    /// Validate configuration and build a client from it
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = masked(super::load_config(config_path)?);
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                OutputFormat::Table => {
                    output::print_kv("Endpoint", &config.endpoint);
                    output::print_kv("Auth scheme", &format!("{:?}", config.auth.scheme));
                    output::print_kv("Auth token", config.auth.token.as_deref().unwrap_or("-"));
                    output::print_kv(
                        "Timeout",
                        &format!("{}s", config.transport.timeout_seconds),
                    );
                    output::print_kv("Log level", &config.logging.level);
                }
            }
        }
        ConfigCommand::Validate => {
            let config = super::load_config(config_path)?;
            let client = QilinClient::from_config(&config)?;

            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Endpoint", client.endpoint().as_str());
            output::print_kv("Auth scheme", client.auth().scheme());
        }
    }

    Ok(())
}

/// Replace the auth token with a fixed mask
fn masked(mut config: ClientConfig) -> ClientConfig {
    if config.auth.token.is_some() {
        config.auth.token = Some("********".to_string());
    }
    config
}
