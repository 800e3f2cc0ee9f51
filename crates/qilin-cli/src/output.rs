//! Rendering of command results.
//!
//! Rows render to a `String` first so the layout can be checked without a
//! terminal; the `emit_*` helpers write the result to stdout.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use qilin_core::error::AppError;
use qilin_entity::Folder;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Render resource rows as a table or a JSON array.
pub fn render_rows<T: Serialize + Tabled>(
    rows: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Table if rows.is_empty() => Ok("(no resources)".to_string()),
        OutputFormat::Table => Ok(Table::new(rows).with(Style::sharp()).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Render one resource as a single-row table or a JSON object.
pub fn render_row<T: Serialize + Tabled>(row: &T, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => render_rows(std::slice::from_ref(row), format),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(row)?),
    }
}

/// Render a folder with its parent, children and documents as an indented tree.
pub fn render_tree(folder: &Folder) -> String {
    let mut lines = Vec::new();
    let mut indent = "";
    if let Some(parent) = folder.parent() {
        lines.push(format!("{} ({})", label(parent), folder_ref(parent)));
        indent = "  ";
    }
    lines.push(format!("{indent}{}/ ({})", label(folder), folder_ref(folder)));

    for child in folder.children() {
        lines.push(format!("{indent}  {}/ ({})", label(child), folder_ref(child)));
    }
    for document in folder.documents() {
        let id = document
            .id()
            .map(|id| format!("#{id}"))
            .unwrap_or_else(|| "unsaved".to_string());
        lines.push(format!(
            "{indent}  document {id} [{} versions]",
            document.versions().len()
        ));
    }
    lines.join("\n")
}

fn label(folder: &Folder) -> &str {
    folder.name().unwrap_or("-")
}

fn folder_ref(folder: &Folder) -> String {
    folder
        .id()
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| "unsaved".to_string())
}

/// Write rendered output to stdout.
pub fn emit(rendered: &str) {
    println!("{rendered}");
}

/// Print a confirmation line
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error line on stderr
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", key), value);
}
