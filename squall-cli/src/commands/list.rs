//! List command implementation.
//!
//! This module implements the `list` command, which displays entries in
//! various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{describe_block, extra_options, load_document, GlobalOptions};
use clap::{Args, ValueEnum};
use squall::{ConfigDocument, Defaults, HostBlock, Settings};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["host", "hostname", "user", "port", "options"];

/// List all entries.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (doc, _path) = load_document(global)?;
        let settings = Settings::load();

        match self.format {
            OutputFormat::Table => format_as_table(&doc, &settings.defaults)?,
            OutputFormat::Json => format_as_json(&doc)?,
            OutputFormat::Csv => format_as_delimited(&doc, b',')?,
            OutputFormat::Tsv => format_as_delimited(&doc, b'\t')?,
        }

        Ok(())
    }
}

/// Entries shown in the per-host part of the listing; `Host *` belongs
/// to the general-options section instead.
fn entry_blocks(doc: &ConfigDocument) -> impl Iterator<Item = &HostBlock> {
    doc.blocks().iter().filter(|b| b.pattern() != "*")
}

fn format_as_table(doc: &ConfigDocument, defaults: &Defaults) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "Listing entries:")?;
    writeln!(handle)?;

    for block in entry_blocks(doc) {
        write!(handle, "    {}", describe_block(block, defaults))?;
        let extras = extra_options(block);
        if !extras.is_empty() {
            write!(handle, "\n\t[custom options] {}", extras.join(" "))?;
        }
        writeln!(handle)?;
        writeln!(handle)?;
    }

    let general: Vec<&squall::Directive> = doc
        .preamble()
        .directives()
        .iter()
        .chain(
            doc.blocks()
                .iter()
                .filter(|b| b.pattern() == "*")
                .flat_map(|b| b.directives().iter()),
        )
        .collect();
    if !general.is_empty() {
        writeln!(handle, "   (*) General options:")?;
        for directive in general {
            writeln!(handle, "\t  {}: {}", directive.key(), directive.value())?;
        }
    }

    Ok(())
}

fn format_as_json(doc: &ConfigDocument) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = doc
        .blocks()
        .iter()
        .map(|block| {
            serde_json::json!({
                "host": block.pattern(),
                "order": block.order(),
                "options": options_json(block),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Collapse a block's directives to a JSON object; repeated keys become
/// arrays, in file order.
fn options_json(block: &HostBlock) -> serde_json::Value {
    let mut options = serde_json::Map::new();
    for directive in block.directives() {
        let value = serde_json::Value::String(directive.value().to_string());
        match options.entry(directive.key().to_string()) {
            serde_json::map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
            serde_json::map::Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if let serde_json::Value::Array(items) = existing {
                    items.push(value);
                } else {
                    let first = existing.take();
                    *existing = serde_json::Value::Array(vec![first, value]);
                }
            }
        }
    }
    serde_json::Value::Object(options)
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn format_as_delimited(doc: &ConfigDocument, delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for block in entry_blocks(doc) {
        let field = |key: &str| {
            block
                .find_directive(key)
                .map_or(String::new(), |d| d.value().to_string())
        };
        writer
            .write_record(&[
                block.pattern(),
                field("hostname"),
                field("user"),
                field("port"),
                extra_options(block).join(" "),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
