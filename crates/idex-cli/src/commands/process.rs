//! Process command - extract fields from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use idex_core::models::config::LayoutProfile;
use idex_core::{ExtractionResult, IdentityExtractor};

use super::{extract_document, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (image, or `.txt` with OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Layout profile, overriding the config file
    #[arg(short, long)]
    layout: Option<LayoutProfile>,

    /// Show the detected document type and warnings
    #[arg(long)]
    show_type: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object of field name to value
    Json,
    /// CSV with a header row
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(layout) = args.layout {
        config.extraction.layout = layout;
    }

    info!("Processing file: {}", args.input.display());

    let extractor = IdentityExtractor::from_config(&config.extraction);
    let result = extract_document(&args.input, &extractor, &config)?;

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_type {
        eprintln!();
        eprintln!(
            "{} Document type: {} ({})",
            style("ℹ").blue(),
            result.document_type(),
            result.document_type().description()
        );
        eprintln!(
            "{} Resolved {}/{} fields",
            style("ℹ").blue(),
            result.record.resolved_count(),
            result.record.fields().len()
        );
        for warning in &result.warnings {
            eprintln!("  {} {}", style("-").yellow(), warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.record)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["document_type"];
    header.extend(result.record.keys());
    wtr.write_record(&header)?;

    let mut row = vec![result.document_type().as_str()];
    row.extend(result.record.entries().map(|(_, value)| value));
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Document: {} ({})\n",
        result.document_type(),
        result.document_type().description()
    ));
    output.push('\n');

    let width = result.record.keys().map(str::len).max().unwrap_or(0);
    for (name, value) in result.record.entries() {
        output.push_str(&format!("  {:<width$}  {}\n", format!("{name}:"), value, width = width + 1));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use idex_core::DocumentExtractor;

    const TAX_CARD: &str = "INCOME TAX DEPARTMENT\nJOHN SMITH\nFather's Name\nROBERT SMITH\n\
        Date of Birth\n01/02/1990\nPermanent Account Number\nABCDE1234F";

    #[test]
    fn test_format_csv() {
        let result = IdentityExtractor::new().extract_from_text(TAX_CARD);
        let csv = format_result(&result, OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "document_type,Name,Father Name,Date of Birth,PAN\n\
             TAX_ID,JOHN SMITH,ROBERT SMITH,01/02/1990,ABCDE1234F\n"
        );
    }

    #[test]
    fn test_format_text() {
        let result = IdentityExtractor::new().extract_from_text(TAX_CARD);
        let text = format_result(&result, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Document: TAX_ID (Tax ID card (PAN))\n"));
        let pan_line = text.lines().find(|l| l.starts_with("  PAN:")).unwrap();
        assert!(pan_line.ends_with("  ABCDE1234F"));
    }

    #[test]
    fn test_format_json_keeps_record_order() {
        let result = IdentityExtractor::new().extract_from_text("");
        let json = format_result(&result, OutputFormat::Json).unwrap();
        let name = json.find("\"Name\"").unwrap();
        let number = json.find("\"Number\"").unwrap();
        assert!(name < number);
    }
}
