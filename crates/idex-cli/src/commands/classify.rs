//! Classify command - report the document type of a single file.

use std::path::PathBuf;

use clap::Args;
use console::style;

use idex_core::IdentityExtractor;

use super::{extract_document, load_config};

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Input file (image, or `.txt` with OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Print the classification as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ClassifyArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let extractor = IdentityExtractor::from_config(&config.extraction);
    let classification = extract_document(&args.input, &extractor, &config)?.classification;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    println!(
        "{} ({})",
        style(classification.document_type).bold(),
        classification.document_type.description()
    );

    match (classification.signature, &classification.matched) {
        (Some(signature), Some(matched)) => {
            println!("  signature: {}", signature);
            println!("  matched:   {}", matched);
        }
        _ => {
            println!("  {} no signature matched", style("ℹ").blue());
        }
    }

    Ok(())
}
