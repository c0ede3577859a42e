//! Config command - inspect and edit the JSON configuration file.
//!
//! Every subcommand works on the file named by the global `--config` flag,
//! or on the per-user file when the flag is absent.

use std::fs;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use idex_core::models::config::IdexConfig;

use super::{load_config, resolve_config_path};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration commands run with
    Show,

    /// Write a configuration file holding the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, e.g. `extraction.layout`
    Get {
        /// Key in `<section>.<field>` form
        key: String,
    },

    /// Change one value and save the file
    Set {
        /// Key in `<section>.<field>` form
        key: String,
        /// New value; JSON literals are accepted, anything else is a string
        value: String,
    },

    /// Print the configuration file location
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show(config_path),
        ConfigCommand::Init { force } => init(config_path, force),
        ConfigCommand::Get { key } => get(config_path, &key),
        ConfigCommand::Set { key, value } => set(config_path, &key, &value),
        ConfigCommand::Path => path(config_path),
    }
}

/// A `section.field` key into [`IdexConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConfigKey<'a> {
    section: &'a str,
    field: &'a str,
}

impl<'a> ConfigKey<'a> {
    fn parse(key: &'a str) -> anyhow::Result<Self> {
        match key.split_once('.') {
            Some((section, field))
                if !section.is_empty() && !field.is_empty() && !field.contains('.') =>
            {
                Ok(Self { section, field })
            }
            _ => anyhow::bail!(
                "Invalid configuration key '{}': expected <section>.<field>, e.g. extraction.layout",
                key
            ),
        }
    }

    fn lookup<'v>(&self, json: &'v Value) -> Option<&'v Value> {
        json.get(self.section)?.get(self.field)
    }

    fn lookup_mut<'v>(&self, json: &'v mut Value) -> Option<&'v mut Value> {
        json.get_mut(self.section)?.get_mut(self.field)
    }
}

/// `true`, `3`, `["--oem", "1"]` parse as JSON; bare words stay strings.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Return `config` with one value replaced, rejecting unknown keys and
/// values the typed configuration does not accept.
fn apply_setting(config: &IdexConfig, key: &str, raw: &str) -> anyhow::Result<IdexConfig> {
    let key = ConfigKey::parse(key)?;
    let mut json = serde_json::to_value(config)?;

    let slot = key
        .lookup_mut(&mut json)
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}.{}", key.section, key.field))?;
    *slot = parse_value(raw);

    let updated: IdexConfig = serde_json::from_value(json).map_err(|e| {
        anyhow::anyhow!("Invalid value for {}.{}: {}", key.section, key.field, e)
    })?;
    updated.validate()?;
    Ok(updated)
}

fn show(config_path: Option<&str>) -> anyhow::Result<()> {
    let path = resolve_config_path(config_path);
    if config_path.is_none() && !path.exists() {
        eprintln!("{} No config file found, showing defaults.", style("ℹ").blue());
    }

    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init(config_path: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = resolve_config_path(config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    IdexConfig::default().save(&path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );

    Ok(())
}

fn get(config_path: Option<&str>, key: &str) -> anyhow::Result<()> {
    let key = ConfigKey::parse(key)?;
    let json = serde_json::to_value(load_config(config_path)?)?;

    let value = key
        .lookup(&json)
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}.{}", key.section, key.field))?;
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set(config_path: Option<&str>, key: &str, raw: &str) -> anyhow::Result<()> {
    let path = resolve_config_path(config_path);
    let current = if path.exists() {
        IdexConfig::from_file(&path)?
    } else {
        IdexConfig::default()
    };

    let updated = apply_setting(&current, key, raw)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    updated.save(&path)?;

    println!(
        "{} Set {} = {} in {}",
        style("✓").green(),
        key,
        parse_value(raw),
        path.display()
    );

    Ok(())
}

fn path(config_path: Option<&str>) -> anyhow::Result<()> {
    let path = resolve_config_path(config_path);

    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'idex config init' to create a configuration file.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use idex_core::models::config::LayoutProfile;
    use idex_core::Gender;

    #[test]
    fn test_parse_key() {
        assert_eq!(
            ConfigKey::parse("extraction.layout").unwrap(),
            ConfigKey {
                section: "extraction",
                field: "layout",
            }
        );
        assert!(ConfigKey::parse("extraction").is_err());
        assert!(ConfigKey::parse(".layout").is_err());
        assert!(ConfigKey::parse("extraction.layout.x").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("fixed"), Value::String("fixed".to_string()));
        assert_eq!(parse_value("6"), Value::from(6));
        assert_eq!(parse_value(r#"["--oem","1"]"#), serde_json::json!(["--oem", "1"]));
    }

    #[test]
    fn test_apply_setting() {
        let config = IdexConfig::default();

        let updated = apply_setting(&config, "extraction.layout", "fixed").unwrap();
        assert_eq!(updated.extraction.layout, LayoutProfile::Fixed);

        let updated = apply_setting(&updated, "extraction.default_gender", "F").unwrap();
        assert_eq!(updated.extraction.default_gender, Gender::Female);
        assert_eq!(updated.extraction.layout, LayoutProfile::Fixed);

        let updated = apply_setting(&config, "ocr.page_segmentation_mode", "6").unwrap();
        assert_eq!(updated.ocr.page_segmentation_mode, Some(6));
    }

    #[test]
    fn test_apply_setting_rejects_bad_input() {
        let config = IdexConfig::default();

        assert!(apply_setting(&config, "extraction.layout", "diagonal").is_err());
        assert!(apply_setting(&config, "extraction.colour", "red").is_err());
        assert!(apply_setting(&config, "extraction.unresolved_marker", "\"\"").is_err());
    }
}
