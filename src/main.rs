// SPDX-License-Identifier: PMPL-1.0-or-later

//! driplo-messages: compiled catalog inspection and maintenance
//!
//! A command-line companion to the message catalog crate: list compiled
//! messages, resolve one the way an accessor would, verify catalog
//! integrity and resource-file parity, and export the catalog back to
//! per-locale resource files.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::PathBuf;

use driplo_messages::catalog::Catalog;
use driplo_messages::inputs::{InputValue, MessageInputs};
use driplo_messages::locale::Locale;
use driplo_messages::messages::CATALOG;
use driplo_messages::resource;
use driplo_messages::runtime::{MessageOptions, MessageRuntime, RuntimeFlags};

#[derive(Parser)]
#[command(name = "driplo-messages")]
#[command(version = "1.2.0")]
#[command(about = "Compiled message catalog inspection and maintenance")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List compiled messages
    List {
        /// Print each message's text for this locale
        #[arg(short, long)]
        locale: Option<String>,

        /// Print exported accessor names instead of internal identifiers
        #[arg(long)]
        exports: bool,
    },

    /// Resolve a single message the way an accessor would
    Resolve {
        /// Message identifier or exported accessor name
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Locale override (unrecognized values degrade to the fallback)
        #[arg(short, long)]
        locale: Option<String>,

        /// Message inputs as name=value pairs
        #[arg(short, long)]
        input: Vec<String>,
    },

    /// Verify catalog integrity and, optionally, resource-file parity
    Check {
        /// Directory of per-locale message resources (en.json, bg.yaml, ...)
        #[arg(value_name = "RESOURCE_DIR")]
        resources: Option<PathBuf>,
    },

    /// Export the compiled catalog as per-locale resource files
    Export {
        /// Resource format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormatArg,

        /// Output directory (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ExportFormatArg {
    Json,
    Yaml,
}

impl ExportFormatArg {
    fn extension(self) -> &'static str {
        match self {
            ExportFormatArg::Json => "json",
            ExportFormatArg::Yaml => "yaml",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { locale, exports } => cmd_list(locale, exports),
        Commands::Resolve {
            message,
            locale,
            input,
        } => cmd_resolve(&message, locale, &input),
        Commands::Check { resources } => cmd_check(resources.as_deref()),
        Commands::Export { format, output } => cmd_export(format, output.as_deref()),
    }
}

fn cmd_list(locale: Option<String>, exports: bool) -> Result<()> {
    let locale = locale.as_deref().map(parse_locale_arg).transpose()?;

    for entry in CATALOG.entries {
        let name = if exports { entry.export } else { entry.id };
        match locale {
            Some(locale) => println!("{}  {}", name.bold(), CATALOG.template(entry, locale)),
            None => println!("{name}"),
        }
    }
    Ok(())
}

fn cmd_resolve(message: &str, locale: Option<String>, raw_inputs: &[String]) -> Result<()> {
    let entry = CATALOG
        .entry(message)
        .or_else(|| CATALOG.entry_by_export(message))
        .ok_or_else(|| anyhow!("unknown message `{message}`"))?;

    let mut inputs = MessageInputs::new();
    for raw in raw_inputs {
        let (name, value) = parse_input(raw)?;
        inputs.set(name, value);
    }

    let runtime = MessageRuntime::new(&CATALOG, RuntimeFlags::server());
    let options = match locale {
        Some(code) => MessageOptions::with_locale(code),
        None => MessageOptions::default(),
    };
    println!("{}", runtime.resolve(entry.id, &inputs, &options));
    Ok(())
}

fn cmd_check(resources: Option<&std::path::Path>) -> Result<()> {
    println!("{}", "=== DRIPLO MESSAGE CATALOG CHECK ===".bold().cyan());
    println!();
    print_catalog_summary(&CATALOG);
    println!();

    let mut clean = true;

    let issues = CATALOG.issues();
    if issues.is_empty() {
        println!("  {} compiled catalog is internally consistent", "OK".green().bold());
    } else {
        clean = false;
        println!(
            "  {} {} catalog issue(s):",
            "FAIL".red().bold(),
            issues.len()
        );
        for issue in &issues {
            println!("    - {issue}");
        }
    }

    if let Some(dir) = resources {
        println!();
        println!("{}", "RESOURCE PARITY".bold().yellow());
        let files = resource::discover(dir)?;
        if files.is_empty() {
            return Err(anyhow!(
                "no per-locale resource files found in {}",
                dir.display()
            ));
        }
        for file in &files {
            println!(
                "  {} ({} keys) {}",
                file.locale,
                file.messages.len(),
                file.path.display()
            );
        }

        let parity = resource::compare(&CATALOG, &files);
        if parity.is_empty() {
            println!("  {} resources match the compiled catalog", "OK".green().bold());
        } else {
            clean = false;
            println!(
                "  {} {} parity issue(s):",
                "FAIL".red().bold(),
                parity.len()
            );
            for issue in &parity {
                println!("    - {issue}");
            }
        }

        let resource_digest = resource::fingerprint(&files);
        if resource_digest == CATALOG.fingerprint() {
            println!("  {} fingerprints match", "OK".green().bold());
        } else {
            println!(
                "  {} resource fingerprint {}",
                "WARN".yellow().bold(),
                resource_digest.to_hex()
            );
        }
    }

    println!();
    if clean {
        Ok(())
    } else {
        Err(anyhow!("catalog check reported issues"))
    }
}

fn cmd_export(format: ExportFormatArg, output: Option<&std::path::Path>) -> Result<()> {
    for locale in CATALOG.locales {
        let map = resource::dump(&CATALOG, *locale);
        let content = match format {
            ExportFormatArg::Json => serde_json::to_string_pretty(&map)?,
            ExportFormatArg::Yaml => serde_yaml::to_string(&map)?,
        };

        match output {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating output directory {}", dir.display()))?;
                let path = dir.join(format!("{}.{}", locale.code(), format.extension()));
                fs::write(&path, &content)
                    .with_context(|| format!("writing resource file {}", path.display()))?;
                println!("wrote {}", path.display());
            }
            None => {
                println!("# {}", locale.code());
                println!("{content}");
            }
        }
    }
    Ok(())
}

fn print_catalog_summary(catalog: &Catalog) {
    let locales = catalog
        .locales
        .iter()
        .map(|locale| format!("{} ({})", locale.code(), locale.native_name()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Catalog: {}", catalog.name);
    println!("  Messages: {}", catalog.len());
    println!("  Locales: {locales}");
    println!("  Primary: {}  Fallback: {}", catalog.primary, catalog.fallback);
    println!("  Fingerprint: {}", catalog.fingerprint().to_hex());
}

fn parse_locale_arg(code: &str) -> Result<Locale> {
    Locale::from_tag(code).ok_or_else(|| {
        let supported = Locale::all()
            .iter()
            .map(Locale::code)
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("unsupported locale `{code}` (expected one of: {supported})")
    })
}

// name=value, with the value parsed as bool, integer, float, then string.
fn parse_input(raw: &str) -> Result<(String, InputValue)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("input `{raw}` is not a name=value pair"))?;
    let value = if let Ok(flag) = value.parse::<bool>() {
        InputValue::Bool(flag)
    } else if let Ok(int) = value.parse::<i64>() {
        InputValue::Int(int)
    } else if let Ok(float) = value.parse::<f64>() {
        InputValue::Float(float)
    } else {
        InputValue::Str(value.to_string())
    };
    Ok((name.to_string(), value))
}
