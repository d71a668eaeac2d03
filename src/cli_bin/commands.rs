//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use crate::core::{serialize_value, EditBatch, Entry, EntryEdit, QuoteStyle, Upsert};
use crate::descriptions::DescriptionMap;
use crate::io::RootConfig;
use crate::ops;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// JSON shape of `get`/`set`/`upsert`/`apply` output.
#[derive(Serialize)]
struct EntryListing<'a> {
    path: &'a str,
    entries: &'a [Entry],
}

impl RootOptions {
    /// Environment-sourced configuration with CLI overrides applied.
    pub fn to_config(&self) -> RootConfig {
        let defaults = RootConfig::from_env();
        let root = self.root.clone().unwrap_or_else(|| defaults.root().to_path_buf());
        let filename = self
            .filename
            .clone()
            .unwrap_or_else(|| defaults.filename().to_string());
        RootConfig::new(root, filename)
    }
}

/// Execute the files command
pub fn files_command(args: FilesArgs) -> Result<()> {
    let config = args.root.to_config();
    debug!(
        "discovering {:?} under {}",
        config.filename(),
        config.root().display()
    );

    let files = ops::list_env_files(&config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else if files.is_empty() {
        info!("no env files found under {}", config.root().display());
    } else {
        for file in &files {
            println!("{file}");
        }
    }
    Ok(())
}

/// Execute the get command
pub fn get_command(args: GetArgs) -> Result<()> {
    let config = args.root.to_config();
    let path = config.safe_path(&args.path)?;
    let descriptions = load_descriptions(&config, &args.output);

    let entries = ops::get_entries(&path, &descriptions)?;
    print_listing(&args.path, &entries, &args.output)?;
    Ok(())
}

/// Execute the set command
pub fn set_command(args: SetArgs) -> Result<()> {
    let quote: QuoteStyle = args.quote.parse()?;
    let batch = EditBatch {
        entries: vec![EntryEdit {
            id: args.id,
            value: args.value.clone(),
            quote,
        }],
        upserts: vec![],
    };
    run_write(&args.path, &batch, &args.root, &args.output, &args.write)
}

/// Execute the upsert command
pub fn upsert_command(args: UpsertArgs) -> Result<()> {
    let quote: QuoteStyle = args.quote.parse()?;
    let batch = EditBatch {
        entries: vec![],
        upserts: vec![Upsert {
            key: args.key.clone(),
            value: args.value.clone(),
            quote,
        }],
    };
    run_write(&args.path, &batch, &args.root, &args.output, &args.write)
}

/// Execute the apply command
pub fn apply_command(args: ApplyArgs) -> Result<()> {
    let text = match &args.payload {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read payload {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read payload from stdin")?;
            buffer
        }
    };
    let batch = EditBatch::from_json(&text)?;
    debug!(
        "applying {} edits and {} upserts",
        batch.entries.len(),
        batch.upserts.len()
    );
    run_write(&args.path, &batch, &args.root, &args.output, &args.write)
}

fn run_write(
    rel_path: &str,
    batch: &EditBatch,
    root: &RootOptions,
    output: &OutputOptions,
    write: &WriteOptions,
) -> Result<()> {
    let config = root.to_config();
    let path = config.safe_path(rel_path)?;

    if write.dry_run {
        let preview = ops::preview_edits(&path, batch)?;
        print!("{preview}");
        return Ok(());
    }

    let descriptions = load_descriptions(&config, output);
    let entries = ops::apply_edits(&path, batch, &descriptions)?;
    info!("updated {}", path.display());
    print_listing(rel_path, &entries, output)?;
    Ok(())
}

fn print_listing(rel_path: &str, entries: &[Entry], output: &OutputOptions) -> Result<()> {
    if output.json {
        let listing = EntryListing {
            path: rel_path,
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    for entry in entries {
        let rendered = serialize_value(&entry.value, entry.quote);
        if entry.description.is_empty() {
            println!("{:>4}  {}={}", entry.id, entry.key, rendered);
        } else {
            println!(
                "{:>4}  {}={}  # {}",
                entry.id, entry.key, rendered, entry.description
            );
        }
    }
    Ok(())
}

fn load_descriptions(config: &RootConfig, output: &OutputOptions) -> DescriptionMap {
    let path = output
        .descriptions
        .clone()
        .or_else(|| env::var_os("ENV_DESCRIPTIONS").map(PathBuf::from))
        .unwrap_or_else(|| config.root().join("descriptions.json"));
    DescriptionMap::load(&path)
}
