//! Command-line argument definitions and parsing
//!
//! Argument structures only; the handlers live in
//! [`commands`](super::commands). Option groups shared across subcommands
//! are flattened in so every command documents the same flags the same
//! way.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "envedit",
    version,
    about = "A command-line tool for editing KEY=VALUE env files without disturbing their layout",
    long_about = "envedit reads and edits env files while preserving comments, blank lines, \
                  ordering, quoting style, and unrecognized lines. Entries are addressed by \
                  line id (as reported by `get`) or upserted by key, and every write replaces \
                  the file atomically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List candidate env files under the root directory
    Files(FilesArgs),
    /// Show the entries of an env file
    Get(GetArgs),
    /// Edit the value of an existing entry by line id
    Set(SetArgs),
    /// Insert or overwrite an entry by key
    Upsert(UpsertArgs),
    /// Apply a JSON batch of edits and upserts
    Apply(ApplyArgs),
}

/// Root scoping options shared by all commands
#[derive(Args, Debug, Clone)]
pub struct RootOptions {
    /// Root directory containing env files (default: $ENV_ROOT or /config)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Env file name used for discovery (default: $ENV_FILENAME or app.env)
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,
}

/// Entry output options
#[derive(Args, Debug, Clone)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Key descriptions file (default: $ENV_DESCRIPTIONS or <root>/descriptions.json)
    #[arg(long, value_name = "FILE")]
    pub descriptions: Option<PathBuf>,
}

/// Options for commands that write
#[derive(Args, Debug, Clone)]
pub struct WriteOptions {
    /// Print the resulting file content instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct FilesArgs {
    #[command(flatten)]
    pub root: RootOptions,

    /// Output the file list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path of the env file, relative to the root
    pub path: String,

    #[command(flatten)]
    pub root: RootOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Path of the env file, relative to the root
    pub path: String,

    /// Line id of the entry to edit (see `get`)
    #[arg(long)]
    pub id: usize,

    /// New value
    #[arg(long)]
    pub value: String,

    /// Quote style: none, single or double
    #[arg(long, default_value = "none", value_name = "STYLE")]
    pub quote: String,

    #[command(flatten)]
    pub root: RootOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub write: WriteOptions,
}

#[derive(Args, Debug)]
pub struct UpsertArgs {
    /// Path of the env file, relative to the root
    pub path: String,

    /// Key to insert or overwrite
    #[arg(long)]
    pub key: String,

    /// Value to store
    #[arg(long)]
    pub value: String,

    /// Quote style: none, single or double
    #[arg(long, default_value = "none", value_name = "STYLE")]
    pub quote: String,

    #[command(flatten)]
    pub root: RootOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub write: WriteOptions,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path of the env file, relative to the root
    pub path: String,

    /// JSON payload file with {"entries": [...], "upserts": [...]}
    /// (defaults to stdin; "-" also reads stdin)
    #[arg(long, value_name = "FILE")]
    pub payload: Option<PathBuf>,

    #[command(flatten)]
    pub root: RootOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub write: WriteOptions,
}
