//! # SQL Query Loader
//!
//! Load named SQL query blocks from annotated SQL files and look them up by
//! exact name.
//!
//! `sql-query-loader` reads a plain SQL file once, front to back, and builds
//! an immutable table of named query blocks. A block is delimited by two
//! directives embedded in ordinary SQL comments:
//!
//! ```sql
//! --/selectUser
//! SELECT * FROM users WHERE id = ?;
//! --/
//! ```
//!
//! Everything between `--/name` and the next `--/` is captured verbatim,
//! newline for newline. A `--` comment that is not followed by `/` is
//! ignored; a single undoubled `-` anywhere in the file is rejected.
//!
//! # Quick Start
//!
//! ```bash
//! # Print one query body
//! sql-query-loader get selectUser -q queries.sql
//!
//! # List all blocks in a file
//! sql-query-loader list -q queries.sql --verbose
//!
//! # Validate a file in CI
//! sql-query-loader check -q queries.sql
//!
//! # Read annotated SQL from stdin
//! cat queries.sql | sql-query-loader get selectUser -q -
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQLOADER_FILE`, `SQLOADER_FORMAT`)
//! 3. `.sqloader.toml` in current directory
//! 4. `~/.config/sqloader/config.toml`
//!
//! # Exit Codes
//!
//! - `0` - Success
//! - `1` - Lookup miss, malformed file, or I/O failure
//!
//! # Modules
//!
//! - [`scanner`] - Directive scanner over annotated SQL text
//! - [`store`] - Immutable name-to-body query table
//! - [`config`] - Configuration loading and validation
//! - [`output`] - Result formatting for various output formats
//! - [`cache`] - Loaded-store cache keyed by source content
//! - [`error`] - Error types and constructors

mod cache;
mod cli;
mod config;
mod error;
mod output;
mod scanner;
mod store;

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process
};

use clap::Parser;

use crate::{
    cache::{cache_store, get_cached},
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, config_error, file_read_error},
    output::{OutputFormat, OutputOptions, format_query, format_store_listing},
    store::QueryStore
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Get {
            name,
            queries,
            output_format,
            no_color
        } => {
            let store = load_store(queries, &config)?;
            let opts = output_options(output_format, no_color, false, &config);

            match store.get(&name) {
                Some(body) => {
                    println!("{}", format_query(&name, body, &opts));
                    Ok(0)
                }
                None => {
                    eprintln!("No query named '{}'", name);
                    Ok(1)
                }
            }
        }
        Commands::List {
            queries,
            output_format,
            verbose,
            no_color
        } => {
            let store = load_store(queries, &config)?;
            let opts = output_options(output_format, no_color, verbose, &config);
            println!("{}", format_store_listing(&store, &opts));
            Ok(0)
        }
        Commands::Check {
            queries
        } => match load_store(queries, &config) {
            Ok(store) => {
                println!("OK: {} named queries", store.len());
                Ok(0)
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(1)
            }
        }
    }
}

/// Resolve the queries file, read it and build (or reuse) a store
fn load_store(path: Option<PathBuf>, config: &Config) -> AppResult<QueryStore> {
    let path = path
        .or_else(|| config.loader.file.clone().map(PathBuf::from))
        .ok_or_else(|| {
            config_error("No queries file given (use --queries or SQLOADER_FILE)")
        })?;

    // Support stdin with "-"
    let source = if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        buffer
    } else {
        read_to_string(&path).map_err(|e| file_read_error(&path.display().to_string(), e))?
    };

    if let Some(cached) = get_cached(&source) {
        return Ok(cached);
    }

    let store = QueryStore::load_str(&source)?;
    cache_store(&source, store.clone());
    Ok(store)
}

fn output_options(
    format: Format,
    no_color: bool,
    verbose: bool,
    config: &Config
) -> OutputOptions {
    // The CLI default is text, so a configured format only applies when the
    // flag was left at its default.
    let format = match format {
        Format::Text => match config.output.format.as_deref() {
            Some("json") => OutputFormat::Json,
            Some("yaml") => OutputFormat::Yaml,
            _ => OutputFormat::Text
        },
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    };

    OutputOptions {
        format,
        colored: !no_color && config.output.color,
        verbose
    }
}
