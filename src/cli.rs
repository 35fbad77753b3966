use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Query Loader - look up named query blocks in annotated SQL files
#[derive(Parser, Debug)]
#[command(name = "sql-query-loader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the body of one named query
    Get {
        /// Block name to look up (exact match, case-sensitive)
        name: String,

        /// Path to annotated SQL file (use - for stdin)
        #[arg(short, long, env = "SQLOADER_FILE")]
        queries: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// List the query blocks found in a file
    List {
        /// Path to annotated SQL file (use - for stdin)
        #[arg(short, long, env = "SQLOADER_FILE")]
        queries: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Include query bodies in the listing
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Parse a file and report the first grammar violation, if any
    Check {
        /// Path to annotated SQL file (use - for stdin)
        #[arg(short, long, env = "SQLOADER_FILE")]
        queries: Option<PathBuf>
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
