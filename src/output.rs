use colored::Colorize;
use serde::Serialize;

use crate::store::QueryStore;

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// One named query for serialization
#[derive(Debug, Serialize)]
pub struct QueryEntry {
    pub name: String,
    pub body: String
}

fn entries(store: &QueryStore) -> Vec<QueryEntry> {
    store
        .iter()
        .map(|(name, body)| QueryEntry {
            name: name.to_string(),
            body: body.to_string()
        })
        .collect()
}

/// Format the full listing of a store based on output options
pub fn format_store_listing(store: &QueryStore, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries(store)).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&entries(store)).unwrap_or_default(),
        OutputFormat::Text => format_text_listing(store, opts)
    }
}

/// Format a single named query
///
/// Text output is the raw body only, so it stays pipeable into other tools.
pub fn format_query(name: &str, body: &str, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => {
            let entry = QueryEntry {
                name: name.to_string(),
                body: body.to_string()
            };
            serde_json::to_string_pretty(&entry).unwrap_or_default()
        }
        OutputFormat::Yaml => {
            let entry = QueryEntry {
                name: name.to_string(),
                body: body.to_string()
            };
            serde_yaml::to_string(&entry).unwrap_or_default()
        }
        OutputFormat::Text => body.to_string()
    }
}

fn format_text_listing(store: &QueryStore, opts: &OutputOptions) -> String {
    let mut output = String::from("Named queries:\n\n");

    if store.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    for (name, body) in store.iter() {
        if opts.colored {
            output.push_str(&format!("  {}\n", name.bold()));
        } else {
            output.push_str(&format!("  {}\n", name));
        }

        if opts.verbose {
            for line in body.lines() {
                output.push_str(&format!("    {}\n", line));
            }
            output.push('\n');
        }
    }

    output
}
