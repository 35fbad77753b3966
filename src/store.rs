//! Named query storage built from annotated SQL files.
//!
//! A [`QueryStore`] is produced by driving the directive scanner over a
//! whole source exactly once. The resulting table is immutable: lookups
//! never allocate, never fail and never observe partial state. A failed
//! load yields no store at all.
//!
//! # Example
//!
//! ```
//! use sql_query_loader::store::QueryStore;
//!
//! let store = QueryStore::load_str("--/selectUser\nSELECT 1;\n--/\n").unwrap();
//! assert_eq!(store.get("selectUser"), Some("SELECT 1;\n"));
//! assert_eq!(store.get("missing"), None);
//! ```

use std::{fs::read_to_string, mem::take, path::Path};

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::{
    error::{AppResult, file_read_error, internal_state_error},
    scanner::{ScanEvent, Scanner}
};

/// Immutable mapping from block name to query body
#[derive(Debug, Clone, Default)]
pub struct QueryStore {
    queries: IndexMap<CompactString, String>
}

impl QueryStore {
    /// Load a store from a file on disk.
    ///
    /// Open, read and UTF-8 decoding failures are reported as I/O errors;
    /// directive grammar violations are reported as malformed-file errors.
    pub fn load_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let source = read_to_string(path)
            .map_err(|e| file_read_error(&path.display().to_string(), e))?;
        Self::load_str(&source)
    }

    /// Load a store from already-resident source text.
    ///
    /// Drives the scanner to completion in a single pass. An open directive
    /// starts a fresh buffer, body characters append to it, and a close
    /// directive commits it; the last block with a given name wins.
    pub fn load_str(source: &str) -> AppResult<Self> {
        let mut scanner = Scanner::new(source);
        let mut queries = IndexMap::new();
        let mut current: Option<CompactString> = None;
        let mut buffer = String::new();

        while let Some(event) = scanner.next_event()? {
            match event {
                ScanEvent::OpenBlock(name) => {
                    current = Some(CompactString::from(name));
                    buffer.clear();
                }
                ScanEvent::Char(c) => buffer.push(c),
                ScanEvent::CloseBlock => {
                    // The grammar only emits a close while a block is open.
                    let name = current
                        .take()
                        .ok_or_else(|| internal_state_error("block closed while none was open"))?;
                    queries.insert(name, take(&mut buffer));
                }
            }
        }

        Ok(Self {
            queries
        })
    }

    /// Look up a query body by exact block name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.queries.get(name).map(String::as_str)
    }

    /// Block names, in first-committed order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.queries.keys().map(CompactString::as_str)
    }

    /// Iterate over `(name, body)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Number of stored queries
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether the store holds no queries
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_str_single_block() {
        let store = QueryStore::load_str("--/q\nSELECT 1;\n--/\n").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("q"), Some("SELECT 1;\n"));
    }

    #[test]
    fn test_failed_load_yields_no_store() {
        assert!(QueryStore::load_str("--/q\nSELECT 1;\n").is_err());
    }
}
