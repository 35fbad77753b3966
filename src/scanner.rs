//! Directive scanning for named query blocks.
//!
//! This module recognizes a narrow two-state directive grammar embedded
//! inside otherwise-opaque SQL text. A block-open sentinel is `--`, zero or
//! more spaces, `/`, then the block name up to the end of the line; a
//! block-close sentinel is the same marker with no name. Everything between
//! the two is captured verbatim as the block body. `--` followed by anything
//! other than `/` is an ordinary SQL comment and is consumed silently.
//!
//! # Grammar strictness
//!
//! A single `-` that is not immediately followed by a second `-` is a hard
//! error anywhere in the file, including inside block bodies. This matches
//! the accepted-file semantics the loader has always had; relaxing it would
//! silently change which files parse.
//!
//! # Example
//!
//! ```
//! use sql_query_loader::scanner::{ScanEvent, Scanner};
//!
//! let mut scanner = Scanner::new("--/selectUser\nSELECT 1;\n--/\n");
//! let event = scanner.next_event().unwrap();
//! assert_eq!(event, Some(ScanEvent::OpenBlock("selectUser".to_string())));
//! ```

mod stream;

pub use stream::{CharStream, Position};

use crate::error::{AppResult, malformed_file_error};

/// Scanner mode: outside any block, or capturing a block body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Scanning,
    Capturing
}

/// Event produced while scanning annotated SQL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A block-open directive; carries the name verbatim, untrimmed
    OpenBlock(String),
    /// One body character inside an open block
    Char(char),
    /// A block-close directive
    CloseBlock
}

/// Single-pass scanner over annotated SQL text.
///
/// Drives a [`CharStream`] character by character and emits [`ScanEvent`]s.
/// The scanner does not recover from malformed input; the first grammar
/// violation aborts the whole parse.
#[derive(Debug)]
pub struct Scanner<'a> {
    stream: CharStream<'a>,
    mode:   Mode
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            stream: CharStream::new(source),
            mode:   Mode::Scanning
        }
    }

    /// Whether the scanner is currently inside an open block
    pub fn capturing(&self) -> bool {
        self.mode == Mode::Capturing
    }

    /// Produce the next event, or `None` at a clean end of stream.
    ///
    /// End of stream is clean only outside a block; ending inside a block or
    /// in the middle of a sentinel is an error. Ordinary comments produce no
    /// event and are consumed in both modes.
    pub fn next_event(&mut self) -> AppResult<Option<ScanEvent>> {
        loop {
            let Some(c) = self.stream.next_char() else {
                return match self.mode {
                    Mode::Scanning => Ok(None),
                    Mode::Capturing => Err(malformed_file_error(
                        "unterminated block at end of file",
                        self.stream.position()
                    ))
                };
            };

            if c != '-' {
                match self.mode {
                    Mode::Capturing => return Ok(Some(ScanEvent::Char(c))),
                    Mode::Scanning => continue
                }
            }

            // First dash matched; a second one is mandatory anywhere in the file.
            let c2 = self.next_or_truncated()?;
            if c2 != '-' {
                return Err(malformed_file_error(
                    "single '-' without a second dash",
                    self.stream.position()
                ));
            }

            // Discard spaces (only ' ', never tabs) and hand the breaking
            // character back to the stream.
            let mut c3 = self.next_or_truncated()?;
            while c3 == ' ' {
                c3 = self.next_or_truncated()?;
            }
            self.stream.unread(c3);

            let c3 = self.next_or_truncated()?;
            if c3 != '/' {
                // Ordinary comment. The dashes, the spaces and this character
                // are dropped in both modes.
                continue;
            }

            match self.mode {
                Mode::Scanning => {
                    let name = self.read_name()?;
                    self.mode = Mode::Capturing;
                    return Ok(Some(ScanEvent::OpenBlock(name)));
                }
                Mode::Capturing => {
                    // Anything left on this line falls through to SCANNING on
                    // the next iteration and is dropped unless it starts a
                    // directive itself.
                    self.mode = Mode::Scanning;
                    return Ok(Some(ScanEvent::CloseBlock));
                }
            }
        }
    }

    fn next_or_truncated(&mut self) -> AppResult<char> {
        self.stream.next_char().ok_or_else(|| {
            malformed_file_error("truncated directive at end of file", self.stream.position())
        })
    }

    /// Read the block name up to a `\n` or `\r\n` terminator.
    ///
    /// The name is taken verbatim, not trimmed; the terminator is excluded.
    fn read_name(&mut self) -> AppResult<String> {
        let mut name = String::new();
        loop {
            let Some(c) = self.stream.next_char() else {
                return Err(malformed_file_error(
                    "unterminated block name at end of file",
                    self.stream.position()
                ));
            };

            match c {
                '\n' => break,
                '\r' => {
                    let c2 = self.stream.next_char().ok_or_else(|| {
                        malformed_file_error(
                            "unterminated block name at end of file",
                            self.stream.position()
                        )
                    })?;
                    if c2 != '\n' {
                        return Err(malformed_file_error(
                            "carriage return without line feed in block name",
                            self.stream.position()
                        ));
                    }
                    break;
                }
                _ => name.push(c)
            }
        }

        if name.is_empty() {
            return Err(malformed_file_error(
                "missing name for query block",
                self.stream.position()
            ));
        }
        Ok(name)
    }
}
