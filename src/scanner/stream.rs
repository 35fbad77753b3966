use std::{fmt, str::Chars};

/// Position of the most recently read character (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line:   u32,
    pub column: u32
}

impl Position {
    fn start() -> Self {
        Self {
            line:   1,
            column: 0
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Character source with at most one character of pushback.
///
/// The directive grammar needs to look one character past a run of spaces
/// and then hand that character back; nothing in the scanner ever requires
/// more than a single unread character.
#[derive(Debug)]
pub struct CharStream<'a> {
    chars:    Chars<'a>,
    pending:  Option<char>,
    position: Position,
    previous: Position
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars:    source.chars(),
            pending:  None,
            position: Position::start(),
            previous: Position::start()
        }
    }

    /// Read the next character, or `None` at end of stream
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.pending.take().or_else(|| self.chars.next())?;
        self.previous = self.position;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Push one character back onto the stream.
    ///
    /// The next `next_char` call returns `c` again and the reported position
    /// rolls back with it. Only the most recently read character may be
    /// unread.
    pub fn unread(&mut self, c: char) {
        self.pending = Some(c);
        self.position = self.previous;
    }

    /// Position of the most recently read character
    pub fn position(&self) -> Position {
        self.position
    }
}
