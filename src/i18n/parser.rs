// SPDX-License-Identifier: MPL-2.0
//! Parser for `messages` resources.
//!
//! The format is line oriented:
//!
//! ```text
//! # comment
//! greeting = Hello {0}
//! multi.line = first part \
//!     continues here
//! escaped = a\nb and a\\b
//! ```
//!
//! The scanner works on characters and tracks the 1-based line and column of
//! the next unread character, so every error points at the exact character
//! where the grammar could not continue.

use crate::domain::MessageEntry;
use std::fmt;

// =============================================================================
// ParseError
// =============================================================================

/// What the parser expected when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line is neither blank nor a comment and does not start with a key.
    KeyExpected,
    /// A key was read but is not followed by `=`.
    SeparatorExpected,
    /// The line did not end with `\n` or `\r\n`.
    EndOfLineExpected,
}

impl ParseErrorKind {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ParseErrorKind::KeyExpected => "Message key expected",
            ParseErrorKind::SeparatorExpected => "'=' expected",
            ParseErrorKind::EndOfLineExpected => "End of line expected",
        }
    }
}

/// A syntax error in a messages resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    source_name: String,
    line: usize,
    column: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    #[must_use]
    pub fn new(source_name: &str, line: usize, column: usize, kind: ParseErrorKind) -> Self {
        Self {
            source_name: source_name.to_string(),
            line,
            column,
            kind,
        }
    }

    /// Name of the resource that failed to parse.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// 1-based line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column (in characters) of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.source_name,
            self.line,
            self.column,
            self.kind.message()
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// Scanner
// =============================================================================

struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    source_name: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &str, source_name: &'a str) -> Self {
        let mut chars: Vec<char> = text.chars().collect();
        // Terminates the last line so it follows the same rules as the others.
        chars.push('\n');
        Self {
            chars,
            pos: 0,
            line: 1,
            column: 1,
            source_name,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.source_name, self.line, self.column, kind)
    }

    fn skip_horizontal_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some('\n' | '\r'))
    }

    fn newline(&mut self) -> Result<(), ParseError> {
        match (self.peek(), self.peek_at(1)) {
            (Some('\r'), Some('\n')) => {
                self.bump();
                self.bump();
                Ok(())
            }
            (Some('\n'), _) => {
                self.bump();
                Ok(())
            }
            _ => Err(self.error(ParseErrorKind::EndOfLineExpected)),
        }
    }

    fn skip_comment(&mut self) {
        while !self.at_line_end() {
            self.bump();
        }
    }

    fn key(&mut self) -> Result<String, ParseError> {
        let mut key = String::new();
        while let Some(c) = self.peek().filter(|c| MessageEntry::is_key_char(*c)) {
            key.push(c);
            self.bump();
        }
        if key.is_empty() {
            return Err(self.error(ParseErrorKind::KeyExpected));
        }
        Ok(key)
    }

    fn separator(&mut self) -> Result<(), ParseError> {
        self.skip_horizontal_whitespace();
        if self.peek() != Some('=') {
            return Err(self.error(ParseErrorKind::SeparatorExpected));
        }
        self.bump();
        self.skip_horizontal_whitespace();
        Ok(())
    }

    fn pattern(&mut self) -> String {
        let mut pattern = String::new();
        while !self.at_line_end() {
            let c = self.peek().unwrap_or_default();
            if c != '\\' {
                pattern.push(c);
                self.bump();
                continue;
            }
            match (self.peek_at(1), self.peek_at(2)) {
                (Some('\n'), _) => {
                    self.bump();
                    self.bump();
                }
                (Some('\r'), Some('\n')) => {
                    self.bump();
                    self.bump();
                    self.bump();
                }
                (Some('n'), _) => {
                    pattern.push('\n');
                    self.bump();
                    self.bump();
                }
                (Some('\\'), _) => {
                    pattern.push('\\');
                    self.bump();
                    self.bump();
                }
                (Some(other), _) if other != '\r' => {
                    pattern.push('\\');
                    pattern.push(other);
                    self.bump();
                    self.bump();
                }
                // A lone backslash before a bare `\r` is kept as is; the `\r`
                // then fails the end-of-line rule.
                _ => {
                    pattern.push('\\');
                    self.bump();
                }
            }
        }
        pattern.truncate(pattern.trim_end().len());
        pattern
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses one messages resource into its entries, in file order.
///
/// Duplicate keys are all returned; consumers that build a map keep the last
/// occurrence.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying `source_name` and the line and column of
/// the first character that does not fit the grammar.
pub fn parse(source_text: &str, source_name: &str) -> Result<Vec<MessageEntry>, ParseError> {
    let mut scanner = Scanner::new(source_text, source_name);
    let mut entries = Vec::new();

    while !scanner.at_end() {
        scanner.skip_horizontal_whitespace();
        match scanner.peek() {
            Some('#') => scanner.skip_comment(),
            Some('\n' | '\r') | None => {}
            Some(_) => {
                let key = scanner.key()?;
                scanner.separator()?;
                let pattern = scanner.pattern();
                entries.push(MessageEntry { key, pattern });
            }
        }
        scanner.newline()?;
    }

    tracing::trace!(source = source_name, entries = entries.len(), "parsed messages");
    Ok(entries)
}

// =============================================================================
// Tests
// =============================================================================
