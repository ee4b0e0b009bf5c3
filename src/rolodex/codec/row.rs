//! Delimiter-separated rows.
//!
//! Fields are separated by `;` and rows by a newline. A field containing the
//! delimiter, a double quote, or a line break is wrapped in double quotes, with
//! embedded double quotes doubled. Quoted fields may span lines. The reader
//! accepts both `\n` and `\r\n` and skips blank lines.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

pub const DELIMITER: char = ';';
const QUOTE: char = '"';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RowSyntaxError {
    pub line: usize,
    pub message: String,
}

/// One parsed row and the line it started on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

pub fn write_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        write_field(out, field.as_ref());
    }
    out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r');
    if !needs_quotes {
        out.push_str(field);
        return;
    }
    out.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}

pub fn rows(text: &str) -> Rows<'_> {
    Rows {
        chars: text.chars().peekable(),
        line: 1,
    }
}

pub struct Rows<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Rows<'_> {
    /// Consumes a line terminator if one is next. Returns whether it did.
    fn eat_newline(&mut self) -> bool {
        match self.chars.peek() {
            Some('\n') => {
                self.chars.next();
            }
            Some('\r') => {
                self.chars.next();
                if self.chars.peek() == Some(&'\n') {
                    self.chars.next();
                }
            }
            _ => return false,
        }
        self.line += 1;
        true
    }

    fn skip_rest_of_line(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.chars.next();
        }
        self.eat_newline();
    }

    fn quoted_field(&mut self, start_line: usize) -> Result<String, RowSyntaxError> {
        let mut field = String::new();
        loop {
            match self.chars.next() {
                None => {
                    return Err(RowSyntaxError {
                        line: start_line,
                        message: "unterminated quoted field".to_string(),
                    })
                }
                Some(QUOTE) if self.chars.peek() == Some(&QUOTE) => {
                    self.chars.next();
                    field.push(QUOTE);
                }
                Some(QUOTE) => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    field.push(c);
                }
            }
        }
        match self.chars.peek() {
            None | Some(&DELIMITER) | Some('\n') | Some('\r') => Ok(field),
            Some(&c) => Err(RowSyntaxError {
                line: start_line,
                message: format!("unexpected '{}' after closing quote", c),
            }),
        }
    }

    fn plain_field(&mut self) -> String {
        let mut field = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == DELIMITER || c == '\n' || c == '\r' {
                break;
            }
            field.push(c);
            self.chars.next();
        }
        field
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, RowSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.eat_newline() {}
        self.chars.peek()?;

        let start_line = self.line;
        let mut fields = Vec::new();
        loop {
            let field = if self.chars.peek() == Some(&QUOTE) {
                self.chars.next();
                match self.quoted_field(start_line) {
                    Ok(field) => field,
                    Err(e) => {
                        self.skip_rest_of_line();
                        return Some(Err(e));
                    }
                }
            } else {
                self.plain_field()
            };
            fields.push(field);

            if self.chars.peek() == Some(&DELIMITER) {
                self.chars.next();
                continue;
            }
            self.eat_newline();
            break;
        }

        Some(Ok(Row {
            line: start_line,
            fields,
        }))
    }
}
