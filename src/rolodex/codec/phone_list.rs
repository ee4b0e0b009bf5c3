//! Encoding of a contact's phone list as a single field.
//!
//! The list is written as a bracketed, comma separated sequence of quoted
//! strings:
//!
//! ```text
//! ['555-0100', '555-0101']
//! []
//! ['O\'Brien desk', 'ext. 12; ask for Sam']
//! ```
//!
//! The encoder always emits single-quoted items and escapes `\`, `'` and control
//! characters with a backslash. The parser is more liberal: it accepts single or
//! double quoted items, surrounding whitespace, a trailing comma, and the usual
//! escapes (`\n`, `\t`, `\xNN`, `\uNNNN`, `\UNNNNNNNN`, ...). Anything else is a
//! [`ListSyntaxError`]; the field is never evaluated as code.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (column {column})")]
pub struct ListSyntaxError {
    pub column: usize,
    pub message: String,
}

pub fn encode<S: AsRef<str>>(phones: &[S]) -> String {
    let mut out = String::from("[");
    for (i, phone) in phones.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, phone.as_ref());
    }
    out.push(']');
    out
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
}

pub fn decode(input: &str) -> Result<Vec<String>, ListSyntaxError> {
    Parser::new(input).list()
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            column: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.column += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> ListSyntaxError {
        ListSyntaxError {
            column: self.column.max(1),
            message: message.into(),
        }
    }

    fn list(mut self) -> Result<Vec<String>, ListSyntaxError> {
        self.skip_whitespace();
        match self.bump() {
            Some('[') => {}
            Some(c) => return Err(self.error(format!("expected '[', found '{}'", c))),
            None => return Err(self.error("expected '[', found end of field")),
        }

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(quote @ ('\'' | '"')) => {
                    self.bump();
                    items.push(self.string(quote)?);
                }
                Some(c) => {
                    self.bump();
                    return Err(self.error(format!("expected a quoted string, found '{}'", c)));
                }
                None => return Err(self.error("missing closing ']'")),
            }

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(']') => break,
                Some(c) => return Err(self.error(format!("expected ',' or ']', found '{}'", c))),
                None => return Err(self.error("missing closing ']'")),
            }
        }

        self.skip_whitespace();
        if let Some(c) = self.bump() {
            return Err(self.error(format!("unexpected '{}' after closing ']'", c)));
        }
        Ok(items)
    }

    /// Reads the body of a string literal; the opening quote is already consumed.
    fn string(&mut self, quote: char) -> Result<String, ListSyntaxError> {
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(value),
                Some('\\') => self.escape(&mut value)?,
                Some(c) => value.push(c),
            }
        }
    }

    fn escape(&mut self, value: &mut String) -> Result<(), ListSyntaxError> {
        let c = self
            .bump()
            .ok_or_else(|| self.error("unterminated escape sequence"))?;
        match c {
            '\\' | '\'' | '"' => value.push(c),
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            'a' => value.push('\x07'),
            'b' => value.push('\x08'),
            'f' => value.push('\x0c'),
            'v' => value.push('\x0b'),
            'x' => value.push(self.hex_char(2)?),
            'u' => value.push(self.hex_char(4)?),
            'U' => value.push(self.hex_char(8)?),
            // Unknown escapes are kept verbatim.
            other => {
                value.push('\\');
                value.push(other);
            }
        }
        Ok(())
    }

    fn hex_char(&mut self, digits: usize) -> Result<char, ListSyntaxError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error(format!("expected {} hex digits", digits)))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error(format!("invalid code point {:#x}", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn encodes_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(encode(&empty), "[]");
    }

    #[test]
    fn encodes_plain_numbers() {
        assert_eq!(
            encode(&["555-0100", "555-0101"]),
            "['555-0100', '555-0101']"
        );
    }

    #[test]
    fn escapes_quotes_backslashes_and_controls() {
        assert_eq!(encode(&["O'Brien"]), r"['O\'Brien']");
        assert_eq!(encode(&[r"a\b"]), r"['a\\b']");
        assert_eq!(encode(&["line\nbreak\t\u{1}"]), r"['line\nbreak\t\x01']");
    }

    #[test]
    fn decodes_what_it_encodes() {
        let phones = strings(&["[1]", "a, b", "it's", "semi;colon", "\"dq\"", r"\", ""]);
        assert_eq!(decode(&encode(&phones)).unwrap(), phones);
    }

    #[test]
    fn decodes_double_quoted_items() {
        assert_eq!(
            decode(r#"["it's", 'plain']"#).unwrap(),
            strings(&["it's", "plain"])
        );
    }

    #[test]
    fn tolerates_whitespace_and_trailing_comma() {
        assert_eq!(
            decode("  [ '1' ,'2', ]  ").unwrap(),
            strings(&["1", "2"])
        );
        assert!(decode("[ ]").unwrap().is_empty());
    }

    #[test]
    fn decodes_unicode_escapes() {
        assert_eq!(
            decode(r"['caf\xe9', 'é\U0001F4DE']").unwrap(),
            strings(&["café", "é📞"])
        );
    }

    #[test]
    fn keeps_unknown_escapes() {
        assert_eq!(decode(r"['\d']").unwrap(), strings(&[r"\d"]));
    }

    #[test]
    fn rejects_unbalanced_bracket() {
        let err = decode("['555-1111'").unwrap_err();
        assert!(err.message.contains("']'"), "{}", err);
    }

    #[test]
    fn rejects_unterminated_string() {
        assert!(decode("['555-1111]").is_err());
    }

    #[test]
    fn rejects_bare_words() {
        let err = decode("[555]").unwrap_err();
        assert_eq!(err.column, 2);
    }

    #[test]
    fn rejects_code() {
        assert!(decode("__import__('os').system('true')").is_err());
        assert!(decode("['a'] + ['b']").is_err());
    }

    #[test]
    fn rejects_empty_field() {
        assert!(decode("").is_err());
    }
}
