//! Tokenizer — converts literal-expression source text into an ordered token list.
//!
//! A single left-to-right scan over the input's characters. At each cursor
//! position the lexical classes are tried in order: whitespace, number,
//! string, punctuation (`[`, `]`, `,`), identifier. Anything else is an
//! [`CompileError::UnexpectedCharacter`].
//!
//! # Key design decisions
//!
//! - **Validation during the scan**: exponent and sign placement inside a number
//!   are checked character-by-character with one character of lookahead
//!   (`peek`) and lookbehind (`previous`), so `.23e` fails at the `e`, not
//!   after the float conversion.
//! - **Decoded string tokens**: escape sequences are resolved here, so the
//!   AST never sees raw backslash text.
//! - **Per-call state**: the cursor lives in a [`Lexer`] built fresh by
//!   [`tokenize`]; nothing is shared between calls.

use crate::error::{CompileError, Result};
use log::{debug, trace};

/// Decoded payload of a number or string token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(f64),
    String(String),
}

/// One lexical unit.
///
/// `text` is the lexeme used for punctuation and keyword matching. For string
/// tokens it is the decoded content, identical to the string in `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub value: Option<TokenValue>,
    /// Character offset of the first character of the lexeme.
    pub offset: usize,
}

impl Token {
    fn bare(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            value: None,
            offset,
        }
    }
}

/// Tokenize `source` into tokens in source order.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(source).run()?;
    debug!("tokenized {} chars into {} tokens", source.chars().count(), tokens.len());
    Ok(tokens)
}

/// Fixed table for single-character escapes. Escapes not listed here pass the
/// escaped character through unchanged.
const ESCAPES: [(char, char); 7] = [
    ('n', '\n'),
    ('f', '\u{000C}'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\u{000B}'),
    ('\'', '\''),
    ('"', '"'),
];

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\t' | '\n' | '\u{000B}' | '\u{00A0}')
}

fn is_digit(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_digit())
}

/// Valid character after the `e` in scientific notation.
fn is_exp_operator(ch: Option<char>) -> bool {
    matches!(ch, Some('+') | Some('-')) || is_digit(ch)
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_part(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

struct Lexer {
    chars: Vec<char>,
    index: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(ch) = self.current() {
            if is_whitespace(ch) {
                self.index += 1;
            } else if ch.is_ascii_digit() || (ch == '.' && is_digit(self.peek())) {
                self.read_number()?;
            } else if ch == '\'' || ch == '"' {
                self.read_string(ch)?;
            } else if matches!(ch, '[' | ']' | ',') {
                self.tokens.push(Token::bare(ch, self.index));
                self.index += 1;
            } else if is_ident_start(ch) {
                self.read_identifier();
            } else {
                return Err(CompileError::UnexpectedCharacter {
                    ch,
                    offset: self.index,
                });
            }
        }
        Ok(self.tokens)
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index + 1).copied()
    }

    fn previous(&self) -> Option<char> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.chars.get(i))
            .map(|c| c.to_ascii_lowercase())
    }

    fn read_number(&mut self) -> Result<()> {
        let start = self.index;
        let mut number = String::new();

        while let Some(raw) = self.current() {
            let ch = raw.to_ascii_lowercase();
            if ch.is_ascii_digit() || ch == '.' {
                number.push(ch);
            } else if ch == 'e' {
                if !is_exp_operator(self.peek()) {
                    return Err(self.invalid_number(start));
                }
                number.push(ch);
            } else if ch == '+' || ch == '-' {
                // A sign is only legal directly after the exponent marker and
                // must itself be followed by a digit.
                if self.previous() != Some('e') || !is_digit(self.peek()) {
                    return Err(self.invalid_number(start));
                }
                number.push(ch);
            } else {
                break;
            }
            self.index += 1;
        }

        let value = number
            .parse::<f64>()
            .map_err(|source| CompileError::NumberFormat {
                text: number.clone(),
                source,
            })?;
        trace!("number token {number:?} = {value} at {start}");
        self.tokens.push(Token {
            text: number,
            value: Some(TokenValue::Number(value)),
            offset: start,
        });
        Ok(())
    }

    /// The error carries the numeric run scanned so far plus the offending character.
    fn invalid_number(&self, start: usize) -> CompileError {
        let end = (self.index + 1).min(self.chars.len());
        CompileError::InvalidNumber {
            text: self.chars[start..end].iter().collect(),
        }
    }

    fn read_string(&mut self, quote: char) -> Result<()> {
        let start = self.index;
        self.index += 1;
        let mut string = String::new();
        // Last unescaped character was the other quote style.
        let mut ended_on_other_quote = false;

        while let Some(ch) = self.current() {
            if ch == quote {
                self.index += 1;
                trace!("string token {string:?} at {start}");
                self.tokens.push(Token {
                    text: string.clone(),
                    value: Some(TokenValue::String(string)),
                    offset: start,
                });
                return Ok(());
            }

            if ch == '\\' {
                self.index += 1;
                ended_on_other_quote = false;
                match self.current() {
                    Some('u') => {
                        let decoded = self.read_unicode_escape()?;
                        string.push(decoded);
                    }
                    Some(escaped) => {
                        let replacement = ESCAPES
                            .iter()
                            .find(|(from, _)| *from == escaped)
                            .map(|(_, to)| *to)
                            .unwrap_or(escaped);
                        string.push(replacement);
                        self.index += 1;
                    }
                    None => break,
                }
                continue;
            }

            ended_on_other_quote = ch == '\'' || ch == '"';
            string.push(ch);
            self.index += 1;
        }

        if ended_on_other_quote {
            let close = if quote == '"' { '\'' } else { '"' };
            return Err(CompileError::MismatchedQuote {
                open: quote,
                close,
                offset: start,
            });
        }
        Err(CompileError::UnclosedString { offset: start })
    }

    /// Decode `\uXXXX` with the cursor on the `u`. Leaves the cursor after the
    /// last hex digit. A high surrogate must be followed by a `\uXXXX` low
    /// surrogate; the pair decodes to one scalar value.
    fn read_unicode_escape(&mut self) -> Result<char> {
        let offset = self.index - 1;
        let high = self.read_hex4(offset)?;

        if (0xD800..0xDC00).contains(&high) {
            if self.current() == Some('\\') && self.peek() == Some('u') {
                self.index += 1;
                let low_offset = self.index - 1;
                let low = self.read_hex4(low_offset)?;
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    if let Some(ch) = char::from_u32(combined) {
                        return Ok(ch);
                    }
                }
                return Err(CompileError::InvalidUnicodeEscape {
                    offset,
                    escape: format!("{high:04X}\\u{low:04X}"),
                });
            }
        }

        char::from_u32(high).ok_or_else(|| CompileError::InvalidUnicodeEscape {
            offset,
            escape: format!("{high:04X}"),
        })
    }

    /// Read exactly four hex digits following the `u` under the cursor.
    fn read_hex4(&mut self, offset: usize) -> Result<u32> {
        let begin = self.index + 1;
        let end = (begin + 4).min(self.chars.len());
        let hex: String = self.chars[begin..end].iter().collect();
        if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CompileError::InvalidUnicodeEscape { offset, escape: hex });
        }
        self.index = begin + 4;
        u32::from_str_radix(&hex, 16)
            .map_err(|_| CompileError::InvalidUnicodeEscape { offset, escape: hex })
    }

    fn read_identifier(&mut self) {
        let start = self.index;
        let mut ident = String::new();
        while let Some(ch) = self.current() {
            if !is_ident_part(ch) {
                break;
            }
            ident.push(ch);
            self.index += 1;
        }
        trace!("identifier token {ident:?} at {start}");
        self.tokens.push(Token::bare(ident, start));
    }
}
