// This file is part of kestrel, an interactive command shell.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The tokenizer (component C2).
//!
//! `tokenize` is a small state machine over `{OUTSIDE, BARE, SINGLE, DOUBLE}`
//! plus a one-shot escape flag. It never looks ahead more than one character
//! and never backtracks, so a [`TokenizeError`] always points at the byte
//! offset where the input ran out mid-quote or mid-escape.

use crate::error::{TokenizeError, TokenizeErrorCause};
use crate::token::Token;

#[derive(Clone, Copy, Eq, PartialEq)]
enum State {
    Outside,
    Bare,
    Single,
    Double,
}

/// Splits `input` into [`Token`]s honoring single/double quotes and
/// backslash escapes.
///
/// See the module documentation and §4.2 of the design for the exact state
/// transitions.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut state = State::Outside;
    let mut escape = false;
    let mut double_quote_start = 0;
    let mut single_quote_start = 0;

    let mut iter = input.char_indices().peekable();
    while let Some((idx, c)) = iter.next() {
        match state {
            State::Outside => match c {
                ' ' | '\t' | '\n' | '\r' => {}
                '\'' => {
                    state = State::Single;
                    quoted = true;
                    single_quote_start = idx;
                }
                '"' => {
                    state = State::Double;
                    quoted = true;
                    double_quote_start = idx;
                }
                '\\' => {
                    escape = true;
                    state = State::Bare;
                }
                _ => {
                    current.push(c);
                    state = State::Bare;
                }
            },
            State::Bare => {
                if escape {
                    current.push(c);
                    escape = false;
                    continue;
                }
                match c {
                    ' ' | '\t' | '\n' | '\r' => {
                        tokens.push(Token::new(std::mem::take(&mut current)));
                        quoted = false;
                        state = State::Outside;
                    }
                    '\'' => {
                        state = State::Single;
                        quoted = true;
                        single_quote_start = idx;
                    }
                    '"' => {
                        state = State::Double;
                        quoted = true;
                        double_quote_start = idx;
                    }
                    '\\' => escape = true,
                    _ => current.push(c),
                }
            }
            State::Single => {
                if c == '\'' {
                    state = State::Bare;
                } else {
                    current.push(c);
                }
            }
            State::Double => match c {
                '"' => state = State::Bare,
                '\\' => {
                    if let Some(&(_, next)) = iter.peek() {
                        if matches!(next, '"' | '\\' | '$' | '`') {
                            current.push(next);
                            iter.next();
                        } else {
                            current.push('\\');
                        }
                    } else {
                        current.push('\\');
                    }
                }
                _ => current.push(c),
            },
        }
    }

    match state {
        State::Outside | State::Bare => {
            if escape {
                return Err(TokenizeError {
                    cause: TokenizeErrorCause::DanglingEscape,
                    offset: input.len(),
                });
            }
            if !current.is_empty() || quoted {
                tokens.push(Token::new(current));
            }
            Ok(tokens)
        }
        State::Single => Err(TokenizeError {
            cause: TokenizeErrorCause::UnterminatedQuote,
            offset: single_quote_start,
        }),
        State::Double => Err(TokenizeError {
            cause: TokenizeErrorCause::UnterminatedQuote,
            offset: double_quote_start,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn splits_on_whitespace() {
        let tokens = tokenize("echo hello world").unwrap();
        assert_eq!(words(&tokens), vec!["echo", "hello", "world"]);
    }

    #[test]
    fn preserves_double_space_inside_double_quotes() {
        let tokens = tokenize(r#"echo "a  b""#).unwrap();
        assert_eq!(words(&tokens), vec!["echo", "a  b"]);
    }

    #[test]
    fn single_quotes_are_fully_literal() {
        let tokens = tokenize(r#"echo 'a"b'"#).unwrap();
        assert_eq!(words(&tokens), vec!["echo", "a\"b"]);
    }

    #[test]
    fn empty_quoted_token_is_preserved() {
        let tokens = tokenize(r#"echo "" ''"#).unwrap();
        assert_eq!(words(&tokens), vec!["echo", "", ""]);
    }

    #[test]
    fn double_quote_escape_set_is_limited() {
        // \n is not in the escape set for double quotes, so both chars survive.
        let tokens = tokenize(r#""a\nb""#).unwrap();
        assert_eq!(words(&tokens), vec!["a\\nb"]);
    }

    #[test]
    fn unterminated_double_quote_errors() {
        let err = tokenize(r#"echo "abc"#).unwrap_err();
        assert_matches!(err.cause, TokenizeErrorCause::UnterminatedQuote);
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn unterminated_single_quote_errors() {
        let err = tokenize("echo 'abc").unwrap_err();
        assert_matches!(err.cause, TokenizeErrorCause::UnterminatedQuote);
    }

    #[test]
    fn dangling_escape_errors() {
        let err = tokenize("echo abc\\").unwrap_err();
        assert_matches!(err.cause, TokenizeErrorCause::DanglingEscape);
    }

    #[test]
    fn no_token_produced_for_blank_input() {
        assert_eq!(tokenize("   ").unwrap(), vec![]);
    }

    #[test]
    fn backslash_escapes_a_space_outside_quotes() {
        let tokens = tokenize(r"echo a\ b").unwrap();
        assert_eq!(words(&tokens), vec!["echo", "a b"]);
    }
}
