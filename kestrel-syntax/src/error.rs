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

//! Errors raised by the lexical front end.

use thiserror::Error;

/// Cause of a [`TokenizeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenizeErrorCause {
    /// A `'` or `"` was opened but never closed.
    UnterminatedQuote,
    /// A `\` was the last character of the input.
    DanglingEscape,
}

/// Error produced by [`crate::lexer::tokenize`].
///
/// `offset` is the byte index into the input string at which the state
/// machine ran off the end without closing the quote or escape it was in;
/// it is used to place a caret when the error is rendered for the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("{cause}")]
pub struct TokenizeError {
    pub cause: TokenizeErrorCause,
    pub offset: usize,
}

impl std::fmt::Display for TokenizeErrorCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedQuote => write!(f, "unterminated quote"),
            Self::DanglingEscape => write!(f, "dangling escape at end of input"),
        }
    }
}
