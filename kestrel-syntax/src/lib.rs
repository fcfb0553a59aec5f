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

//! Lexical front end of the shell language: tokenizing, variable
//! substitution, and the two segment splitters (logical and pipeline).
//!
//! This crate owns no notion of a built-in or an external program; it only
//! turns a logical command string into the pieces the pipeline executor
//! needs (see `kestrel-semantics`).

pub mod error;
pub mod lexer;
pub mod redirection;
pub mod split;
pub mod substitute;
pub mod token;

pub use error::{TokenizeError, TokenizeErrorCause};
pub use lexer::tokenize;
pub use redirection::{parse_redirection, Redirection, RedirectionOp};
pub use split::{logical_split, pipe_split, Connector, Segment};
pub use substitute::substitute;
pub use token::Token;
