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

//! Shared types used by every built-in.

use kestrel_env::{Environment, History};

/// What a built-in produced: text for each stream, and an exit code.
///
/// A built-in never reads a piped stdin (§4.7); this is the whole of a
/// built-in's observable effect besides mutating [`Context`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Outcome {
    pub out: String,
    pub err: String,
    pub exit_code: i32,
}

impl Outcome {
    pub fn ok(out: impl Into<String>) -> Self {
        Outcome {
            out: out.into(),
            err: String::new(),
            exit_code: 0,
        }
    }

    pub fn failure(err: impl Into<String>) -> Self {
        Outcome {
            out: String::new(),
            err: err.into(),
            exit_code: 1,
        }
    }
}

/// Dependencies a built-in may need beyond its own arguments.
pub struct Context<'a> {
    pub env: &'a mut Environment,
    pub history: &'a mut History,
    /// Names known to the registry, used by `type` to report "shell
    /// builtin" without the built-in crate depending on the registry.
    pub builtin_names: &'static [&'static str],
}
