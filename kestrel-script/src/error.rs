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

//! Errors from the scripting fallback.

use thiserror::Error;

/// Failure evaluating a line that wasn't a recognised shell command.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The first unresolved name in the expression or statement. The
    /// Driver renders this as `"WORD: command not found"` (§4.9, §7).
    #[error("name not found: {0}")]
    NameError(String),

    /// Any other evaluator failure, reported verbatim.
    #[error("script error: {0}")]
    Eval(String),
}
