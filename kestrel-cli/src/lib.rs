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

//! The REPL Driver (C9): wires the lexical front end, the pipeline
//! executor, the scripting fallback, and the line-editing front end into
//! one interactive loop. Split into a library so `tests/` can drive
//! [`driver::run_command`] directly without spawning the compiled binary.

pub mod diagnostics;
pub mod driver;

pub use driver::{run_command, CommandReport};
