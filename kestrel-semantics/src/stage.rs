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

//! A single pipeline stage and its classification.

use kestrel_env::{resolve_executable, Environment};
use kestrel_syntax::Redirection;
use std::path::PathBuf;

/// How a stage's name resolves (§8 property 5: built-ins win ties).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Classification {
    Builtin,
    External(PathBuf),
    Unknown,
}

pub fn classify(name: &str, env: &Environment) -> Classification {
    if kestrel_builtin::is_builtin(name) {
        Classification::Builtin
    } else if let Some(path) = resolve_executable(env, name) {
        Classification::External(path)
    } else {
        Classification::Unknown
    }
}

/// One parsed-and-classified stage, ready to run.
pub struct Stage {
    pub name: String,
    pub args: Vec<String>,
    pub redirection: Option<Redirection>,
    pub classification: Classification,
}
