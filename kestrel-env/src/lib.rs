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

//! Execution environment: the variable mapping, `PATH` resolution, the
//! process-spawning seam, and the history store.
//!
//! This crate has no notion of shell syntax or of what a pipeline is; it is
//! the collection of system-facing collaborators the upper layers are built
//! on top of.

pub mod environment;
pub mod history;
pub mod path;
pub mod spawn;
pub mod virtual_spawn;

pub use environment::Environment;
pub use history::{History, HistoryError};
pub use path::resolve_executable;
pub use spawn::{RealSpawn, Spawn, SpawnError, SpawnedProcess, StageSpec, StdioSpec};
pub use virtual_spawn::VirtualSpawn;
