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

//! The pipeline executor (C8): splits a logical segment into stages,
//! classifies each one, and either runs the whole chain or reports
//! *Unresolved* so the Driver can try the scripting fallback.

pub mod error;
pub mod executor;
pub mod stage;

pub use error::PipelineError;
pub use executor::{execute, PipelineOutcome, PipelineResult};
pub use stage::{classify, Classification, Stage};
