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

//! Line-editing front end (C1, §4.1, §4.1.1): multi-line continuation,
//! history, and tab completion over the known command set.

pub mod completion;
pub mod continuation;
pub mod reader;

pub use completion::CommandCompleter;
pub use continuation::LineAccumulator;
pub use reader::{ReadOutcome, Reader};
