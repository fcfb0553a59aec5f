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

//! Errors from running a pipeline.

use kestrel_env::SpawnError;
use kestrel_syntax::TokenizeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while splitting, classifying, spawning, or redirecting a
/// pipeline (§3.1).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// `cmd1 | | cmd2`: an empty stage between two pipe operators.
    #[error("pipeline: empty stage")]
    EmptyStage,

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    /// A redirection target could not be opened. Per §7, this is reported
    /// but does not discard the pipeline's captured output.
    #[error("pipeline: {path}: {source}")]
    Redirection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
