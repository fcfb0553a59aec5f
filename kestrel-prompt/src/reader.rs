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

//! [`Reader`]: the decorator that prints a prompt and hands physical lines
//! to [`LineAccumulator`], backed by `rustyline` for line editing and
//! history recall (§4.1.1).

use crate::completion::CommandCompleter;
use crate::continuation::LineAccumulator;
use rustyline::completion::Completer as RlCompleter;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::path::Path;

struct ShellHelper {
    completer: CommandCompleter,
}

impl RlCompleter for ShellHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

/// What happened at the end of one [`Reader::read_command`] call.
pub enum ReadOutcome {
    Command(String),
    /// Ctrl-C: the current (possibly partial) input is discarded and the
    /// prompt restarts (§4.1.1, §5).
    Interrupted,
    /// Ctrl-D at the outermost prompt: the shell should terminate (§4.1).
    Eof,
}

/// The interactive front end: prompts, reads physical lines, and joins
/// them per the continuation rules in §4.1.
pub struct Reader {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl Reader {
    pub fn new(known_commands: Vec<String>) -> rustyline::Result<Self> {
        let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
        editor.set_helper(Some(ShellHelper {
            completer: CommandCompleter::new(known_commands),
        }));
        Ok(Reader { editor })
    }

    /// Loads readline history from `path`, if it exists. A missing file is
    /// not an error; any other failure is ignored (§7, history I/O is
    /// always best-effort).
    pub fn load_history(&mut self, path: &Path) {
        let _ = self.editor.load_history(path);
    }

    /// Best-effort save of readline history to `path`.
    pub fn save_history(&mut self, path: &Path) {
        let _ = self.editor.save_history(path);
    }

    /// Reads one logically complete command, prompting `$ ` for the first
    /// physical line and `> ` for continuations.
    pub fn read_command(&mut self) -> ReadOutcome {
        let mut accumulator = LineAccumulator::new();
        let mut prompt = "$ ";
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());
                    if let Some(command) = accumulator.push(&line) {
                        return ReadOutcome::Command(command);
                    }
                    prompt = "> ";
                }
                Err(ReadlineError::Interrupted) => return ReadOutcome::Interrupted,
                Err(ReadlineError::Eof) => return ReadOutcome::Eof,
                Err(_) => return ReadOutcome::Eof,
            }
        }
    }
}
