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

//! The history store, an external collaborator consumed through
//! [`History`] (§6).
//!
//! Entries are kept in memory for the life of the process; the file on disk
//! is only touched at startup, on `exit`, and on explicit `history -r/-w/-a`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O failure reading or writing a history file.
///
/// Per §7, every caller of [`History`]'s file operations treats this as
/// best-effort and silently ignores it, except `history -r/-w/-a` which
/// report it to the user as a built-in failure.
#[derive(Debug, Error)]
#[error("history: {path}: {source}")]
pub struct HistoryError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// In-memory history with lazy, best-effort persistence.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// Index of the first entry not yet covered by a prior `history -a`
    /// (or the startup load). Starts at 0: the source this design is
    /// adapted from keeps a per-process counter defaulting to zero, so the
    /// first `-a` of a session appends the *entire* in-memory history, not
    /// just entries added since start-up -- see DESIGN.md.
    appended_up_to: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads history from `path`, if it exists. A missing file is not an
    /// error; other I/O failures are reported but never fatal to the
    /// caller (§7 "History I/O errors ... silently ignored").
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        match fs::read_to_string(path) {
            Ok(contents) => {
                history.entries = contents.lines().map(str::to_owned).collect();
                Ok(history)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(history),
            Err(e) => Err(HistoryError {
                path: path.to_owned(),
                source: e,
            }),
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The last `n` entries, oldest first, as `history N` lists them.
    pub fn last(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Overwrites `path` with the entire in-memory history (`history -w`
    /// and best-effort on `exit`).
    pub fn write_all(&mut self, path: &Path) -> Result<(), HistoryError> {
        let joined = self.entries.join("\n");
        let contents = if joined.is_empty() {
            joined
        } else {
            joined + "\n"
        };
        fs::write(path, contents).map_err(|e| HistoryError {
            path: path.to_owned(),
            source: e,
        })?;
        self.appended_up_to = self.entries.len();
        Ok(())
    }

    /// Appends entries added since the last append within this session
    /// (`history -a`). See `appended_up_to` for why the first call of a
    /// session appends everything.
    pub fn append_since_last(&mut self, path: &Path) -> Result<(), HistoryError> {
        if self.appended_up_to >= self.entries.len() {
            return Ok(());
        }
        let mut out = self
            .entries
            .iter()
            .skip(self.appended_up_to)
            .fold(String::new(), |mut acc, line| {
                acc.push_str(line);
                acc.push('\n');
                acc
            });
        if out.is_empty() {
            out.push('\n');
            out.clear();
        }
        use io::Write;
        let result = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| f.write_all(out.as_bytes()));
        result.map_err(|e| HistoryError {
            path: path.to_owned(),
            source: e,
        })?;
        self.appended_up_to = self.entries.len();
        Ok(())
    }

    /// Replaces the in-memory history with the contents of `path`
    /// (`history -r`).
    pub fn read_from(&mut self, path: &Path) -> Result<(), HistoryError> {
        let contents = fs::read_to_string(path).map_err(|e| HistoryError {
            path: path.to_owned(),
            source: e,
        })?;
        self.entries = contents.lines().map(str::to_owned).collect();
        self.appended_up_to = self.entries.len();
        Ok(())
    }

    /// The default history file location: `$HISTFILE` if set.
    pub fn default_path(env: &crate::Environment) -> Option<PathBuf> {
        env.get("HISTFILE").map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_empty() {
        let history = History::load(Path::new("/no/such/histfile")).unwrap();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist");
        let mut history = History::new();
        history.push("echo a");
        history.push("echo b");
        history.write_all(&path).unwrap();

        let reloaded = History::load(&path).unwrap();
        assert_eq!(reloaded.entries(), &["echo a", "echo b"]);
    }

    #[test]
    fn first_append_writes_entire_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist");
        let mut history = History::new();
        history.push("one");
        history.push("two");
        history.append_since_last(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn second_append_only_writes_new_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist");
        let mut history = History::new();
        history.push("one");
        history.append_since_last(&path).unwrap();
        history.push("two");
        history.append_since_last(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn last_n_returns_suffix() {
        let mut history = History::new();
        for i in 0..5 {
            history.push(format!("cmd{i}"));
        }
        assert_eq!(history.last(2), &["cmd3", "cmd4"]);
    }
}
