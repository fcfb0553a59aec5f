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

//! [`Environment`], the ordered variable mapping owned by the Driver.

/// An ordered mapping from variable name to value.
///
/// Insertion order is preserved so `env` (§4.7) prints variables in a
/// stable, predictable order across a session. Lookup is linear, which is
/// adequate for the handful of variables a shell session typically carries;
/// see DESIGN.md for why this isn't backed by a hash map with a separate
/// order index.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    entries: Vec<(String, String)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an `Environment` from the current process's environment
    /// variables, in the order `std::env::vars` yields them.
    pub fn from_process() -> Self {
        let mut env = Self::new();
        for (k, v) in std::env::vars() {
            env.set(k, v);
        }
        env
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Removes `name`. Silent if the key is absent, per the `unset`
    /// built-in's contract (§4.7).
    pub fn unset(&mut self, name: &str) {
        self.entries.retain(|(k, _)| k != name);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The home directory for `~` expansion: `$HOME` if set, otherwise the
    /// platform home directory, otherwise `None`.
    pub fn home_dir(&self) -> Option<String> {
        if let Some(home) = self.get("HOME") {
            if !home.is_empty() {
                return Some(home.to_owned());
            }
        }
        dirs::home_dir().map(|p| p.to_string_lossy().into_owned())
    }

    /// Expands a single leading `~` against [`home_dir`](Self::home_dir).
    /// `~` not at the start of the path, or not followed by `/` or
    /// end-of-string, is left untouched (no `~user` support).
    pub fn expand_tilde(&self, path: &str) -> String {
        if let Some(rest) = path.strip_prefix('~') {
            if rest.is_empty() || rest.starts_with('/') {
                if let Some(home) = self.home_dir() {
                    return format!("{home}{rest}");
                }
            }
        }
        path.to_owned()
    }

    /// The `PATH` search list, split on the platform path separator.
    ///
    /// On Windows, §3 requires falling back to `Path` when `PATH` is unset;
    /// `std::env::split_paths` already performs case-insensitive-adjacent
    /// resolution is *not* assumed here, so the fallback is explicit.
    pub fn path_entries(&self) -> Vec<String> {
        let raw = self
            .get("PATH")
            .or_else(|| {
                if cfg!(windows) {
                    self.get("Path")
                } else {
                    None
                }
            })
            .unwrap_or("");
        std::env::split_paths(raw)
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    /// Converts the whole mapping into the `(String, String)` pairs
    /// `std::process::Command::envs` expects.
    pub fn to_process_env(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }
}
