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

//! Tab completion over the known command set (§6 "Completion source").

use rustyline::completion::Completer;
use rustyline::Context;

/// Completes the word under the cursor against a fixed set of known
/// command names (built-ins union `PATH` executables), cached for the
/// shell's lifetime.
pub struct CommandCompleter {
    known: Vec<String>,
}

impl CommandCompleter {
    pub fn new(mut known: Vec<String>) -> Self {
        known.sort();
        known.dedup();
        CommandCompleter { known }
    }

    /// Every known name starting with `prefix`, each with a trailing
    /// space, in name order.
    pub fn matches(&self, prefix: &str) -> Vec<String> {
        self.known
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| format!("{name} "))
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        Ok((start, self.matches(&line[start..pos])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_prefix_with_trailing_space() {
        let completer = CommandCompleter::new(vec!["echo".to_owned(), "exit".to_owned(), "cd".to_owned()]);
        assert_eq!(completer.matches("ec"), vec!["echo ".to_owned()]);
    }

    #[test]
    fn matches_every_candidate_with_a_shared_prefix() {
        let completer = CommandCompleter::new(vec!["echo".to_owned(), "exit".to_owned()]);
        let mut matches = completer.matches("e");
        matches.sort();
        assert_eq!(matches, vec!["echo ".to_owned(), "exit ".to_owned()]);
    }

    #[test]
    fn no_match_returns_empty() {
        let completer = CommandCompleter::new(vec!["echo".to_owned()]);
        assert!(completer.matches("zzz").is_empty());
    }
}
