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

//! The `pwd` built-in: writes the current working directory.
//!
//! The working directory is OS state, not part of [`kestrel_env::Environment`]
//! (§3), so this reads it straight from `std::env::current_dir`.

use crate::common::{Context, Outcome};

pub fn main(_args: &[String], _ctx: &mut Context) -> Outcome {
    match std::env::current_dir() {
        Ok(path) => Outcome::ok(format!("{}\n", path.display())),
        Err(e) => Outcome::failure(format!("pwd: {e}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_env::{Environment, History};

    #[test]
    fn prints_current_directory() {
        let mut env = Environment::new();
        let mut history = History::new();
        let mut ctx = Context {
            env: &mut env,
            history: &mut history,
            builtin_names: &[],
        };
        let out = main(&[], &mut ctx);
        assert_eq!(out.exit_code, 0);
        assert!(out.out.ends_with('\n'));
        assert_eq!(out.out.trim_end(), std::env::current_dir().unwrap().display().to_string());
    }
}
