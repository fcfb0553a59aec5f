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

//! The `cd` built-in: changes the working directory.
//!
//! A bare `cd` defaults to `$HOME`; per DESIGN.md's resolution of the
//! matching open question in the design, a missing `$HOME` is reported as
//! an error rather than left to panic on an absent argument.

use crate::common::{Context, Outcome};

pub fn main(args: &[String], ctx: &mut Context) -> Outcome {
    let requested = match args.first() {
        Some(arg) => arg.clone(),
        None => match ctx.env.home_dir() {
            Some(home) => home,
            None => return Outcome::failure("cd: HOME not set\n"),
        },
    };
    let target = ctx.env.expand_tilde(&requested);

    match std::env::set_current_dir(&target) {
        Ok(()) => Outcome::ok(""),
        Err(_) => Outcome::failure(format!("cd: {target}: No such file or directory\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_env::{Environment, History};

    fn ctx(env: &mut Environment, history: &mut History) -> Context<'_> {
        Context {
            env,
            history,
            builtin_names: &[],
        }
    }

    #[test]
    fn changes_to_existing_directory() {
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut env = Environment::new();
        let mut history = History::new();
        let out = main(
            &[dir.path().to_string_lossy().into_owned()],
            &mut ctx(&mut env, &mut history),
        );
        assert_eq!(out.exit_code, 0);
        assert_eq!(
            std::env::current_dir().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
        std::env::set_current_dir(original).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let mut env = Environment::new();
        let mut history = History::new();
        let out = main(
            &["/definitely/does/not/exist".to_owned()],
            &mut ctx(&mut env, &mut history),
        );
        assert_eq!(out.exit_code, 1);
        assert!(out.err.contains("No such file or directory"));
    }

    #[test]
    fn default_target_is_home() {
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut env = Environment::new();
        env.set("HOME", dir.path().to_string_lossy().into_owned());
        let mut history = History::new();
        let out = main(&[], &mut ctx(&mut env, &mut history));
        assert_eq!(out.exit_code, 0);
        std::env::set_current_dir(original).unwrap();
    }
}
