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

//! The built-in registry (C7): the fixed set of commands the pipeline
//! executor runs in-process instead of spawning, per §4.7.
//!
//! `exit` is handled separately from the rest: it never returns control to
//! its caller, so it cannot share the `fn(&[String], &mut Context) -> Outcome`
//! shape the other built-ins use.

mod cd;
mod common;
mod echo;
mod env;
pub mod exit;
mod history;
mod pwd;
#[path = "type_.rs"]
mod type_;
mod unset;

pub use common::{Context, Outcome};

/// Every name the registry recognizes, including `exit`.
///
/// Fed to [`Context::builtin_names`] so `type` can report "shell builtin"
/// without this crate depending on its own registry.
pub const BUILTIN_NAMES: &[&str] = &[
    "cd", "echo", "env", "exit", "history", "pwd", "type", "unset",
];

/// Whether `name` is a registered built-in.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Runs a built-in by name. Returns `None` if `name` isn't registered.
///
/// `exit` is never dispatched through here: the pipeline executor must
/// check for it first and call [`exit::main`] directly, since that call
/// never returns.
pub fn run(name: &str, args: &[String], ctx: &mut Context) -> Option<Outcome> {
    let f: fn(&[String], &mut Context) -> Outcome = match name {
        "cd" => cd::main,
        "echo" => echo::main,
        "env" => env::main,
        "history" => history::main,
        "pwd" => pwd::main,
        "type" => type_::main,
        "unset" => unset::main,
        _ => return None,
    };
    Some(f(args, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_env::{Environment, History};

    #[test]
    fn recognizes_every_builtin_name() {
        for name in BUILTIN_NAMES {
            assert!(is_builtin(name));
        }
        assert!(!is_builtin("ls"));
    }

    #[test]
    fn dispatches_echo() {
        let mut env = Environment::new();
        let mut history = History::new();
        let mut ctx = Context {
            env: &mut env,
            history: &mut history,
            builtin_names: BUILTIN_NAMES,
        };
        let out = run("echo", &["hi".to_owned()], &mut ctx).unwrap();
        assert_eq!(out.out, "hi\n");
    }

    #[test]
    fn unknown_name_returns_none() {
        let mut env = Environment::new();
        let mut history = History::new();
        let mut ctx = Context {
            env: &mut env,
            history: &mut history,
            builtin_names: BUILTIN_NAMES,
        };
        assert!(run("nope", &[], &mut ctx).is_none());
    }
}
