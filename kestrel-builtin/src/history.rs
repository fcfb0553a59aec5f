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

//! The `history` built-in: lists, reads, writes, and appends session history.
//!
//! `history` with no arguments lists the whole in-memory history; `history N`
//! lists only the last `N` entries. `-r FILE` replaces in-memory history with
//! the file's contents, `-w FILE` overwrites the file with the whole
//! in-memory history, and `-a FILE` appends only the entries accumulated
//! since the last `-a` (or since startup, for the first call — see
//! DESIGN.md's resolution of this open question).

use crate::common::{Context, Outcome};
use std::path::Path;

pub fn main(args: &[String], ctx: &mut Context) -> Outcome {
    match args {
        [] => list(ctx, None),
        [n] if n.parse::<usize>().is_ok() => list(ctx, n.parse::<usize>().ok()),
        [flag, path] if flag == "-r" => read(ctx, path),
        [flag, path] if flag == "-w" => write(ctx, path),
        [flag, path] if flag == "-a" => append(ctx, path),
        _ => Outcome::failure("history: invalid arguments\n"),
    }
}

fn list(ctx: &mut Context, n: Option<usize>) -> Outcome {
    let entries = ctx.history.entries();
    let slice = match n {
        Some(n) => ctx.history.last(n),
        None => entries,
    };
    let mut out = String::new();
    for entry in slice {
        out.push_str(entry);
        out.push('\n');
    }
    Outcome::ok(out)
}

fn read(ctx: &mut Context, path: impl AsRef<Path>) -> Outcome {
    match ctx.history.read_from(path.as_ref()) {
        Ok(()) => Outcome::ok(""),
        Err(e) => Outcome::failure(format!("history: {e}\n")),
    }
}

fn write(ctx: &mut Context, path: impl AsRef<Path>) -> Outcome {
    match ctx.history.write_all(path.as_ref()) {
        Ok(()) => Outcome::ok(""),
        Err(e) => Outcome::failure(format!("history: {e}\n")),
    }
}

fn append(ctx: &mut Context, path: impl AsRef<Path>) -> Outcome {
    match ctx.history.append_since_last(path.as_ref()) {
        Ok(()) => Outcome::ok(""),
        Err(e) => Outcome::failure(format!("history: {e}\n")),
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
    fn lists_all_entries() {
        let mut env = Environment::new();
        let mut history = History::new();
        history.push("echo one".to_owned());
        history.push("echo two".to_owned());
        let out = main(&[], &mut ctx(&mut env, &mut history));
        assert_eq!(out.out, "echo one\necho two\n");
    }

    #[test]
    fn lists_last_n_entries() {
        let mut env = Environment::new();
        let mut history = History::new();
        history.push("a".to_owned());
        history.push("b".to_owned());
        history.push("c".to_owned());
        let out = main(&["2".to_owned()], &mut ctx(&mut env, &mut history));
        assert_eq!(out.out, "b\nc\n");
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histfile");
        let mut env = Environment::new();
        let mut history = History::new();
        history.push("echo hi".to_owned());

        let out = main(
            &["-w".to_owned(), path.to_string_lossy().into_owned()],
            &mut ctx(&mut env, &mut history),
        );
        assert_eq!(out.exit_code, 0);

        let mut loaded = History::new();
        let out = main(
            &["-r".to_owned(), path.to_string_lossy().into_owned()],
            &mut ctx(&mut env, &mut loaded),
        );
        assert_eq!(out.exit_code, 0);
        assert_eq!(loaded.entries(), &["echo hi".to_owned()]);
    }

    #[test]
    fn append_writes_only_new_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histfile");
        let mut env = Environment::new();
        let mut history = History::new();
        history.push("one".to_owned());

        main(
            &["-a".to_owned(), path.to_string_lossy().into_owned()],
            &mut ctx(&mut env, &mut history),
        );
        history.push("two".to_owned());
        main(
            &["-a".to_owned(), path.to_string_lossy().into_owned()],
            &mut ctx(&mut env, &mut history),
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn invalid_arguments_fail() {
        let mut env = Environment::new();
        let mut history = History::new();
        let out = main(&["-x".to_owned()], &mut ctx(&mut env, &mut history));
        assert_eq!(out.exit_code, 1);
    }
}
