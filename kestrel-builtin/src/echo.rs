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

//! The `echo` built-in: writes its arguments, space-joined, to stdout.

use crate::common::{Context, Outcome};

pub fn main(args: &[String], _ctx: &mut Context) -> Outcome {
    Outcome::ok(format!("{}\n", args.join(" ")))
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
    fn joins_arguments_with_single_space() {
        let mut env = Environment::new();
        let mut history = History::new();
        let out = main(&["hello".to_owned(), "world".to_owned()], &mut ctx(&mut env, &mut history));
        assert_eq!(out.out, "hello world\n");
        assert_eq!(out.exit_code, 0);
    }

    #[test]
    fn no_arguments_prints_blank_line() {
        let mut env = Environment::new();
        let mut history = History::new();
        let out = main(&[], &mut ctx(&mut env, &mut history));
        assert_eq!(out.out, "\n");
    }
}
