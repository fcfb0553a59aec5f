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

//! The `type` built-in: reports how each name would be resolved.
//!
//! Built-in names take precedence over external programs of the same name
//! (§8 property 5), so the built-in check runs before the `PATH` search.

use crate::common::{Context, Outcome};
use kestrel_env::resolve_executable;

pub fn main(args: &[String], ctx: &mut Context) -> Outcome {
    let mut out = String::new();
    let mut err = String::new();

    for name in args {
        if ctx.builtin_names.contains(&name.as_str()) {
            out.push_str(&format!("{name} is a shell builtin\n"));
        } else if let Some(path) = resolve_executable(ctx.env, name) {
            out.push_str(&format!("{name} is {}\n", path.display()));
        } else {
            err.push_str(&format!("{name}: not found\n"));
        }
    }

    Outcome {
        exit_code: if err.is_empty() { 0 } else { 1 },
        out,
        err,
    }
}
