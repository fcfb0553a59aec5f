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

//! The `exit` built-in: ends the REPL driver's process.
//!
//! Unlike the other built-ins, `exit` never returns an [`Outcome`] to its
//! caller on the success path — it persists history best-effort and then
//! terminates the process directly, mirroring how a real shell's `exit`
//! does not hand control back to the command loop.

use crate::common::Context;

pub fn main(args: &[String], ctx: &mut Context) -> ! {
    let code = args
        .first()
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or(0);

    if let Some(path) = kestrel_env::History::default_path(ctx.env) {
        let _ = ctx.history.write_all(&path);
    }

    std::process::exit(code)
}
