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

//! The `env` built-in: lists every variable as `K=V`.

use crate::common::{Context, Outcome};
use itertools::Itertools;

pub fn main(_args: &[String], ctx: &mut Context) -> Outcome {
    let out = ctx
        .env
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .join("\n");
    let out = if out.is_empty() { out } else { out + "\n" };
    Outcome::ok(out)
}
