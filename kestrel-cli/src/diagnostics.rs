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

//! Pretty-printing for [`TokenizeError`] (§7.1): turns a parse error into a
//! single-line, caret-annotated diagnostic through `annotate-snippets`. No
//! color/theme layer is used here; plain-text rendering is all the core
//! budget has room for.

use annotate_snippets::{Level, Renderer, Snippet};
use kestrel_syntax::TokenizeError;

/// Renders `error` against the original `source` line, with a caret under
/// the byte offset where the tokenizer's state machine ran off the end.
pub fn render_tokenize_error(source: &str, error: &TokenizeError) -> String {
    let offset = error.offset.min(source.len());
    let end = (offset + 1).min(source.len().max(offset + 1));
    let message = error.to_string();

    let snippet = Snippet::source(source)
        .line_start(1)
        .annotation(Level::Error.span(offset..end).label(&message));

    let renderer = Renderer::plain();
    let report = Level::Error.title(&message).snippet(snippet);
    renderer.render(report).to_string()
}
