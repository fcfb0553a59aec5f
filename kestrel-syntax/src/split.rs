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

//! The logical splitter (C4) and pipeline splitter (C5).

/// Connector that followed a [`Segment`], if any.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connector {
    And,
    Or,
    Amp,
}

/// One `(text, connector)` pair produced by [`logical_split`].
///
/// `connector` is `None` for the final segment of the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub text: String,
    pub connector: Option<Connector>,
}

/// Splits `input` on `&&`, `||`, and `&` outside quotes.
///
/// Leading/trailing whitespace of each segment is trimmed, and segments that
/// are empty after trimming are dropped -- so `"a && && b"` yields two
/// segments, not three.
pub fn logical_split(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (idx, c) = chars[i];
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                i += 1;
            }
            '&' if chars.get(i + 1).map(|&(_, n)| n) == Some('&') => {
                push_segment(&mut segments, &input[start..idx], Connector::And);
                i += 2;
                start = i;
            }
            '|' if chars.get(i + 1).map(|&(_, n)| n) == Some('|') => {
                push_segment(&mut segments, &input[start..idx], Connector::Or);
                i += 2;
                start = i;
            }
            '&' => {
                push_segment(&mut segments, &input[start..idx], Connector::Amp);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    let tail = input[start..].trim();
    if !tail.is_empty() {
        segments.push(Segment {
            text: tail.to_owned(),
            connector: None,
        });
    }
    segments
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, connector: Connector) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        segments.push(Segment {
            text: trimmed.to_owned(),
            connector: Some(connector),
        });
    }
}

/// Splits a segment on `|` outside quotes.
///
/// A backslash toggles a one-shot escape that protects the following
/// character from quote/operator interpretation without otherwise changing
/// state; it is consumed but not stripped here (stripping happens in the
/// tokenizer). Unlike [`logical_split`], empty segments -- including a
/// trailing one produced by a dangling `|` -- are preserved, since an empty
/// pipeline stage is a syntax error the caller must report (§7).
pub fn pipe_split(input: &str) -> Vec<String> {
    let mut stages = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escape = false;
    let chars: Vec<(usize, char)> = input.char_indices().collect();

    for &(idx, c) in &chars {
        if escape {
            escape = false;
            continue;
        }
        if c == '\\' {
            escape = true;
            continue;
        }
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '|' => {
                stages.push(input[start..idx].to_owned());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    stages.push(input[start..].to_owned());
    stages
}
