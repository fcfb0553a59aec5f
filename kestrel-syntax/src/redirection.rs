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

//! The redirection parser (component C6).

use crate::token::Token;

/// A recognised redirection operator.
///
/// Variant order matches the table in §6 of the design: which native
/// stream(s) the operator diverts to a file, and whether the target is
/// truncated or appended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RedirectionOp {
    /// `>`, `1>` -- truncate stdout to the file.
    StdoutTruncate,
    /// `>|`, `1>|` -- truncate stdout to the file (clobber-override form).
    StdoutClobber,
    /// `>>`, `1>>` -- append stdout to the file.
    StdoutAppend,
    /// `2>` -- truncate stderr to the file.
    StderrTruncate,
    /// `2>|` -- truncate stderr to the file (clobber-override form).
    StderrClobber,
    /// `2>>` -- append stderr to the file.
    StderrAppend,
    /// `&>` -- truncate both stdout and stderr to the file.
    Combined,
}

impl RedirectionOp {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            ">" | "1>" => Self::StdoutTruncate,
            ">|" | "1>|" => Self::StdoutClobber,
            ">>" | "1>>" => Self::StdoutAppend,
            "2>" => Self::StderrTruncate,
            "2>|" => Self::StderrClobber,
            "2>>" => Self::StderrAppend,
            "&>" => Self::Combined,
            _ => return None,
        })
    }

    /// Whether the target file should be opened in append mode.
    pub fn is_append(self) -> bool {
        matches!(self, Self::StdoutAppend | Self::StderrAppend)
    }
}

/// A parsed `(operator, target)` redirection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redirection {
    pub op: RedirectionOp,
    pub target: Token,
}

/// Splits `tokens` into positional arguments and an optional trailing
/// redirection.
///
/// The first recognised operator token with a following token becomes the
/// redirection; everything before it is positional, and anything after the
/// target is discarded. If no operator is found, every token is positional.
pub fn parse_redirection(tokens: &[Token]) -> (Vec<Token>, Option<Redirection>) {
    for (i, tok) in tokens.iter().enumerate() {
        if i + 1 >= tokens.len() {
            break;
        }
        if let Some(op) = RedirectionOp::parse(tok.as_str()) {
            let args = tokens[..i].to_vec();
            let redir = Redirection {
                op,
                target: tokens[i + 1].clone(),
            };
            return (args, Some(redir));
        }
    }
    (tokens.to_vec(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w)).collect()
    }

    #[test]
    fn no_operator_is_all_positional() {
        let (args, redir) = parse_redirection(&toks(&["echo", "hi"]));
        assert_eq!(args, toks(&["echo", "hi"]));
        assert!(redir.is_none());
    }

    #[test]
    fn truncate_stdout() {
        let (args, redir) = parse_redirection(&toks(&["echo", "hi", ">", "/tmp/p"]));
        assert_eq!(args, toks(&["echo", "hi"]));
        let redir = redir.unwrap();
        assert_eq!(redir.op, RedirectionOp::StdoutTruncate);
        assert_eq!(redir.target, Token::new("/tmp/p"));
    }

    #[test]
    fn append_stderr() {
        let (_, redir) = parse_redirection(&toks(&["cmd", "2>>", "err.log"]));
        assert_eq!(redir.unwrap().op, RedirectionOp::StderrAppend);
    }

    #[test]
    fn combined_stream() {
        let (_, redir) = parse_redirection(&toks(&["cmd", "&>", "all.log"]));
        assert_eq!(redir.unwrap().op, RedirectionOp::Combined);
    }

    #[test]
    fn trailing_tokens_after_target_are_discarded() {
        let (args, redir) = parse_redirection(&toks(&["cmd", ">", "out", "extra"]));
        assert_eq!(args, toks(&["cmd"]));
        assert_eq!(redir.unwrap().target, Token::new("out"));
    }

    #[test]
    fn operator_at_last_position_is_not_a_redirection() {
        // i + 1 must be < len, so a trailing bare ">" has no target.
        let (args, redir) = parse_redirection(&toks(&["cmd", ">"]));
        assert_eq!(args, toks(&["cmd", ">"]));
        assert!(redir.is_none());
    }
}
