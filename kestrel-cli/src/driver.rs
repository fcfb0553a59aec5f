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

//! The REPL Driver (C9, §4.9): logical-split a command, run each segment
//! through the pipeline executor, honor short-circuit connectors, and fall
//! back to the scripting evaluator when nothing could be classified.

use crate::diagnostics::render_tokenize_error;
use kestrel_env::{Environment, History, Spawn};
use kestrel_script::{Evaluator, ScriptError};
use kestrel_semantics::{execute, PipelineError, PipelineOutcome};
use kestrel_syntax::{logical_split, Connector};

/// Everything one call to [`run_command`] produced, for the caller to
/// print or to react to (e.g. whether `exit` already terminated the
/// process -- it never returns, so there is no outcome variant for it).
#[derive(Debug, Default, Eq, PartialEq)]
pub struct CommandReport {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Runs one logical command (already joined from physical lines by the
/// Input Reader) to completion.
pub fn run_command(
    command: &str,
    env: &mut Environment,
    history: &mut History,
    spawn: &dyn Spawn,
    evaluator: &Evaluator,
) -> CommandReport {
    let segments = logical_split(command);
    let mut report = CommandReport::default();
    let mut run_next = true;
    let mut previous_connector: Option<Connector> = None;
    let mut any_resolved = false;

    for segment in &segments {
        let should_run = run_next || matches!(previous_connector, Some(Connector::Amp));
        if !should_run {
            break;
        }

        match execute(&segment.text, env, history, spawn) {
            Ok(PipelineOutcome::Resolved(result)) => {
                any_resolved = true;
                report.stdout.push_str(&result.out);
                report.stderr.push_str(&result.err);
                report.exit_code = result.exit_code;
                let success = result.exit_code == 0;
                run_next = match segment.connector {
                    Some(Connector::And) => success,
                    Some(Connector::Or) => !success,
                    Some(Connector::Amp) => true,
                    None => true,
                };
            }
            Ok(PipelineOutcome::Unresolved) => {
                // Left for the whole-command scripting fallback below.
            }
            Err(PipelineError::Tokenize(e)) => {
                report
                    .stderr
                    .push_str(&render_tokenize_error(&segment.text, &e));
                report.stderr.push('\n');
                report.exit_code = 1;
                run_next = false;
            }
            Err(e) => {
                report.stderr.push_str(&e.to_string());
                report.stderr.push('\n');
                report.exit_code = 1;
                run_next = false;
            }
        }

        previous_connector = segment.connector;
    }

    if !any_resolved {
        match evaluator.eval(command, env) {
            Ok(Some(value)) => {
                report.stdout.push_str(&value);
                report.stdout.push('\n');
                report.exit_code = 0;
            }
            Ok(None) => report.exit_code = 0,
            Err(ScriptError::NameError(word)) => {
                report
                    .stderr
                    .push_str(&format!("{word}: command not found\n"));
                report.exit_code = 127;
            }
            Err(e) => {
                report.stderr.push_str(&format!("{e}\n"));
                report.exit_code = 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_env::VirtualSpawn;

    fn env_no_path() -> Environment {
        let mut env = Environment::new();
        env.set("PATH", "");
        env
    }

    #[test]
    fn runs_a_single_builtin_command() {
        let mut env = env_no_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let evaluator = Evaluator::new();
        let report = run_command("echo hello world", &mut env, &mut history, &spawn, &evaluator);
        assert_eq!(report.stdout, "hello world\n");
        assert_eq!(report.exit_code, 0);
    }

    #[test]
    fn short_circuits_on_and_and_failure() {
        let mut env = env_no_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let evaluator = Evaluator::new();
        // `cd` to a nonexistent directory fails (exit 1); `&&` should skip
        // the following `echo`.
        let report = run_command(
            "cd /definitely/not/a/real/path && echo should-not-print",
            &mut env,
            &mut history,
            &spawn,
            &evaluator,
        );
        assert!(!report.stdout.contains("should-not-print"));
    }

    #[test]
    fn unresolved_command_falls_back_to_scripting() {
        let mut env = env_no_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let evaluator = Evaluator::new();
        let report = run_command("1 + 2", &mut env, &mut history, &spawn, &evaluator);
        assert_eq!(report.stdout, "3\n");
    }

    #[test]
    fn unresolved_name_reports_command_not_found() {
        let mut env = env_no_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let evaluator = Evaluator::new();
        let report = run_command("totally_unknown_word", &mut env, &mut history, &spawn, &evaluator);
        assert_eq!(report.stderr, "totally_unknown_word: command not found\n");
        assert_eq!(report.exit_code, 127);
    }

    #[test]
    fn variable_substitution_reads_the_environment() {
        let mut env = env_no_path();
        env.set("HOME", "/u/x");
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let evaluator = Evaluator::new();
        let report = run_command("echo $HOME", &mut env, &mut history, &spawn, &evaluator);
        assert_eq!(report.stdout, "/u/x\n");
    }
}
