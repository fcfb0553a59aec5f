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

//! The pipeline executor (C8): classify every stage, then spawn the chain.
//!
//! Classification happens for the whole pipeline before anything is
//! spawned (§9 "Classification before spawning") — discovering an `Unknown`
//! stage after a sibling has already been spawned would leave a zombie
//! child and, for redirections, a half-applied filesystem effect.

use crate::error::PipelineError;
use crate::stage::{classify, Classification, Stage};
use kestrel_env::{Environment, History, Spawn, StageSpec, StdioSpec};
use kestrel_syntax::{parse_redirection, pipe_split, substitute, tokenize, RedirectionOp};
use std::fs::OpenOptions;
use std::io::{Read, Write};

/// The result of one logical segment: either a completed run, or a signal
/// that no stage could be classified and the scripting fallback should be
/// tried instead (§3 "Pipeline Result").
pub enum PipelineOutcome {
    Resolved(PipelineResult),
    Unresolved,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PipelineResult {
    pub exit_code: i32,
    pub out: String,
    pub err: String,
}

/// Parses and runs `segment` as a pipeline. `segment` is the text of a
/// single logical-splitter segment (no `&&`/`||`/`&` inside it).
pub fn execute(
    segment: &str,
    env: &mut Environment,
    history: &mut History,
    spawn: &dyn Spawn,
) -> Result<PipelineOutcome, PipelineError> {
    let stage_texts = pipe_split(segment);
    if stage_texts.iter().any(|s| s.trim().is_empty()) {
        return Err(PipelineError::EmptyStage);
    }

    let mut stages = Vec::with_capacity(stage_texts.len());
    for text in &stage_texts {
        let substituted = substitute(text, |name| env.get(name));
        let tokens = tokenize(&substituted)?;
        let (positional, redirection) = parse_redirection(&tokens);
        let mut iter = positional.into_iter();
        let name = match iter.next() {
            Some(t) => t.into_string(),
            None => return Err(PipelineError::EmptyStage),
        };
        let args: Vec<String> = iter.map(|t| t.into_string()).collect();
        let classification = classify(&name, env);
        stages.push(Stage {
            name,
            args,
            redirection,
            classification,
        });
    }

    if stages
        .iter()
        .any(|s| s.classification == Classification::Unknown)
    {
        return Ok(PipelineOutcome::Unresolved);
    }

    let last_redirection = stages.last().and_then(|s| s.redirection.clone());
    let (exit_code, out, err) = run_chain(&stages, env, history, spawn)?;
    let (out, err) = apply_redirection(last_redirection, out, err);

    Ok(PipelineOutcome::Resolved(PipelineResult {
        exit_code,
        out: String::from_utf8_lossy(&out).into_owned(),
        err: String::from_utf8_lossy(&err).into_owned(),
    }))
}

/// Runs every stage in order, wiring a built-in's or external's stdout into
/// the next stage's stdin as plain bytes (§9 "Hybrid built-in/external
/// pipeline"). Returns the final stage's exit code, its captured stdout,
/// and the concatenation of every non-final external stage's stderr with
/// the final stage's stderr (§4.8 step 5).
fn run_chain(
    stages: &[Stage],
    env: &mut Environment,
    history: &mut History,
    spawn: &dyn Spawn,
) -> Result<(i32, Vec<u8>, Vec<u8>), PipelineError> {
    let mut upstream: Option<Vec<u8>> = None;
    let mut captured_stderr = Vec::new();
    let mut exit_code = 0;
    let mut final_out = Vec::new();
    let mut final_err = Vec::new();

    for (i, stage) in stages.iter().enumerate() {
        let is_last = i + 1 == stages.len();

        match &stage.classification {
            Classification::Builtin => {
                let mut ctx = kestrel_builtin::Context {
                    env,
                    history,
                    builtin_names: kestrel_builtin::BUILTIN_NAMES,
                };
                if stage.name == "exit" {
                    // Never returns: persists history and terminates the process.
                    kestrel_builtin::exit::main(&stage.args, &mut ctx);
                }
                let outcome = kestrel_builtin::run(&stage.name, &stage.args, &mut ctx)
                    .expect("stage was classified as a builtin");
                if is_last {
                    exit_code = outcome.exit_code;
                    final_out = outcome.out.into_bytes();
                    final_err = outcome.err.into_bytes();
                } else {
                    captured_stderr.extend(outcome.err.into_bytes());
                    upstream = Some(outcome.out.into_bytes());
                }
            }
            Classification::External(path) => {
                let stdin_spec = if upstream.is_some() {
                    StdioSpec::Piped
                } else {
                    StdioSpec::Null
                };
                let spec = StageSpec {
                    program: path.to_string_lossy().into_owned(),
                    args: stage.args.clone(),
                    env: env
                        .iter()
                        .map(|(k, v)| (k.to_owned(), v.to_owned()))
                        .collect(),
                    stdin: stdin_spec,
                    stdout: StdioSpec::Piped,
                    stderr: StdioSpec::Piped,
                };
                let mut child = spawn.spawn(spec)?;

                let stdin_handle = child.stdin();
                let writer = match (upstream.take(), stdin_handle) {
                    (Some(bytes), Some(mut handle)) => Some(std::thread::spawn(move || {
                        let _ = handle.write_all(&bytes);
                    })),
                    _ => None,
                };

                let mut out_buf = Vec::new();
                if let Some(mut out) = child.stdout() {
                    let _ = out.read_to_end(&mut out_buf);
                }
                let mut err_buf = Vec::new();
                if let Some(mut err) = child.stderr() {
                    let _ = err.read_to_end(&mut err_buf);
                }
                if let Some(writer) = writer {
                    let _ = writer.join();
                }
                let code = child.wait()?;

                if is_last {
                    exit_code = code;
                    final_out = out_buf;
                    final_err = err_buf;
                } else {
                    exit_code = code;
                    captured_stderr.extend(err_buf);
                    upstream = Some(out_buf);
                }
            }
            Classification::Unknown => unreachable!("caller filters Unknown stages first"),
        }
    }

    captured_stderr.extend(final_err);
    Ok((exit_code, final_out, captured_stderr))
}

/// Applies the last stage's redirection, per the §6 operator table. On a
/// failure to open the target, the captured output is returned unchanged
/// with the failure appended to the error stream (§7).
fn apply_redirection(
    redirection: Option<kestrel_syntax::Redirection>,
    out: Vec<u8>,
    err: Vec<u8>,
) -> (Vec<u8>, Vec<u8>) {
    let Some(redirection) = redirection else {
        return (out, err);
    };

    let (to_file, to_return): (Vec<u8>, Vec<u8>) = match redirection.op {
        RedirectionOp::StdoutTruncate | RedirectionOp::StdoutClobber | RedirectionOp::StdoutAppend => {
            (out, err)
        }
        RedirectionOp::StderrTruncate | RedirectionOp::StderrClobber | RedirectionOp::StderrAppend => {
            (err, out)
        }
        RedirectionOp::Combined => {
            let mut combined = out;
            combined.extend(err);
            (combined, Vec::new())
        }
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true);
    if redirection.op.is_append() {
        options.append(true);
    } else {
        options.truncate(true);
    }

    match options.open(redirection.target.as_str()) {
        Ok(mut file) => {
            if let Err(e) = file.write_all(&to_file) {
                let path = std::path::PathBuf::from(redirection.target.as_str());
                let error = PipelineError::Redirection { path, source: e };
                let mut returned = to_file;
                returned.extend(format!("{error}\n").into_bytes());
                returned.extend(to_return);
                return (returned, Vec::new());
            }
            (to_return, Vec::new())
        }
        Err(e) => {
            let path = std::path::PathBuf::from(redirection.target.as_str());
            let error = PipelineError::Redirection { path, source: e };
            let mut returned = to_file;
            returned.extend(format!("{error}\n").into_bytes());
            returned.extend(to_return);
            (returned, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_env::VirtualSpawn;
    use std::io::Read as _;

    fn env_with_path() -> Environment {
        let mut env = Environment::new();
        env.set("PATH", "");
        env
    }

    #[test]
    fn single_builtin_stage_resolves() {
        let mut env = env_with_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let outcome = execute("echo hi", &mut env, &mut history, &spawn).unwrap();
        match outcome {
            PipelineOutcome::Resolved(result) => {
                assert_eq!(result.exit_code, 0);
                assert_eq!(result.out, "hi\n");
            }
            PipelineOutcome::Unresolved => panic!("expected resolved"),
        }
    }

    #[test]
    fn unknown_first_word_is_unresolved() {
        let mut env = env_with_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let outcome = execute("totally-unknown-command", &mut env, &mut history, &spawn).unwrap();
        assert!(matches!(outcome, PipelineOutcome::Unresolved));
    }

    /// `resolve_executable` only ever finds real files on `PATH`, so to
    /// exercise an External stage against [`VirtualSpawn`] the test has to
    /// place a real (dummy, never-invoked) executable on `PATH` and
    /// register the path `classify` will resolve to.
    #[cfg(unix)]
    #[test]
    fn builtin_piped_into_external_feeds_bytes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let program_path = dir.path().join("upper");
        std::fs::write(&program_path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&program_path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut env = Environment::new();
        env.set("PATH", dir.path().to_string_lossy().into_owned());
        let mut history = History::new();
        let mut spawn = VirtualSpawn::new();
        spawn.register(program_path.to_string_lossy().into_owned(), |_args, stdin| {
            let text = String::from_utf8_lossy(stdin).to_uppercase();
            (0, text.into_bytes(), Vec::new())
        });

        let outcome = execute("echo hi | upper", &mut env, &mut history, &spawn).unwrap();
        match outcome {
            PipelineOutcome::Resolved(result) => {
                assert_eq!(result.exit_code, 0);
                assert_eq!(result.out, "HI\n");
            }
            PipelineOutcome::Unresolved => panic!("expected resolved"),
        }
    }

    #[test]
    fn empty_stage_between_bars_is_an_error() {
        let mut env = env_with_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let result = execute("echo hi | | echo bye", &mut env, &mut history, &spawn);
        assert!(matches!(result, Err(PipelineError::EmptyStage)));
    }

    #[test]
    fn stdout_redirection_writes_file_and_hides_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut env = env_with_path();
        let mut history = History::new();
        let spawn = VirtualSpawn::new();
        let command = format!("echo hi > {}", path.display());
        let outcome = execute(&command, &mut env, &mut history, &spawn).unwrap();
        match outcome {
            PipelineOutcome::Resolved(result) => {
                assert_eq!(result.out, "");
                assert_eq!(result.err, "");
            }
            PipelineOutcome::Unresolved => panic!("expected resolved"),
        }
        let mut contents = String::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "hi\n");
    }
}
