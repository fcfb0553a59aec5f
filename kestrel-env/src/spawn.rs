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

//! The process-spawning seam (§4.8.1).
//!
//! [`Spawn`] is the boundary the pipeline executor talks to instead of
//! calling `std::process::Command` directly, so its classify/wire/redirect
//! logic can be unit-tested against [`VirtualSpawn`] without any real
//! external program on the test machine.

use std::io::{self, Read, Write};
use std::process::Stdio as StdStdio;
use thiserror::Error;

/// Failure starting or waiting on a child process.
#[derive(Debug, Error)]
#[error("{program}: {source}")]
pub struct SpawnError {
    pub program: String,
    #[source]
    pub source: io::Error,
}

/// How a stage's stream should be connected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StdioSpec {
    Inherit,
    Piped,
    Null,
}

impl From<StdioSpec> for StdStdio {
    fn from(spec: StdioSpec) -> Self {
        match spec {
            StdioSpec::Inherit => StdStdio::inherit(),
            StdioSpec::Piped => StdStdio::piped(),
            StdioSpec::Null => StdStdio::null(),
        }
    }
}

/// Everything needed to start one pipeline stage.
pub struct StageSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub stdin: StdioSpec,
    pub stdout: StdioSpec,
    pub stderr: StdioSpec,
}

/// A running (or finished) pipeline stage.
///
/// Each stream accessor hands the handle over at most once, mirroring
/// `std::process::Child`'s `Option<ChildStdin>`-style fields.
pub trait SpawnedProcess: Send {
    fn stdin(&mut self) -> Option<Box<dyn Write + Send>>;
    fn stdout(&mut self) -> Option<Box<dyn Read + Send>>;
    fn stderr(&mut self) -> Option<Box<dyn Read + Send>>;
    fn wait(&mut self) -> io::Result<i32>;
}

/// The spawning seam itself.
pub trait Spawn {
    fn spawn(&self, spec: StageSpec) -> Result<Box<dyn SpawnedProcess>, SpawnError>;
}

/// Spawns real OS processes via `std::process::Command`.
///
/// `std::process::Command` is used instead of the teacher's raw
/// `nix`/`libc` fork-and-exec calls: those exist to support job control and
/// async cancellation, both explicit non-goals here (§1), so there is no
/// need to manage process groups or signal masks by hand.
#[derive(Debug, Default)]
pub struct RealSpawn;

struct RealProcess(std::process::Child);

impl SpawnedProcess for RealProcess {
    fn stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        self.0
            .stdin
            .take()
            .map(|s| Box::new(s) as Box<dyn Write + Send>)
    }

    fn stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        self.0
            .stdout
            .take()
            .map(|s| Box::new(s) as Box<dyn Read + Send>)
    }

    fn stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.0
            .stderr
            .take()
            .map(|s| Box::new(s) as Box<dyn Read + Send>)
    }

    fn wait(&mut self) -> io::Result<i32> {
        let status = self.0.wait()?;
        Ok(exit_code(status))
    }
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.code().unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

impl Spawn for RealSpawn {
    fn spawn(&self, spec: StageSpec) -> Result<Box<dyn SpawnedProcess>, SpawnError> {
        let (program, args) = platform_invocation(&spec.program, &spec.args);
        let mut command = std::process::Command::new(program);
        command
            .args(args)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(spec.stdin)
            .stdout(spec.stdout)
            .stderr(spec.stderr);
        let child = command.spawn().map_err(|e| SpawnError {
            program: spec.program.clone(),
            source: e,
        })?;
        Ok(Box::new(RealProcess(child)))
    }
}

/// On POSIX, `argv = [name, args...]` unchanged. On Windows, the stage is
/// wrapped in a PowerShell invocation so the name resolves through
/// PowerShell's command table (§4.8); quoting is deliberately the lossy
/// single-quote-wrap scheme the design calls out as a known limitation.
#[cfg(not(windows))]
fn platform_invocation(program: &str, args: &[String]) -> (String, Vec<String>) {
    (program.to_owned(), args.to_owned())
}

#[cfg(windows)]
fn platform_invocation(program: &str, args: &[String]) -> (String, Vec<String>) {
    let mut command_line = String::from(program);
    for arg in args {
        command_line.push(' ');
        if arg.chars().any(char::is_whitespace) {
            command_line.push('\'');
            command_line.push_str(arg);
            command_line.push('\'');
        } else {
            command_line.push_str(arg);
        }
    }
    (
        "powershell".to_owned(),
        vec!["-NoProfile".to_owned(), "-Command".to_owned(), command_line],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn posix_invocation_is_unchanged() {
        let (program, args) = platform_invocation("echo", &["hi".to_owned()]);
        assert_eq!(program, "echo");
        assert_eq!(args, vec!["hi".to_owned()]);
    }

    #[cfg(windows)]
    #[test]
    fn windows_invocation_wraps_in_powershell() {
        let (program, args) =
            platform_invocation("echo", &["hello world".to_owned()]);
        assert_eq!(program, "powershell");
        assert!(args.last().unwrap().contains("'hello world'"));
    }
}
