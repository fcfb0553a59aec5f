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

//! [`VirtualSpawn`], an in-memory [`Spawn`] implementation that never
//! touches a real OS process.
//!
//! It lets the pipeline executor's classify/wire/redirect logic be
//! exercised by unit tests without depending on any particular external
//! program being installed on the machine running the tests.

use crate::spawn::{Spawn, SpawnError, SpawnedProcess, StageSpec};
use std::collections::HashMap;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// A registered virtual program: given its arguments and the bytes written
/// to its stdin, produces `(exit_code, stdout, stderr)`.
pub type VirtualProgram = Rc<dyn Fn(&[String], &[u8]) -> (i32, Vec<u8>, Vec<u8>)>;

/// An in-memory stand-in for the OS process table.
#[derive(Clone, Default)]
pub struct VirtualSpawn {
    programs: HashMap<String, VirtualProgram>,
}

impl VirtualSpawn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` to run `behavior` instead of spawning a real
    /// process. Spawning any other name fails with a "not found" I/O
    /// error, matching what `std::process::Command::spawn` would report
    /// for a nonexistent program.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        behavior: impl Fn(&[String], &[u8]) -> (i32, Vec<u8>, Vec<u8>) + 'static,
    ) {
        self.programs.insert(name.into(), Rc::new(behavior));
    }
}

impl Spawn for VirtualSpawn {
    fn spawn(&self, spec: StageSpec) -> Result<Box<dyn SpawnedProcess>, SpawnError> {
        let program = self.programs.get(&spec.program).cloned().ok_or_else(|| SpawnError {
            program: spec.program.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such virtual program"),
        })?;
        Ok(Box::new(VirtualProcess {
            program,
            args: spec.args,
            stdin_buf: Arc::new(Mutex::new(Vec::new())),
            computed: None,
            stdin_taken: false,
            stdout_taken: false,
            stderr_taken: false,
        }))
    }
}

struct StdinSink(Arc<Mutex<Vec<u8>>>);

impl Write for StdinSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct VirtualProcess {
    program: VirtualProgram,
    args: Vec<String>,
    stdin_buf: Arc<Mutex<Vec<u8>>>,
    computed: Option<(i32, Vec<u8>, Vec<u8>)>,
    stdin_taken: bool,
    stdout_taken: bool,
    stderr_taken: bool,
}

impl VirtualProcess {
    fn ensure_computed(&mut self) -> &(i32, Vec<u8>, Vec<u8>) {
        if self.computed.is_none() {
            let stdin = self.stdin_buf.lock().unwrap().clone();
            self.computed = Some((self.program)(&self.args, &stdin));
        }
        self.computed.as_ref().unwrap()
    }
}

impl SpawnedProcess for VirtualProcess {
    fn stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        if self.stdin_taken {
            return None;
        }
        self.stdin_taken = true;
        Some(Box::new(StdinSink(self.stdin_buf.clone())))
    }

    fn stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        if self.stdout_taken {
            return None;
        }
        self.stdout_taken = true;
        let (_, out, _) = self.ensure_computed().clone();
        Some(Box::new(Cursor::new(out)))
    }

    fn stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        if self.stderr_taken {
            return None;
        }
        self.stderr_taken = true;
        let (_, _, err) = self.ensure_computed().clone();
        Some(Box::new(Cursor::new(err)))
    }

    fn wait(&mut self) -> io::Result<i32> {
        let (code, _, _) = self.ensure_computed();
        Ok(*code)
    }
}
