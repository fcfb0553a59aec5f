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

//! Entry point: wires every crate together into the interactive loop
//! (§4.9).

use kestrel_builtin::BUILTIN_NAMES;
use kestrel_cli::driver::run_command;
use kestrel_env::{Environment, History, RealSpawn};
use kestrel_prompt::{ReadOutcome, Reader};
use kestrel_script::Evaluator;
use std::io::Write;

fn main() {
    let mut env = Environment::from_process();
    let history_path = History::default_path(&env);
    let mut history = match &history_path {
        Some(path) => History::load(path).unwrap_or_else(|_| History::new()),
        None => History::new(),
    };

    let known_commands = known_command_names(&env);
    let mut reader = match Reader::new(known_commands) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("kestrel: failed to start the line editor: {e}");
            std::process::exit(1);
        }
    };
    if let Some(path) = &history_path {
        reader.load_history(path);
    }

    let spawn = RealSpawn;
    let evaluator = Evaluator::new();

    loop {
        match reader.read_command() {
            ReadOutcome::Command(command) => {
                if command.trim().is_empty() {
                    continue;
                }
                history.push(command.clone());
                let report = run_command(&command, &mut env, &mut history, &spawn, &evaluator);
                print!("{}", report.stdout);
                let _ = std::io::stdout().flush();
                eprint!("{}", report.stderr);
            }
            ReadOutcome::Interrupted => continue,
            ReadOutcome::Eof => break,
        }
    }

    if let Some(path) = &history_path {
        let _ = history.write_all(path);
        reader.save_history(path);
    }
}

/// Built-in names plus every executable found on `PATH`, for tab
/// completion (§6 "Completion source"). Built under a non-executing,
/// best-effort scan: unreadable directories are skipped rather than
/// aborting startup.
fn known_command_names(env: &Environment) -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_NAMES.iter().map(|s| s.to_string()).collect();
    for dir in env.path_entries() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_owned());
            }
        }
    }
    names
}
