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

//! Executable resolution on `PATH` (part of C8's stage classification).

use crate::environment::Environment;
use std::path::{Path, PathBuf};

/// Resolves `name` against `env`'s `PATH` (see
/// [`Environment::path_entries`]).
///
/// A `name` containing a path separator is checked directly rather than
/// searched on `PATH`, matching how a shell treats `./prog` or `/bin/prog`.
pub fn resolve_executable(env: &Environment, name: &str) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
        let path = Path::new(name);
        return is_executable_file(path).then(|| path.to_path_buf());
    }
    for dir in env.path_entries() {
        let candidate = Path::new(&dir).join(name);
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            for ext in ["exe", "cmd", "bat", "com"] {
                let with_ext = candidate.with_extension(ext);
                if is_executable_file(&with_ext) {
                    return Some(with_ext);
                }
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    #[cfg(unix)]
    #[test]
    fn resolves_name_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let prog = dir.path().join("myprog");
        {
            let mut f = std::fs::File::create(&prog).unwrap();
            f.write_all(b"#!/bin/sh\n").unwrap();
        }
        std::fs::set_permissions(&prog, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut env = Environment::new();
        env.set("PATH", dir.path().to_string_lossy().into_owned());
        assert_eq!(resolve_executable(&env, "myprog"), Some(prog));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_executable_file() {
        let dir = tempfile::tempdir().unwrap();
        let prog = dir.path().join("myprog");
        std::fs::File::create(&prog).unwrap();

        let mut env = Environment::new();
        env.set("PATH", dir.path().to_string_lossy().into_owned());
        assert_eq!(resolve_executable(&env, "myprog"), None);
    }

    #[test]
    fn unresolvable_name_returns_none() {
        let mut env = Environment::new();
        env.set("PATH", "");
        assert_eq!(resolve_executable(&env, "definitely-not-a-real-program"), None);
    }
}
