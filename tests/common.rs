//! Common test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway project directory with an optional README and Makefile.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_readme(self, content: &str) -> Self {
        self.write("README.md", content)
    }

    pub fn with_makefile(self, content: &str) -> Self {
        self.write("Makefile", content)
    }

    pub fn write(self, name: &str, content: &str) -> Self {
        fs::write(self.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Put a fake `make` first on PATH for [`Project::run`].
    ///
    /// The fake logs each argument on its own line to `make-args.log`, writes
    /// noise to stdout and stderr, and exits 0 only for the `known` targets.
    #[cfg(unix)]
    pub fn with_stub_make(self, known: &[&str]) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        let pattern = if known.is_empty() {
            "''".to_string()
        } else {
            known
                .iter()
                .map(|target| format!("'{}'", target))
                .collect::<Vec<_>>()
                .join("|")
        };
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" >> '{log}'\n\
             echo stub-stdout\n\
             echo stub-stderr >&2\n\
             case \"$2\" in\n  {pattern}) exit 0 ;;\n  *) exit 2 ;;\nesac\n",
            log = self.path().join("make-args.log").display(),
            pattern = pattern,
        );

        let stub = bin_dir.join("make");
        fs::write(&stub, script).expect("Failed to write stub make");
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
        self
    }

    /// Arguments the stub `make` received, one per line, in call order.
    pub fn make_args(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("make-args.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run the binary inside the project directory.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(binary());
        cmd.args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1");

        let bin_dir = self.path().join("bin");
        if bin_dir.is_dir() {
            let inherited = std::env::var_os("PATH").unwrap_or_default();
            let path = std::env::join_paths(
                std::iter::once(bin_dir).chain(std::env::split_paths(&inherited)),
            )
            .expect("Failed to build PATH");
            cmd.env("PATH", path);
        }

        cmd.output().expect("Failed to run readme-make-check")
    }
}

pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_readme-make-check"))
}

/// True if a `make` executable can be spawned.
pub fn make_available() -> bool {
    Command::new("make")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
