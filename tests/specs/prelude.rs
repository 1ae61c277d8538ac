// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent helpers shared by every spec.

use std::path::{Path, PathBuf};
use std::process::Output;

use psr_core::{parse_footer, ExecutionMetadata};
use tempfile::TempDir;

pub use serial_test::serial;
pub use similar_asserts::assert_eq;

/// Variables that would leak the developer's setup into a spec.
const SCRUBBED_ENV: &[&str] = &[
    "PSR_POWERSHELL",
    "PSR_TIMEOUT_MS",
    "PSR_MAX_LINES",
    "PSR_MAX_BYTES",
    "PSR_RETENTION_DAYS",
    "PSR_LOG",
    "COLOR",
];

/// `psr` with a scrubbed environment and a throwaway data root.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
    stdin: Option<String>,
    _data: Option<TempDir>,
}

impl CliBuilder {
    fn new() -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("psr").expect("psr binary");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1");
        let data = tempfile::tempdir().expect("data dir");
        cmd.env("PSR_DATA_DIR", data.path());
        Self {
            cmd,
            stdin: None,
            _data: Some(data),
        }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn stdin(mut self, text: impl Into<String>) -> Self {
        self.stdin = Some(text.into());
        self
    }

    fn output(mut self) -> Output {
        self.cmd.write_stdin(self.stdin.take().unwrap_or_default());
        self.cmd.output().expect("run psr")
    }

    /// Run and expect exit 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect a specific exit code.
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        let run = RunAssert { output };
        std::assert_eq!(
            run.output.status.code(),
            Some(code),
            "stdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and expect any non-zero exit.
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure, stdout:\n{}",
            run.stdout()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "stdout lacks {needle:?}:\n{stdout}"
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "stderr lacks {needle:?}:\n{stderr}"
        );
        self
    }

    /// The metadata footer of a `psr run` result.
    pub fn footer(&self) -> ExecutionMetadata {
        parse_footer(&self.stdout()).expect("metadata footer")
    }
}

/// A working directory, a data root, and a stand-in `pwsh` that feeds its
/// stdin to `/bin/sh`.
#[cfg(unix)]
pub struct Sandbox {
    root: TempDir,
}

#[cfg(unix)]
impl Sandbox {
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().expect("sandbox");
        for dir in ["bin", "data", "work"] {
            std::fs::create_dir(root.path().join(dir)).expect("sandbox dir");
        }
        let pwsh = root.path().join("bin/pwsh");
        std::fs::write(&pwsh, "#!/bin/sh\nexec /bin/sh -s\n").expect("stand-in");
        std::fs::set_permissions(&pwsh, std::fs::Permissions::from_mode(0o755)).expect("chmod");
        Self { root }
    }

    pub fn pwsh(&self) -> PathBuf {
        self.root.path().join("bin/pwsh")
    }

    pub fn data(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Write a file under the working directory.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.work().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("parent dir");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    /// `psr` wired to this sandbox.
    pub fn psr(&self) -> CliBuilder {
        cli()
            .env("PSR_DATA_DIR", self.data())
            .env("PSR_POWERSHELL", self.pwsh())
            .current_dir(self.work())
    }
}
