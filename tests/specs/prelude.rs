//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Start building an `fv` invocation with a clean, colorless environment.
pub fn cli() -> Cli {
    Cli { args: Vec::new(), envs: Vec::new() }
}

pub struct Cli {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn arg(mut self, arg: impl AsRef<Path>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn output(self) -> std::process::Output {
        let mut cmd = Command::cargo_bin("fv").unwrap();
        cmd.env_remove("FV_LOG").env_remove("RUST_LOG").env_remove("COLOR").env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args).output().unwrap()
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> Run {
        self.exits(0)
    }

    /// Run and assert a specific exit code.
    pub fn exits(self, code: i32) -> Run {
        let args = self.args.join(" ");
        let output = self.output();
        let run = Run {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "fv {args}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct Run {
    pub stdout: String,
    pub stderr: String,
}

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// A temporary test output directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn log(&self, rel: &str, entries: &Value) -> PathBuf {
        self.file(rel, &serde_json::to_string_pretty(entries).unwrap())
    }
}

// ── Fixture builders ────────────────────────────────────────────────────

pub fn tap(text: &str) -> Value {
    json!({ "tapOnElementCommand": { "selector": { "textRegex": text, "optional": false }, "optional": false } })
}

pub fn input_text(text: &str) -> Value {
    json!({ "inputTextCommand": { "text": text, "optional": false } })
}

pub fn run_flow(flow: &str, commands: Vec<Value>) -> Value {
    json!({ "runFlowCommand": { "flow": flow, "commands": commands, "optional": false } })
}

pub fn done(command: Value, timestamp: u64) -> Value {
    json!({ "command": command, "metadata": { "status": "COMPLETED", "timestamp": timestamp, "duration": 120 } })
}

pub fn failed(command: Value, timestamp: u64, message: &str) -> Value {
    json!({
        "command": command,
        "metadata": { "status": "FAILED", "timestamp": timestamp, "duration": 5000, "error": { "message": message } }
    })
}
