//! Dry-run validation of a single `make` target.
//!
//! The build tool sits behind [`TargetRunner`] so the rest of the crate can be
//! exercised without `make` installed. [`MakeRunner`] is the real thing;
//! [`ScriptedRunner`] answers from a fixed list and records what it was asked.

use std::cell::RefCell;
use std::collections::HashSet;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::defaults::{DRY_RUN_FLAG, MAKE_PROGRAM};

/// Something that can dry-run a build target.
pub trait TargetRunner {
    /// Dry-run `target`. `Ok(true)` if the tool accepted it, `Ok(false)` if it
    /// exited non-zero. `Err` only when the tool could not be run at all.
    fn dry_run(&self, target: &str) -> Result<bool>;
}

/// Runs `make -n <target>` in the current directory with all output discarded.
#[derive(Debug, Clone)]
pub struct MakeRunner {
    program: String,
}

impl Default for MakeRunner {
    fn default() -> Self {
        Self {
            program: MAKE_PROGRAM.to_string(),
        }
    }
}

impl MakeRunner {
    /// Use a different executable in place of `make`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Get the executable this runner invokes.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TargetRunner for MakeRunner {
    fn dry_run(&self, target: &str) -> Result<bool> {
        // The target string goes through as one argument, unsplit.
        let status = Command::new(&self.program)
            .args([DRY_RUN_FLAG, target])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| {
                format!("Failed to run {} {} {}", self.program, DRY_RUN_FLAG, target)
            })?;

        Ok(status.success())
    }
}

/// In-memory runner for testing. Every target passes unless listed as failing.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner that accepts every target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that rejects the given targets.
    pub fn failing<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing: targets.into_iter().map(Into::into).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Targets dry-run so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl TargetRunner for ScriptedRunner {
    fn dry_run(&self, target: &str) -> Result<bool> {
        self.calls.borrow_mut().push(target.to_string());
        Ok(!self.failing.contains(target))
    }
}

/// Dry-runs `target` and prints one line saying how it went.
pub fn validate_target(runner: &dyn TargetRunner, target: &str) -> Result<bool> {
    let ok = runner.dry_run(target)?;

    if ok {
        println!(
            "{} Make command for target '{}' completed successfully.",
            "✓".green(),
            target.cyan()
        );
    } else {
        println!(
            "{} Make command for target '{}' failed with error:",
            "✗".red(),
            target.cyan()
        );
    }

    Ok(ok)
}
