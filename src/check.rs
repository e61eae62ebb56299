//! End-to-end check of one document.
//!
//! Blocks are visited in document order and lines in block order; each
//! `make` line is dry-run before the next one is looked at.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::markdown::shell_blocks;
use crate::report::CheckReport;
use crate::scan::make_targets;
use crate::target::{validate_target, TargetRunner};

/// Reads `path` and checks every `make` line in its shell blocks.
///
/// An unreadable file is an error and nothing is parsed or run.
pub fn check_file(path: &Path, runner: &dyn TargetRunner) -> Result<CheckReport> {
    let markdown = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    check_markdown(&markdown, runner)
}

/// Checks every `make` line in the shell blocks of `markdown`.
pub fn check_markdown(markdown: &str, runner: &dyn TargetRunner) -> Result<CheckReport> {
    let mut report = CheckReport::new();

    for block in shell_blocks(markdown) {
        report.blocks += 1;
        check_block(&block, runner, &mut report)?;
    }

    Ok(report)
}

/// Dry-runs each `make` line of one block, recording outcomes in `report`.
pub fn check_block(block: &str, runner: &dyn TargetRunner, report: &mut CheckReport) -> Result<()> {
    for target in make_targets(block) {
        let passed = validate_target(runner, target)?;
        report.record(target, passed);
    }
    Ok(())
}
