//! Aggregated results of checking one document.

use colored::Colorize;

/// Outcome of dry-running one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Target string as written after `make ` in the document
    pub target: String,
    /// Whether the dry run exited with status zero
    pub passed: bool,
}

/// Result of checking every `make` line in a document.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of fenced `shell` blocks found
    pub blocks: usize,
    /// One entry per `make` line, in document order
    pub outcomes: Vec<TargetOutcome>,
}

impl CheckReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one target
    pub fn record(&mut self, target: impl Into<String>, passed: bool) {
        self.outcomes.push(TargetOutcome {
            target: target.into(),
            passed,
        });
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    /// Targets whose dry run failed, in document order
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.target.as_str())
    }

    /// Check if every target passed (vacuously true with no targets)
    pub fn is_valid(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status for this report: 1 if any target failed, else 0
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }

    /// Display a summary of the report
    pub fn display_summary(&self) {
        println!();
        println!("{}", "━".repeat(60).cyan());

        let status_icon = if self.is_valid() {
            "✓".green()
        } else {
            "✗".red()
        };

        print!("{} make targets: ", status_icon);

        if self.total() > 0 {
            print!("{} total", self.total());
            if self.passed() > 0 {
                print!(", {} {}", self.passed(), "passed".green());
            }
            if self.failed() > 0 {
                print!(", {} {}", self.failed(), "failed".red());
            }
            println!(
                " in {} shell {}",
                self.blocks,
                if self.blocks == 1 { "block" } else { "blocks" }
            );
        } else {
            println!("no targets to check");
        }

        for target in self.failures() {
            println!("  {} {}", "→".red(), target.cyan());
        }

        println!("{}", "━".repeat(60).cyan());
    }
}
