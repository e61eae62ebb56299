//! # readme-make-check
//!
//! Keeps a project's README honest about its Makefile. Every fenced `shell`
//! block in the document is scanned for `make <target>` lines, and each
//! target is dry-run (`make -n`) in the current directory to confirm it exists.
//!
//! ## Modules
//!
//! - [`markdown`] - Code block extraction from markdown text
//! - [`scan`] - `make` invocation detection inside a shell block
//! - [`target`] - Dry-run validation of a single target
//! - [`report`] - Aggregated results and exit status
//! - [`check`] - End-to-end check of one document
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use readme_make_check::check::check_file;
//! use readme_make_check::target::MakeRunner;
//!
//! let report = check_file(Path::new("README.md"), &MakeRunner::default())
//!     .expect("Failed to check README");
//!
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod markdown;
pub mod report;
pub mod scan;
pub mod target;

/// Fixed names the checker works with.
pub mod defaults {
    /// Document checked when no `--file` is given: `README.md`
    pub const README_FILE: &str = "README.md";
    /// Fence info string that marks a block as shell commands: `shell`
    pub const SHELL_LANG: &str = "shell";
    /// Line prefix that marks a build invocation: `make `
    pub const MAKE_PREFIX: &str = "make ";
    /// Build tool executable: `make`
    pub const MAKE_PROGRAM: &str = "make";
    /// Flag that makes the build tool print recipes without running them: `-n`
    pub const DRY_RUN_FLAG: &str = "-n";
}
