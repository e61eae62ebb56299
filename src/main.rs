//! CLI entry point for readme-make-check.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use readme_make_check::check::check_file;
use readme_make_check::defaults::README_FILE;
use readme_make_check::target::MakeRunner;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

#[derive(Parser)]
#[command(name = "readme-make-check")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Check that make targets in README shell blocks exist", long_about = None)]
#[command(
    after_help = "Every ```shell block is scanned for lines starting with 'make '.\nEach target is dry-run with 'make -n' in the current directory.\nExits 1 if any target fails."
)]
struct Cli {
    /// Markdown document to check
    #[arg(long, short, value_name = "PATH", default_value = README_FILE)]
    file: PathBuf,
    /// Skip the summary after the per-target lines
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let report = check_file(&cli.file, &MakeRunner::default())?;

    if !cli.quiet {
        report.display_summary();
    }

    if !report.is_valid() {
        std::process::exit(report.exit_code());
    }

    Ok(())
}
