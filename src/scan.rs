//! `make` invocation detection inside a shell block.

use crate::defaults::MAKE_PREFIX;

/// Returns the target string of a `make <target>` line, if `line` is one.
///
/// The line is trimmed before the prefix test. Everything after the
/// `"make "` prefix is returned verbatim, flags and extra words included.
pub fn make_target(line: &str) -> Option<&str> {
    line.trim().strip_prefix(MAKE_PREFIX)
}

/// Returns the target strings of every `make` line in `block`, in line order.
pub fn make_targets(block: &str) -> Vec<&str> {
    block.lines().filter_map(make_target).collect()
}
