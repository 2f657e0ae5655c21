//! Shared utility functions for tree rendering

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use super::config::DisplayOptions;
use super::entry::TreeEntry;

/// Connector drawn before an entry that has following siblings.
pub const BRANCH: &str = "├── ";
/// Connector drawn before the last entry of a sibling group.
pub const LAST_BRANCH: &str = "└── ";
/// Guide carried under an ancestor that still has following siblings.
pub const GUIDE: &str = "│   ";
/// Guide carried under an ancestor that was the last of its group.
pub const BLANK_GUIDE: &str = "    ";

const SIZE_UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// Check if a name denotes a hidden entry.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Check if an entry passes the hidden and dirs-only filters.
///
/// Directories always pass the dirs-only filter. There is no look-ahead for
/// matching descendants.
pub fn should_list(entry: &TreeEntry, options: &DisplayOptions) -> bool {
    if !options.include_hidden && is_hidden(&entry.name) {
        return false;
    }
    if options.dirs_only && !entry.is_dir {
        return false;
    }
    true
}

/// Order two entries: directories first, then case-insensitive by name.
///
/// Names that only differ in case fall back to a byte comparison so the
/// order stays deterministic. Invalid UTF-8 is folded lossily for the
/// case-insensitive pass only.
pub fn compare_entries(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| fold_case(&a.name).cmp(&fold_case(&b.name)))
        .then_with(|| a.name.cmp(&b.name))
}

fn fold_case(name: &OsStr) -> String {
    name.to_string_lossy().to_lowercase()
}

/// Sort sibling entries in display order.
pub fn sort_entries(entries: &mut [TreeEntry]) {
    entries.sort_by(compare_entries);
}

/// Connector for an entry depending on its sibling position.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for a directory's children.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK_GUIDE)
    } else {
        format!("{}{}", prefix, GUIDE)
    }
}

/// Name shown on the header line for a resolved root path.
///
/// Paths without a final component (`/`, `..`) are shown whole.
pub fn display_name(path: &Path) -> OsString {
    path.file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| path.as_os_str().to_os_string())
}

/// Format a size in bytes with binary units and one decimal.
///
/// Values below 1024 are shown as whole bytes. Anything past the TiB range
/// is shown in PiB without further scaling.
pub fn human_size(bytes: u64) -> String {
    const UNIT: f64 = 1024.0;

    if bytes < 1024 {
        return format!("{}B", bytes);
    }

    let mut value = bytes as f64;
    for unit in SIZE_UNITS {
        value /= UNIT;
        if value < UNIT {
            return format!("{:.1}{}", value, unit);
        }
    }
    format!("{:.1}PiB", value / UNIT)
}
