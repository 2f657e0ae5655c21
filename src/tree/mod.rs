//! Directory tree rendering
//!
//! `TreeRenderer` lists a directory, filters and orders its children, and
//! streams one line per entry to a `TreeOutput` sink, recursing into
//! subdirectories depth-first.

mod config;
mod entry;
mod renderer;
mod utils;

// Re-export public types
pub use config::DisplayOptions;
pub use entry::TreeEntry;
pub use renderer::{TreeOutput, TreeRenderer};
pub use utils::{
    BLANK_GUIDE, BRANCH, GUIDE, LAST_BRANCH, child_prefix, compare_entries, connector,
    display_name, human_size, is_hidden, should_list, sort_entries,
};
