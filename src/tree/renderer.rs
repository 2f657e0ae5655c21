//! TreeRenderer - walks a directory depth-first and streams each line

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Result, TreeError};

use super::config::DisplayOptions;
use super::entry::TreeEntry;
use super::utils::{child_prefix, display_name, should_list, sort_entries};

/// Callback for streaming output - receives each line as it is rendered.
pub trait TreeOutput {
    /// Header line naming the root directory.
    fn output_root(&mut self, name: &OsStr) -> io::Result<()>;

    /// One entry below the root. `size` is only set for files when sizes
    /// were requested and could be read.
    fn output_node(
        &mut self,
        name: &OsStr,
        is_last: bool,
        prefix: &str,
        size: Option<u64>,
    ) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// Depth-first renderer. Output is strictly pre-order: a directory's line is
/// emitted before any of its children, and each subtree completes before the
/// next sibling starts.
pub struct TreeRenderer {
    options: DisplayOptions,
}

impl TreeRenderer {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    /// Render the tree rooted at `root`.
    ///
    /// The root must be an accessible directory; nothing is emitted otherwise.
    /// The first listing error aborts the whole render, leaving whatever was
    /// already written in place.
    pub fn render<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|source| TreeError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let cleaned = root.clean();
        let resolved = resolve_root(&cleaned);
        tracing::debug!(root = %resolved.display(), options = ?self.options, "Rendering tree");

        output.output_root(&display_name(&resolved))?;
        self.visit(&cleaned, 0, "", output)?;
        output.finish()?;
        Ok(())
    }

    fn visit<O: TreeOutput>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        output: &mut O,
    ) -> Result<()> {
        if self.options.at_max_depth(depth) {
            return Ok(());
        }

        let mut entries: Vec<TreeEntry> = TreeEntry::read_dir(path)?
            .into_iter()
            .filter(|entry| {
                let keep = should_list(entry, &self.options);
                if !keep {
                    tracing::trace!(path = %entry.path.display(), "Filtered out");
                }
                keep
            })
            .collect();
        sort_entries(&mut entries);

        tracing::debug!(path = %path.display(), depth, entries = entries.len(), "Listed directory");

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;

            let size = if self.options.show_size && !entry.is_dir {
                match entry.size() {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        tracing::trace!(path = %entry.path.display(), error = %e, "Size unavailable");
                        None
                    }
                }
            } else {
                None
            };

            output.output_node(&entry.name, is_last, prefix, size)?;

            if entry.is_dir {
                self.visit(&entry.path, depth + 1, &child_prefix(prefix, is_last), output)?;
            }
        }

        Ok(())
    }
}

/// Resolve a cleaned root to an absolute path for display.
///
/// Falls back to the cleaned path when the working directory is unknown.
fn resolve_root(cleaned: &Path) -> PathBuf {
    if cleaned.is_absolute() {
        return cleaned.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(cleaned).clean(),
        Err(e) => {
            tracing::debug!(error = %e, "Cannot resolve working directory, using relative root");
            cleaned.to_path_buf()
        }
    }
}
