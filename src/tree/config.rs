//! Configuration types for the tree renderer

/// Display options for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Maximum depth to descend. 0 = unlimited.
    pub max_depth: usize,
    /// Include entries whose name starts with `.`
    pub include_hidden: bool,
    /// Only list directories. Directories are never filtered by this flag,
    /// even when they contain no subdirectories.
    pub dirs_only: bool,
    /// Annotate files with a human-readable size
    pub show_size: bool,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn with_dirs_only(mut self, dirs_only: bool) -> Self {
        self.dirs_only = dirs_only;
        self
    }

    pub fn with_size(mut self, show: bool) -> Self {
        self.show_size = show;
        self
    }

    /// Check whether a directory at `depth` must not be expanded.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth > 0 && depth >= self.max_depth
    }
}
