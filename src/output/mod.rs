//! Tree formatting and display
//!
//! - `plain` - Streaming plain-text formatter writing to any `io::Write`

mod plain;

pub use plain::PlainFormatter;

use std::path::Path;

use crate::error::Result;
use crate::tree::{DisplayOptions, TreeRenderer};

/// Render a tree into a `String`, mainly for tests and library callers.
pub fn render_to_string(root: &Path, options: DisplayOptions) -> Result<String> {
    let mut formatter = PlainFormatter::new(Vec::new());
    TreeRenderer::new(options).render(root, &mut formatter)?;
    Ok(String::from_utf8_lossy(&formatter.into_inner()).into_owned())
}
