//! Twig - render a directory as a box-drawn tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{PlainFormatter, render_to_string};
pub use tree::{DisplayOptions, TreeEntry, TreeOutput, TreeRenderer, human_size};
