//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while rendering a tree.
///
/// Unreadable file sizes and unresolvable absolute paths are not errors:
/// the renderer handles those in place and keeps going.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot access '{}': {source}", .path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory '{}': {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = TreeError::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "notes.txt is not a directory");
    }

    #[test]
    fn test_list_directory_message_includes_path_and_cause() {
        let err = TreeError::ListDirectory {
            path: PathBuf::from("locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'locked'"), "got: {}", msg);
        assert!(msg.contains("permission denied"), "got: {}", msg);
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let err: TreeError = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe").into();
        assert!(matches!(err, TreeError::Output(_)));
    }
}
