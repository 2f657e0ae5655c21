//! Directory entries as seen by the renderer

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// A single child of a listed directory.
///
/// `is_dir` comes from the listing's file type and never follows symlinks,
/// so a link to a directory is treated as a plain entry. An entry whose file
/// type cannot be read is treated as a plain entry too.
///
/// `name` keeps the raw bytes of the file name, valid UTF-8 or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: OsString,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl TreeEntry {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
        }
    }

    /// Read the immediate children of `dir`, unfiltered and unsorted.
    ///
    /// Any failure to open or iterate the listing is fatal.
    pub fn read_dir(dir: &Path) -> Result<Vec<TreeEntry>> {
        let list_err = |source: io::Error| TreeError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(e) => {
                    tracing::trace!(path = %entry.path().display(), error = %e, "File type unavailable");
                    false
                }
            };
            entries.push(TreeEntry {
                name: entry.file_name(),
                path: entry.path(),
                is_dir,
            });
        }
        Ok(entries)
    }

    /// Size in bytes, read lazily. Symlinks report their own size.
    pub fn size(&self) -> io::Result<u64> {
        fs::symlink_metadata(&self.path).map(|m| m.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_read_dir_classifies_entries() {
        let dir = TestDir::new();
        dir.add_file("notes.txt", "hello");
        dir.add_dir("src");

        let mut entries = TreeEntry::read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "notes.txt");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[1].name, "src");
        assert!(entries[1].is_dir);
    }

    #[test]
    fn test_read_dir_missing_directory_is_list_error() {
        let dir = TestDir::new();
        let missing = dir.path().join("gone");

        let err = TreeEntry::read_dir(&missing).unwrap_err();
        match err {
            TreeError::ListDirectory { path, .. } => assert_eq!(path, missing),
            other => panic!("expected ListDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_size_reads_file_length() {
        let dir = TestDir::new();
        let path = dir.add_file("data.bin", "12345");
        let entry = TreeEntry::new("data.bin", path, false);
        assert_eq!(entry.size().unwrap(), 5);
    }

    #[test]
    fn test_size_of_vanished_file_is_error() {
        let dir = TestDir::new();
        let entry = TreeEntry::new("ghost", dir.path().join("ghost"), false);
        assert!(entry.size().is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_directory_is_not_a_directory() {
        let dir = TestDir::new();
        dir.add_dir("real");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link"))
            .expect("Failed to create symlink");

        let entries = TreeEntry::read_dir(dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(!link.is_dir);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_read_dir_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TestDir::new();
        let raw = OsStr::from_bytes(b"caf\xe9.txt");
        fs::write(dir.path().join(raw), "").expect("Failed to write file");

        let entries = TreeEntry::read_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name.as_encoded_bytes(), b"caf\xe9.txt");
    }
}
