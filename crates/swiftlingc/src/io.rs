//! The `FileIO` injected capability (spec §6). The driver never touches
//! the filesystem directly outside of this trait, so tests can swap in
//! an in-memory fake without touching disk.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub trait FileIO {
    fn read_file(&self, path: &Path) -> Result<String, String>;
    fn write_file(&self, path: &Path, text: &str) -> Result<(), String>;
    fn file_exists(&self, path: &Path) -> bool;
    /// Returns `true` when the file didn't exist and was created.
    fn create_file_if_needed(&self, path: &Path) -> Result<bool, String>;
    fn modified_time(&self, path: &Path) -> Result<SystemTime, String>;
    fn change_extension(&self, path: &Path, ext: &str) -> PathBuf;
}

/// The default `FileIO`, backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileIO;

impl FileIO for StdFileIO {
    fn read_file(&self, path: &Path) -> Result<String, String> {
        std::fs::read_to_string(path).map_err(|e| format!("reading '{}': {e}", path.display()))
    }

    fn write_file(&self, path: &Path, text: &str) -> Result<(), String> {
        std::fs::write(path, text).map_err(|e| format!("writing '{}': {e}", path.display()))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_file_if_needed(&self, path: &Path) -> Result<bool, String> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, "").map_err(|e| format!("creating '{}': {e}", path.display()))?;
        Ok(true)
    }

    fn modified_time(&self, path: &Path) -> Result<SystemTime, String> {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| format!("reading mtime of '{}': {e}", path.display()))
    }

    fn change_extension(&self, path: &Path, ext: &str) -> PathBuf {
        path.with_extension(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_extension_replaces_suffix() {
        let io = StdFileIO;
        assert_eq!(io.change_extension(Path::new("Main.swiftASTDump"), "kt"), PathBuf::from("Main.kt"));
    }

    #[test]
    fn round_trips_through_a_temp_file() {
        let io = StdFileIO;
        let dir = std::env::temp_dir().join(format!("swiftlingc-io-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scratch.txt");
        assert!(io.create_file_if_needed(&path).unwrap());
        assert!(!io.create_file_if_needed(&path).unwrap());
        io.write_file(&path, "hello").unwrap();
        assert_eq!(io.read_file(&path).unwrap(), "hello");
        assert!(io.file_exists(&path));
        std::fs::remove_dir_all(&dir).ok();
    }
}
