// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these are specific to React projects, but they are used by [`ogs-tools`](crate) to
//! drive `npm` and lay files out on disk.

use std::{fs, io, path::Path};

pub mod color;
pub mod npm;
pub mod sys;

/// Create a directory and all of its parents if they do not exist yet.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Remove a file if it exists.
///
/// Returns whether a file was removed.
pub fn remove_file_if_exists(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        create_dir_if_dne(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        create_dir_if_dne(&nested).unwrap();
    }

    #[test]
    fn removes_only_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("legacy.js");
        assert!(!remove_file_if_exists(&file).unwrap());

        fs::write(&file, "module.exports = {}").unwrap();
        assert!(remove_file_if_exists(&file).unwrap());
        assert!(!file.exists());
    }
}
