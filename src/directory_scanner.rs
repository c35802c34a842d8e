// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building the image list of a photo book.
//!
//! A photo book is a flat folder of PNG files. The scanner enumerates the
//! direct children of the selected folder, keeps the PNG entries, and hands
//! the resulting list to the viewer session. Subdirectories are not
//! descended into.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Ordered, non-empty list of image paths making up one photo book.
///
/// The order is the directory enumeration order; entries are never sorted.
/// The list can only be obtained through [`ImageList::scan_folder`] or
/// [`ImageList::from_paths`], both of which refuse to produce an empty
/// list, so `len()` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    paths: Vec<PathBuf>,
}

impl ImageList {
    /// Scans `dir` for PNG files and builds the image list.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDirectory`] if `dir` is not a directory;
    /// - [`Error::NoImagesFound`] if no direct child is a PNG file;
    /// - [`Error::Io`] if the directory cannot be enumerated.
    pub fn scan_folder(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::InvalidDirectory(dir.to_path_buf()));
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_png(&path) {
                paths.push(path);
            }
        }

        Self::from_paths(paths).ok_or_else(|| Error::NoImagesFound(dir.to_path_buf()))
    }

    /// Builds an image list from pre-resolved paths, preserving their order.
    ///
    /// Returns `None` when `paths` is empty: a session is never started on
    /// an empty list.
    pub fn from_paths(paths: Vec<PathBuf>) -> Option<Self> {
        if paths.is_empty() {
            None
        } else {
            Some(Self { paths })
        }
    }

    /// Returns the number of images. Always at least 1.
    // Non-empty by construction, so an `is_empty` counterpart would be
    // constant `false`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns the path at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(|p| p.as_path())
    }

    /// Returns all paths in enumeration order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Checks whether a path names a PNG file, the desktop analog of the
/// `image/png` media-type filter.
fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
