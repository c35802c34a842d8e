// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

/// Errors produced by folder scanning and image decoding.
///
/// None of these are fatal to the process: scan errors are surfaced on the
/// picker screen before a session starts, and decode errors degrade a
/// single frame while the session keeps running.
#[derive(Debug, Clone)]
pub enum Error {
    /// The selected folder contained no PNG files after filtering.
    NoImagesFound(PathBuf),

    /// The selected path does not resolve to a directory.
    InvalidDirectory(PathBuf),

    /// A single image could not be opened or decoded. Logged; the frame
    /// renders blank and the session continues.
    Decode { path: PathBuf, reason: String },

    /// Directory enumeration failed (permissions, disappearing entries).
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoImagesFound(dir) => {
                write!(f, "No PNG images found in {}", dir.display())
            }
            Error::InvalidDirectory(path) => {
                write!(f, "Not a directory: {}", path.display())
            }
            Error::Decode { path, reason } => {
                write!(f, "Failed to decode {}: {}", path.display(), reason)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn display_formats_no_images_found() {
        let err = Error::NoImagesFound(Path::new("/photos/empty").to_path_buf());
        assert_eq!(format!("{}", err), "No PNG images found in /photos/empty");
    }

    #[test]
    fn display_formats_invalid_directory() {
        let err = Error::InvalidDirectory(Path::new("/photos/a.png").to_path_buf());
        assert_eq!(format!("{}", err), "Not a directory: /photos/a.png");
    }

    #[test]
    fn display_formats_decode_error() {
        let err = Error::Decode {
            path: Path::new("/photos/a.png").to_path_buf(),
            reason: "bad header".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Failed to decode /photos/a.png: bad header"
        );
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }
}
