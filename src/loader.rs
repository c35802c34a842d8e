// SPDX-License-Identifier: MPL-2.0
//! PNG loading and decoding.
//!
//! The file handle lives exactly as long as the decode: opened right before
//! reading, closed on every exit path by scope. A failure here is never
//! fatal; the caller logs it and renders a blank frame.

use crate::error::{Error, Result};
use iced::widget::image;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Opens `path`, decodes it as PNG, and returns the displayable bitmap.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the file cannot be opened or read, or
/// when its contents are not a valid PNG.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let file = File::open(path).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let decoded = image_rs::load_from_memory_with_format(&bytes, image_rs::ImageFormat::Png)
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let handle = image::Handle::from_rgba(width, height, rgba.into_raw());

    Ok(LoadedImage {
        handle,
        width,
        height,
    })
}
