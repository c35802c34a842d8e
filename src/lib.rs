// SPDX-License-Identifier: MPL-2.0
//! Photo Book, a minimal PNG gallery viewer.
//!
//! Point it at a folder and it shows the PNG files inside: tap the left or
//! right half to step through with wraparound, drag to pan, pinch or
//! scroll to zoom, or jump anywhere with the scrub bar.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod gesture;
pub mod loader;
pub mod session;
pub mod ui;
