// SPDX-License-Identifier: MPL-2.0
//! Tuning constants for the viewer.
//!
//! There is no settings file: the viewer keeps no persistent state, so all
//! knobs live here as compile-time defaults.

/// Smallest allowed image scale factor.
pub const MIN_SCALE: f32 = 0.1;

/// Largest allowed image scale factor.
pub const MAX_SCALE: f32 = 5.0;

/// Scale factor at session start (1:1 pixels).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Distance in logical pixels a pointer may travel before a press stops
/// counting as a tap and becomes a drag. Matches the conventional touch
/// slop used on mobile platforms.
pub const TOUCH_SLOP: f32 = 8.0;

/// Multiplier applied to the scale per wheel step. One notch up multiplies
/// the scale by this value, one notch down divides by it.
pub const WHEEL_ZOOM_BASE: f32 = 1.1;

/// Pixel-delta wheels (touchpads) report distances, not notches. This many
/// pixels of scroll count as one wheel step.
pub const WHEEL_PIXELS_PER_STEP: f32 = 20.0;

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_SIZE: iced::Size = iced::Size::new(800.0, 600.0);

#[test]
fn constants_are_consistent() {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(TOUCH_SLOP > 0.0);
    assert!(WHEEL_ZOOM_BASE > 1.0);
    assert!(WHEEL_PIXELS_PER_STEP > 0.0);
}
