// SPDX-License-Identifier: MPL-2.0
//! Viewer session: one image list, one cursor into it, and the gesture
//! state machine that mutates both.
//!
//! The session is pure state. It knows nothing about widgets or decoding;
//! it consumes [`SessionEvent`]s produced by the gesture interpreter (or by
//! tests directly) and reports through [`Effect`] when the shell has to
//! re-render the image at a new index.

use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::directory_scanner::ImageList;
use iced::{Point, Vector};
use std::path::Path;

/// Image scale factor, guaranteed to be within `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Multiplies the scale by an incremental pinch factor, clamped.
    #[must_use]
    pub fn pinched_by(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// The active gesture. The variants are mutually exclusive by construction:
/// while `Pinching`, no tap or drag transition is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

/// Pan and touch position recorded at touch-down, the reference frame for
/// the drag that may follow.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    touch: Point,
    pan: Vector,
}

/// Input to the session, one message per gesture callback.
///
/// Positions and `x` are in logical pixels relative to the image view;
/// `Scrub::position` is 1-based like the scrub bar itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    TouchDown { position: Point },
    TouchMove { position: Point },
    TouchUp,
    PinchBegin,
    PinchMove { factor: f32 },
    PinchEnd,
    Tap { x: f32, view_width: f32 },
    Scrub { position: usize },
}

/// What the shell has to do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to re-render beyond the usual redraw.
    None,
    /// `current_index` points at a (possibly new) image: decode and display
    /// it, and refresh the scrub bar and page label.
    ImageChanged,
}

/// Live state of one image-viewing session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    images: ImageList,
    current_index: usize,
    scale: Scale,
    pan: Vector,
    gesture: Gesture,
    anchor: Option<DragAnchor>,
}

impl ViewerSession {
    /// Starts a session over `images` at `start_index` (clamped into
    /// range). Scale and pan start at their defaults.
    pub fn new(images: ImageList, start_index: usize) -> Self {
        let current_index = start_index.min(images.len() - 1);
        Self {
            images,
            current_index,
            scale: Scale::default(),
            pan: Vector::new(0.0, 0.0),
            gesture: Gesture::Idle,
            anchor: None,
        }
    }

    /// Applies one gesture event through the single transition function.
    pub fn apply(&mut self, event: SessionEvent) -> Effect {
        match event {
            SessionEvent::TouchDown { position } => {
                if self.gesture == Gesture::Idle {
                    self.anchor = Some(DragAnchor {
                        touch: position,
                        pan: self.pan,
                    });
                }
                Effect::None
            }
            SessionEvent::TouchMove { position } => {
                if self.gesture != Gesture::Pinching {
                    if let Some(anchor) = self.anchor {
                        self.gesture = Gesture::Dragging;
                        self.pan = anchor.pan + (position - anchor.touch);
                    }
                }
                Effect::None
            }
            SessionEvent::TouchUp => {
                if self.gesture != Gesture::Pinching {
                    self.gesture = Gesture::Idle;
                    self.anchor = None;
                }
                Effect::None
            }
            SessionEvent::PinchBegin => {
                self.gesture = Gesture::Pinching;
                self.anchor = None;
                Effect::None
            }
            SessionEvent::PinchMove { factor } => {
                if self.gesture == Gesture::Pinching {
                    self.scale = self.scale.pinched_by(factor);
                }
                Effect::None
            }
            SessionEvent::PinchEnd => {
                if self.gesture == Gesture::Pinching {
                    self.gesture = Gesture::Idle;
                }
                Effect::None
            }
            SessionEvent::Tap { x, view_width } => {
                if self.gesture == Gesture::Idle {
                    if x < view_width / 2.0 {
                        self.show_previous()
                    } else {
                        self.show_next()
                    }
                } else {
                    Effect::None
                }
            }
            SessionEvent::Scrub { position } => {
                // The scrub bar addresses pages directly: 1-based, clamped,
                // no wraparound.
                let index = position.saturating_sub(1).min(self.images.len() - 1);
                if index == self.current_index {
                    Effect::None
                } else {
                    self.current_index = index;
                    Effect::ImageChanged
                }
            }
        }
    }

    /// Advances to the next image, wrapping from the last to the first.
    pub fn show_next(&mut self) -> Effect {
        self.current_index = (self.current_index + 1) % self.images.len();
        Effect::ImageChanged
    }

    /// Goes back to the previous image, wrapping from the first to the last.
    pub fn show_previous(&mut self) -> Effect {
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
        Effect::ImageChanged
    }

    /// Returns the path of the image to display.
    pub fn current_path(&self) -> &Path {
        // current_index is kept in range by every mutation above.
        &self.images.paths()[self.current_index]
    }

    /// Returns the current 0-based index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the number of images in the session.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns the current scale factor.
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Returns the current pan offset in logical pixels.
    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// Returns the active gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns the "page / total" label text, 1-based.
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.images.len())
    }
}
