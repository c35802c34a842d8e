// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-gesture interpreter.
//!
//! Raw input arrives as per-pointer press/move/release callbacks plus wheel
//! scrolls. This module folds that stream into the [`SessionEvent`]
//! protocol the viewer session understands: taps, drags, and pinches. It
//! tracks at most two pointers; further fingers are ignored.
//!
//! The interpreter is deliberately free of widget types so gesture
//! sequences can be unit-tested without simulating real input.

use crate::config::{TOUCH_SLOP, WHEEL_ZOOM_BASE};
use crate::session::SessionEvent;
use iced::touch::Finger;
use iced::Point;

/// Identifies one pointer across its down/move/up lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    Touch(Finger),
}

/// One raw input callback.
///
/// `Up` may carry `None` when the release position is unknown (the cursor
/// left the window mid-drag); the interpreter falls back to the last
/// tracked position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { pointer: PointerId, position: Point },
    Move { pointer: PointerId, position: Point },
    Up { pointer: PointerId, position: Option<Point> },
    Wheel { steps: f32 },
}

/// Folds raw pointer events into session events.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    /// Active pointers in press order; holds at most two.
    pointers: Vec<(PointerId, Point)>,
    /// Position of the initial press, for tap detection.
    press_origin: Option<Point>,
    /// Whether the pointer travelled beyond the touch slop since pressing.
    moved_beyond_slop: bool,
    /// A release may only produce a tap if nothing disqualified the press
    /// (a second finger, a wheel scroll).
    tap_allowed: bool,
    /// Distance between the two pinch pointers at the last update.
    pinch_distance: Option<f32>,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress (pressed and moved beyond the slop).
    pub fn is_dragging(&self) -> bool {
        self.moved_beyond_slop && self.pinch_distance.is_none() && !self.pointers.is_empty()
    }

    /// Processes one raw event and returns the session events it produced,
    /// in order. `view_width` is the width of the image view, used for the
    /// left/right tap split.
    pub fn handle(&mut self, event: PointerEvent, view_width: f32) -> Vec<SessionEvent> {
        match event {
            PointerEvent::Down { pointer, position } => self.pointer_down(pointer, position),
            PointerEvent::Move { pointer, position } => self.pointer_move(pointer, position),
            PointerEvent::Up { pointer, position } => {
                self.pointer_up(pointer, position, view_width)
            }
            PointerEvent::Wheel { steps } => self.wheel(steps),
        }
    }

    fn pointer_down(&mut self, pointer: PointerId, position: Point) -> Vec<SessionEvent> {
        if self.position_of(pointer).is_some() {
            // Duplicate press for a pointer we already track; ignore.
            return Vec::new();
        }

        match self.pointers.len() {
            0 => {
                self.pointers.push((pointer, position));
                self.press_origin = Some(position);
                self.moved_beyond_slop = false;
                self.tap_allowed = true;
                vec![SessionEvent::TouchDown { position }]
            }
            1 => {
                self.pointers.push((pointer, position));
                self.tap_allowed = false;
                self.pinch_distance = Some(self.current_pinch_distance());
                vec![SessionEvent::PinchBegin]
            }
            // Third and later fingers are not tracked at all.
            _ => Vec::new(),
        }
    }

    fn pointer_move(&mut self, pointer: PointerId, position: Point) -> Vec<SessionEvent> {
        let Some(slot) = self.pointers.iter_mut().find(|(id, _)| *id == pointer) else {
            // Hover without a press (or an untracked finger).
            return Vec::new();
        };
        slot.1 = position;

        if self.pinch_distance.is_some() {
            let previous = self.pinch_distance.unwrap_or(0.0);
            let current = self.current_pinch_distance();
            self.pinch_distance = Some(current);
            if previous > f32::EPSILON && current > f32::EPSILON {
                return vec![SessionEvent::PinchMove {
                    factor: current / previous,
                }];
            }
            return Vec::new();
        }

        if !self.moved_beyond_slop {
            if let Some(origin) = self.press_origin {
                if distance(origin, position) <= TOUCH_SLOP {
                    // Still within tap territory; swallow the jitter.
                    return Vec::new();
                }
                self.moved_beyond_slop = true;
            }
        }
        vec![SessionEvent::TouchMove { position }]
    }

    fn pointer_up(
        &mut self,
        pointer: PointerId,
        position: Option<Point>,
        view_width: f32,
    ) -> Vec<SessionEvent> {
        let Some(index) = self.pointers.iter().position(|(id, _)| *id == pointer) else {
            return Vec::new();
        };
        let (_, last_position) = self.pointers.remove(index);
        let position = position.unwrap_or(last_position);

        if self.pinch_distance.is_some() {
            self.pinch_distance = None;
            let mut events = vec![SessionEvent::PinchEnd];
            if let Some(&(_, remaining)) = self.pointers.first() {
                // The surviving finger starts a fresh drag from where it
                // is, but its eventual release must not count as a tap.
                self.press_origin = Some(remaining);
                self.moved_beyond_slop = false;
                events.push(SessionEvent::TouchDown {
                    position: remaining,
                });
            } else {
                self.press_origin = None;
            }
            return events;
        }

        let mut events = vec![SessionEvent::TouchUp];
        if self.tap_allowed && !self.moved_beyond_slop {
            events.push(SessionEvent::Tap {
                x: position.x,
                view_width,
            });
        }
        self.press_origin = None;
        self.moved_beyond_slop = false;
        self.tap_allowed = false;
        events
    }

    fn wheel(&mut self, steps: f32) -> Vec<SessionEvent> {
        if steps == 0.0 {
            return Vec::new();
        }
        // While two fingers are down the pinch owns the scale; a wheel
        // tick in the middle would emit a PinchEnd and dead-end the finger
        // pinch, so it is dropped.
        if self.pinch_distance.is_some() {
            return Vec::new();
        }
        // A wheel notch is a self-contained pinch, so the session sees one
        // protocol for both input kinds. Scrolling mid-press disqualifies
        // the tap.
        if !self.pointers.is_empty() {
            self.tap_allowed = false;
        }
        vec![
            SessionEvent::PinchBegin,
            SessionEvent::PinchMove {
                factor: WHEEL_ZOOM_BASE.powf(steps),
            },
            SessionEvent::PinchEnd,
        ]
    }

    fn position_of(&self, pointer: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|(id, _)| *id == pointer)
            .map(|&(_, position)| position)
    }

    fn current_pinch_distance(&self) -> f32 {
        match (self.pointers.first(), self.pointers.get(1)) {
            (Some(&(_, a)), Some(&(_, b))) => distance(a, b),
            _ => 0.0,
        }
    }
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
