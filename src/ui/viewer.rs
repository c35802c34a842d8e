// SPDX-License-Identifier: MPL-2.0
//! Viewer screen: the image stage with a gesture overlay, plus the scrub
//! bar and page label underneath.
//!
//! The stage is a single [`canvas`] that does double duty. Its `draw`
//! paints the current image at the decoded dimensions times the session
//! scale, centered and then shifted by the signed pan offset, so a zoomed
//! image can be dragged past every edge. Its `update` receives raw mouse
//! and touch input and folds it into session events through the
//! [`GestureInterpreter`].

use crate::app::Message;
use crate::config::WHEEL_PIXELS_PER_STEP;
use crate::gesture::{GestureInterpreter, PointerEvent, PointerId};
use crate::loader::LoadedImage;
use crate::session::ViewerSession;
use iced::alignment::Vertical;
use iced::mouse::{self, Cursor, ScrollDelta};
use iced::touch;
use iced::widget::canvas::{self, Canvas, Program};
use iced::widget::image;
use iced::widget::{container, slider, text, Column, Row, Space};
use iced::{Element, Length, Padding, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Everything the viewer screen needs to draw one frame.
///
/// `image` is `None` while a decode is in flight or after one failed; the
/// stage then shows an empty frame but keeps responding to input.
#[derive(Clone, Copy)]
pub struct ViewModel<'a> {
    pub session: &'a ViewerSession,
    pub image: Option<&'a LoadedImage>,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    Column::new()
        .push(
            Canvas::new(ImageStage::new(model))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(controls(model.session))
        .into()
}

/// Top-left corner of the image inside the stage: centered, then shifted
/// by the pan offset as-is. Coordinates go negative once the image is
/// larger than the stage or panned past an edge; the canvas clips.
fn stage_position(media: Size, available: Size, pan: Vector) -> Point {
    Point::new(
        (available.width - media.width) / 2.0 + pan.x,
        (available.height - media.height) / 2.0 + pan.y,
    )
}

fn controls(session: &ViewerSession) -> Element<'_, Message> {
    let total = session.len() as u32;
    let position = session.current_index() as u32 + 1;

    let mut bar = Row::new().spacing(12).align_y(Vertical::Center);
    if total > 1 {
        bar = bar.push(
            slider(1..=total, position, Message::Scrubbed).width(Length::Fill),
        );
    } else {
        bar = bar.push(Space::new(Length::Fill, Length::Shrink));
    }
    bar = bar.push(text(session.page_label()).size(14));

    container(bar)
        .width(Length::Fill)
        .padding(Padding {
            top: 8.0,
            right: 12.0,
            bottom: 8.0,
            left: 12.0,
        })
        .into()
}

/// The image stage: draws the current frame and routes pointer input.
struct ImageStage {
    image: Option<(image::Handle, Size)>,
    scale: f32,
    pan: Vector,
}

impl ImageStage {
    fn new(model: ViewModel<'_>) -> Self {
        Self {
            image: model.image.map(|image| {
                (
                    image.handle.clone(),
                    Size::new(image.width as f32, image.height as f32),
                )
            }),
            scale: model.session.scale(),
            pan: model.session.pan(),
        }
    }
}

impl Program<Message> for ImageStage {
    type State = GestureInterpreter;

    fn update(
        &self,
        interpreter: &mut GestureInterpreter,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let events = match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match cursor.position_in(bounds) {
                    Some(position) => interpreter.handle(
                        PointerEvent::Down {
                            pointer: PointerId::Mouse,
                            position,
                        },
                        bounds.width,
                    ),
                    None => Vec::new(),
                }
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => interpreter.handle(
                PointerEvent::Move {
                    pointer: PointerId::Mouse,
                    position: relative_to(position, bounds),
                },
                bounds.width,
            ),
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => interpreter
                .handle(
                    PointerEvent::Up {
                        pointer: PointerId::Mouse,
                        position: cursor.position_in(bounds),
                    },
                    bounds.width,
                ),
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.position_in(bounds).is_some() {
                    let steps = match delta {
                        ScrollDelta::Lines { y, .. } => y,
                        ScrollDelta::Pixels { y, .. } => y / WHEEL_PIXELS_PER_STEP,
                    };
                    interpreter.handle(PointerEvent::Wheel { steps }, bounds.width)
                } else {
                    Vec::new()
                }
            }
            canvas::Event::Touch(touch_event) => {
                let pointer_event = match touch_event {
                    touch::Event::FingerPressed { id, position } => PointerEvent::Down {
                        pointer: PointerId::Touch(id),
                        position: relative_to(position, bounds),
                    },
                    touch::Event::FingerMoved { id, position } => PointerEvent::Move {
                        pointer: PointerId::Touch(id),
                        position: relative_to(position, bounds),
                    },
                    touch::Event::FingerLifted { id, position }
                    | touch::Event::FingerLost { id, position } => PointerEvent::Up {
                        pointer: PointerId::Touch(id),
                        position: Some(relative_to(position, bounds)),
                    },
                };
                interpreter.handle(pointer_event, bounds.width)
            }
            _ => Vec::new(),
        };

        if events.is_empty() {
            (canvas::event::Status::Ignored, None)
        } else {
            (
                canvas::event::Status::Captured,
                Some(Message::Session(events)),
            )
        }
    }

    fn draw(
        &self,
        _interpreter: &GestureInterpreter,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let Some((handle, size)) = &self.image else {
            // Decode pending or failed: blank frame, input stays live.
            return vec![];
        };

        let scaled = Size::new(
            (size.width * self.scale).max(1.0),
            (size.height * self.scale).max(1.0),
        );
        let top_left = stage_position(scaled, bounds.size(), self.pan);

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.draw_image(
            Rectangle::new(top_left, scaled),
            canvas::Image::new(handle.clone()),
        );
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        interpreter: &GestureInterpreter,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if interpreter.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn relative_to(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}
