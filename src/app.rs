// SPDX-License-Identifier: MPL-2.0
//! Application shell: screens, messages, and the update loop.
//!
//! Decodes run off the update loop as tasks. Each navigation bumps a
//! generation counter captured by the in-flight task; a completion whose
//! generation no longer matches is discarded, so a burst of taps can never
//! display a frame for an image the user already left.

use crate::directory_scanner::ImageList;
use crate::error::Error;
use crate::loader::{self, LoadedImage};
use crate::session::{Effect, SessionEvent, ViewerSession};
use crate::ui;
use iced::{Element, Task, Theme};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    PickFolder,
    FolderPicked(Option<PathBuf>),
    FolderScanned(Result<ImageList, Error>),
    Session(Vec<SessionEvent>),
    Scrubbed(u32),
    ImageLoaded {
        generation: u64,
        result: Result<LoadedImage, Error>,
    },
}

enum Screen {
    Picker { status: Option<String> },
    Viewer(Viewer),
}

struct Viewer {
    session: ViewerSession,
    image: Option<LoadedImage>,
    load_generation: u64,
}

pub struct App {
    screen: Screen,
}

impl App {
    /// Starts on the picker screen, or scans `initial_folder` right away
    /// when one was given on the command line.
    pub fn new(initial_folder: Option<PathBuf>) -> (Self, Task<Message>) {
        let app = Self {
            screen: Screen::Picker { status: None },
        };
        let task = match initial_folder {
            Some(dir) => scan_task(dir),
            None => Task::none(),
        };
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFolder => {
                if let Screen::Picker { status } = &mut self.screen {
                    *status = None;
                }
                Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Choose an image folder")
                            .pick_folder()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::FolderPicked,
                )
            }
            Message::FolderPicked(Some(dir)) => scan_task(dir),
            Message::FolderPicked(None) => Task::none(),
            Message::FolderScanned(Ok(images)) => {
                log::info!("opening session with {} image(s)", images.len());
                let mut viewer = Viewer {
                    session: ViewerSession::new(images, 0),
                    image: None,
                    load_generation: 0,
                };
                let task = load_current(&mut viewer);
                self.screen = Screen::Viewer(viewer);
                task
            }
            Message::FolderScanned(Err(error)) => {
                log::warn!("folder scan failed: {error}");
                self.screen = Screen::Picker {
                    status: Some(error.to_string()),
                };
                Task::none()
            }
            Message::Session(events) => {
                let Screen::Viewer(viewer) = &mut self.screen else {
                    return Task::none();
                };
                let mut changed = false;
                for event in events {
                    if viewer.session.apply(event) == Effect::ImageChanged {
                        changed = true;
                    }
                }
                if changed {
                    load_current(viewer)
                } else {
                    Task::none()
                }
            }
            Message::Scrubbed(position) => {
                let Screen::Viewer(viewer) = &mut self.screen else {
                    return Task::none();
                };
                let effect = viewer.session.apply(SessionEvent::Scrub {
                    position: position as usize,
                });
                if effect == Effect::ImageChanged {
                    load_current(viewer)
                } else {
                    Task::none()
                }
            }
            Message::ImageLoaded { generation, result } => {
                let Screen::Viewer(viewer) = &mut self.screen else {
                    return Task::none();
                };
                if generation != viewer.load_generation {
                    log::debug!("discarding stale decode (generation {generation})");
                    return Task::none();
                }
                match result {
                    Ok(image) => viewer.image = Some(image),
                    Err(error) => {
                        // The frame stays blank; navigation keeps working.
                        log::warn!("{error}");
                        viewer.image = None;
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Picker { status } => ui::picker::view(status.as_deref()),
            Screen::Viewer(viewer) => ui::viewer::view(ui::viewer::ViewModel {
                session: &viewer.session,
                image: viewer.image.as_ref(),
            }),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn scan_task(dir: PathBuf) -> Task<Message> {
    Task::perform(
        async move { ImageList::scan_folder(&dir) },
        Message::FolderScanned,
    )
}

/// Clears the displayed frame and kicks off a decode of the session's
/// current image under a fresh generation.
fn load_current(viewer: &mut Viewer) -> Task<Message> {
    viewer.image = None;
    viewer.load_generation += 1;
    let generation = viewer.load_generation;
    let path = viewer.session.current_path().to_path_buf();
    Task::perform(
        async move { loader::load_image(&path) },
        move |result| Message::ImageLoaded { generation, result },
    )
}
