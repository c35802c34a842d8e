// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows: scan a real folder, open a session, and drive it the
//! way the UI would.

use photobook::directory_scanner::ImageList;
use photobook::error::Error;
use photobook::gesture::{GestureInterpreter, PointerEvent, PointerId};
use photobook::loader;
use photobook::session::{Effect, SessionEvent, ViewerSession};
use iced::Point;
use std::path::Path;
use tempfile::tempdir;

const VIEW_WIDTH: f32 = 800.0;

fn write_png(dir: &Path, name: &str) {
    let pixel = image_rs::Rgba([10u8, 20, 30, 255]);
    image_rs::RgbaImage::from_pixel(2, 2, pixel)
        .save(dir.join(name))
        .expect("failed to write test png");
}

fn tap(session: &mut ViewerSession, interp: &mut GestureInterpreter, x: f32) -> bool {
    let mut changed = false;
    let down = interp.handle(
        PointerEvent::Down {
            pointer: PointerId::Mouse,
            position: Point::new(x, 300.0),
        },
        VIEW_WIDTH,
    );
    let up = interp.handle(
        PointerEvent::Up {
            pointer: PointerId::Mouse,
            position: Some(Point::new(x, 300.0)),
        },
        VIEW_WIDTH,
    );
    for event in down.into_iter().chain(up) {
        if session.apply(event) == Effect::ImageChanged {
            changed = true;
        }
    }
    changed
}

#[test]
fn scanned_folder_opens_at_the_first_page() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    write_png(temp_dir.path(), "a.png");
    write_png(temp_dir.path(), "b.png");
    std::fs::write(temp_dir.path().join("notes.txt"), b"not an image")
        .expect("failed to write file");
    write_png(temp_dir.path(), "c.png");

    let images = ImageList::scan_folder(temp_dir.path()).expect("scan failed");
    assert_eq!(images.len(), 3);

    let session = ViewerSession::new(images, 0);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.page_label(), "1 / 3");
}

#[test]
fn folder_without_pngs_is_rejected() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    std::fs::write(temp_dir.path().join("readme.md"), b"hello")
        .expect("failed to write file");

    let result = ImageList::scan_folder(temp_dir.path());
    assert!(matches!(result, Err(Error::NoImagesFound(_))));
}

#[test]
fn taps_walk_the_gallery_and_wrap_around() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    for name in ["a.png", "b.png", "c.png"] {
        write_png(temp_dir.path(), name);
    }
    let images = ImageList::scan_folder(temp_dir.path()).expect("scan failed");
    let mut session = ViewerSession::new(images, 0);
    let mut interp = GestureInterpreter::new();

    // Three right-half taps visit every page and land back on the first.
    for _ in 0..3 {
        assert!(tap(&mut session, &mut interp, 600.0));
    }
    assert_eq!(session.current_index(), 0);

    // A left-half tap wraps backwards to the last page.
    assert!(tap(&mut session, &mut interp, 100.0));
    assert_eq!(session.current_index(), 2);
    assert_eq!(session.page_label(), "3 / 3");
}

#[test]
fn decode_failure_does_not_disturb_the_session() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    write_png(temp_dir.path(), "good.png");
    std::fs::write(temp_dir.path().join("bad.png"), b"truncated")
        .expect("failed to write file");

    let images = ImageList::scan_folder(temp_dir.path()).expect("scan failed");
    let mut session = ViewerSession::new(images, 0);

    let mut decode_failures = 0;
    for _ in 0..session.len() {
        if loader::load_image(session.current_path()).is_err() {
            decode_failures += 1;
        }
        session.show_next();
    }
    assert_eq!(decode_failures, 1);

    // The session came back around unharmed.
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.scale(), 1.0);
}

#[test]
fn scrub_then_zoom_persists_across_pages() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    for name in ["a.png", "b.png", "c.png", "d.png"] {
        write_png(temp_dir.path(), name);
    }
    let images = ImageList::scan_folder(temp_dir.path()).expect("scan failed");
    let mut session = ViewerSession::new(images, 0);

    assert_eq!(
        session.apply(SessionEvent::Scrub { position: 3 }),
        Effect::ImageChanged
    );
    assert_eq!(session.current_index(), 2);

    session.apply(SessionEvent::PinchBegin);
    session.apply(SessionEvent::PinchMove { factor: 2.0 });
    session.apply(SessionEvent::PinchEnd);
    assert_eq!(session.scale(), 2.0);

    session.show_next();
    assert_eq!(session.current_index(), 3);
    assert_eq!(session.scale(), 2.0);
}
