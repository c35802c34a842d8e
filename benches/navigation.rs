// SPDX-License-Identifier: MPL-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use photobook::directory_scanner::ImageList;
use photobook::session::{SessionEvent, ViewerSession};
use std::hint::black_box;
use std::path::PathBuf;

fn image_list(count: usize) -> ImageList {
    let paths = (0..count)
        .map(|i| PathBuf::from(format!("img_{i:04}.png")))
        .collect();
    ImageList::from_paths(paths).expect("non-empty")
}

fn bench_scan_folder(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let pixel = image_rs::Rgba([0u8, 0, 0, 255]);
    let png = image_rs::RgbaImage::from_pixel(1, 1, pixel);
    for i in 0..100 {
        png.save(temp_dir.path().join(format!("img_{i:04}.png")))
            .expect("failed to write test png");
        std::fs::write(temp_dir.path().join(format!("note_{i:04}.txt")), b"x")
            .expect("failed to write file");
    }

    c.bench_function("scan_folder_100_pngs", |b| {
        b.iter(|| ImageList::scan_folder(black_box(temp_dir.path())).expect("scan failed"))
    });
}

fn bench_navigation(c: &mut Criterion) {
    c.bench_function("show_next_wraparound_1000_images", |b| {
        let mut session = ViewerSession::new(image_list(1000), 0);
        b.iter(|| {
            session.show_next();
            black_box(session.current_index())
        })
    });

    c.bench_function("tap_navigation", |b| {
        let mut session = ViewerSession::new(image_list(100), 0);
        b.iter(|| {
            session.apply(black_box(SessionEvent::Tap {
                x: 600.0,
                view_width: 800.0,
            }))
        })
    });

    c.bench_function("scrub_to_middle", |b| {
        let mut session = ViewerSession::new(image_list(100), 0);
        let mut target = 0usize;
        b.iter(|| {
            target = (target % 100) + 1;
            session.apply(black_box(SessionEvent::Scrub { position: target }))
        })
    });
}

criterion_group!(benches, bench_scan_folder, bench_navigation);
criterion_main!(benches);
