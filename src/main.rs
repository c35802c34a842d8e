// SPDX-License-Identifier: MPL-2.0

use photobook::app::App;
use photobook::config;
use std::path::PathBuf;

const HELP: &str = "\
Photo Book

USAGE:
  photobook [FOLDER]

ARGS:
  [FOLDER]  Open this image folder immediately instead of showing the picker

OPTIONS:
  -h, --help  Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let folder: Option<PathBuf> = args.opt_free_from_str().unwrap_or_else(|e| {
        log::warn!("ignoring folder argument: {e}");
        None
    });

    iced::application("Photo Book", App::update, App::view)
        .theme(App::theme)
        .window_size(config::DEFAULT_WINDOW_SIZE)
        .centered()
        .run_with(move || App::new(folder))
}
