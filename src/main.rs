#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use photo_markup::{MarkupApp, PainterConfig};

struct Args {
    photo: Option<String>,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        photo: None,
        config: None,
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => {
                let path = raw.next().ok_or("--config needs a file argument")?;
                args.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(String::new()),
            _ if args.photo.is_none() => args.photo = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }
    Ok(args)
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{message}");
            }
            eprintln!("Usage: photo_markup [--config <file.json>] <image | data URL>");
            std::process::exit(2);
        }
    };

    let config = match &args.config {
        Some(path) => PainterConfig::load(path).unwrap_or_else(|err| {
            log::warn!("Ignoring config {}: {err}", path.display());
            PainterConfig::default()
        }),
        None => PainterConfig::default(),
    };
    let export_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Photo Markup",
        native_options,
        Box::new(move |cc| Ok(Box::new(MarkupApp::new(cc, config, args.photo, export_dir)))),
    )
}
