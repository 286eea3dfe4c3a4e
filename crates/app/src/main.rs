//! Giornata - masked region painting tool
//!
//! Loads an image and its paintability mask, replays a recorded pointer
//! script through the region painter, and writes the painted result back
//! over the source image.
//!
//! Usage: `giornata <script.json> [config.json]`

mod error;
mod script;

use tracing::info;

use giornata_config::PaintConfig;
use painting::{io, Brush, RegionPainter, ViewRect};

use error::AppError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        eprintln!("usage: giornata <script.json> [config.json]");
        std::process::exit(2);
    };
    let config_path = args.next();

    if let Err(err) = run(&script_path, config_path.as_deref()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(script_path: &str, config_path: Option<&str>) -> Result<(), AppError> {
    let config = match config_path {
        Some(path) => PaintConfig::from_file(path)?,
        None => PaintConfig::default(),
    };
    info!(
        "painting {} with mask {}",
        config.image_path.display(),
        config.mask_path.display()
    );

    let canvas = io::load_canvas(&config.image_path)?;
    let mask = io::load_mask(&config.mask_path)?;

    // Without a configured rect, pointer positions are buffer pixels.
    let view = match config.view {
        Some(v) => ViewRect::new(v.position.into(), v.size.into(), v.pivot.into()),
        None => ViewRect::covering(canvas.width, canvas.height),
    };
    let brush = Brush::new(config.brush.color, config.brush.size);

    let mut painter = RegionPainter::new(canvas, mask, view, brush, &config.image_path)?;

    let events = script::load_script(script_path)?;
    info!("replaying {} pointer events", events.len());
    for event in events {
        painter.handle_event(event);
    }
    // A script that ends mid-stroke still ends the session before saving.
    painter.cancel_stroke();

    painter.save()?;
    Ok(())
}
