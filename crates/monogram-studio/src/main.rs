mod gallery;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use monogram_engine::logging::{init_logging, LoggingConfig};
use monogram_engine::render::Canvas;
use monogram_engine::text::FontSystem;

/// Renders every gallery sample to `<out-dir>/<name>.png`.
#[derive(Debug, Parser)]
#[command(name = "monogram-studio", version, about)]
struct Args {
    /// Output directory, created if missing.
    #[arg(long, default_value = "gallery")]
    out_dir: PathBuf,

    /// Canvas side in pixels.
    #[arg(long, default_value_t = 120)]
    size: u32,

    /// TrueType/OpenType font for labels. Without it only shapes and images
    /// are drawn.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Log filter in env_logger syntax, overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..LoggingConfig::default() });

    let mut fonts = FontSystem::new();
    let font = match &args.font {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
            let id = fonts
                .load_font(&bytes)
                .with_context(|| format!("parsing font {}", path.display()))?;
            Some(id)
        }
        None => {
            log::warn!("no --font given; labels will be skipped");
            None
        }
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let samples = gallery::samples(args.size, font);
    for sample in &samples {
        let mut canvas = Canvas::new(args.size, args.size, &fonts);
        sample.paint(&mut canvas, args.size as i32);

        let path = args.out_dir.join(format!("{}.png", sample.name));
        canvas
            .into_image()
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("{:<24} {}", sample.label, path.display());
    }

    log::info!("wrote {} samples to {}", samples.len(), args.out_dir.display());
    Ok(())
}
