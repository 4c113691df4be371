use anyhow::{Context, Result};
use seriesviz::render::plot_all;
use seriesviz::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let images = plot_all(&settings).context("plotting series")?;

    log::info!("Rendered {} series", images.len());
    Ok(())
}
