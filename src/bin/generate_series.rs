use anyhow::{Context, Result};
use seriesviz::generate::{generate, write_series, Distribution, SimpleRng};
use seriesviz::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let mut rng = SimpleRng::new(settings.seed);

    for dist in Distribution::ALL {
        let values = generate(dist, settings.data_length, settings.epsilon, &mut rng);
        let path = settings.series_path(dist.file_stem());
        write_series(&path, &values).with_context(|| format!("writing {dist} series"))?;
        log::info!("Generated {dist} ({} values)", values.len());
        println!("Wrote {} values to {}", values.len(), path.display());
    }
    Ok(())
}
