use std::fs;

use seriesviz::data::loader::load_series;
use seriesviz::generate::{generate, write_series, Distribution, SimpleRng};
use seriesviz::render::{plot_all, PlotSession};
use seriesviz::{SeriesError, Settings};
use tempfile::TempDir;

#[test]
fn plots_simple_series_to_non_empty_png() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tiny.txt"), "1.0 2.0 3.0\n").unwrap();

    let series = load_series(dir.path(), "tiny").unwrap();
    assert_eq!(series.values, vec![1.0, 2.0, 3.0]);
    assert_eq!(series.ranks(), vec![1, 2, 3]);

    let settings = Settings::headless_in(dir.path());
    let mut session = PlotSession::new(&settings);
    let path = session.plot(series).unwrap();
    session.finish().unwrap();

    assert_eq!(path, dir.path().join("tiny.png"));
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn plot_all_renders_every_configured_series() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::headless_in(dir.path());
    for (i, name) in settings.series_names.iter().enumerate() {
        let line = (0..=i + 2).map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        fs::write(settings.series_path(name), line + "\n").unwrap();
    }

    let images = plot_all(&settings).unwrap();
    assert_eq!(images.len(), settings.series_names.len());
    for (name, path) in settings.series_names.iter().zip(&images) {
        assert_eq!(path, &settings.image_path(name));
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn failing_dataset_aborts_batch_without_its_image() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::headless_in(dir.path());
    fs::write(settings.series_path("uniform"), "0 0.5 1\n").unwrap();
    fs::write(settings.series_path("lognormal"), "0 oops 1\n").unwrap();
    fs::write(settings.series_path("expo"), "0 1\n").unwrap();

    let err = plot_all(&settings).unwrap_err();
    assert!(matches!(err, SeriesError::MalformedLine { column: 2, .. }));
    assert!(settings.image_path("uniform").exists());
    assert!(!settings.image_path("lognormal").exists());
    assert!(!settings.image_path("expo").exists());
}

#[test]
fn missing_series_file_produces_no_image() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        series_names: vec!["absent".to_string()],
        ..Settings::headless_in(dir.path())
    };

    let err = plot_all(&settings).unwrap_err();
    assert!(matches!(err, SeriesError::FileNotFound { .. }));
    assert!(!settings.image_path("absent").exists());
}

#[test]
fn generated_series_feed_the_plotter() {
    let dir = TempDir::new().unwrap();
    let mut rng = SimpleRng::new(42);
    let mut settings = Settings::headless_in(dir.path());
    settings.series_names.clear();

    for dist in Distribution::ALL {
        let values = generate(dist, 500, 128, &mut rng);
        write_series(&settings.series_path(dist.file_stem()), &values).unwrap();
        settings.series_names.push(dist.file_stem().to_string());

        let loaded = load_series(dir.path(), dist.file_stem()).unwrap();
        assert_eq!(loaded.values, values);
    }

    let images = plot_all(&settings).unwrap();
    assert_eq!(images.len(), 4);
}
