//! Shift a synthetic three-star asterism with parameters read from YAML.
//!
//! Run with `cargo run -p wavefront --example shift_asterism`.

use anyhow::Result;
use glam::DVec2;

use common::log_setup::{setup_logging, LogConfig};
use common::FileFormat;
use wavefront::{
    propagate, Asterism, Field, PhotometricBand, ShiftConfig, ShiftElement, Source, Target,
};

const CONFIG: &str = "\
shift_x: [0.5, 0.0, -1.25]
shift_y: [0.0, 0.75, 0.25]
rot_angle: [0.0, 15.0, -30.0]
";

const SIZE: usize = 64;

fn star(centre: DVec2, band: PhotometricBand) -> Source {
    let sigma = 3.0;
    let flux_map = Field::from_fn(SIZE, SIZE, |x, y| {
        let d = DVec2::new(x as f64, y as f64) - centre;
        (-d.length_squared() / (2.0 * sigma * sigma)).exp()
    });
    let tilt = Field::from_fn(SIZE, SIZE, |x, _| (x as f64 - 31.5) * 5e-9);
    Source::new(band, 8.0).with_fields(flux_map, tilt)
}

fn main() -> Result<()> {
    setup_logging(&LogConfig::default())?;

    let config: ShiftConfig = common::deserialize(CONFIG, FileFormat::Yaml)?;
    let shift = ShiftElement::from_config(config);

    let asterism = Asterism::new(vec![
        star(DVec2::new(28.0, 30.0), PhotometricBand::I),
        star(DVec2::new(34.0, 26.0), PhotometricBand::J),
        star(DVec2::new(31.5, 36.0), PhotometricBand::H),
    ]);
    let before: Vec<_> = asterism.iter().map(|s| s.flux_map().centroid()).collect();

    let mut target = Target::from(asterism);
    propagate(&mut target, &[&shift])?;

    for (idx, source) in target.sources().iter().enumerate() {
        let after = source.flux_map().centroid();
        println!(
            "{} star: centroid {:?} -> {:?}, path {:?}",
            source.band(),
            before[idx],
            after,
            source.optical_path().tags()
        );
    }

    Ok(())
}
