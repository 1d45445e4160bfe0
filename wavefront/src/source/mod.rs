//! Guide-star sources carrying the sampled electromagnetic field.
//!
//! A [`Source`] owns its flux map, its OPD and the fields derived from the
//! OPD. The OPD can only be written through [`Source::set_opd`], which
//! refreshes `phase` and `opd_no_pupil` before returning, so downstream
//! elements never observe a stale derived field.

use std::any::Any;
use std::f64::consts::TAU;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::optical_path::{OpticalPath, PathElement, PathEntry};

mod asterism;

pub use asterism::{Asterism, Target};

pub const SOURCE_TAG: &str = "source";

/// Photometric band of a source, fixing its wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotometricBand {
    U,
    B,
    V,
    R,
    I,
    J,
    H,
    K,
}

impl PhotometricBand {
    /// Central wavelength in metres.
    pub fn wavelength(self) -> f64 {
        match self {
            PhotometricBand::U => 0.360e-6,
            PhotometricBand::B => 0.440e-6,
            PhotometricBand::V => 0.550e-6,
            PhotometricBand::R => 0.640e-6,
            PhotometricBand::I => 0.790e-6,
            PhotometricBand::J => 1.215e-6,
            PhotometricBand::H => 1.654e-6,
            PhotometricBand::K => 2.179e-6,
        }
    }
}

impl fmt::Display for PhotometricBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhotometricBand::U => "U",
            PhotometricBand::B => "B",
            PhotometricBand::V => "V",
            PhotometricBand::R => "R",
            PhotometricBand::I => "I",
            PhotometricBand::J => "J",
            PhotometricBand::H => "H",
            PhotometricBand::K => "K",
        };
        f.write_str(name)
    }
}

/// First entry of every source's optical path.
#[derive(Debug, Clone)]
pub struct SourceOrigin {
    tag: String,
    pub band: PhotometricBand,
    pub magnitude: f64,
}

impl PathElement for SourceOrigin {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone)]
pub struct Source {
    band: PhotometricBand,
    magnitude: f64,
    /// Zenith angle in arcseconds and azimuth in degrees.
    coordinates: [f64; 2],
    flux_map: Field,
    opd: Field,
    opd_no_pupil: Field,
    phase: Field,
    optical_path: OpticalPath,
}

impl Source {
    /// On-axis source with empty fields; its optical path starts with its own origin.
    pub fn new(band: PhotometricBand, magnitude: f64) -> Self {
        let origin = SourceOrigin {
            tag: format!("{SOURCE_TAG}({band})"),
            band,
            magnitude,
        };
        let mut optical_path = OpticalPath::default();
        optical_path.push(PathEntry::new(Arc::new(origin)));

        Self {
            band,
            magnitude,
            coordinates: [0.0, 0.0],
            flux_map: Field::empty(),
            opd: Field::empty(),
            opd_no_pupil: Field::empty(),
            phase: Field::empty(),
            optical_path,
        }
    }

    pub fn with_coordinates(mut self, zenith_arcsec: f64, azimuth_deg: f64) -> Self {
        self.coordinates = [zenith_arcsec, azimuth_deg];
        self
    }

    pub fn with_fields(mut self, flux_map: Field, opd: Field) -> Self {
        self.set_flux_map(flux_map);
        self.set_opd(opd);
        self
    }

    pub fn tag(&self) -> &'static str {
        SOURCE_TAG
    }

    pub fn band(&self) -> PhotometricBand {
        self.band
    }

    pub fn wavelength(&self) -> f64 {
        self.band.wavelength()
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn coordinates(&self) -> [f64; 2] {
        self.coordinates
    }

    pub fn flux_map(&self) -> &Field {
        &self.flux_map
    }

    pub fn opd(&self) -> &Field {
        &self.opd
    }

    /// OPD expressed in radians at the source wavelength.
    pub fn phase(&self) -> &Field {
        &self.phase
    }

    pub fn opd_no_pupil(&self) -> &Field {
        &self.opd_no_pupil
    }

    pub fn optical_path(&self) -> &OpticalPath {
        &self.optical_path
    }

    pub fn set_flux_map(&mut self, flux_map: Field) {
        self.flux_map = flux_map;
    }

    /// Replace the OPD and refresh every field derived from it.
    pub fn set_opd(&mut self, opd: Field) {
        self.opd = opd;
        self.refresh_derived();
    }

    /// Append an element to the optical path.
    pub fn record(&mut self, entry: PathEntry) {
        self.optical_path.push(entry);
    }

    fn refresh_derived(&mut self) {
        let k = TAU / self.wavelength();
        self.phase = self.opd.map(|v| v * k);
        // No pupil is applied to the field held here, so both OPD views coincide.
        self.opd_no_pupil = self.opd.clone();
    }
}
