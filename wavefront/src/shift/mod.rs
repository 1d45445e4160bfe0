//! Per-source shift and rotation of the electromagnetic field.
//!
//! A [`ShiftElement`] holds one `(shift_x, shift_y, rot_angle)` triple per
//! source. Relaying a target through it resamples each source's flux map
//! and OPD with that source's own triple, keeping the grid shape, and
//! appends the element to the source's optical path.
//!
//! Application is all-or-nothing: parameter counts are checked and every
//! resampled field is computed before the first source is touched.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use common::FileFormat;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::optical_path::{PathElement, PathEntry, Relay};
use crate::resample::{resample, GeometricTransform, InterpolationOrder};
use crate::source::{Source, Target};


pub const SHIFT_TAG: &str = "EM_shift";

/// Parameter lists of a [`ShiftElement`], index-aligned with the sources.
///
/// Shifts are in input pixels, rotations in degrees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub shift_x: Vec<f64>,
    pub shift_y: Vec<f64>,
    pub rot_angle: Vec<f64>,
}

impl ShiftConfig {
    /// Load from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_file_name(&path.to_string_lossy())?;
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = common::deserialize(&text, format)?;

        tracing::debug!(path = %path.display(), "Loaded shift config");
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct ShiftElement {
    params: Arc<ShiftConfig>,
}

impl ShiftElement {
    pub fn new(shift_x: Vec<f64>, shift_y: Vec<f64>, rot_angle: Vec<f64>) -> Self {
        Self::from_config(ShiftConfig {
            shift_x,
            shift_y,
            rot_angle,
        })
    }

    pub fn from_config(config: ShiftConfig) -> Self {
        Self {
            params: Arc::new(config),
        }
    }

    pub fn tag(&self) -> &'static str {
        SHIFT_TAG
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.params
    }

    pub fn shift_x(&self) -> &[f64] {
        &self.params.shift_x
    }

    pub fn shift_y(&self) -> &[f64] {
        &self.params.shift_y
    }

    pub fn rot_angle(&self) -> &[f64] {
        &self.params.rot_angle
    }

    /// Whether both handles refer to the same constructed element.
    pub fn same_as(&self, other: &ShiftElement) -> bool {
        Arc::ptr_eq(&self.params, &other.params)
    }

    /// Transform applied to `field` of the source at `index`.
    ///
    /// Panics if `index` is out of range of the parameter lists.
    pub fn transform_for(&self, index: usize, field: &Field) -> GeometricTransform {
        GeometricTransform::preserving_shape(field)
            .with_shift(self.params.shift_x[index], self.params.shift_y[index])
            .with_rotation(self.params.rot_angle[index])
            .with_order(InterpolationOrder::Bilinear)
    }

    /// Shift every source in `sources`, in order.
    pub fn apply(&self, sources: &mut [Source]) -> Result<()> {
        self.check_cardinality(sources.len())?;

        let resampled = sources
            .par_iter()
            .enumerate()
            .map(|(idx, source)| self.resample_source(idx, source))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(sources = sources.len(), "Applying {SHIFT_TAG}");

        let entry = PathEntry::new(Arc::new(self.clone()));
        for (idx, (source, (flux_map, opd))) in sources.iter_mut().zip(resampled).enumerate() {
            tracing::debug!(
                source = idx,
                shift_x = self.params.shift_x[idx],
                shift_y = self.params.shift_y[idx],
                rot_angle = self.params.rot_angle[idx],
                "Shifted source"
            );
            source.record(entry.clone());
            source.set_flux_map(flux_map);
            source.set_opd(opd);
        }

        Ok(())
    }

    fn check_cardinality(&self, expected: usize) -> Result<()> {
        let lists = [
            ("shift_x", self.params.shift_x.len()),
            ("shift_y", self.params.shift_y.len()),
            ("rot_angle", self.params.rot_angle.len()),
        ];
        for (list, actual) in lists {
            if actual != expected {
                return Err(Error::CardinalityMismatch {
                    list,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn resample_source(&self, index: usize, source: &Source) -> Result<(Field, Field)> {
        let run = |field: &Field, name: &'static str| {
            resample(field, &self.transform_for(index, field)).map_err(|source| Error::Resample {
                index,
                field: name,
                source,
            })
        };
        Ok((run(source.flux_map(), "flux_map")?, run(source.opd(), "opd")?))
    }
}

impl From<ShiftConfig> for ShiftElement {
    fn from(config: ShiftConfig) -> Self {
        Self::from_config(config)
    }
}

impl PathElement for ShiftElement {
    fn tag(&self) -> &str {
        SHIFT_TAG
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Relay for ShiftElement {
    fn relay(&self, target: &mut Target) -> Result<()> {
        self.apply(target.expand())
    }
}
