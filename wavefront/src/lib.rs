//! Wavefront field registration.
//!
//! Two layers:
//!
//! - [`resample`] is a pure geometric resampling engine for sampled 2D
//!   fields: rotation about the grid centre, sub-pixel translation,
//!   anamorphic scaling and a change of pitch or grid shape.
//! - [`shift`] provides [`ShiftElement`], an optical element that applies a
//!   per-source shift and rotation to the flux map and OPD of every source
//!   it is relayed through, recording itself on each source's optical path.

mod error;
pub mod field;
pub mod optical_path;
pub mod resample;
pub mod shift;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use field::Field;
pub use optical_path::{propagate, OpticalPath, PathElement, PathEntry, Relay};
pub use resample::{resample, GeometricTransform, InterpolationOrder, OutputShape, ResampleError};
pub use shift::{ShiftConfig, ShiftElement};
pub use source::{Asterism, PhotometricBand, Source, Target};
