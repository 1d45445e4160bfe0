//! Transform description consumed by [`resample`](super::resample).

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::resample::ResampleError;

/// Interpolation kernel, identified by its polynomial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InterpolationOrder {
    /// Order 0: nearest neighbour. Exact for the identity transform.
    Nearest,
    /// Order 1: bilinear.
    #[default]
    Bilinear,
    /// Order 3: Catmull-Rom bicubic. May overshoot near sharp edges.
    Bicubic,
}

impl InterpolationOrder {
    pub fn code(self) -> u8 {
        match self {
            InterpolationOrder::Nearest => 0,
            InterpolationOrder::Bilinear => 1,
            InterpolationOrder::Bicubic => 3,
        }
    }
}

impl TryFrom<u8> for InterpolationOrder {
    type Error = ResampleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(InterpolationOrder::Nearest),
            1 => Ok(InterpolationOrder::Bilinear),
            3 => Ok(InterpolationOrder::Bicubic),
            other => Err(ResampleError::UnsupportedOrder(other)),
        }
    }
}

impl From<InterpolationOrder> for u8 {
    fn from(order: InterpolationOrder) -> Self {
        order.code()
    }
}

/// Explicit output grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputShape {
    pub rows: usize,
    pub cols: usize,
}

impl OutputShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn of(field: &Field) -> Self {
        let (rows, cols) = field.shape();
        Self { rows, cols }
    }
}

fn unit() -> f64 {
    1.0
}

/// Geometric transform applied by the resampling engine.
///
/// Angles are in degrees, shifts in input pixels. The anisotropic factors
/// are `1 + tangential_scaling` along the axis at `anamorphosis_angle` and
/// `1 + radial_scaling` perpendicular to it, so zero disables them.
/// `shape_out` overrides `resolution_out` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricTransform {
    #[serde(default)]
    pub rotation_angle: f64,
    #[serde(default)]
    pub shift_x: f64,
    #[serde(default)]
    pub shift_y: f64,
    #[serde(default)]
    pub anamorphosis_angle: f64,
    #[serde(default)]
    pub tangential_scaling: f64,
    #[serde(default)]
    pub radial_scaling: f64,
    #[serde(default = "unit")]
    pub pixel_size_in: f64,
    #[serde(default = "unit")]
    pub pixel_size_out: f64,
    #[serde(default)]
    pub resolution_out: usize,
    #[serde(default)]
    pub shape_out: Option<OutputShape>,
    #[serde(default)]
    pub order: InterpolationOrder,
    /// Value read for kernel taps outside the input grid.
    #[serde(default)]
    pub border_value: f64,
    /// Clamp negative outputs to zero. For amplitude fields resampled with
    /// [`InterpolationOrder::Bicubic`]; NaN is left untouched.
    #[serde(default)]
    pub clamp_negative: bool,
}

impl GeometricTransform {
    /// Identity transform onto a square `resolution_out` grid.
    pub fn new(resolution_out: usize) -> Self {
        Self {
            rotation_angle: 0.0,
            shift_x: 0.0,
            shift_y: 0.0,
            anamorphosis_angle: 0.0,
            tangential_scaling: 0.0,
            radial_scaling: 0.0,
            pixel_size_in: 1.0,
            pixel_size_out: 1.0,
            resolution_out,
            shape_out: None,
            order: InterpolationOrder::default(),
            border_value: 0.0,
            clamp_negative: false,
        }
    }

    /// Identity transform whose output grid matches `field`.
    pub fn preserving_shape(field: &Field) -> Self {
        let mut transform = Self::new(field.height());
        transform.shape_out = Some(OutputShape::of(field));
        transform
    }

    pub fn with_shift(mut self, shift_x: f64, shift_y: f64) -> Self {
        self.shift_x = shift_x;
        self.shift_y = shift_y;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_angle = degrees;
        self
    }

    pub fn with_anamorphosis(mut self, angle: f64, tangential: f64, radial: f64) -> Self {
        self.anamorphosis_angle = angle;
        self.tangential_scaling = tangential;
        self.radial_scaling = radial;
        self
    }

    pub fn with_pixel_sizes(mut self, pixel_size_in: f64, pixel_size_out: f64) -> Self {
        self.pixel_size_in = pixel_size_in;
        self.pixel_size_out = pixel_size_out;
        self
    }

    pub fn with_shape_out(mut self, rows: usize, cols: usize) -> Self {
        self.shape_out = Some(OutputShape::new(rows, cols));
        self
    }

    pub fn with_order(mut self, order: InterpolationOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_border_value(mut self, value: f64) -> Self {
        self.border_value = value;
        self
    }

    pub fn with_clamp_negative(mut self, clamp: bool) -> Self {
        self.clamp_negative = clamp;
        self
    }

    pub fn has_anamorphosis(&self) -> bool {
        self.tangential_scaling != 0.0 || self.radial_scaling != 0.0
    }

    /// The effective output grid.
    pub fn output_shape(&self) -> Result<OutputShape, ResampleError> {
        let shape = match self.shape_out {
            Some(shape) if shape.rows == 0 || shape.cols == 0 => {
                return Err(ResampleError::EmptyOutputShape {
                    rows: shape.rows,
                    cols: shape.cols,
                });
            }
            Some(shape) => shape,
            None if self.resolution_out == 0 => return Err(ResampleError::ZeroResolution),
            None => OutputShape::new(self.resolution_out, self.resolution_out),
        };

        // The sample buffer must be addressable in bytes.
        let bytes = shape
            .rows
            .checked_mul(shape.cols)
            .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
            .filter(|&bytes| bytes <= isize::MAX as usize);
        if bytes.is_none() {
            return Err(ResampleError::OutputTooLarge {
                rows: shape.rows,
                cols: shape.cols,
            });
        }

        Ok(shape)
    }

    pub fn validate(&self) -> Result<(), ResampleError> {
        for (name, value) in [
            ("pixel_size_in", self.pixel_size_in),
            ("pixel_size_out", self.pixel_size_out),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ResampleError::NonPositivePixelSize { name, value });
            }
        }

        for (name, value) in [
            ("rotation_angle", self.rotation_angle),
            ("shift_x", self.shift_x),
            ("shift_y", self.shift_y),
            ("anamorphosis_angle", self.anamorphosis_angle),
        ] {
            if !value.is_finite() {
                return Err(ResampleError::NonFiniteParameter { name, value });
            }
        }

        for (axis, scaling) in [
            ("tangential", self.tangential_scaling),
            ("radial", self.radial_scaling),
        ] {
            let factor = 1.0 + scaling;
            if !(factor.is_finite() && factor > 0.0) {
                return Err(ResampleError::SingularScaling { axis, factor });
            }
        }

        self.output_shape().map(|_| ())
    }
}
