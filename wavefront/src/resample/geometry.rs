//! Composite affine mapping between output and input pixel coordinates.
//!
//! Pixel `i` covers the continuous interval `[i, i + 1)`, so a grid of
//! width `w` is centred at `w / 2`, i.e. index coordinate `(w - 1) / 2`.
//! Both grids share the same physical centre. The forward map from an input
//! physical position `r` (relative to the centre) is
//!
//! ```text
//! p = R(theta) * A * r + t * pixel_size_in
//! A = R(alpha) * diag(1 + tangential, 1 + radial) * R(-alpha)
//! ```
//!
//! with `R(phi) = [[cos, -sin], [sin, cos]]` in `(x = column, y = row)`
//! coordinates. Resampling walks the output grid and needs the inverse.

use glam::{DAffine2, DMat2, DVec2};

use crate::resample::config::{GeometricTransform, OutputShape};

/// Maps output index coordinates to input index coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SampleMapping {
    output_to_input: DAffine2,
}

impl SampleMapping {
    /// `transform` must already be validated.
    pub fn new(
        transform: &GeometricTransform,
        input_width: usize,
        input_height: usize,
        output: OutputShape,
    ) -> Self {
        let input_centre = DVec2::new(input_width as f64, input_height as f64) * 0.5;
        let output_centre = DVec2::new(output.cols as f64, output.rows as f64) * 0.5;
        let shift = DVec2::new(transform.shift_x, transform.shift_y) * transform.pixel_size_in;

        // Index coordinate -> physical position relative to the output centre.
        let from_output = DAffine2::from_scale(DVec2::splat(transform.pixel_size_out))
            * DAffine2::from_translation(DVec2::splat(0.5) - output_centre);

        let unrotate = DAffine2::from_angle(-transform.rotation_angle.to_radians());
        let unscale = DAffine2::from_mat2(inverse_anamorphosis(transform));

        // Physical position relative to the input centre -> index coordinate.
        let to_input = DAffine2::from_translation(input_centre - DVec2::splat(0.5))
            * DAffine2::from_scale(DVec2::splat(1.0 / transform.pixel_size_in));

        Self {
            output_to_input: to_input
                * unscale
                * unrotate
                * DAffine2::from_translation(-shift)
                * from_output,
        }
    }

    /// Input index coordinate sampled by output pixel `(x, y)`.
    #[inline]
    pub fn input_position(&self, x: f64, y: f64) -> DVec2 {
        self.output_to_input.transform_point2(DVec2::new(x, y))
    }

    /// Output index coordinate an input point lands on.
    pub fn output_position(&self, input: DVec2) -> DVec2 {
        self.output_to_input.inverse().transform_point2(input)
    }
}

fn inverse_anamorphosis(transform: &GeometricTransform) -> DMat2 {
    if !transform.has_anamorphosis() {
        return DMat2::IDENTITY;
    }
    let alpha = transform.anamorphosis_angle.to_radians();
    let inv_factors = DVec2::new(
        1.0 / (1.0 + transform.tangential_scaling),
        1.0 / (1.0 + transform.radial_scaling),
    );
    DMat2::from_angle(alpha) * DMat2::from_diagonal(inv_factors) * DMat2::from_angle(-alpha)
}
