//! Synthetic fields for tests.

use glam::DVec2;

use crate::field::Field;

/// Index coordinate of the geometric centre of a `width x height` grid.
pub fn grid_centre(width: usize, height: usize) -> DVec2 {
    DVec2::new(width as f64 - 1.0, height as f64 - 1.0) * 0.5
}

/// Gradient that increases along both axes, never zero.
pub fn diagonal_gradient(width: usize, height: usize) -> Field {
    let scale = (width + height) as f64;
    Field::from_fn(width, height, |x, y| {
        (1.0 + x as f64 + y as f64 * 0.5) / scale
    })
}

/// Unit-peak gaussian blob.
pub fn gaussian(width: usize, height: usize, centre: DVec2, sigma: f64) -> Field {
    let two_sigma_sq = 2.0 * sigma * sigma;
    Field::from_fn(width, height, |x, y| {
        let d = DVec2::new(x as f64, y as f64) - centre;
        (-d.length_squared() / two_sigma_sq).exp()
    })
}

/// `value` inside a disk of `radius` around `centre`, zero elsewhere.
pub fn disk(width: usize, height: usize, centre: DVec2, radius: f64, value: f64) -> Field {
    Field::from_fn(width, height, |x, y| {
        if DVec2::new(x as f64, y as f64).distance(centre) <= radius {
            value
        } else {
            0.0
        }
    })
}

/// Axis-aligned step: `high` for `x >= edge`, `low` otherwise.
pub fn vertical_step(width: usize, height: usize, edge: usize, low: f64, high: f64) -> Field {
    Field::from_fn(width, height, |x, _| if x >= edge { high } else { low })
}

/// Intensity-weighted variance along x and y about the centroid.
pub fn second_moments(field: &Field) -> DVec2 {
    let c = field.centroid().expect("field has no weight");
    let mut total = 0.0;
    let mut acc = DVec2::ZERO;
    for y in 0..field.height() {
        for x in 0..field.width() {
            let v = field[(x, y)];
            let d = DVec2::new(x as f64, y as f64) - c;
            total += v;
            acc += d * d * v;
        }
    }
    acc / total
}

/// Largest absolute difference restricted to pixels within `radius` of the grid centre.
pub fn max_abs_diff_within(a: &Field, b: &Field, radius: f64) -> f64 {
    assert_eq!(a.shape(), b.shape());
    let c = grid_centre(a.width(), a.height());
    let mut worst = 0.0f64;
    for y in 0..a.height() {
        for x in 0..a.width() {
            if DVec2::new(x as f64, y as f64).distance(c) <= radius {
                worst = worst.max((a[(x, y)] - b[(x, y)]).abs());
            }
        }
    }
    worst
}
