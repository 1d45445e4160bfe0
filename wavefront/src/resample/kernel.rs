//! Interpolation kernels.
//!
//! Taps whose weight is exactly zero are never read. An output that lands
//! exactly on an input sample therefore returns that sample bit-for-bit, and
//! NaN/Inf only spreads into outputs whose kernel footprint weights it.

use crate::field::Field;
use crate::resample::config::InterpolationOrder;

/// Catmull-Rom bicubic kernel.
///
/// ```text
/// W(x) = (a+2)|x|^3 - (a+3)|x|^2 + 1       for |x| <= 1
/// W(x) = a|x|^3 - 5a|x|^2 + 8a|x| - 4a     for 1 < |x| < 2
/// W(x) = 0                                  otherwise
/// ```
#[inline]
pub(crate) fn bicubic_kernel(x: f64) -> f64 {
    const A: f64 = -0.5;

    let abs_x = x.abs();

    if abs_x <= 1.0 {
        ((A + 2.0) * abs_x - (A + 3.0)) * abs_x * abs_x + 1.0
    } else if abs_x < 2.0 {
        ((A * abs_x - 5.0 * A) * abs_x + 8.0 * A) * abs_x - 4.0 * A
    } else {
        0.0
    }
}

#[inline]
fn sample(field: &Field, x: i64, y: i64, border: f64) -> f64 {
    field.get(x, y).unwrap_or(border)
}

#[inline]
fn nearest(field: &Field, x: f64, y: f64, border: f64) -> f64 {
    sample(field, x.round() as i64, y.round() as i64, border)
}

#[inline]
fn bilinear(field: &Field, x: f64, y: f64, border: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (ix, iy) = (x0 as i64, y0 as i64);

    let taps = [
        (0, 0, (1.0 - fx) * (1.0 - fy)),
        (1, 0, fx * (1.0 - fy)),
        (0, 1, (1.0 - fx) * fy),
        (1, 1, fx * fy),
    ];

    // -0.0 is the exact additive identity, so a single unit tap is returned unchanged.
    let mut sum = -0.0;
    for (dx, dy, w) in taps {
        if w != 0.0 {
            sum += w * sample(field, ix + dx, iy + dy, border);
        }
    }
    sum
}

fn bicubic(field: &Field, x: f64, y: f64, border: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (ix, iy) = (x0 as i64, y0 as i64);

    let wx = [
        bicubic_kernel(fx + 1.0),
        bicubic_kernel(fx),
        bicubic_kernel(fx - 1.0),
        bicubic_kernel(fx - 2.0),
    ];
    let wy = [
        bicubic_kernel(fy + 1.0),
        bicubic_kernel(fy),
        bicubic_kernel(fy - 1.0),
        bicubic_kernel(fy - 2.0),
    ];

    let mut sum = -0.0;
    for (j, &wyj) in wy.iter().enumerate() {
        if wyj == 0.0 {
            continue;
        }
        let py = iy - 1 + j as i64;
        for (i, &wxi) in wx.iter().enumerate() {
            if wxi == 0.0 {
                continue;
            }
            let px = ix - 1 + i as i64;
            sum += sample(field, px, py, border) * wxi * wyj;
        }
    }
    sum
}

/// Interpolate `field` at input index coordinate `(x, y)`.
#[inline]
pub(crate) fn interpolate(
    field: &Field,
    x: f64,
    y: f64,
    order: InterpolationOrder,
    border: f64,
) -> f64 {
    match order {
        InterpolationOrder::Nearest => nearest(field, x, y, border),
        InterpolationOrder::Bilinear => bilinear(field, x, y, border),
        InterpolationOrder::Bicubic => bicubic(field, x, y, border),
    }
}
