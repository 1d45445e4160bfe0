//! Dense 2D sampled scalar field.
//!
//! Samples are stored row-major. `x` is the column index and `y` the row
//! index, so `field[(x, y)]` reads row `y`, column `x`.

use std::ops::{Deref, Index, IndexMut};

use glam::DVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    samples: Vec<f64>,
    width: usize,
    height: usize,
}

impl Field {
    pub fn new(width: usize, height: usize, samples: Vec<f64>) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "samples length must equal width * height"
        );
        Self {
            samples,
            width,
            height,
        }
    }

    /// A field with no samples. Sources start out this way until the
    /// propagation chain fills them.
    pub fn empty() -> Self {
        Self::new(0, 0, Vec::new())
    }

    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            samples: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let samples = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            samples,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<f64> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some(self.samples[y as usize * self.width + x as usize])
        }
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            samples: self.samples.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn sum(&self) -> f64 {
        self.samples.iter().sum()
    }

    pub fn has_non_finite(&self) -> bool {
        self.samples.iter().any(|v| !v.is_finite())
    }

    /// Intensity-weighted centroid in index coordinates `(x, y)`.
    ///
    /// Returns `None` when the total weight is zero or not finite.
    pub fn centroid(&self) -> Option<DVec2> {
        let mut total = 0.0;
        let mut acc = DVec2::ZERO;
        for (idx, &v) in self.samples.iter().enumerate() {
            let x = (idx % self.width) as f64;
            let y = (idx / self.width) as f64;
            total += v;
            acc += DVec2::new(x, y) * v;
        }
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        Some(acc / total)
    }

    /// Largest absolute per-sample difference. Shapes must match.
    pub fn max_abs_diff(&self, other: &Field) -> f64 {
        assert_eq!(self.shape(), other.shape(), "shape mismatch");
        self.samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<(usize, usize)> for Field {
    type Output = f64;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.samples[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for Field {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.samples[y * self.width + x]
    }
}

impl Deref for Field {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

impl AsRef<[f64]> for Field {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Field> for Vec<f64> {
    #[inline]
    fn from(field: Field) -> Self {
        field.samples
    }
}
