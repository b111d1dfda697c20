//! Evenly spaced sample coordinates.

use calor_core::SpatialSample;

use crate::error::SpaceError;
use crate::interval::Interval;

/// `points` evenly spaced coordinates covering an [`Interval`].
///
/// With two or more points the first coordinate is `start` and the last
/// is exactly `end`. A single-point grid sits at `start`.
///
/// # Examples
///
/// ```
/// use calor_space::{Interval, UniformGrid};
///
/// let grid = UniformGrid::new(Interval::new(0.0, 10.0).unwrap(), 3).unwrap();
/// let xs: Vec<f64> = grid.coords().collect();
/// assert_eq!(xs, vec![0.0, 5.0, 10.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGrid {
    interval: Interval,
    points: usize,
}

impl UniformGrid {
    /// Create a grid with `points` coordinates over `interval`.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if `points == 0`.
    pub fn new(interval: Interval, points: usize) -> Result<Self, SpaceError> {
        if points == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        Ok(Self { interval, points })
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.points
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The covered interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Distance between neighbouring coordinates (0 for a single point).
    pub fn spacing(&self) -> f64 {
        if self.points < 2 {
            0.0
        } else {
            self.interval.width() / (self.points - 1) as f64
        }
    }

    /// Coordinate of point `i`. `i` must be `< len()`.
    pub fn coord(&self, i: usize) -> f64 {
        debug_assert!(i < self.points, "grid index {i} out of range");
        if self.points > 1 && i == self.points - 1 {
            return self.interval.end();
        }
        self.interval.start() + self.spacing() * i as f64
    }

    /// All coordinates in ascending order.
    pub fn coords(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.points).map(move |i| self.coord(i))
    }

    /// Evaluate `f` at every coordinate, in ascending order.
    pub fn sample<F>(&self, mut f: F) -> Vec<SpatialSample>
    where
        F: FnMut(f64) -> f64,
    {
        self.coords().map(|x| SpatialSample::new(x, f(x))).collect()
    }

    /// Like [`sample`](Self::sample) but stops at the first error.
    pub fn try_sample<F, E>(&self, mut f: F) -> Result<Vec<SpatialSample>, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let mut out = Vec::with_capacity(self.points);
        for x in self.coords() {
            out.push(SpatialSample::new(x, f(x)?));
        }
        Ok(out)
    }
}
