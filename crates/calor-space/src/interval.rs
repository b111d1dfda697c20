//! Closed real intervals.

use crate::error::SpaceError;

/// A closed interval `[start, end]` with `start < end`.
///
/// # Examples
///
/// ```
/// use calor_space::Interval;
///
/// let bar = Interval::new(0.0, 10.0).unwrap();
/// assert_eq!(bar.width(), 10.0);
/// assert!(bar.contains(10.0));
/// assert!(!bar.contains(-0.1));
///
/// assert!(Interval::new(1.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Create `[start, end]`.
    ///
    /// Returns `Err(SpaceError::DegenerateInterval)` unless both ends are
    /// finite and `start < end`.
    pub fn new(start: f64, end: f64) -> Result<Self, SpaceError> {
        if !start.is_finite() || !end.is_finite() || !(start < end) {
            return Err(SpaceError::DegenerateInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lower bound.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// `end - start`, always positive.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `x` lies in the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}
