//! Left-endpoint Riemann quadrature at a fixed resolution.

use crate::error::SpaceError;
use crate::interval::Interval;

/// Left Riemann sum over `n` equal subintervals of an [`Interval`].
///
/// ```text
/// ∫ f ≈ h · Σ_{k=0}^{n-1} f(a + k·h),   h = (b - a) / n
/// ```
///
/// The right endpoint `b` is never evaluated. There is no error estimate
/// and no refinement; `n` is the whole accuracy contract.
///
/// # Examples
///
/// ```
/// use calor_space::{Interval, LeftRiemann};
///
/// let rule = LeftRiemann::new(Interval::new(0.0, 1.0).unwrap(), 4).unwrap();
/// assert_eq!(rule.nodes().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
/// assert!((rule.integrate(|x| x) - 0.375).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeftRiemann {
    interval: Interval,
    subintervals: usize,
}

impl LeftRiemann {
    /// Create a rule with `subintervals` equal pieces.
    ///
    /// Returns `Err(SpaceError::NoSubintervals)` if `subintervals == 0`.
    pub fn new(interval: Interval, subintervals: usize) -> Result<Self, SpaceError> {
        if subintervals == 0 {
            return Err(SpaceError::NoSubintervals);
        }
        Ok(Self {
            interval,
            subintervals,
        })
    }

    /// Integration range.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Number of subintervals (and of function evaluations).
    pub fn subintervals(&self) -> usize {
        self.subintervals
    }

    /// Width `h` of each subinterval.
    pub fn step(&self) -> f64 {
        self.interval.width() / self.subintervals as f64
    }

    /// Left endpoints `a + k·h` for `k = 0..n`.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let a = self.interval.start();
        let h = self.step();
        (0..self.subintervals).map(move |k| a + k as f64 * h)
    }

    /// Approximate `∫ f` over the interval.
    pub fn integrate<F>(&self, mut f: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let sum: f64 = self.nodes().map(&mut f).sum();
        sum * self.step()
    }
}
