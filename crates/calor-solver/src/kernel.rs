//! The heat kernel on the real line.

use std::f64::consts::PI;

/// Green's function `G(x, t, α) = (4παt)^(-1/2) · exp(-x² / (4αt))`.
///
/// At `t = 0` this returns `1` for `x == 0` and `0` elsewhere. That
/// value is not a faithful delta function; the solvers never reach it
/// because `t = 0` is answered from the initial profile directly.
///
/// Callers must pass `t >= 0` and `alpha > 0`. If `4αt` underflows to
/// zero (subnormal `alpha` with small `t`) the result at `x == 0` is NaN.
///
/// # Examples
///
/// ```
/// use calor_solver::heat_kernel;
///
/// let peak = heat_kernel(0.0, 1.0, 0.25);
/// assert!((peak - 1.0 / std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// assert_eq!(heat_kernel(0.0, 0.0, 0.25), 1.0);
/// assert_eq!(heat_kernel(0.5, 0.0, 0.25), 0.0);
/// ```
pub fn heat_kernel(x: f64, t: f64, alpha: f64) -> f64 {
    if t == 0.0 {
        return if x == 0.0 { 1.0 } else { 0.0 };
    }
    let spread = 4.0 * alpha * t;
    (-(x * x) / spread).exp() / (PI * spread).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_even_in_x() {
        for &x in &[0.1, 0.7, 2.5] {
            assert_eq!(heat_kernel(x, 0.3, 0.1), heat_kernel(-x, 0.3, 0.1));
        }
    }

    #[test]
    fn kernel_has_unit_mass() {
        // Fine trapezoid sum over ±10 standard deviations.
        let (t, alpha): (f64, f64) = (2.0, 0.1);
        let sigma = (2.0 * alpha * t).sqrt();
        let n = 20_000;
        let a = -10.0 * sigma;
        let h = 20.0 * sigma / n as f64;
        let mass: f64 = (0..=n)
            .map(|k| {
                let w = if k == 0 || k == n { 0.5 } else { 1.0 };
                w * heat_kernel(a + k as f64 * h, t, alpha)
            })
            .sum::<f64>()
            * h;
        assert!((mass - 1.0).abs() < 1e-9, "mass = {mass}");
    }

    #[test]
    fn kernel_flattens_over_time() {
        let early = heat_kernel(0.0, 0.1, 0.1);
        let late = heat_kernel(0.0, 10.0, 0.1);
        assert!(early > late);
        assert!(late > 0.0);
    }
}
