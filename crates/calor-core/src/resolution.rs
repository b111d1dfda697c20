//! Fixed quadrature and truncation settings.
//!
//! The defaults are the accuracy contract of the solvers: there is no
//! adaptive refinement, so changing them changes results.

use crate::error::ParamError;

/// Subintervals in the infinite-bar convolution sum.
pub const DEFAULT_CONVOLUTION_POINTS: usize = 200;

/// Subintervals in each finite-bar coefficient integral.
pub const DEFAULT_COEFFICIENT_POINTS: usize = 100;

/// Eigenmodes kept in the finite-bar expansion (`n = 1..=modes`).
pub const DEFAULT_MODES: usize = 50;

/// Grid points per sampled curve when the caller does not choose.
pub const DEFAULT_SAMPLE_POINTS: usize = 500;

/// Quadrature point counts and expansion length used by the solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Left-Riemann subintervals for the infinite-bar convolution.
    pub convolution_points: usize,
    /// Left-Riemann subintervals for each Fourier coefficient.
    pub coefficient_points: usize,
    /// Number of eigenmodes summed.
    pub modes: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            convolution_points: DEFAULT_CONVOLUTION_POINTS,
            coefficient_points: DEFAULT_COEFFICIENT_POINTS,
            modes: DEFAULT_MODES,
        }
    }
}

impl Resolution {
    /// Every count must be at least 1.
    pub fn validate(&self) -> Result<(), ParamError> {
        let checks = [
            ("convolution_points", self.convolution_points),
            ("coefficient_points", self.coefficient_points),
            ("modes", self.modes),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(ParamError::InvalidResolution { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_constants() {
        let r = Resolution::default();
        assert_eq!(r.convolution_points, 200);
        assert_eq!(r.coefficient_points, 100);
        assert_eq!(r.modes, 50);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn zero_modes_rejected() {
        let r = Resolution {
            modes: 0,
            ..Default::default()
        };
        assert_eq!(
            r.validate(),
            Err(ParamError::InvalidResolution {
                name: "modes",
                value: 0
            })
        );
    }

    #[test]
    fn zero_convolution_points_reported_first() {
        let r = Resolution {
            convolution_points: 0,
            coefficient_points: 0,
            modes: 0,
        };
        assert!(matches!(
            r.validate(),
            Err(ParamError::InvalidResolution {
                name: "convolution_points",
                ..
            })
        ));
    }
}
