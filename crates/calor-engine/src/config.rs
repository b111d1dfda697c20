//! Sampler configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use calor_core::{ParamError, Resolution, DEFAULT_SAMPLE_POINTS};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SamplerConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A quadrature or mode count is zero.
    Resolution(ParamError),
    /// `default_points` is zero.
    NoDefaultPoints,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(e) => write!(f, "resolution: {e}"),
            Self::NoDefaultPoints => write!(f, "default_points must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolution(e) => Some(e),
            Self::NoDefaultPoints => None,
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Resolution(e)
    }
}

// ── SamplerConfig ──────────────────────────────────────────────────

/// Construction input for [`SolutionSampler`](crate::SolutionSampler).
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Quadrature and truncation settings. Default: 200 / 100 / 50.
    pub resolution: Resolution,
    /// Points per curve for [`sample_default`](crate::SolutionSampler::sample_default).
    /// Default: 500.
    pub default_points: usize,
    /// Reject NaN or infinite solver output with
    /// [`SolveError::NonFinite`](calor_core::SolveError::NonFinite).
    /// With this off, valid but extreme input can yield NaN samples, e.g.
    /// a subnormal diffusivity whose `4αt` underflows in the heat kernel.
    /// Default: `true`.
    pub check_finite: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            default_points: DEFAULT_SAMPLE_POINTS,
            check_finite: true,
        }
    }
}

impl SamplerConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolution.validate()?;
        if self.default_points == 0 {
            return Err(ConfigError::NoDefaultPoints);
        }
        Ok(())
    }
}
