//! The simulation parameter snapshot and the enums that select a solver.
//!
//! The UI layer owns and mutates its own state; each evaluation receives
//! an immutable [`SimulationParameters`] by reference and never keeps it.
//! String keys coming from the UI are mapped once through [`FromStr`]
//! so that dispatch inside the solvers is an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;

/// Lowercase and drop separators so `"two-peaks"`, `"two_peaks"` and
/// `"twoPeaks"` all parse to the same key.
fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Domain configuration of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarType {
    /// Unbounded bar, solved by convolution with the heat kernel.
    Infinite,
    /// Bar on `[0, L]`, solved by an eigenfunction expansion.
    Finite,
}

impl BarType {
    /// Every variant, in declaration order.
    pub const ALL: [BarType; 2] = [BarType::Infinite, BarType::Finite];

    /// Stable lowercase key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Infinite => "infinite",
            Self::Finite => "finite",
        }
    }
}

/// Boundary condition applied at both ends of a finite bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// `u(0) = u(L) = 0`.
    Dirichlet,
    /// `u_x(0) = u_x(L) = 0` (insulated ends).
    Neumann,
    /// `u(0) = 0`, `u_x(L) = 0`.
    Mixed,
}

impl BoundaryCondition {
    /// Every variant, in declaration order.
    pub const ALL: [BoundaryCondition; 3] = [
        BoundaryCondition::Dirichlet,
        BoundaryCondition::Neumann,
        BoundaryCondition::Mixed,
    ];

    /// Stable lowercase key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dirichlet => "dirichlet",
            Self::Neumann => "neumann",
            Self::Mixed => "mixed",
        }
    }
}

/// Canonical initial temperature profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InitialCondition {
    /// Narrow bell centered on the bar.
    Gaussian,
    /// Unit plateau of width 2 around the center.
    Step,
    /// Unit step at the center (hot right half).
    StepDiscontinuous,
    /// Unit-height tent of half-width 1 around the center.
    Triangle,
    /// Two bells at 30% and 70% of the bar length.
    TwoPeaks,
    /// Smooth logistic transition at the center.
    Sigmoid,
    /// Fixed superposition of eight trigonometric modes.
    Chaotic,
}

impl InitialCondition {
    /// Every variant, in declaration order.
    pub const ALL: [InitialCondition; 7] = [
        InitialCondition::Gaussian,
        InitialCondition::Step,
        InitialCondition::StepDiscontinuous,
        InitialCondition::Triangle,
        InitialCondition::TwoPeaks,
        InitialCondition::Sigmoid,
        InitialCondition::Chaotic,
    ];

    /// Stable kebab-case key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Step => "step",
            Self::StepDiscontinuous => "step-discontinuous",
            Self::Triangle => "triangle",
            Self::TwoPeaks => "two-peaks",
            Self::Sigmoid => "sigmoid",
            Self::Chaotic => "chaotic",
        }
    }
}

macro_rules! impl_key_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParamError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize_key(s);
                <$ty>::ALL
                    .into_iter()
                    .find(|v| normalize_key(v.name()) == key)
                    .ok_or_else(|| ParamError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_key_traits!(BarType, "bar type");
impl_key_traits!(BoundaryCondition, "boundary condition");
impl_key_traits!(InitialCondition, "initial condition");

/// Immutable input snapshot for one evaluation.
///
/// Fields are public so the UI layer can build snapshots cheaply;
/// [`validate`](Self::validate) is run by the sampler on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Thermal diffusivity `α`. Must be finite and > 0.
    pub diffusivity: f64,
    /// Bar length `L`. Must be finite and > 0.
    pub length: f64,
    /// Infinite or finite domain.
    pub bar_type: BarType,
    /// Initial temperature profile.
    pub initial_condition: InitialCondition,
    /// Boundary condition; only consulted for [`BarType::Finite`].
    pub boundary_condition: BoundaryCondition,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            diffusivity: 0.1,
            length: 10.0,
            bar_type: BarType::Infinite,
            initial_condition: InitialCondition::Gaussian,
            boundary_condition: BoundaryCondition::Dirichlet,
        }
    }
}

impl SimulationParameters {
    /// Start a builder seeded with the [`Default`] snapshot.
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder {
            params: Self::default(),
        }
    }

    /// Check the numeric invariants `α > 0` and `L > 0`.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(ParamError::NonPositiveLength { value: self.length });
        }
        if !(self.diffusivity.is_finite() && self.diffusivity > 0.0) {
            return Err(ParamError::NonPositiveDiffusivity {
                value: self.diffusivity,
            });
        }
        Ok(())
    }

    /// Midpoint `L / 2` of the bar.
    pub fn center(&self) -> f64 {
        self.length / 2.0
    }
}

/// Builder for [`SimulationParameters`].
///
/// Unset fields keep the defaults (α = 0.1, L = 10, infinite bar,
/// gaussian profile, Dirichlet ends).
#[derive(Clone, Debug)]
pub struct SimulationParametersBuilder {
    params: SimulationParameters,
}

impl SimulationParametersBuilder {
    /// Set the thermal diffusivity `α`.
    pub fn diffusivity(mut self, alpha: f64) -> Self {
        self.params.diffusivity = alpha;
        self
    }

    /// Set the bar length `L`.
    pub fn length(mut self, length: f64) -> Self {
        self.params.length = length;
        self
    }

    /// Select the domain configuration.
    pub fn bar_type(mut self, bar_type: BarType) -> Self {
        self.params.bar_type = bar_type;
        self
    }

    /// Select the initial profile.
    pub fn initial_condition(mut self, ic: InitialCondition) -> Self {
        self.params.initial_condition = ic;
        self
    }

    /// Select the boundary condition.
    pub fn boundary_condition(mut self, bc: BoundaryCondition) -> Self {
        self.params.boundary_condition = bc;
        self
    }

    /// Validate and return the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NonPositiveLength`] or
    /// [`ParamError::NonPositiveDiffusivity`] for non-positive or
    /// non-finite values.
    pub fn build(self) -> Result<SimulationParameters, ParamError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
