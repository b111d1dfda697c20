//! Per-frame performance metrics.

/// Timing and work counters for one sampled curve.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleMetrics {
    /// Wall-clock time for the whole frame, including overlays.
    pub total_us: u64,
    /// Wall-clock time spent in the bar solver.
    pub solve_us: u64,
    /// Number of grid points sampled.
    pub points: usize,
    /// Name of the solver that produced the curve.
    pub solver: String,
    /// Quadrature nodes visited across all points.
    pub quadrature_nodes: u64,
}
