//! Tunable constants for the ground-track sweep, surfaced as config
//! rather than left as magic numbers inline.

/// Controls the resolution and search window of [`crate::build_overlays`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerConfig {
    /// Half-width of the time window searched around `t0_tt_hours`, hours.
    pub window_hours: f64,
    /// Time step between penumbral envelope frames, hours.
    pub penumbra_step_hours: f64,
    /// Time step between central-band frames, hours.
    pub central_step_hours: f64,
    /// Number of bearings swept per penumbral envelope frame.
    pub penumbra_bearings: usize,
    /// Number of bearings swept per central-band frame.
    pub central_bearings: usize,
    /// Maximum search radius for the penumbral boundary, degrees of arc.
    pub penumbra_radius_deg: f64,
    /// Maximum search radius for the central-shadow boundary, degrees of arc.
    pub central_radius_deg: f64,
    /// Fixed bisection iteration count for radial boundary search.
    pub bisection_iterations: u32,
    /// Douglas-Peucker simplification tolerance, degrees.
    pub simplify_tolerance_deg: f64,
    /// `x^2 + y^2` threshold beyond which the shadow axis is treated as
    /// missing the Earth entirely for a given frame.
    pub axis_miss_threshold: f64,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            window_hours: 3.0,
            penumbra_step_hours: 0.1,
            central_step_hours: 0.05,
            penumbra_bearings: 120,
            central_bearings: 72,
            penumbra_radius_deg: 80.0,
            central_radius_deg: 10.0,
            bisection_iterations: 22,
            simplify_tolerance_deg: 0.08,
            axis_miss_threshold: 2.5,
        }
    }
}
