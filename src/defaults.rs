//! Default tuning values for the thinning demo

/// Scale-axis factor `s` applied to the medial-axis radii
pub const SCALE_FACTOR: f64 = 2.5;
/// Sampling resolution handed to the medial-axis builder
pub const RESOLUTION: f64 = 10.0;
/// Significant figures per coordinate in path data
pub const SIG_FIGS: u32 = 10;
/// Slider value mapped to fraction 1
pub const SLIDER_MAX: f64 = 100.0;
/// Largest distance at which two curve endpoints count as joined
pub const JOIN_TOLERANCE: f64 = 1e-9;
