//! Strongly-typed geometric primitives.
//!
//! - Points are `glam::DVec2`
//! - Circles and fractions validate on construction
//! - Clamping, not failure, for slider-driven values

use std::fmt;

use glam::DVec2;

use crate::path::fmt_num_precision;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negative values.
#[inline]
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// A maximal inscribed circle of the transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    /// Create a circle with validation (finite center, finite non-negative radius)
    pub fn try_new(center: DVec2, radius: f64) -> Result<Self, NumericError> {
        check_finite(center.x)?;
        check_finite(center.y)?;
        let radius = check_non_negative(radius)?;
        Ok(Circle { center, radius })
    }

    /// Same center, radius multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Circle {
            center: self.center,
            radius: self.radius * factor,
        }
    }
}

/// Thinning fraction: 0 is the outline, 1 is the axis.
///
/// Always within `[0, 1]`. Out-of-range input is clamped because sliders
/// emit boundary values transiently.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Fraction(f64);

impl Fraction {
    pub const OUTLINE: Fraction = Fraction(0.0);
    pub const AXIS: Fraction = Fraction(1.0);

    /// Clamp `val` into `[0, 1]`. NaN maps to 0.
    pub fn clamped(val: f64) -> Fraction {
        if val.is_nan() {
            crate::log::warn!("NaN thinning fraction, using 0");
            return Fraction::OUTLINE;
        }
        if !(0.0..=1.0).contains(&val) {
            crate::log::debug!(val, "clamping thinning fraction");
        }
        Fraction(val.clamp(0.0, 1.0))
    }

    /// Map a slider value in `0..=100` to a fraction.
    pub fn from_percent(percent: f64) -> Fraction {
        Fraction::clamped(percent / crate::defaults::SLIDER_MAX)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bounds are empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another box
    pub fn expand_bounds(&mut self, other: &Bounds) {
        if !other.is_empty() {
            self.expand_point(other.min);
            self.expand_point(other.max);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// SVG `viewBox` attribute value: `x y width height`, numbers written
    /// like path coordinates at `sig_figs` significant figures.
    pub fn view_box(&self, sig_figs: u32) -> String {
        if self.is_empty() {
            return "0 0 0 0".to_string();
        }
        [self.min.x, self.min.y, self.width(), self.height()]
            .map(|v| fmt_num_precision(v, sig_figs))
            .join(" ")
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn circle_try_new_valid() {
        let c = Circle::try_new(dvec2(1.0, 2.0), 3.0).unwrap();
        assert_eq!(c.center, dvec2(1.0, 2.0));
        assert_eq!(c.radius, 3.0);
        assert!(Circle::try_new(DVec2::ZERO, 0.0).is_ok());
    }

    #[test]
    fn circle_try_new_rejects_bad_radius() {
        assert_eq!(
            Circle::try_new(DVec2::ZERO, -1.0),
            Err(NumericError::Negative)
        );
        assert_eq!(Circle::try_new(DVec2::ZERO, f64::NAN), Err(NumericError::NaN));
        assert_eq!(
            Circle::try_new(DVec2::ZERO, f64::INFINITY),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn circle_try_new_rejects_bad_center() {
        assert_eq!(
            Circle::try_new(dvec2(f64::NAN, 0.0), 1.0),
            Err(NumericError::NaN)
        );
        assert_eq!(
            Circle::try_new(dvec2(0.0, f64::NEG_INFINITY), 1.0),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn circle_scaled_keeps_center() {
        let c = Circle::try_new(dvec2(4.0, -1.0), 2.0).unwrap().scaled(2.5);
        assert_eq!(c.center, dvec2(4.0, -1.0));
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn fraction_clamps() {
        assert_eq!(Fraction::clamped(-0.5).raw(), 0.0);
        assert_eq!(Fraction::clamped(1.5).raw(), 1.0);
        assert_eq!(Fraction::clamped(0.25).raw(), 0.25);
        assert_eq!(Fraction::clamped(f64::NAN).raw(), 0.0);
        assert_eq!(Fraction::clamped(f64::INFINITY).raw(), 1.0);
    }

    #[test]
    fn fraction_from_percent() {
        assert_eq!(Fraction::from_percent(50.0).raw(), 0.5);
        assert_eq!(Fraction::from_percent(100.0), Fraction::AXIS);
        assert_eq!(Fraction::from_percent(0.0), Fraction::OUTLINE);
        assert_eq!(Fraction::from_percent(250.0), Fraction::AXIS);
    }

    #[test]
    fn bounds_expand() {
        let mut b = Bounds::new();
        assert!(b.is_empty());
        b.expand_point(dvec2(1.0, -2.0));
        b.expand_point(dvec2(-3.0, 4.0));
        assert!(!b.is_empty());
        assert_eq!(b.min, dvec2(-3.0, -2.0));
        assert_eq!(b.max, dvec2(1.0, 4.0));
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 6.0);
        assert_eq!(b.view_box(10), "-3 -2 4 6");
    }

    #[test]
    fn bounds_empty_view_box() {
        assert_eq!(Bounds::new().view_box(10), "0 0 0 0");
    }

    #[test]
    fn view_box_rounds_like_path_data() {
        let mut b = Bounds::new();
        b.expand_point(dvec2(0.1, -1.0 / 3.0));
        b.expand_point(dvec2(0.1 + 0.2, 2.0 / 3.0));
        assert_eq!(b.view_box(10), "0.1 -0.3333333333 0.2 1");
        assert_eq!(b.view_box(3), "0.1 -0.333 0.2 1");
    }
}
