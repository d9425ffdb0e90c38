//! Path builder for SVG path data.
//!
//! Turns loops of curves into a `d` attribute string. The builder tracks the
//! pen position so each curve is written as a single command whose start is
//! implicit; a coordinate shared by two consecutive curves is therefore
//! printed once and cannot disagree with itself. A curve that does not start
//! at the pen is joined to it by an explicit `L`, so its own start survives.
//!
//! # Output shape
//!
//! - One `M` per non-empty loop, at the first curve's start
//! - One `L`, `Q` or `C` per curve, by degree
//! - One `Z` per loop
//!
//! Commands are separated by single spaces, coordinates within a command by
//! spaces as well: `M0 0 L2 0 Q3 1 2 2 Z`.

use glam::DVec2;

use crate::curve::{Curve, Segment};
use crate::defaults::{self, JOIN_TOLERANCE};

/// Builder for path data strings.
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use sat_thin::curve::Curve;
/// use sat_thin::path::PathBuilder;
///
/// let mut builder = PathBuilder::new();
/// builder.push_loop(&[
///     Curve::line(dvec2(0.0, 0.0), dvec2(2.0, 0.0)),
///     Curve::line(dvec2(2.0, 0.0), dvec2(0.0, 2.0)),
///     Curve::line(dvec2(0.0, 2.0), dvec2(0.0, 0.0)),
/// ]);
/// assert_eq!(builder.build(), "M0 0 L2 0 L0 2 L0 0 Z");
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    /// Path data written so far
    out: String,

    /// Current pen position, `None` before the first move
    pen: Option<DVec2>,

    /// Significant figures per coordinate
    sig_figs: u32,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::with_precision(defaults::SIG_FIGS)
    }

    /// Builder printing coordinates with `sig_figs` significant figures.
    pub fn with_precision(sig_figs: u32) -> Self {
        Self {
            out: String::new(),
            pen: None,
            sig_figs,
        }
    }

    fn command(&mut self, cmd: char, points: &[DVec2]) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(cmd);
        let mut first = true;
        for p in points {
            for v in [p.x, p.y] {
                if !first {
                    self.out.push(' ');
                }
                first = false;
                self.out.push_str(&fmt_num_precision(v, self.sig_figs));
            }
        }
        self.pen = points.last().copied();
    }

    pub fn move_to(&mut self, p: DVec2) {
        self.command('M', &[p]);
    }

    pub fn line_to(&mut self, p: DVec2) {
        self.command('L', &[p]);
    }

    pub fn quad_to(&mut self, ctrl: DVec2, p: DVec2) {
        self.command('Q', &[ctrl, p]);
    }

    pub fn cubic_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, p: DVec2) {
        self.command('C', &[ctrl1, ctrl2, p]);
    }

    pub fn close(&mut self) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push('Z');
        self.pen = None;
    }

    /// Draw `curve`. Opens a subpath at its start when none is open, and joins
    /// a pen that is elsewhere to the start with a line.
    pub fn push_curve(&mut self, curve: &Curve) {
        match self.pen {
            None => self.move_to(curve.start()),
            Some(pen) if pen.distance(curve.start()) > JOIN_TOLERANCE => {
                crate::log::warn!(
                    pen_x = pen.x,
                    pen_y = pen.y,
                    start_x = curve.start().x,
                    start_y = curve.start().y,
                    "curve does not start at the pen; bridging the gap"
                );
                self.line_to(curve.start());
            }
            Some(_) => {}
        }
        self.command(curve.command(), &curve.points()[1..]);
    }

    /// Write one closed subpath. Empty loops write nothing.
    pub fn push_loop(&mut self, curves: &[Curve]) {
        let Some(first) = curves.first() else {
            return;
        };
        self.move_to(first.start());
        for curve in curves {
            self.push_curve(curve);
        }
        self.close();
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Current pen position, if a subpath is open
    pub fn pen(&self) -> Option<DVec2> {
        self.pen
    }

    /// Finish and return the path data.
    pub fn build(self) -> String {
        self.out
    }
}

/// Serialize loops of curves to path data, preserving loop and curve order.
pub fn loops_to_path(loops: &[Vec<Curve>], sig_figs: u32) -> String {
    let mut builder = PathBuilder::with_precision(sig_figs);
    for curves in loops {
        builder.push_loop(curves);
    }
    builder.build()
}

/// Format a number with the default significant figures, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, defaults::SIG_FIGS)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
///
/// Zero (including `-0`) prints as `0`. Non-finite values print as Rust does;
/// the tree importer rejects them before they can get here.
pub fn fmt_num_precision(value: f64, sig_figs: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let sig_figs = sig_figs.clamp(1, 17) as i32;
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;

    let s = format!("{:.prec$}", value, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
