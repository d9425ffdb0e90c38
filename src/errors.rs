//! Error types with diagnostics using miette
//!
//! Tree errors are data-integrity failures: the transform handed over by the
//! axis builder is malformed and the outline cannot be drawn faithfully.
//! They are reported, never skipped.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Transform Tree Errors
// ============================================================================

/// Errors raised while importing or walking a transform tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("edge {edge} of node {node} has a curve with {count} control points")]
    #[diagnostic(
        code(sat_thin::tree::unsupported_degree),
        help("curves must have 2 (line), 3 (quadratic) or 4 (cubic) control points")
    )]
    UnsupportedDegree { node: usize, edge: usize, count: usize },

    #[error("transform tree has no root")]
    #[diagnostic(
        code(sat_thin::tree::missing_root),
        help("every loop of the outline needs a root circle")
    )]
    MissingRoot,

    #[error("root {root} is outside the tree ({len} nodes)")]
    #[diagnostic(code(sat_thin::tree::root_out_of_range))]
    RootOutOfRange { root: usize, len: usize },

    #[error("node {node} is outside the tree ({len} nodes)")]
    #[diagnostic(code(sat_thin::tree::missing_node))]
    MissingNode { node: usize, len: usize },

    #[error("edge {edge} of node {node} points at missing node {target}")]
    #[diagnostic(code(sat_thin::tree::dangling_edge))]
    DanglingEdge { node: usize, edge: usize, target: usize },

    #[error("node {node} has invalid circle data: {reason}")]
    #[diagnostic(
        code(sat_thin::tree::invalid_circle),
        help("circle centers must be finite and radii finite and non-negative")
    )]
    InvalidCircle { node: usize, reason: NumericError },

    #[error("edge {edge} of node {node} has a non-finite control point")]
    #[diagnostic(code(sat_thin::tree::non_finite_point))]
    NonFinitePoint { node: usize, edge: usize },

    #[error("boundary breaks at edge {edge} of node {node}: gap of {gap}")]
    #[diagnostic(
        code(sat_thin::tree::broken_loop),
        help("each boundary curve must start where the previous one ends; check for edges with a missing side")
    )]
    BrokenLoop { node: usize, edge: usize, gap: f64 },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors for out-of-range tuning parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid scale factor: {value}")]
    #[diagnostic(
        code(sat_thin::config::invalid_scale_factor),
        help("the scale-axis factor must be finite and at least 1")
    )]
    InvalidScaleFactor { value: f64 },

    #[error("invalid resolution: {value}")]
    #[diagnostic(
        code(sat_thin::config::invalid_resolution),
        help("the axis sampling resolution must be finite and positive")
    )]
    InvalidResolution { value: f64 },

    #[error("invalid precision: {value} significant figures")]
    #[diagnostic(
        code(sat_thin::config::invalid_precision),
        help("use between 1 and 17 significant figures")
    )]
    InvalidPrecision { value: u32 },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while building a shape's transform
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("a polygon needs at least 3 sides, got {sides}")]
    #[diagnostic(code(sat_thin::shape::too_few_sides))]
    TooFewSides { sides: usize },

    #[error("invalid polygon radius {value}: {reason}")]
    #[diagnostic(
        code(sat_thin::shape::invalid_radius),
        help("the circumradius must be finite and non-negative")
    )]
    InvalidRadius { value: f64, reason: NumericError },

    #[error("polygon center is not finite")]
    #[diagnostic(code(sat_thin::shape::invalid_center))]
    InvalidCenter,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] TreeError),
}
