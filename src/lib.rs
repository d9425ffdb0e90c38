//! Scale-axis thinning of glyph and polygon outlines.
//!
//! A shape's scale-axis transform is a tree of maximal inscribed circles per
//! outline loop. Given such a forest and a thinning fraction, this crate
//! walks each tree, pulls every boundary piece toward the axis piece it
//! flanks, and writes the result as SVG path data. Fraction 0 reproduces the
//! outline, fraction 1 collapses onto the skeleton.
//!
//! ```
//! use glam::DVec2;
//! use sat_thin::primitives::regular_polygon_transform;
//!
//! let mat = regular_polygon_transform(3, DVec2::ZERO, 2.0)?;
//! let sats = sat_thin::to_scale_axis(&[mat], 2.5);
//! let path = sat_thin::thinned_path(&sats, 0.5)?;
//! assert!(path.starts_with('M') && path.ends_with('Z'));
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! Building the transform itself is left to a [`app::TransformBuilder`].

pub mod app;
pub mod config;
pub mod curve;
pub mod defaults;
pub mod errors;
pub mod interpolate;
pub mod log;
pub mod path;
pub mod primitives;
pub mod thin;
pub mod traverse;
pub mod tree;
pub mod types;

pub use config::Config;
pub use curve::{Curve, Segment};
pub use errors::{ConfigError, ShapeError, TreeError};
pub use thin::{axis_path, thinned_path, thinned_path_with};
pub use tree::{TransformTree, max_radius, to_scale_axis};
pub use types::{Circle, Fraction};
