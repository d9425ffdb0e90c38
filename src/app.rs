//! Demo state: the current shape and its transforms
//!
//! A shape is selected, its medial-axis transforms are built by a
//! [`TransformBuilder`], and slider inputs are answered from the derived
//! scale-axis transforms. Selecting a new shape replaces the old one in a
//! single assignment, so a failed build leaves the previous shape in place.

use glam::DVec2;
use miette::Report;

use crate::config::Config;
use crate::errors::{ConfigError, ShapeError, TreeError};
use crate::primitives::{polygon_path, regular_polygon_transform};
use crate::thin::{axis_path, thin_loops, thinned_path_with};
use crate::tree::{TransformTree, max_radius};
use crate::types::{Bounds, Fraction};

/// Seam for the external medial-axis / scale-axis library.
pub trait TransformBuilder {
    /// Outline description the builder understands
    type Outline;
    type Error: miette::Diagnostic + Send + Sync + 'static;

    /// Medial-axis transform of every loop of `outline`, one tree per loop.
    fn medial_axis(
        &self,
        outline: &Self::Outline,
        resolution: f64,
    ) -> Result<Vec<TransformTree>, Self::Error>;

    /// Scale-axis transform of `mat` with factor `s`.
    fn scale_axis(&self, mat: &TransformTree, s: f64) -> TransformTree {
        mat.scaled_radii(s)
    }
}

/// A regular polygon loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSpec {
    pub sides: usize,
    pub center: DVec2,
    pub radius: f64,
}

impl PolygonSpec {
    pub fn new(sides: usize, center: DVec2, radius: f64) -> Self {
        Self {
            sides,
            center,
            radius,
        }
    }

    /// Outline path data of this polygon
    pub fn path(&self) -> String {
        polygon_path(self.sides, self.center, self.radius)
    }
}

/// Exact transforms of regular polygons; every loop is one polygon.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonBuilder;

impl TransformBuilder for PolygonBuilder {
    type Outline = Vec<PolygonSpec>;
    type Error = ShapeError;

    fn medial_axis(
        &self,
        outline: &Vec<PolygonSpec>,
        _resolution: f64,
    ) -> Result<Vec<TransformTree>, ShapeError> {
        outline
            .iter()
            .map(|p| regular_polygon_transform(p.sides, p.center, p.radius))
            .collect()
    }
}

/// Everything derived from one selected outline
#[derive(Debug, Clone)]
pub struct Shape<O> {
    pub outline: O,
    /// Medial-axis transform per loop
    pub mats: Vec<TransformTree>,
    /// Scale-axis transform per loop
    pub sats: Vec<TransformTree>,
    /// Largest circle radius over all scale-axis nodes
    pub thickest: f64,
    /// `viewBox` fitting the outline
    pub view_box: String,
}

/// Thinning demo state
pub struct ThinningDemo<B: TransformBuilder> {
    config: Config,
    builder: B,
    shape: Option<Shape<B::Outline>>,
}

impl<B: TransformBuilder> ThinningDemo<B> {
    pub fn new(config: Config, builder: B) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            builder,
            shape: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shape(&self) -> Option<&Shape<B::Outline>> {
        self.shape.as_ref()
    }

    /// Build transforms for `outline` and make it the current shape.
    pub fn select_shape(&mut self, outline: B::Outline) -> miette::Result<()> {
        let mats = self
            .builder
            .medial_axis(&outline, self.config.resolution)
            .map_err(Report::new)?;
        let sats: Vec<TransformTree> = mats
            .iter()
            .map(|mat| self.builder.scale_axis(mat, self.config.scale_factor))
            .collect();

        // Fail here rather than on the first slider input.
        thin_loops(&sats, Fraction::OUTLINE)?;

        let mut bounds = Bounds::new();
        for sat in &sats {
            bounds.expand_bounds(&sat.outline_bounds());
        }
        let thickest = max_radius(&sats);

        crate::log::debug!(
            loops = sats.len(),
            thickest,
            "selected shape"
        );
        self.shape = Some(Shape {
            outline,
            mats,
            sats,
            thickest,
            view_box: bounds.view_box(self.config.sig_figs),
        });
        Ok(())
    }

    /// Thinned path for a thinning slider value in `0..=100`.
    ///
    /// Empty when no shape is selected.
    pub fn thin_input(&self, percent: f64) -> Result<String, TreeError> {
        let Some(shape) = &self.shape else {
            return Ok(String::new());
        };
        thinned_path_with(
            &shape.sats,
            Fraction::from_percent(percent),
            self.config.sig_figs,
        )
    }

    /// Erosion radius for an erosion slider value in `0..=100`.
    pub fn erode_input(&self, percent: f64) -> f64 {
        let thickest = self.shape.as_ref().map_or(0.0, |s| s.thickest);
        Fraction::from_percent(percent).raw() * thickest
    }

    /// Path drawing the medial axis of the current shape.
    pub fn axis_input(&self) -> Result<String, TreeError> {
        match &self.shape {
            Some(shape) => axis_path(&shape.mats, self.config.sig_figs),
            None => Ok(String::new()),
        }
    }
}
