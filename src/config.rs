//! Tuning parameters for the thinning pipeline and demo state

use crate::defaults;
use crate::errors::ConfigError;

/// Tunable parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Scale-axis factor `s`, at least 1
    pub scale_factor: f64,
    /// Medial-axis sampling resolution passed to the builder
    pub resolution: f64,
    /// Significant figures per coordinate in path data
    pub sig_figs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale_factor: defaults::SCALE_FACTOR,
            resolution: defaults::RESOLUTION,
            sig_figs: defaults::SIG_FIGS,
        }
    }
}

impl Config {
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_sig_figs(mut self, sig_figs: u32) -> Self {
        self.sig_figs = sig_figs;
        self
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale_factor.is_finite() || self.scale_factor < 1.0 {
            return Err(ConfigError::InvalidScaleFactor {
                value: self.scale_factor,
            });
        }
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(ConfigError::InvalidResolution {
                value: self.resolution,
            });
        }
        if !(1..=17).contains(&self.sig_figs) {
            return Err(ConfigError::InvalidPrecision {
                value: self.sig_figs,
            });
        }
        Ok(())
    }
}
