// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Vec2;

use crate::spring::Spring;
use crate::stretch::{StretchState, stretch};

/// Error returned when a stretch or spring parameter is out of range.
///
/// Non-finite inputs are reported through the same variant as the range
/// they failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `scaling_factor` must be finite and strictly positive.
    NonPositiveScalingFactor(f64),
    /// `stretch_factor` must be finite and non-negative.
    NegativeStretchFactor(f64),
    /// A spring `response` must be finite and strictly positive.
    NonPositiveResponse(f64),
    /// A spring `damping_fraction` must be finite and strictly positive.
    NonPositiveDamping(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScalingFactor(v) => {
                write!(f, "scaling factor must be finite and > 0, got {v}")
            }
            Self::NegativeStretchFactor(v) => {
                write!(f, "stretch factor must be finite and >= 0, got {v}")
            }
            Self::NonPositiveResponse(v) => {
                write!(f, "spring response must be finite and > 0, got {v}")
            }
            Self::NonPositiveDamping(v) => {
                write!(f, "spring damping fraction must be finite and > 0, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Tuning for the rubber-band stretch.
///
/// - `scaling_factor`: drag distance, in host units, at which the stretch
///   saturates. It also sets how far the view can trail the pointer: the
///   offset approaches but never reaches it.
/// - `stretch_factor`: maximum fractional scale increase along one axis.
/// - `drag_spring`: how the presented state follows the pointer.
/// - `release_spring`: how the presented state returns to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchConfig {
    scaling_factor: f64,
    stretch_factor: f64,
    drag_spring: Spring,
    release_spring: Spring,
}

impl StretchConfig {
    /// Default drag distance at which the stretch saturates.
    pub const DEFAULT_SCALING_FACTOR: f64 = 200.0;
    /// Default maximum fractional scale increase.
    pub const DEFAULT_STRETCH_FACTOR: f64 = 0.3;

    /// Creates a config with the default springs.
    pub fn new(scaling_factor: f64, stretch_factor: f64) -> Result<Self, ConfigError> {
        if !(scaling_factor.is_finite() && scaling_factor > 0.0) {
            return Err(ConfigError::NonPositiveScalingFactor(scaling_factor));
        }
        if !(stretch_factor.is_finite() && stretch_factor >= 0.0) {
            return Err(ConfigError::NegativeStretchFactor(stretch_factor));
        }
        Ok(Self {
            scaling_factor,
            stretch_factor,
            drag_spring: Spring::INTERACTIVE,
            release_spring: Spring::RELEASE,
        })
    }

    /// Replaces the spring used while dragging.
    #[must_use]
    pub fn with_drag_spring(mut self, spring: Spring) -> Self {
        self.drag_spring = spring;
        self
    }

    /// Replaces the spring used after release.
    #[must_use]
    pub fn with_release_spring(mut self, spring: Spring) -> Self {
        self.release_spring = spring;
        self
    }

    /// Drag distance at which the stretch saturates.
    #[must_use]
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Maximum fractional scale increase.
    #[must_use]
    pub fn stretch_factor(&self) -> f64 {
        self.stretch_factor
    }

    /// Spring used while dragging.
    #[must_use]
    pub fn drag_spring(&self) -> Spring {
        self.drag_spring
    }

    /// Spring used after release.
    #[must_use]
    pub fn release_spring(&self) -> Spring {
        self.release_spring
    }

    /// Shorthand for [`stretch`] with this config.
    #[must_use]
    pub fn stretch(&self, translation: Vec2) -> StretchState {
        stretch(translation, self)
    }
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            scaling_factor: Self::DEFAULT_SCALING_FACTOR,
            stretch_factor: Self::DEFAULT_STRETCH_FACTOR,
            drag_spring: Spring::INTERACTIVE,
            release_spring: Spring::RELEASE,
        }
    }
}
