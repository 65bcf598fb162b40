// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag → stretch mapping.
//!
//! [`stretch`] turns a cumulative drag translation into a [`StretchState`]:
//!
//! - The *drag factor* `min(distance / scaling_factor, 1)` sets how strong the
//!   effect is. It saturates once the pointer has travelled `scaling_factor`.
//! - Each axis stretches in proportion to how little the drag points along
//!   the *other* axis, so a sideways pull widens the view rather than
//!   lengthening it.
//! - The offset follows the pointer with a saturating lag:
//!   `translation · s / (distance + s)`, which approaches but never reaches
//!   `scaling_factor` in magnitude. Each component is clamped strictly inside
//!   `±scaling_factor` so rounding at huge distances cannot land on the bound.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::config::StretchConfig;

/// Scale and offset applied to a stretched view.
///
/// The scale is anchored (usually at the view center) and is applied before
/// the offset; see [`StretchState::transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchState {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Translation applied after scaling.
    pub offset: Vec2,
}

impl StretchState {
    /// The rest state: unit scale, no offset.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset: Vec2::ZERO,
    };

    /// Returns `true` if this is exactly the rest state.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform that scales about `anchor` and then applies the offset.
    #[must_use]
    pub fn transform(&self, anchor: Point) -> Affine {
        let anchor = anchor.to_vec2();
        Affine::translate(self.offset + anchor)
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
            * Affine::translate(-anchor)
    }

    /// [`transform`](Self::transform) anchored at the center of `bounds`.
    #[must_use]
    pub fn transform_rect(&self, bounds: Rect) -> Affine {
        self.transform(bounds.center())
    }

    /// Component-wise linear interpolation; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            scale_x: self.scale_x + (other.scale_x - self.scale_x) * t,
            scale_y: self.scale_y + (other.scale_y - self.scale_y) * t,
            offset: self.offset.lerp(other.offset, t),
        }
    }

    pub(crate) fn to_array(self) -> [f64; 4] {
        [self.scale_x, self.scale_y, self.offset.x, self.offset.y]
    }

    pub(crate) fn from_array([scale_x, scale_y, x, y]: [f64; 4]) -> Self {
        Self {
            scale_x,
            scale_y,
            offset: Vec2::new(x, y),
        }
    }
}

impl Default for StretchState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Stretch intensity in `[0, 1]` for a drag of `distance`.
///
/// Reaches exactly `1.0` once `distance >= scaling_factor`.
#[must_use]
pub fn drag_factor(distance: f64, scaling_factor: f64) -> f64 {
    (distance / scaling_factor).min(1.0)
}

/// Maps a cumulative drag `translation` to a [`StretchState`].
///
/// A zero-length (or non-finite) translation yields
/// [`StretchState::IDENTITY`].
///
/// ```
/// use kurbo::Vec2;
/// use understory_stretch::{StretchConfig, stretch};
///
/// let config = StretchConfig::new(550.0, 0.3).unwrap();
/// let state = stretch(Vec2::new(275.0, 0.0), &config);
///
/// // Half way to saturation, pulling sideways: widen by half the stretch factor.
/// assert!((state.scale_x - 1.15).abs() < 1e-12);
/// assert_eq!(state.scale_y, 1.0);
/// // The view trails the pointer.
/// assert!((state.offset.x - 275.0 * 550.0 / 825.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn stretch(translation: Vec2, config: &StretchConfig) -> StretchState {
    let distance = translation.hypot();
    if distance == 0.0 || !distance.is_finite() {
        return StretchState::IDENTITY;
    }
    let scaling = config.scaling_factor();
    let intensity = drag_factor(distance, scaling) * config.stretch_factor();

    // Mathematically in [0, 1]; clamp away rounding past the ends.
    let horizontal = (translation.x.abs() / distance).clamp(0.0, 1.0);
    let vertical = (translation.y.abs() / distance).clamp(0.0, 1.0);

    let limit = scaling.next_down();
    let lag = (scaling * distance / (distance + scaling)).min(limit);
    let offset = translation / distance * lag;

    StretchState {
        scale_x: 1.0 + intensity * (1.0 - vertical),
        scale_y: 1.0 + intensity * (1.0 - horizontal),
        offset: Vec2::new(
            offset.x.clamp(-limit, limit),
            offset.y.clamp(-limit, limit),
        ),
    }
}
