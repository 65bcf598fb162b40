// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine driving a [`StretchState`].
//!
//! ## Usage
//!
//! 1) Call [`StretchController::pointer_down`] (or [`StretchController::drag_started`]
//!    if the host already tracks translation) when the gesture begins.
//! 2) On each move event, call [`StretchController::pointer_moved`] with the
//!    pointer position, or [`StretchController::drag_changed`] with the
//!    cumulative translation.
//! 3) On release, call [`StretchController::pointer_up`] / [`StretchController::drag_ended`].
//! 4) Every frame, call [`StretchController::advance`] with the elapsed time
//!    and draw the view with [`StretchController::transform`]. Stop requesting
//!    frames once `advance` returns `false`.
//!
//! The controller holds two states: the *target* computed directly from the
//! latest input, and the *current* (presented) state which springs towards
//! it. Hosts that run their own animation system can ignore `advance` and
//! animate towards [`StretchController::target`] themselves.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_stretch::{StretchConfig, StretchController};
//!
//! let mut ctl = StretchController::new(StretchConfig::default());
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! ctl.pointer_down(Point::new(50.0, 50.0));
//! ctl.pointer_moved(Point::new(150.0, 50.0));
//! assert!(ctl.target().scale_x > 1.0);
//!
//! ctl.pointer_up();
//! while ctl.advance(1.0 / 60.0) {
//!     let _xf = ctl.transform(bounds.center());
//! }
//! assert!(ctl.current().is_identity());
//! ```

use kurbo::{Affine, Point, Vec2};

use crate::config::StretchConfig;
use crate::spring::{Motion, Spring};
use crate::stretch::StretchState;

/// Longest a spring-back may run, in seconds, before it is snapped to rest.
///
/// Weakly damped release springs ring for a long time; this bounds how long
/// a released view can stay away from rest.
pub const SETTLE_DEADLINE: f64 = 5.0;

/// Gesture phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// No gesture in progress. The view is at rest or springing back.
    Inactive,
    /// A drag is in progress.
    Dragging {
        /// Cumulative translation since the drag started.
        translation: Vec2,
    },
}

/// Drives a rubber-band stretch from drag input and host frame time.
#[derive(Clone, Debug)]
pub struct StretchController {
    config: StretchConfig,
    phase: Phase,
    origin: Option<Point>,
    target: StretchState,
    motion: Motion<4>,
    spring: Spring,
    released_for: Option<f64>,
    revision: u64,
}

impl StretchController {
    /// Creates an idle controller at rest.
    #[must_use]
    pub fn new(config: StretchConfig) -> Self {
        Self {
            config,
            phase: Phase::Inactive,
            origin: None,
            target: StretchState::IDENTITY,
            motion: Motion::at_rest(StretchState::IDENTITY.to_array()),
            spring: config.release_spring(),
            released_for: None,
            revision: 0,
        }
    }

    /// The config this controller was created with.
    #[must_use]
    pub fn config(&self) -> &StretchConfig {
        &self.config
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Returns `true` while the presented state has not caught up with the target.
    ///
    /// Hosts should keep scheduling frames while this holds.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.motion.is_at(&self.target.to_array())
    }

    /// State computed from the latest input, before spring smoothing.
    #[must_use]
    pub fn target(&self) -> StretchState {
        self.target
    }

    /// State to present this frame.
    #[must_use]
    pub fn current(&self) -> StretchState {
        StretchState::from_array(self.motion.position())
    }

    /// Transform for the current state, scaling about `anchor`.
    #[must_use]
    pub fn transform(&self, anchor: Point) -> Affine {
        self.current().transform(anchor)
    }

    /// Monotonic counter bumped whenever the target or presented state changes.
    ///
    /// Hosts can compare against the last value they rendered to skip
    /// redundant redraws.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Starts a drag whose translation the host will report directly.
    ///
    /// The stretch itself does not change until the first move. A spring-back
    /// still in flight is taken over from its current position and velocity.
    /// Calling this while already dragging restarts the gesture.
    pub fn drag_started(&mut self) {
        log::debug!("stretch drag started");
        self.phase = Phase::Dragging {
            translation: Vec2::ZERO,
        };
        self.spring = self.config.drag_spring();
        self.released_for = None;
    }

    /// Starts a drag at pointer position `pos`.
    ///
    /// Subsequent [`pointer_moved`](Self::pointer_moved) calls measure
    /// translation from here.
    pub fn pointer_down(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.drag_started();
    }

    /// Updates the drag with the cumulative `translation` since it started.
    ///
    /// Starts a drag implicitly if none is in progress. Returns the new target.
    pub fn drag_changed(&mut self, translation: Vec2) -> StretchState {
        if !self.is_dragging() {
            self.drag_started();
        }
        self.phase = Phase::Dragging { translation };
        let target = self.config.stretch(translation);
        log::trace!(
            "stretch target: translation={translation:?} scale=({}, {}) offset={:?}",
            target.scale_x,
            target.scale_y,
            target.offset
        );
        self.set_target(target);
        target
    }

    /// Updates the drag with the pointer at `pos`.
    ///
    /// Returns `None` if no drag was started with [`pointer_down`](Self::pointer_down).
    pub fn pointer_moved(&mut self, pos: Point) -> Option<StretchState> {
        let origin = self.origin?;
        Some(self.drag_changed(pos - origin))
    }

    /// Ends the drag and springs back to rest.
    ///
    /// Does nothing if no drag is in progress.
    pub fn drag_ended(&mut self) {
        self.origin = None;
        if !self.is_dragging() {
            return;
        }
        log::debug!("stretch drag ended");
        self.phase = Phase::Inactive;
        self.spring = self.config.release_spring();
        self.released_for = Some(0.0);
        self.set_target(StretchState::IDENTITY);
    }

    /// Ends the drag started with [`pointer_down`](Self::pointer_down).
    pub fn pointer_up(&mut self) {
        self.drag_ended();
    }

    /// Abandons any gesture and jumps straight to rest without animating.
    pub fn cancel(&mut self) {
        log::debug!("stretch cancelled");
        self.origin = None;
        self.phase = Phase::Inactive;
        self.spring = self.config.release_spring();
        self.released_for = None;
        let was_moving = self.is_animating() || !self.target.is_identity();
        self.target = StretchState::IDENTITY;
        self.motion.snap_to(StretchState::IDENTITY.to_array());
        if was_moving {
            self.revision += 1;
        }
    }

    /// Advances the presented state by `dt` seconds.
    ///
    /// Returns `true` while the presented state is still moving; once it is
    /// within the rest threshold it lands exactly on the target. A spring-back
    /// still moving [`SETTLE_DEADLINE`] seconds after release is snapped to
    /// rest.
    ///
    /// A non-positive or non-finite `dt` makes no progress and returns
    /// `false`; [`is_animating`](Self::is_animating) still reports whether
    /// frames are needed.
    pub fn advance(&mut self, dt: f64) -> bool {
        let target = self.target.to_array();
        if self.motion.is_at(&target) || !(dt.is_finite() && dt > 0.0) {
            return false;
        }
        let before = self.motion;
        let mut moving = self.motion.advance(&self.spring, &target, dt);
        if let Some(elapsed) = self.released_for.as_mut() {
            *elapsed += dt;
            if moving && *elapsed >= SETTLE_DEADLINE {
                log::debug!("stretch spring-back passed the settle deadline");
                self.motion.snap_to(target);
                moving = false;
            }
        }
        if self.motion != before {
            self.revision += 1;
        }
        if !moving {
            self.released_for = None;
            if !self.is_dragging() {
                log::debug!("stretch settled");
            }
        }
        moving
    }

    fn set_target(&mut self, target: StretchState) {
        if self.target != target {
            self.target = target;
            self.revision += 1;
        }
    }
}

impl Default for StretchController {
    fn default() -> Self {
        Self::new(StretchConfig::default())
    }
}
