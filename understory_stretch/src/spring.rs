// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked damped springs.
//!
//! A [`Spring`] is described the way designers usually tune them: a
//! `response` (roughly the period of the undamped oscillation, in seconds)
//! and a `damping_fraction` (`1.0` is critically damped; values near `0.0` ring for a long time
//! and are only accepted when strictly positive).
//! These map onto a unit-mass spring with
//!
//! - stiffness `k = (2π / response)²`
//! - damping `c = 4π · damping_fraction / response`
//!
//! The spring never reads a clock. [`Motion::advance`] is driven by the
//! host's frame callback with the elapsed time since the previous frame, and
//! integrates in fixed sub-steps so the result does not depend on the frame
//! rate. Each sub-step is backward (implicit) Euler, which stays stable for
//! any stiffness the parameters can express.

use core::f64::consts::PI;

use crate::config::ConfigError;

/// Largest integration sub-step, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Largest amount of time consumed by a single [`Motion::advance`] call.
///
/// Hosts that stall (a backgrounded window, a debugger break) hand in huge
/// frame deltas; anything past this is dropped instead of integrated.
const MAX_FRAME_TIME: f64 = 1.0;

/// Distance from the target under which a channel may come to rest.
const REST_DISTANCE: f64 = 1e-4;

/// Speed under which a channel may come to rest.
const REST_SPEED: f64 = 1e-3;

/// Parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    response: f64,
    damping_fraction: f64,
}

impl Spring {
    /// Low-latency spring used while the pointer is down.
    ///
    /// Stiff and nearly critically damped, so the view tracks the pointer
    /// closely while still smoothing out jittery input.
    pub const INTERACTIVE: Self = Self {
        response: 0.15,
        damping_fraction: 0.86,
    };

    /// Bouncy spring used to return to rest after release.
    pub const RELEASE: Self = Self {
        response: 0.35,
        damping_fraction: 0.55,
    };

    /// Creates a spring from a response (seconds) and damping fraction.
    ///
    /// `response` must be finite and strictly positive. `damping_fraction`
    /// must be finite and strictly positive: an undamped spring never comes
    /// to rest.
    pub fn new(response: f64, damping_fraction: f64) -> Result<Self, ConfigError> {
        if !(response.is_finite() && response > 0.0) {
            return Err(ConfigError::NonPositiveResponse(response));
        }
        if !(damping_fraction.is_finite() && damping_fraction > 0.0) {
            return Err(ConfigError::NonPositiveDamping(damping_fraction));
        }
        Ok(Self {
            response,
            damping_fraction,
        })
    }

    /// Approximate period of the undamped oscillation, in seconds.
    #[must_use]
    pub fn response(&self) -> f64 {
        self.response
    }

    /// Damping relative to critical damping.
    #[must_use]
    pub fn damping_fraction(&self) -> f64 {
        self.damping_fraction
    }

    /// Spring constant for a unit mass.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        let omega = 2.0 * PI / self.response;
        omega * omega
    }

    /// Damping coefficient for a unit mass.
    #[must_use]
    pub fn damping(&self) -> f64 {
        4.0 * PI * self.damping_fraction / self.response
    }

    /// One backward Euler step of length `h` towards `target`.
    ///
    /// Solves `v' = v + h·(-k·(x' - target) - c·v')`, `x' = x + h·v'` for the
    /// new velocity, which has no step-size stability limit.
    fn step(&self, channel: &mut Channel, target: f64, h: f64) {
        let k = self.stiffness();
        let c = self.damping();
        channel.velocity = (channel.velocity - h * k * (channel.position - target))
            / (1.0 + h * c + h * h * k);
        channel.position += channel.velocity * h;
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::RELEASE
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Channel {
    position: f64,
    velocity: f64,
}

impl Channel {
    fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED
    }
}

/// Position and velocity of `N` independently sprung scalar channels.
///
/// All channels share one [`Spring`] per step. Retargeting keeps the current
/// velocity, so a new target taken mid-flight continues smoothly instead of
/// restarting from rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion<const N: usize> {
    channels: [Channel; N],
}

impl<const N: usize> Motion<N> {
    /// Creates a motion at rest at `position`.
    #[must_use]
    pub fn at_rest(position: [f64; N]) -> Self {
        Self {
            channels: position.map(|position| Channel {
                position,
                velocity: 0.0,
            }),
        }
    }

    /// Current position of every channel.
    #[must_use]
    pub fn position(&self) -> [f64; N] {
        self.channels.map(|c| c.position)
    }

    /// Current velocity of every channel, in units per second.
    #[must_use]
    pub fn velocity(&self) -> [f64; N] {
        self.channels.map(|c| c.velocity)
    }

    /// Returns `true` if every channel is exactly at `target` with no velocity.
    #[must_use]
    pub fn is_at(&self, target: &[f64; N]) -> bool {
        self.channels
            .iter()
            .zip(target)
            .all(|(c, t)| c.position == *t && c.velocity == 0.0)
    }

    /// Jumps to `position` and drops all velocity.
    pub fn snap_to(&mut self, position: [f64; N]) {
        *self = Self::at_rest(position);
    }

    /// Advances the motion by `dt` seconds towards `target`.
    ///
    /// Once every channel is within the rest threshold the motion snaps to
    /// exactly `target`. Returns `true` while the motion is still moving.
    ///
    /// A non-positive or non-finite `dt` makes no progress and returns
    /// `false`, so a frame loop driven by the return value cannot spin on it;
    /// use [`is_at`](Self::is_at) to ask whether the motion has landed.
    pub fn advance(&mut self, spring: &Spring, target: &[f64; N], dt: f64) -> bool {
        if self.is_at(target) || !(dt.is_finite() && dt > 0.0) {
            return false;
        }
        let mut remaining = dt.min(MAX_FRAME_TIME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            for (channel, t) in self.channels.iter_mut().zip(target) {
                spring.step(channel, *t, h);
            }
            remaining -= h;
        }
        if self
            .channels
            .iter()
            .zip(target)
            .all(|(c, t)| c.is_settled(*t))
        {
            self.snap_to(*target);
            return false;
        }
        true
    }
}
