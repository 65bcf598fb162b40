// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stretch --heading-base-level=0

//! Understory Stretch: a headless rubber-band stretch effect.
//!
//! Dragging a view pulls it after the pointer and deforms it; releasing it
//! lets it spring back to rest. This crate provides the math and the gesture
//! state machine for that effect, and leaves rendering and event routing to
//! the host:
//!
//! - [`stretch()`]: a pure mapping from cumulative drag translation to a
//!   [`StretchState`] (non-uniform scale plus a lagging offset).
//! - [`StretchController`]: sequences drag start/move/end, smooths the
//!   presented state with a [`Spring`], and springs back to rest on release.
//! - [`StretchConfig`]: the tuning knobs, validated on construction.
//!
//! The crate does not read a clock. Hosts call
//! [`StretchController::advance`] from their frame callback with the time
//! elapsed since the previous frame, then draw the view with
//! [`StretchController::transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_stretch::{StretchConfig, StretchController};
//!
//! let config = StretchConfig::new(550.0, 0.3).unwrap();
//! let mut ctl = StretchController::new(config);
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! // Drag halfway to saturation, straight to the right.
//! ctl.drag_started();
//! let target = ctl.drag_changed(Vec2::new(275.0, 0.0));
//! assert!((target.scale_x - 1.15).abs() < 1e-12);
//! assert_eq!(target.scale_y, 1.0);
//!
//! // Per frame: advance and draw.
//! ctl.advance(1.0 / 60.0);
//! let _xf = ctl.transform(bounds.center());
//!
//! // Release: the view springs back and lands exactly at rest.
//! ctl.drag_ended();
//! while ctl.advance(1.0 / 60.0) {}
//! assert!(ctl.current().is_identity());
//! ```
//!
//! ## Design notes
//!
//! - The axis perpendicular to the drag stretches: pulling sideways widens
//!   the view, pulling vertically makes it taller.
//! - Both the stretch and the offset saturate around
//!   [`StretchConfig::scaling_factor`]; the offset never quite reaches it.
//! - A drag that starts while the view is still springing back takes over
//!   from wherever the view is. The last gesture wins; nothing is queued.
//!
//! ## Logging
//!
//! Phase transitions are reported through the [`log`](https://docs.rs/log)
//! facade at `debug` level, target updates at `trace` level.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod spring;
mod stretch;

pub use config::{ConfigError, StretchConfig};
pub use controller::{Phase, SETTLE_DEADLINE, StretchController};
pub use spring::{Motion, Spring};
pub use stretch::{StretchState, drag_factor, stretch};
