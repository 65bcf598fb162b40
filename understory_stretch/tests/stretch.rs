// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_stretch` crate.
//!
//! These sweep the public transform over many drag directions and distances,
//! and run the controller through complete gestures the way a host's event
//! loop would.

use kurbo::{Point, Rect, Vec2};
use understory_stretch::{
    Phase, Spring, StretchConfig, StretchController, StretchState, drag_factor, stretch,
};

const FRAME: f64 = 1.0 / 60.0;

/// Drag directions around the full circle, plus the axes exactly.
fn directions() -> Vec<Vec2> {
    let mut dirs: Vec<Vec2> = (0..72_u32)
        .map(|i| Vec2::from_angle(f64::from(i) * core::f64::consts::TAU / 72.0))
        .collect();
    dirs.extend([
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, -1.0),
    ]);
    dirs
}

fn distances() -> [f64; 10] {
    [1e-9, 0.5, 10.0, 99.0, 200.0, 201.0, 1e4, 1e12, 1e20, 1e150]
}

#[test]
fn scales_stay_within_stretch_range() {
    for stretch_factor in [0.0, 0.3, 1.0, 4.0] {
        let config = StretchConfig::new(200.0, stretch_factor).unwrap();
        for dir in directions() {
            for d in distances() {
                let s = stretch(dir * d, &config);
                for scale in [s.scale_x, s.scale_y] {
                    assert!(
                        (1.0..=1.0 + stretch_factor).contains(&scale),
                        "scale {scale} out of range for {:?}",
                        dir * d
                    );
                }
            }
        }
    }
}

#[test]
fn offset_never_reaches_scaling_factor() {
    for scaling in [1.0, 200.0, 550.0] {
        let config = StretchConfig::new(scaling, 0.3).unwrap();
        for dir in directions() {
            for d in distances() {
                let s = stretch(dir * d, &config);
                assert!(s.offset.x.abs() < scaling, "{:?}", s.offset);
                assert!(s.offset.y.abs() < scaling, "{:?}", s.offset);
                // The offset points the same way as the drag.
                assert!(s.offset.dot(dir) >= 0.0);
            }
        }
    }
}

#[test]
fn saturated_drags_share_the_same_stretch() {
    let config = StretchConfig::default();
    for dir in directions() {
        let at = stretch(dir * 200.0, &config);
        let beyond = stretch(dir * 2_000.0, &config);
        assert!((at.scale_x - beyond.scale_x).abs() < 1e-12);
        assert!((at.scale_y - beyond.scale_y).abs() < 1e-12);
    }
    assert_eq!(drag_factor(200.0, 200.0), 1.0);
    assert_eq!(drag_factor(200.000_001, 200.0), 1.0);
}

#[test]
fn perpendicular_axis_stretches_more() {
    let config = StretchConfig::default();
    // Mostly horizontal: wider than tall.
    let s = stretch(Vec2::new(150.0, 20.0), &config);
    assert!(s.scale_x > s.scale_y);
    // Mostly vertical: taller than wide.
    let s = stretch(Vec2::new(-20.0, 150.0), &config);
    assert!(s.scale_y > s.scale_x);
}

#[test]
fn half_saturation_scenario() {
    let config = StretchConfig::new(550.0, 0.3).unwrap();
    let s = config.stretch(Vec2::new(275.0, 0.0));
    assert_eq!(drag_factor(275.0, 550.0), 0.5);
    assert!((s.scale_x - 1.15).abs() < 1e-12);
    assert_eq!(s.scale_y, 1.0);
    assert!((s.offset.x - 183.333_333_333).abs() < 1e-6);
    assert_eq!(s.offset.y, 0.0);
}

#[test]
fn full_gesture_through_pointer_events() {
    let config = StretchConfig::new(550.0, 0.3).unwrap();
    let mut ctl = StretchController::new(config);
    let bounds = Rect::new(100.0, 100.0, 200.0, 200.0);
    let center = bounds.center();

    ctl.pointer_down(center);
    let mut last_revision = ctl.revision();
    for i in 1..=30_u32 {
        let pos = center + Vec2::new(f64::from(i) * 10.0, f64::from(i) * -2.0);
        ctl.pointer_moved(pos).unwrap();
        ctl.advance(FRAME);
        assert!(ctl.revision() > last_revision);
        last_revision = ctl.revision();
    }
    assert_eq!(
        ctl.phase(),
        Phase::Dragging {
            translation: Vec2::new(300.0, -60.0)
        }
    );

    // Presented center trails the pointer.
    let drawn_center = ctl.current().transform_rect(bounds) * center;
    assert!(drawn_center.x > center.x && drawn_center.x < center.x + 300.0);

    ctl.pointer_up();
    let mut frames = 0;
    while ctl.advance(FRAME) {
        frames += 1;
        assert!(frames < 600, "spring-back took more than ten seconds");
    }
    assert_eq!(ctl.current(), StretchState::IDENTITY);
    assert_eq!(ctl.current().transform_rect(bounds) * center, center);
}

#[test]
fn spring_back_converges_from_any_start() {
    for dir in directions() {
        for d in [1.0, 50.0, 400.0, 1e6] {
            let mut ctl = StretchController::default();
            ctl.drag_changed(dir * d);
            for _ in 0..8 {
                ctl.advance(FRAME);
            }
            ctl.drag_ended();
            while ctl.advance(FRAME) {}
            assert!(ctl.current().is_identity(), "{:?}", dir * d);
        }
    }
}

#[test]
fn release_spring_is_configurable() {
    let stiff = Spring::new(0.1, 1.0).unwrap();
    let mut fast = StretchController::new(StretchConfig::default().with_release_spring(stiff));
    let mut slow = StretchController::default();
    for ctl in [&mut fast, &mut slow] {
        ctl.drag_changed(Vec2::new(200.0, 0.0));
        while ctl.advance(FRAME) {}
        ctl.drag_ended();
    }
    let mut fast_frames = 0;
    while fast.advance(FRAME) {
        fast_frames += 1;
    }
    let mut slow_frames = 0;
    while slow.advance(FRAME) {
        slow_frames += 1;
    }
    assert!(fast_frames < slow_frames);
}

#[test]
fn pointer_down_while_springing_back_restarts_from_new_origin() {
    let mut ctl = StretchController::default();
    ctl.pointer_down(Point::new(0.0, 0.0));
    ctl.pointer_moved(Point::new(150.0, 0.0));
    while ctl.advance(FRAME) {}
    ctl.pointer_up();
    ctl.advance(FRAME);

    ctl.pointer_down(Point::new(500.0, 500.0));
    let target = ctl.pointer_moved(Point::new(500.0, 540.0)).unwrap();
    assert_eq!(target, stretch(Vec2::new(0.0, 40.0), ctl.config()));
}
