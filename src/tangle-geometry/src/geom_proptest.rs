// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests for the pose transform pipeline.
//!
//! These verify that:
//! 1. bounding polygons invert exactly back to the axis-aligned box
//! 2. winding direction is stable across kinds and poses
//! 3. the slider mapping is monotonic over its range

use proptest::prelude::*;

use crate::geom::{Point, Rotation};
use crate::item::{Extents, Pose, VariableItem, VariableKind};
use crate::layout::{ItemGeometry, hit_test, operation_polygon, variable_polygon};
use crate::slider::handle_offset;

fn plain_geometry(half_width: f64, half_height: f64) -> ItemGeometry {
    ItemGeometry {
        half_width,
        half_height,
        v_offset: 0.0,
        embedded: None,
    }
}

fn pose_strategy() -> impl Strategy<Value = Pose> {
    (
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        -720.0f64..720.0,
        0.05f64..20.0,
    )
        .prop_map(|(x, y, rotation, zoom)| Pose::new(x, y, rotation, zoom))
}

fn half_extent_strategy() -> impl Strategy<Value = f64> {
    0.0f64..200.0
}

proptest! {
    #[test]
    fn variable_polygon_inverts_to_half_extent_box(
        pose in pose_strategy(),
        hw in half_extent_strategy(),
        hh in half_extent_strategy(),
    ) {
        let geom = plain_geometry(hw, hh);
        let poly = variable_polygon(pose, &geom);
        prop_assert!(poly.is_closed());

        let rotate = Rotation::about(pose.rotation, pose.position());
        for &vertex in poly.points() {
            let local = rotate.apply_inverse(vertex) - pose.position();
            let unzoomed = local.scale(1.0 / pose.zoom);
            prop_assert!((unzoomed.x.abs() - hw).abs() < 1e-6);
            prop_assert!((unzoomed.y.abs() - hh).abs() < 1e-6);
        }
    }

    #[test]
    fn operation_polygon_inverts_to_extents(
        pose in pose_strategy(),
        left in -100.0f64..0.0,
        right in 0.1f64..100.0,
        height in 0.1f64..100.0,
    ) {
        let extents = Extents { left, right, height };
        let poly = operation_polygon(pose, extents);
        prop_assert!(poly.is_closed());

        let rotate = Rotation::about(pose.rotation, pose.position());
        let locals: Vec<Point> = poly
            .points()
            .iter()
            .map(|&v| (rotate.apply_inverse(v) - pose.position()).scale(1.0 / pose.zoom))
            .collect();
        // apex at (right, 0) must be recovered
        prop_assert!(
            locals
                .iter()
                .any(|p| (p.x - right).abs() < 1e-6 && p.y.abs() < 1e-6)
        );
        // both base corners at (left, ±height)
        prop_assert!(
            locals
                .iter()
                .any(|p| (p.x - left).abs() < 1e-6 && (p.y - height).abs() < 1e-6)
        );
        prop_assert!(
            locals
                .iter()
                .any(|p| (p.x - left).abs() < 1e-6 && (p.y + height).abs() < 1e-6)
        );
    }

    #[test]
    fn winding_is_orientation_preserving(
        pose in pose_strategy(),
        hw in 0.1f64..200.0,
        hh in 0.1f64..200.0,
    ) {
        let geom = plain_geometry(hw, hh);
        prop_assert!(variable_polygon(pose, &geom).signed_area() < 0.0);

        let extents = Extents { left: -hw, right: hw, height: hh };
        prop_assert!(operation_polygon(pose, extents).signed_area() < 0.0);
    }

    #[test]
    fn hit_test_accepts_own_center(pose in pose_strategy()) {
        let geom = plain_geometry(10.0, 5.0);
        prop_assert!(hit_test(pose, &geom, pose.x, pose.y));
    }

    #[test]
    fn handle_offset_is_monotonic(
        min in -1000.0f64..1000.0,
        span in 0.1f64..2000.0,
        t1 in 0.0f64..1.0,
        t2 in 0.0f64..1.0,
        hw in 0.1f64..100.0,
    ) {
        let max = min + span;
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        let mut var = VariableItem::new("k".to_string(), VariableKind::Parameter);
        var.slider_min = min;
        var.slider_max = max;
        var.slider_bounds_set = true;

        var.value = min + lo * span;
        let offset_lo = handle_offset(&var, hw);
        var.value = min + hi * span;
        let offset_hi = handle_offset(&var, hw);

        prop_assert!(offset_lo <= offset_hi + 1e-12);
        prop_assert!(offset_lo.abs() <= 0.5 * hw + 1e-9);
        prop_assert!(offset_hi.abs() <= 0.5 * hw + 1e-9);
    }
}
