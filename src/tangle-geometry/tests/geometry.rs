// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! End-to-end checks of the public geometry surface: a canvas controller's
//! view of one redraw/hit-test cycle.

use float_cmp::approx_eq;

use tangle_geometry::{
    EmbeddedVariable, Extents, ItemGeometry, MeasureScope, OperationItem, OperationKind, Point,
    Pose, Rotation, VariableItem, VariableKind, display_value, handle_offset, hit_test,
    operation_geometry, update_port_locs, variable_geometry, variable_polygon,
};

fn plain_geometry(half_width: f64, half_height: f64) -> ItemGeometry {
    ItemGeometry {
        half_width,
        half_height,
        v_offset: 0.0,
        embedded: None,
    }
}

#[test]
fn polygon_recovers_box_under_rotation_and_zoom() {
    let geom = plain_geometry(24.0, 10.0);
    for rotation in [0.0, 17.0, 90.0, 135.0, 300.0] {
        for zoom in [0.25, 1.0, 3.5] {
            let pose = Pose::new(40.0, -15.0, rotation, zoom);
            let poly = variable_polygon(pose, &geom);
            assert!(poly.is_closed());

            let rotate = Rotation::about(rotation, pose.position());
            for &vertex in poly.points() {
                let local = (rotate.apply_inverse(vertex) - pose.position()).scale(1.0 / zoom);
                assert!(approx_eq!(f64, local.x.abs(), 24.0, epsilon = 1e-9));
                assert!(approx_eq!(f64, local.y.abs(), 10.0, epsilon = 1e-9));
            }
        }
    }
}

#[test]
fn slider_mapping_matches_reference_points() {
    let mut var = VariableItem::new("k".to_string(), VariableKind::Parameter);
    var.slider_min = 0.0;
    var.slider_max = 10.0;
    var.slider_bounds_set = true;

    for (value, expected) in [(0.0, -2.5), (5.0, 0.0), (10.0, 2.5)] {
        var.value = value;
        assert!(approx_eq!(
            f64,
            handle_offset(&var, 5.0),
            expected,
            epsilon = 1e-12
        ));
    }
}

#[test]
fn hit_testing_reference_points() {
    let geom = plain_geometry(10.0, 5.0);
    let origin = Pose::new(0.0, 0.0, 0.0, 1.0);
    assert!(hit_test(origin, &geom, 5.0, 0.0));
    assert!(!hit_test(origin, &geom, 20.0, 0.0));

    for rotation in [0.0, 45.0, 181.0, -90.0] {
        let pose = Pose::new(33.0, 44.0, rotation, 2.0);
        assert!(hit_test(pose, &geom, 33.0, 44.0));
    }
}

#[test]
fn coupled_integration_composes_total_width() {
    struct FixedTwelve;
    impl tangle_geometry::TextMetrics for FixedTwelve {
        fn set_font_size(&mut self, _px: f64) {}
        fn set_markup(&mut self, _markup: &str) {}
        fn width(&self) -> f64 {
            12.0
        }
        fn height(&self) -> f64 {
            4.0
        }
        fn top(&self) -> f64 {
            0.0
        }
    }

    let mut embedded = VariableItem::new("level".to_string(), VariableKind::Constant);
    embedded.value = 1.0;
    let op = OperationItem::new(
        OperationKind::Integrate {
            embedded: Some(EmbeddedVariable {
                var: Box::new(embedded),
                offset: 5.0,
            }),
        },
        Extents {
            left: -10.0,
            right: 10.0,
            height: 3.0,
        },
    );

    let mut provider = FixedTwelve;
    let mut scope = MeasureScope::new(Some(&mut provider));
    let geom = operation_geometry(&op, &mut scope);
    assert_eq!(geom.half_width, 23.0);
}

#[test]
fn engineering_notation_minus_three_shows_bare_mantissa() {
    let label = display_value(0.0005);
    assert_eq!(label, "0.0005");
    assert!(!label.contains("10^"));
}

#[test]
fn formatting_failure_yields_deterministic_zero_geometry() {
    let mut var = VariableItem::new("broken".to_string(), VariableKind::Constant);
    var.value = f64::NAN;

    let first = variable_geometry(&var, &mut MeasureScope::new(None));
    let second = variable_geometry(&var, &mut MeasureScope::new(None));
    assert_eq!(first, second);
    assert!(first.half_width > 0.0);
    assert!(first.half_height > 0.0);

    // the fallback is the literal "0" label
    var.value = 0.0;
    let zero = variable_geometry(&var, &mut MeasureScope::new(None));
    assert_eq!(first, zero);
}

#[test]
fn geometry_serializes_for_inspection() {
    let geom = plain_geometry(10.0, 5.0);
    let json = serde_json::to_string(&geom).unwrap();
    assert!(json.contains("\"half_width\":10.0"));
    assert!(json.contains("\"embedded\":null"));
}

#[test]
fn redraw_cycle_keeps_ports_on_the_glyph_edge() {
    let mut var = VariableItem::new("inflow".to_string(), VariableKind::Flow);
    var.x = 120.0;
    var.y = 80.0;
    var.rotation = 30.0;
    var.zoom_factor = 1.5;

    let geom = variable_geometry(&var, &mut MeasureScope::new(None));
    update_port_locs(&mut var, &geom);

    // the output port lands half_width * zoom away from the item center
    let port = var.ports[0];
    let d = Point::new(port.x, port.y) - var.pose().position();
    let dist = (d.x * d.x + d.y * d.y).sqrt();
    assert!(approx_eq!(
        f64,
        dist,
        geom.half_width * 1.5,
        epsilon = 1e-9
    ));
}
