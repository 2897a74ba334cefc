// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Decorative indicator-triangle primitive.
//!
//! Callers mark a point on the canvas (a flow direction, a selected port)
//! with a small fixed-size triangle. The geometry is resolved here; the
//! external drawing layer implements [`DrawBackend`] to fill it.

use crate::constants::{INDICATOR_HALF_HEIGHT, INDICATOR_LENGTH};
use crate::geom::{Point, Polygon, Rotation};

/// Opaque RGBA fill colour, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Seam implemented by the external drawing layer.
pub trait DrawBackend {
    fn fill_polygon(&mut self, polygon: &Polygon, color: Color);
}

/// The indicator triangle's world-space outline: local vertices
/// `(INDICATOR_LENGTH, 0)`, `(0, -INDICATOR_HALF_HEIGHT)`,
/// `(0, +INDICATOR_HALF_HEIGHT)` rotated by `angle_degrees` about the
/// anchor and translated to it.
pub fn indicator_triangle(at: Point, angle_degrees: f64) -> Polygon {
    let rotate = Rotation::about(angle_degrees, Point::default());
    let mut poly = Polygon::new();
    for local in [
        Point::new(INDICATOR_LENGTH, 0.0),
        Point::new(0.0, -INDICATOR_HALF_HEIGHT),
        Point::new(0.0, INDICATOR_HALF_HEIGHT),
    ] {
        poly.push(at + rotate.apply(local));
    }
    poly.correct();
    poly
}

pub fn draw_indicator(backend: &mut dyn DrawBackend, at: Point, angle_degrees: f64, color: Color) {
    backend.fill_polygon(&indicator_triangle(at, angle_degrees), color);
}
