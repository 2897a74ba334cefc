// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::f64::consts::PI;
use std::ops::{Add, Sub};

use smallvec::SmallVec;

pub fn deg_to_rad(d: f64) -> f64 {
    (d / 180.0) * PI
}

pub fn rad_to_deg(r: f64) -> f64 {
    (r * 180.0) / PI
}

/// 2D position/vector used throughout the geometry pipeline.
#[derive(Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Rotation about a fixed pivot, parameterized by an angle in degrees.
///
/// `apply` maps a world-space point through the rotation; `apply_inverse`
/// is its exact geometric inverse. Both leave the pivot fixed.
#[derive(Clone, Copy, Debug)]
pub struct Rotation {
    sin: f64,
    cos: f64,
    pivot: Point,
}

impl Rotation {
    pub fn about(angle_degrees: f64, pivot: Point) -> Self {
        let (sin, cos) = deg_to_rad(angle_degrees).sin_cos();
        Self { sin, cos, pivot }
    }

    pub fn apply(&self, p: Point) -> Point {
        let d = p - self.pivot;
        Point {
            x: self.pivot.x + d.x * self.cos - d.y * self.sin,
            y: self.pivot.y + d.y * self.cos + d.x * self.sin,
        }
    }

    pub fn apply_inverse(&self, p: Point) -> Point {
        let d = p - self.pivot;
        Point {
            x: self.pivot.x + d.x * self.cos + d.y * self.sin,
            y: self.pivot.y + d.y * self.cos - d.x * self.sin,
        }
    }
}

/// Closed bounding polygon with a fixed winding direction.
///
/// Built fresh per call by pushing the open vertex ring and then calling
/// `correct`, which normalizes winding and appends the closing vertex.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Polygon {
    points: SmallVec<[Point; 5]>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Twice-signed shoelace area over the vertex ring. Negative for the
    /// winding direction this crate normalizes to.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        0.5 * sum
    }

    /// Normalize winding and close the ring. Call once, after pushing the
    /// open vertex sequence.
    pub fn correct(&mut self) {
        if self.signed_area() > 0.0 {
            self.points.reverse();
        }
        if !self.is_closed()
            && let Some(&first) = self.points.first()
        {
            self.points.push(first);
        }
    }
}
