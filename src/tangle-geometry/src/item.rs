// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Item-model boundary types.
//!
//! The diagram's item/graph model owns these values; the geometry pipeline
//! reads them as snapshots and writes back only port coordinates and
//! slider bounds, each through an explicit `&mut` path.

use crate::geom::Point;

/// Placement of an item in diagram space: position, rotation angle in
/// degrees, and zoom factor (> 0). An immutable snapshot read at the start
/// of each geometry or hit-test call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub zoom: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, rotation: f64, zoom: f64) -> Self {
        Self {
            x,
            y,
            rotation,
            zoom,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum VariableKind {
    Constant,
    Flow,
    Stock,
    Parameter,
}

/// Operation glyph kinds, each carrying only the fields it needs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum OperationKind {
    /// Named constant rendered as its description label.
    Constant { description: String },
    /// External data source rendered as its description label.
    Data { description: String },
    /// Integration operator; when coupled, its input variable is rendered
    /// embedded within the operator's own glyph.
    Integrate { embedded: Option<EmbeddedVariable> },
    /// Generic n-ary operator drawn from its declared extents.
    Nary { arity: u8 },
}

impl OperationKind {
    pub fn is_coupled(&self) -> bool {
        matches!(
            self,
            OperationKind::Integrate {
                embedded: Some(_)
            }
        )
    }
}

/// A variable rendered inside an integration operator's glyph, placed
/// `offset` to the right of the operator's own base shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EmbeddedVariable {
    pub var: Box<VariableItem>,
    pub offset: f64,
}

/// World-space attachment point for a connecting edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Port {
    pub x: f64,
    pub y: f64,
}

impl Port {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// Index of a variable's output-side port in `VariableItem::ports`.
pub const OUTPUT_PORT: usize = 0;
/// Index of a variable's input-side port in `VariableItem::ports`.
pub const INPUT_PORT: usize = 1;

/// Raw unrotated extents an operation kind declares: `left <= 0 <= right`
/// horizontally, `height` the half-height of the glyph.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Extents {
    pub left: f64,
    pub right: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableItem {
    pub name: String,
    pub kind: VariableKind,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub zoom_factor: f64,
    pub value: f64,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_bounds_set: bool,
    pub ports: [Port; 2],
}

impl VariableItem {
    pub fn new(name: String, kind: VariableKind) -> Self {
        Self {
            name,
            kind,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            zoom_factor: 1.0,
            value: 0.0,
            slider_min: 0.0,
            slider_max: 0.0,
            slider_bounds_set: false,
            ports: [Port::default(); 2],
        }
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.rotation, self.zoom_factor)
    }

    /// Seed the editable range the first time a slider is shown: `[-1, 1]`
    /// for a zero value, ten times the magnitude on either side otherwise.
    pub fn init_slider_bounds(&mut self) {
        if self.slider_bounds_set {
            return;
        }
        if self.value == 0.0 {
            self.slider_min = -1.0;
            self.slider_max = 1.0;
        } else {
            self.slider_min = -10.0 * self.value.abs();
            self.slider_max = 10.0 * self.value.abs();
        }
        self.slider_bounds_set = true;
    }

    /// Widen the range so it always contains the current value.
    pub fn adjust_slider_bounds(&mut self) {
        if self.slider_max < self.value {
            self.slider_max = self.value;
        }
        if self.slider_min > self.value {
            self.slider_min = self.value;
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationItem {
    pub kind: OperationKind,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub zoom_factor: f64,
    pub extents: Extents,
}

impl OperationItem {
    pub fn new(kind: OperationKind, extents: Extents) -> Self {
        Self {
            kind,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            zoom_factor: 1.0,
            extents,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.rotation, self.zoom_factor)
    }
}
