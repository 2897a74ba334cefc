// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Geometric layout and hit-testing for Tangle diagram items.
//!
//! For each item (operation glyph or variable glyph) this crate derives a
//! local bounding shape, world-space port positions, and — for variables
//! with an editable value — a value/handle-offset mapping, all correct
//! under arbitrary rotation and zoom about the item's own position.
//! Dimensions come from rendered label metrics where the kind requires a
//! label, and compose recursively when an integration operator embeds its
//! input variable.
//!
//! Drawing, text shaping, and the item/graph model are external
//! collaborators reached through the seams in [`indicator`], [`text`],
//! and [`item`].

#![forbid(unsafe_code)]

pub mod common;
pub mod constants;
pub mod geom;
pub mod indicator;
pub mod item;
pub mod layout;
pub mod slider;
pub mod text;

#[cfg(test)]
mod geom_proptest;

pub use self::common::{Error, ErrorCode, Result};
pub use self::geom::{Point, Polygon, Rotation};
pub use self::indicator::{Color, DrawBackend, draw_indicator, indicator_triangle};
pub use self::item::{
    EmbeddedVariable, Extents, OperationItem, OperationKind, Port, Pose, VariableItem, VariableKind,
};
pub use self::layout::{
    ItemGeometry, hit_test, operation_geometry, operation_polygon, update_port_locs,
    variable_geometry, variable_polygon,
};
pub use self::slider::{display_value, handle_offset, value_at_offset};
pub use self::text::{CharMetrics, LabelMetrics, MeasureScope, TextMetrics};
