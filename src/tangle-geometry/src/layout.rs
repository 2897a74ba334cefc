// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Item geometry, bounding polygons, port placement, and hit testing.
//!
//! Geometry is recomputed per redraw or pointer event from the current
//! pose and item state; nothing here is cached. The single draw/layout
//! transform — rotate about the item position, scale by zoom — is shared
//! by polygon construction and port placement, and hit testing applies its
//! exact inverse.

use crate::constants::*;
use crate::geom::{Point, Polygon, Rotation};
use crate::item::{
    Extents, INPUT_PORT, OUTPUT_PORT, OperationItem, OperationKind, Pose, VariableItem,
    VariableKind,
};
use crate::slider;
use crate::text::{MeasureScope, latex_to_markup};

/// Natural (unrotated, unzoomed) half-extents of an item plus its label's
/// vertical top-offset. For a coupled integration operator, also the
/// embedded child's geometry and where to place it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemGeometry {
    pub half_width: f64,
    pub half_height: f64,
    pub v_offset: f64,
    pub embedded: Option<EmbeddedGeometry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EmbeddedGeometry {
    pub geometry: Box<ItemGeometry>,
    pub offset: f64,
}

impl ItemGeometry {
    fn plain(half_width: f64, half_height: f64, v_offset: f64) -> Self {
        Self {
            half_width,
            half_height,
            v_offset,
            embedded: None,
        }
    }
}

/// Derive a variable glyph's geometry from its rendered label.
///
/// A constant displays its formatted value (falling back to `"0"` when
/// formatting fails); every other kind displays its translated name, with
/// extra width reserved for the numeric readout drawn beside it.
pub fn variable_geometry(var: &VariableItem, scope: &mut MeasureScope) -> ItemGeometry {
    let (markup, padding) = match var.kind {
        VariableKind::Constant => (slider::display_value(var.value), OPERATION_LABEL_PADDING),
        _ => (latex_to_markup(&var.name), VARIABLE_LABEL_PADDING),
    };
    let m = scope.measure(&markup, VARIABLE_FONT_SIZE);
    ItemGeometry::plain(
        0.5 * m.width + padding,
        0.5 * m.height + LABEL_HEIGHT_PADDING,
        m.top,
    )
}

/// Derive an operation glyph's geometry.
///
/// Constant and data operations size themselves to their rendered
/// description; a coupled integration operator composes its embedded
/// variable's geometry into its own; everything else uses the declared
/// extents directly.
pub fn operation_geometry(op: &OperationItem, scope: &mut MeasureScope) -> ItemGeometry {
    let base_half_width = 0.5 * (op.extents.right - op.extents.left);
    let base_half_height = op.extents.height;
    match &op.kind {
        OperationKind::Constant { description } | OperationKind::Data { description } => {
            let m = scope.measure(&latex_to_markup(description), OPERATION_FONT_SIZE);
            ItemGeometry::plain(
                0.5 * m.width + OPERATION_LABEL_PADDING,
                0.5 * m.height + LABEL_HEIGHT_PADDING,
                m.top,
            )
        }
        OperationKind::Integrate {
            embedded: Some(emb),
        } => {
            let child = variable_geometry(&emb.var, scope);
            ItemGeometry {
                half_width: base_half_width + emb.offset + child.half_width,
                half_height: base_half_height.max(child.half_height),
                v_offset: 0.0,
                embedded: Some(EmbeddedGeometry {
                    geometry: Box::new(child),
                    offset: emb.offset,
                }),
            }
        }
        OperationKind::Integrate { embedded: None } | OperationKind::Nary { .. } => {
            ItemGeometry::plain(base_half_width, base_half_height, 0.0)
        }
    }
}

/// Bounding rectangle of a variable glyph: four corners at the zoomed
/// half-extents, rotated about the item position, winding-corrected and
/// closed.
pub fn variable_polygon(pose: Pose, geom: &ItemGeometry) -> Polygon {
    let (x, y) = (pose.x, pose.y);
    let wz = geom.half_width * pose.zoom;
    let hz = geom.half_height * pose.zoom;
    let rotate = Rotation::about(pose.rotation, pose.position());

    let mut poly = Polygon::new();
    for corner in [
        Point::new(x - wz, y - hz),
        Point::new(x - wz, y + hz),
        Point::new(x + wz, y + hz),
        Point::new(x + wz, y - hz),
    ] {
        poly.push(rotate.apply(corner));
    }
    poly.correct();
    poly
}

/// Bounding triangle of an operation glyph: two base corners and the apex
/// from the declared extents, scaled by zoom and rotated about the item
/// position.
pub fn operation_polygon(pose: Pose, extents: Extents) -> Polygon {
    let (x, y) = (pose.x, pose.y);
    let zl = extents.left * pose.zoom;
    let zh = extents.height * pose.zoom;
    let zr = extents.right * pose.zoom;
    let rotate = Rotation::about(pose.rotation, pose.position());

    let mut poly = Polygon::new();
    for vertex in [
        Point::new(x + zl, y - zh),
        Point::new(x + zl, y + zh),
        Point::new(x + zr, y),
    ] {
        poly.push(rotate.apply(vertex));
    }
    poly.correct();
    poly
}

/// Write a variable's two port positions back into the item: output side
/// at local `(+half_width, 0)`, input side at `(-half_width + inset, 0)`,
/// both rotated by the item's angle and scaled by zoom around its
/// position. The caller must be the sole writer of this item's ports.
pub fn update_port_locs(var: &mut VariableItem, geom: &ItemGeometry) {
    let pose = var.pose();
    let rotate = Rotation::about(pose.rotation, Point::default());
    let locals = [
        Point::new(geom.half_width, 0.0),
        Point::new(-geom.half_width + PORT_INSET, 0.0),
    ];
    for (slot, local) in [OUTPUT_PORT, INPUT_PORT].into_iter().zip(locals) {
        let world = pose.position() + rotate.apply(local).scale(pose.zoom);
        var.ports[slot].move_to(world.x, world.y);
    }
}

/// Whether pointer coordinates fall inside a variable glyph.
///
/// The pointer offset is taken back through the inverse of the item's
/// rotation and tested against the unzoomed half-extent box; containment
/// is evaluated in pre-zoom item-local units.
pub fn hit_test(pose: Pose, geom: &ItemGeometry, x: f64, y: f64) -> bool {
    let rotate = Rotation::about(pose.rotation, pose.position());
    let local = rotate.apply_inverse(Point::new(x, y)) - pose.position();
    local.x.abs() <= geom.half_width && local.y.abs() <= geom.half_height
}
