// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Value formatting and the value <-> control-handle mapping for editable
//! constants.
//!
//! Numeric-formatting failure is recovered here: a constant whose value
//! cannot be formatted is labeled `"0"`, and that label participates
//! normally in downstream width and height computation. The failure never
//! propagates to geometry or the caller.

use float_cmp::approx_eq;

use crate::common::{Error, ErrorCode, Result, format_number};
use crate::item::VariableItem;

/// A value decomposed for compact display: `value = mantissa * 10^exponent`
/// with the exponent grouped in multiples of three.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EngNotation {
    pub mantissa: f64,
    pub exponent: i32,
}

pub fn eng_notation(value: f64) -> Result<EngNotation> {
    if !value.is_finite() {
        return Err(Error::new(ErrorCode::NonFiniteValue));
    }
    if value == 0.0 {
        return Ok(EngNotation {
            mantissa: 0.0,
            exponent: 0,
        });
    }
    // truncating division keeps small magnitudes near the unscaled value
    let exponent = 3 * (value.abs().log10().floor() as i32 / 3);
    Ok(EngNotation {
        mantissa: value / 10f64.powi(exponent),
        exponent,
    })
}

/// Format a constant's value for its glyph label. An exponent of -3 is
/// displayed as the bare mantissa with no exponent suffix.
pub fn format_constant(value: f64) -> Result<String> {
    let mut eng = eng_notation(value)?;
    if eng.exponent == -3 {
        eng = EngNotation {
            mantissa: value,
            exponent: 0,
        };
    }
    let mantissa = (eng.mantissa * 1e4).round() / 1e4;
    if eng.exponent == 0 {
        Ok(format_number(mantissa))
    } else {
        Ok(format!("{}×10^{}", format_number(mantissa), eng.exponent))
    }
}

/// The label a constant displays: its engineering-notation rendering, or
/// the literal `"0"` when formatting fails.
pub fn display_value(value: f64) -> String {
    format_constant(value).unwrap_or_else(|_| "0".to_string())
}

/// Map a variable's value onto a 1D handle offset along the glyph width,
/// linear in the value's position relative to the midpoint of the editable
/// range. Assumes the item model has already initialized and adjusted the
/// slider bounds to contain the value.
pub fn handle_offset(var: &VariableItem, half_width: f64) -> f64 {
    let range = var.slider_max - var.slider_min;
    if approx_eq!(f64, range, 0.0, ulps = 2) {
        return 0.0;
    }
    half_width * (var.value - 0.5 * (var.slider_min + var.slider_max)) / range
}

/// Inverse of `handle_offset`: the value a handle offset selects.
pub fn value_at_offset(var: &VariableItem, half_width: f64, offset: f64) -> f64 {
    if half_width <= 0.0 {
        return 0.5 * (var.slider_min + var.slider_max);
    }
    0.5 * (var.slider_min + var.slider_max) + offset * (var.slider_max - var.slider_min) / half_width
}
