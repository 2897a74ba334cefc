// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

pub const OPERATION_FONT_SIZE: f64 = 10.0;
pub const VARIABLE_FONT_SIZE: f64 = 12.0;
pub const OPERATION_LABEL_PADDING: f64 = 2.0;
pub const VARIABLE_LABEL_PADDING: f64 = 12.0; // room for the adjoining numeric readout
pub const LABEL_HEIGHT_PADDING: f64 = 4.0;
pub const PORT_INSET: f64 = 2.0; // input port sits just inside the left edge
pub const INDICATOR_LENGTH: f64 = 10.0;
pub const INDICATOR_HALF_HEIGHT: f64 = 3.0;
