// SPDX-License-Identifier: MPL-2.0
//! UI composition: one module per screen.

pub mod picker;
pub mod viewer;
