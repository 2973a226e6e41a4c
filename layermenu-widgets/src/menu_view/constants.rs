// SPDX-License-Identifier: MIT OR Apache-2.0

//! Geometry constants of menu panels.

/// Margin around a spacer rule, on every side.
pub const SPACER_MARGIN: f64 = 5.0;
/// Thickness of a spacer rule.
pub const SPACER_THICKNESS: f64 = 2.0;
/// Height of a spacer row.
pub const SPACER_HEIGHT: f64 = SPACER_MARGIN * 2.0 + SPACER_THICKNESS;
/// Standard deviation of a shadow per unit of blur radius.
pub const SHADOW_STD_DEV_PER_BLUR: f64 = 0.5;
