// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector Graphics Interface abstraction.
//!
//! Menus draw through the [Graphics] trait so they are not tied to a scene
//! implementation. [VelloGraphics](vello_vg::VelloGraphics) draws into a
//! [vello::Scene], [RecordingGraphics](recording::RecordingGraphics) keeps a
//! list of the draw calls.

use vello::kurbo::{Affine, BezPath, Rect, Shape, Stroke};
use vello::peniko::{Brush, Color, Fill};

/// A trait for drawing vector graphics.
///
/// Methods take `&BezPath` to stay object safe. Convert concrete shapes with
/// [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Draw a blurred rounded rectangle, used for drop shadows.
    fn blurred_rounded_rect(
        &mut self,
        transform: Affine,
        rect: Rect,
        color: Color,
        radius: f64,
        std_dev: f64,
    );
}

/// Convert a shape to a [BezPath] for use with [Graphics].
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// Contains [RecordingGraphics](recording::RecordingGraphics).
pub mod recording;

/// Contains [VelloGraphics](vello_vg::VelloGraphics).
pub mod vello_vg;
