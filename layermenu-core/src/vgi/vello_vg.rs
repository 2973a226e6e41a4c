// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::{Affine, BezPath, Rect, Stroke};
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::vgi::Graphics;

/// Draws into a borrowed [Scene].
pub struct VelloGraphics<'a> {
    scene: &'a mut Scene,
}

impl<'a> VelloGraphics<'a> {
    /// Wrap a scene.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }

    /// The wrapped scene, for host text renderers that draw glyph runs directly.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.scene
    }
}

impl Graphics for VelloGraphics<'_> {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.stroke(style, transform, brush, brush_transform, shape);
    }

    fn blurred_rounded_rect(
        &mut self,
        transform: Affine,
        rect: Rect,
        color: Color,
        radius: f64,
        std_dev: f64,
    ) {
        self.scene
            .draw_blurred_rounded_rect(transform, rect, color, radius, std_dev);
    }
}
