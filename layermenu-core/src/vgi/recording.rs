// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::{Affine, BezPath, Rect, Shape, Stroke};
use vello::peniko::{Brush, Color, Fill};

use crate::vgi::Graphics;

/// One recorded draw call, reduced to its transformed bounds and colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A filled shape.
    Fill {
        /// Bounding box in viewport coordinates.
        bounds: Rect,
        /// Colour of a solid brush. [None] for gradients and images.
        color: Option<Color>,
    },
    /// A stroked shape.
    Stroke {
        /// Bounding box of the path in viewport coordinates.
        bounds: Rect,
        /// Stroke width.
        width: f64,
        /// Colour of a solid brush.
        color: Option<Color>,
    },
    /// A blurred rounded rectangle.
    Shadow {
        /// Rectangle in viewport coordinates.
        bounds: Rect,
        /// Shadow colour.
        color: Color,
        /// Blur standard deviation.
        std_dev: f64,
    },
}

impl DrawCommand {
    /// Bounding box of the draw call.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Fill { bounds, .. } | Self::Stroke { bounds, .. } | Self::Shadow { bounds, .. } => {
                *bounds
            },
        }
    }
}

/// Graphics backend that records draw calls instead of rasterizing them.
///
/// Useful for headless hosts and for inspecting what a menu draws.
#[derive(Debug, Default)]
pub struct RecordingGraphics {
    commands: Vec<DrawCommand>,
}

impl RecordingGraphics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded draw calls, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded fills.
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Fill { .. }))
    }

    /// Forget every recorded call.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Whether nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn solid(brush: &Brush) -> Option<Color> {
    match brush {
        Brush::Solid(color) => Some(*color),
        _ => None,
    }
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        _fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Fill {
            bounds: transform.transform_rect_bbox(shape.bounding_box()),
            color: solid(brush),
        });
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Stroke {
            bounds: transform.transform_rect_bbox(shape.bounding_box()),
            width: style.width,
            color: solid(brush),
        });
    }

    fn blurred_rounded_rect(
        &mut self,
        transform: Affine,
        rect: Rect,
        color: Color,
        _radius: f64,
        std_dev: f64,
    ) {
        self.commands.push(DrawCommand::Shadow {
            bounds: transform.transform_rect_bbox(rect),
            color,
            std_dev,
        });
    }
}
