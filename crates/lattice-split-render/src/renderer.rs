//! Core renderer trait defining the drawing interface widgets use.
//!
//! Backends (GPU, software, test capture) implement [`Renderer`]. Widgets
//! paint in their own local coordinate space; the backend is responsible for
//! translating into window coordinates before the widget's paint call.

use crate::icon::Icon;
use crate::types::{Point, Rect};

/// The drawing interface handed to widget paint routines.
pub trait Renderer {
    /// Draw an icon with its top-left corner at `position`, at its natural size.
    fn draw_icon(&mut self, icon: &Icon, position: Point);
}

/// A drawing operation captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An icon was drawn.
    Icon {
        /// The icon's source.
        source: String,
        /// Where the icon landed.
        rect: Rect,
    },
}

/// A renderer that records every command instead of drawing.
///
/// Useful for headless hosts and for asserting on paint output.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Positions of all drawn icons, in call order.
    pub fn icon_positions(&self) -> Vec<Point> {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Icon { rect, .. } => rect.origin,
            })
            .collect()
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_icon(&mut self, icon: &Icon, position: Point) {
        let size = icon.size();
        self.commands.push(DrawCommand::Icon {
            source: icon.source.clone(),
            rect: Rect::new(position.x, position.y, size.width, size.height),
        });
    }
}
