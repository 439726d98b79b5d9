//! Render command generation.
//!
//! Decorators never draw. They append [`RenderCommand`]s to a [`Renderer`],
//! and the finished [`Frame`] is handed to whatever paints pixels (the
//! [`crate::raster::Canvas`] in tests and in the gallery).

use crate::layout::Rect;
use crate::style::Color;

/// Built-in icon shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Check mark (toggle on).
    Checkmark,
    /// Horizontal bar (toggle off).
    Minus,
    /// Diagonal cross (clear).
    Xmark,
    /// Magnifying glass (search).
    Magnifier,
    /// Right-pointing arrow.
    ArrowRight,
    /// Host-provided image, referenced by atlas id.
    Atlas(u32),
}

/// A render command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Hard (zero-blur) shadow of a rounded rectangle.
    Shadow {
        /// Bounds of the shape casting the shadow.
        bounds: Rect,
        /// Shadow color.
        color: Color,
        /// Corner radius of the casting shape.
        corner_radius: f32,
        /// Offset of the shadow from the casting shape.
        offset: (f32, f32),
    },
    /// Filled rounded rectangle.
    Fill {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rounded rectangle outline, centered on the bounds edge.
    Stroke {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// A single line of text.
    Text {
        /// Text content.
        text: String,
        /// Top-left corner of the line box.
        origin: (f32, f32),
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// Bold weight.
        bold: bool,
    },
    /// Template icon tinted with a single color.
    Icon {
        /// Bounds.
        bounds: Rect,
        /// Icon shape.
        glyph: Glyph,
        /// Tint color.
        tint: Color,
    },
    /// Scale everything until the matching [`RenderCommand::PopScale`].
    PushScale {
        /// Scale factor.
        factor: f32,
        /// Fixed point of the scale.
        origin: (f32, f32),
    },
    /// Ends the innermost scale.
    PopScale,
}

/// Collects render commands for one frame.
pub struct Renderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Open scale depth.
    scale_depth: usize,
}

impl Renderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            scale_depth: 0,
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.scale_depth = 0;
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Opens a uniform scale about `origin`.
    ///
    /// A factor of exactly 1.0 still pushes, so frames keep the same shape
    /// whether or not a control is pressed.
    pub fn push_scale(&mut self, factor: f32, origin: (f32, f32)) {
        self.scale_depth += 1;
        self.commands.push(RenderCommand::PushScale { factor, origin });
    }

    /// Closes the innermost scale. Unbalanced pops are ignored.
    pub fn pop_scale(&mut self) {
        if self.scale_depth == 0 {
            tracing::debug!("pop_scale without matching push_scale");
            return;
        }
        self.scale_depth -= 1;
        self.commands.push(RenderCommand::PopScale);
    }

    /// Ends the frame, closing any scale left open.
    pub fn end_frame(&mut self) -> Frame {
        while self.scale_depth > 0 {
            self.pop_scale();
        }
        Frame {
            commands: std::mem::take(&mut self.commands),
        }
    }

    /// Returns the number of commands recorded so far.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The finished, ordered commands of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Commands in draw order.
    pub commands: Vec<RenderCommand>,
}

impl Frame {
    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All stroke commands as `(bounds, color, width, corner_radius)`.
    pub fn strokes(&self) -> impl Iterator<Item = (Rect, Color, f32, f32)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            RenderCommand::Stroke {
                bounds,
                color,
                width,
                corner_radius,
            } => Some((bounds, color, width, corner_radius)),
            _ => None,
        })
    }

    /// All icon commands as `(bounds, glyph, tint)`.
    pub fn icons(&self) -> impl Iterator<Item = (Rect, Glyph, Color)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            RenderCommand::Icon { bounds, glyph, tint } => Some((bounds, glyph, tint)),
            _ => None,
        })
    }

    /// Factor of the first scale in the frame, 1.0 if there is none.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.commands
            .iter()
            .find_map(|command| match *command {
                RenderCommand::PushScale { factor, .. } => Some(factor),
                _ => None,
            })
            .unwrap_or(1.0)
    }
}
