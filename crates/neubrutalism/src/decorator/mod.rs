//! Decorators and the controls they style.
//!
//! A decorator is a pure function of (style, interaction state, bounds) to
//! render commands. A control pairs a decorator with its content and its
//! per-instance interaction state, and is what a host actually places,
//! feeds input to and renders.

mod base;
mod button;
mod text_field;
mod toggle;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::input::InputState;
use crate::layout::{Insets, Rect, Size};
use crate::render::{Glyph, RenderCommand, Renderer};
use crate::style::Color;

pub use base::{BaseDecorator, Layer, Styled};
pub use button::{Button, ButtonDecorator};
pub use text_field::{FocusEvent, FocusState, TextEntry, TextField, TextFieldDecorator, TextFieldLayout};
pub use toggle::{Toggle, ToggleDecorator};

/// Width of one text cell, as a fraction of the font size.
pub(crate) const CHAR_WIDTH_EM: f32 = 0.6;
/// Height of one text line, as a fraction of the font size.
pub(crate) const LINE_HEIGHT_EM: f32 = 1.2;

/// Measured size of a single line of text.
pub(crate) fn text_size(text: &str, font_size: f32) -> Size {
    Size::new(
        text.chars().count() as f32 * font_size * CHAR_WIDTH_EM,
        font_size * LINE_HEIGHT_EM,
    )
}

/// Content that a decorator can wrap.
pub trait View {
    /// Natural size of the content.
    fn size(&self) -> Size;

    /// Appends the content's commands, laid out inside `bounds`.
    ///
    /// `foreground` is the inherited ink color; content with its own color
    /// ignores it.
    fn render(&self, bounds: Rect, foreground: Color, renderer: &mut Renderer);
}

/// A padded single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text content.
    pub text: String,
    /// Font size.
    pub font_size: f32,
    /// Bold weight.
    pub bold: bool,
    /// Padding around the text.
    pub padding: Insets,
    /// Explicit color, overriding the inherited foreground.
    pub color: Option<Color>,
}

impl Label {
    /// Default body font size.
    pub const DEFAULT_FONT_SIZE: f32 = 17.0;

    /// Creates an unpadded label in the body font.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            bold: false,
            padding: Insets::ZERO,
            color: None,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Uses the bold weight.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Pads `vertical` on top and bottom, `horizontal` on left and right.
    #[must_use]
    pub fn padding(mut self, vertical: f32, horizontal: f32) -> Self {
        self.padding = Insets::symmetric(vertical, horizontal);
        self
    }

    /// Fixes the text color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl View for Label {
    fn size(&self) -> Size {
        text_size(&self.text, self.font_size).outset(self.padding)
    }

    fn render(&self, bounds: Rect, foreground: Color, renderer: &mut Renderer) {
        let line = bounds
            .inset(self.padding)
            .center_child(text_size(&self.text, self.font_size));
        renderer.push(RenderCommand::Text {
            text: self.text.clone(),
            origin: (line.x, line.y),
            color: self.color.unwrap_or(foreground),
            font_size: self.font_size,
            bold: self.bold,
        });
    }
}

/// A template icon, tinted with the inherited foreground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    /// Shape.
    pub glyph: Glyph,
    /// Drawn size.
    pub size: Size,
}

impl Icon {
    /// Default icon edge length.
    pub const DEFAULT_SIZE: f32 = 20.0;

    /// Creates an icon at the default size.
    #[must_use]
    pub const fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            size: Size::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE),
        }
    }

    /// Sets a square size.
    #[must_use]
    pub const fn sized(mut self, edge: f32) -> Self {
        self.size = Size::new(edge, edge);
        self
    }
}

impl View for Icon {
    fn size(&self) -> Size {
        self.size
    }

    fn render(&self, bounds: Rect, foreground: Color, renderer: &mut Renderer) {
        renderer.push(RenderCommand::Icon {
            bounds: bounds.center_child(self.size),
            glyph: self.glyph,
            tint: foreground,
        });
    }
}

/// State shared by every control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// Bounds assigned by the host.
    pub rect: Rect,
    /// Whether the control is on display.
    pub visible: bool,
}

impl ControlState {
    /// A visible control at the origin with the given size.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            rect: Rect::from_origin_size((0.0, 0.0), size),
            visible: true,
        }
    }
}

/// Response from a control update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// A press was released over the control.
    pub clicked: bool,
    /// The control's bound value changed.
    pub changed: bool,
    /// The control became focused.
    pub focused: bool,
    /// The control lost focus.
    pub unfocused: bool,
}

/// A placed, interactive, decorated control.
pub trait Control {
    /// Returns the control's state.
    fn state(&self) -> &ControlState;

    /// Returns mutable access to the control's state.
    fn state_mut(&mut self) -> &mut ControlState;

    /// Natural size of the decorated control.
    fn size(&self) -> Size;

    /// Handles this frame's input and advances animations by `dt` seconds.
    fn update(&mut self, input: &InputState, dt: f32) -> Response;

    /// Appends the control's commands. Hidden controls draw nothing.
    fn render(&self, renderer: &mut Renderer);

    /// Assigns the control's bounds.
    fn place(&mut self, rect: Rect) {
        self.state_mut().rect = rect;
    }

    /// Places the control at `(x, y)` with its natural size.
    fn place_at(&mut self, x: f32, y: f32) {
        let size = self.size();
        self.place(Rect::from_origin_size((x, y), size));
    }

    /// Called when the control is removed from display.
    fn disappear(&mut self) {
        self.state_mut().visible = false;
    }

    /// Called when the control is put back on display.
    fn appear(&mut self) {
        self.state_mut().visible = true;
    }
}

/// A value owned by the host and shared with a control.
///
/// Clones share the same slot, so a write through the control is visible
/// to the host immediately.
#[derive(Debug, Default)]
pub struct Binding<T> {
    slot: Arc<RwLock<T>>,
}

impl<T: Copy> Binding<T> {
    /// Creates a binding holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(RwLock::new(value)),
        }
    }

    /// Reads the current value.
    #[must_use]
    pub fn get(&self) -> T {
        *self.slot.read()
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        *self.slot.write() = value;
    }

    /// Applies `f` to the value in place and returns the new value.
    pub fn update(&self, f: impl FnOnce(T) -> T) -> T {
        let mut slot = self.slot.write();
        *slot = f(*slot);
        *slot
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}
