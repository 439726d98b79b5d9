//! # Neubrutalism
//!
//! Styling decorators for the neubrutalism look:
//! - Thick solid borders
//! - Hard drop shadows (zero blur, offset down and right)
//! - Flat fills, square corners by default
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  InputState → Control::update → Control::render → Frame     │
//! │       ↓               ↓                 ↓            ↓      │
//! │  press / tap    focus, toggle,     decorator      Canvas    │
//! │  recognition    press tween        layers         (pixels)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every decorator is a projection of (style, interaction state, bounds) to
//! render commands. The base decorator always draws in the same order:
//! shadow, background, content, border.
//!
//! ```
//! use neubrutalism::{Button, ButtonDecorator, Color, Control, Label, Renderer, StyleConfig};
//!
//! let mut button = Button::with_decorator(
//!     Label::new("Press Me").padding(12.0, 24.0).bold(),
//!     ButtonDecorator::new(StyleConfig::default().with_background(Color::YELLOW)),
//! );
//! button.place_at(16.0, 16.0);
//!
//! let mut renderer = Renderer::new();
//! button.render(&mut renderer);
//! let frame = renderer.end_frame();
//! assert_eq!(frame.scale(), 1.0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod decorator;
pub mod error;
pub mod input;
pub mod layout;
pub mod raster;
pub mod render;
pub mod style;

pub use animation::{Animation, Easing};
pub use config::StyleSheet;
pub use decorator::{
    BaseDecorator, Binding, Button, ButtonDecorator, Control, ControlState, FocusEvent, FocusState, Icon, Label,
    Layer, Response, Styled, TextEntry, TextField, TextFieldDecorator, TextFieldLayout, Toggle, ToggleDecorator, View,
};
pub use error::StyleError;
pub use input::InputState;
pub use layout::{Insets, Rect, Row, Size, Slot};
pub use raster::{Canvas, Rgba8};
pub use render::{Frame, Glyph, RenderCommand, Renderer};
pub use style::{Color, StyleConfig, Theme};
