//! Text field decorator with tap-driven focus tracking.
//!
//! Focus here is the decorator's own flag, not platform keyboard focus: a
//! tap on the entry flips it, disappearing clears it, and taps elsewhere
//! leave it alone.

use crate::decorator::{text_size, BaseDecorator, Control, ControlState, Icon, Label, Response, View};
use crate::input::InputState;
use crate::layout::{Insets, Rect, Row, Size, Slot};
use crate::render::{RenderCommand, Renderer};
use crate::style::{Color, StyleConfig, Theme};

/// Focus flag of a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
    /// Neutral border and icons.
    #[default]
    Unfocused,
    /// Accent border and icons.
    Focused,
}

/// Events that move a [`FocusState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// The entry was tapped.
    Tap,
    /// The field was removed from display.
    Disappear,
}

impl FocusState {
    /// State for a boolean flag.
    #[must_use]
    pub const fn from_focused(focused: bool) -> Self {
        if focused {
            Self::Focused
        } else {
            Self::Unfocused
        }
    }

    /// Whether this is [`FocusState::Focused`].
    #[must_use]
    pub const fn is_focused(self) -> bool {
        matches!(self, Self::Focused)
    }

    /// Transition function.
    #[must_use]
    pub const fn on(self, event: FocusEvent) -> Self {
        match (self, event) {
            (_, FocusEvent::Disappear) | (Self::Focused, FocusEvent::Tap) => Self::Unfocused,
            (Self::Unfocused, FocusEvent::Tap) => Self::Focused,
        }
    }
}

/// Where each piece of a text field goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFieldLayout {
    /// Decorated outer frame.
    pub frame: Rect,
    /// Leading icon, if any.
    pub prefix: Option<Rect>,
    /// Text entry area (the tap target).
    pub entry: Rect,
    /// Trailing icon, if any.
    pub suffix: Option<Rect>,
}

/// Styles a text entry with optional icons and a focus flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldDecorator {
    focus: FocusState,
    prefix: Option<Icon>,
    suffix: Option<Icon>,
    style: StyleConfig,
    theme: Theme,
}

impl TextFieldDecorator {
    /// Minimum field height.
    pub const MIN_HEIGHT: f32 = 44.0;
    /// Padding between the border and the row.
    pub const PADDING: f32 = 8.0;
    /// Gap between icons and the entry.
    pub const SPACING: f32 = 8.0;

    /// Unfocused, no icons, default style and theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            focus: FocusState::Unfocused,
            prefix: None,
            suffix: None,
            style: StyleConfig::DEFAULT,
            theme: Theme::DEFAULT,
        }
    }

    /// Sets the initial focus flag.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focus = FocusState::from_focused(focused);
        self
    }

    /// Sets the leading icon.
    #[must_use]
    pub fn prefix(mut self, icon: Icon) -> Self {
        self.prefix = Some(icon);
        self
    }

    /// Sets the trailing icon.
    #[must_use]
    pub fn suffix(mut self, icon: Icon) -> Self {
        self.suffix = Some(icon);
        self
    }

    /// Sets the style. `border_color` is the unfocused border color.
    #[must_use]
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = style.sanitized();
        self
    }

    /// Sets the theme supplying the accent.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Current focus state.
    #[must_use]
    pub const fn focus(&self) -> FocusState {
        self.focus
    }

    /// Whether the field is focused.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Applies a focus event and returns the new state.
    pub fn handle(&mut self, event: FocusEvent) -> FocusState {
        let next = self.focus.on(event);
        if next != self.focus {
            tracing::debug!(?event, from = ?self.focus, to = ?next, "text field focus changed");
        }
        self.focus = next;
        next
    }

    /// Border and icon color for the current state.
    #[must_use]
    pub const fn tint(&self) -> Color {
        if self.focus.is_focused() {
            self.theme.accent
        } else {
            self.style.border_color
        }
    }

    /// The style actually drawn: configured style with the tinted border.
    #[must_use]
    pub fn resolved_style(&self) -> StyleConfig {
        self.style.with_border_color(self.tint())
    }

    fn slots(&self, entry: Size) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(3);
        if let Some(icon) = &self.prefix {
            slots.push(Slot::Fixed(icon.size));
        }
        slots.push(Slot::Flexible(entry.height));
        if let Some(icon) = &self.suffix {
            slots.push(Slot::Fixed(icon.size));
        }
        slots
    }

    /// Natural size around an entry of natural size `entry`.
    #[must_use]
    pub fn measure(&self, entry: Size) -> Size {
        let row = Row::new(Self::SPACING).measure(&self.slots(entry));
        Size::new(row.width + entry.width, row.height)
            .outset(Insets::all(Self::PADDING))
            .at_least_height(Self::MIN_HEIGHT)
    }

    /// Lays the field out inside `bounds`; the entry takes the spare width.
    #[must_use]
    pub fn layout(&self, bounds: Rect, entry: Size) -> TextFieldLayout {
        let frame = Rect::from_origin_size((bounds.x, bounds.y), bounds.size().at_least_height(Self::MIN_HEIGHT));
        let rects = Row::new(Self::SPACING).arrange(frame.inset(Insets::all(Self::PADDING)), &self.slots(entry));

        let mut rects = rects.into_iter();
        let prefix = self.prefix.and_then(|_| rects.next());
        let entry = rects.next().unwrap_or(frame);
        let suffix = self.suffix.and_then(|_| rects.next());

        TextFieldLayout {
            frame,
            prefix,
            entry,
            suffix,
        }
    }

    /// Emits the decorated field with `entry` inside `bounds`.
    pub fn render<V: View>(&self, entry: &V, bounds: Rect, renderer: &mut Renderer) {
        let layout = self.layout(bounds, entry.size());
        let tint = self.tint();

        BaseDecorator::new(self.resolved_style()).decorate(layout.frame, renderer, |renderer| {
            if let (Some(icon), Some(rect)) = (&self.prefix, layout.prefix) {
                icon.render(rect, tint, renderer);
            }
            entry.render(layout.entry, tint, renderer);
            if let (Some(icon), Some(rect)) = (&self.suffix, layout.suffix) {
                icon.render(rect, tint, renderer);
            }
        });
    }
}

impl Default for TextFieldDecorator {
    fn default() -> Self {
        Self::new()
    }
}

/// The text-entry content: current text or a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    /// Entered text.
    pub text: String,
    /// Shown while `text` is empty.
    pub placeholder: String,
    /// Font size.
    pub font_size: f32,
    /// Color of entered text.
    pub text_color: Color,
    /// Color of the placeholder.
    pub placeholder_color: Color,
}

impl TextEntry {
    /// Empty entry with a placeholder.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.into(),
            font_size: Label::DEFAULT_FONT_SIZE,
            text_color: Color::BLACK,
            placeholder_color: Color::GRAY,
        }
    }

    /// Sets the entered text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    fn shown(&self) -> (&str, Color) {
        if self.text.is_empty() {
            (self.placeholder.as_str(), self.placeholder_color)
        } else {
            (self.text.as_str(), self.text_color)
        }
    }
}

impl View for TextEntry {
    fn size(&self) -> Size {
        let (shown, _) = self.shown();
        text_size(shown, self.font_size)
    }

    // Text keeps its own colors; only icons take the field tint.
    fn render(&self, bounds: Rect, _foreground: Color, renderer: &mut Renderer) {
        let (shown, color) = self.shown();
        let line = text_size(shown, self.font_size);
        renderer.push(RenderCommand::Text {
            text: shown.to_owned(),
            origin: (bounds.x, bounds.y + (bounds.height - line.height) * 0.5),
            color,
            font_size: self.font_size,
            bold: false,
        });
    }
}

/// A decorated text field.
#[derive(Debug, Clone)]
pub struct TextField {
    state: ControlState,
    entry: TextEntry,
    decorator: TextFieldDecorator,
}

impl TextField {
    /// Creates a text field around `entry`.
    #[must_use]
    pub fn new(entry: TextEntry, decorator: TextFieldDecorator) -> Self {
        let size = decorator.measure(entry.size());
        Self {
            state: ControlState::new(size),
            entry,
            decorator,
        }
    }

    /// The decorator, for inspecting focus.
    #[must_use]
    pub const fn decorator(&self) -> &TextFieldDecorator {
        &self.decorator
    }

    /// The entry content.
    #[must_use]
    pub const fn entry(&self) -> &TextEntry {
        &self.entry
    }

    /// Replaces the entered text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.entry.text = text.into();
    }

    /// Current layout for the placed bounds.
    #[must_use]
    pub fn layout(&self) -> TextFieldLayout {
        self.decorator.layout(self.state.rect, self.entry.size())
    }
}

impl Control for TextField {
    fn state(&self) -> &ControlState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }

    fn size(&self) -> Size {
        self.decorator.measure(self.entry.size())
    }

    fn update(&mut self, input: &InputState, _dt: f32) -> Response {
        if !self.state.visible || !input.tapped(self.layout().entry) {
            return Response::default();
        }

        let focused = self.decorator.handle(FocusEvent::Tap).is_focused();
        Response {
            clicked: true,
            focused,
            unfocused: !focused,
            ..Response::default()
        }
    }

    fn render(&self, renderer: &mut Renderer) {
        if self.state.visible {
            self.decorator.render(&self.entry, self.state.rect, renderer);
        }
    }

    fn disappear(&mut self) {
        self.state.visible = false;
        self.decorator.handle(FocusEvent::Disappear);
    }
}
