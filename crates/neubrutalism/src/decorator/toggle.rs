//! Toggle decorator: a boxed check/minus icon followed by a label.

use crate::decorator::{BaseDecorator, Binding, Control, ControlState, Response, View};
use crate::input::InputState;
use crate::layout::{Rect, Row, Size, Slot};
use crate::render::{Glyph, RenderCommand, Renderer};
use crate::style::{Color, StyleConfig, Theme};

/// Derives the icon, colors and box style from the toggle value.
///
/// Nothing here is configurable beyond the theme: on is accent + checkmark,
/// off is neutral + minus.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToggleDecorator {
    theme: Theme,
}

impl ToggleDecorator {
    /// Edge of the glyph frame.
    pub const ICON_SIZE: f32 = 18.0;
    /// Padding between glyph frame and box border.
    pub const ICON_PADDING: f32 = 2.0;
    /// Gap between the box and the label.
    pub const SPACING: f32 = 8.0;

    /// Creates a toggle decorator for the given theme.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Glyph for the value.
    #[must_use]
    pub const fn glyph(on: bool) -> Glyph {
        if on {
            Glyph::Checkmark
        } else {
            Glyph::Minus
        }
    }

    /// Icon and border color for the value.
    #[must_use]
    pub const fn color(&self, on: bool) -> Color {
        self.theme.resolve(on)
    }

    /// Box style for the value: defaults with the derived border color.
    #[must_use]
    pub fn style(&self, on: bool) -> StyleConfig {
        StyleConfig::default().with_border_color(self.color(on))
    }

    /// Size of the icon box.
    #[must_use]
    pub fn box_size() -> Size {
        let edge = Self::ICON_SIZE + Self::ICON_PADDING * 2.0;
        Size::new(edge, edge)
    }

    /// Size of box plus label.
    #[must_use]
    pub fn measure(&self, label: Size) -> Size {
        Row::new(Self::SPACING).measure(&[Slot::Fixed(Self::box_size()), Slot::Fixed(label)])
    }

    /// Emits the icon box and the label inside `bounds`.
    pub fn render<V: View>(&self, on: bool, label: &V, bounds: Rect, renderer: &mut Renderer) {
        let slots = [Slot::Fixed(Self::box_size()), Slot::Fixed(label.size())];
        let rects = Row::new(Self::SPACING).arrange(bounds, &slots);
        let (icon_box, label_rect) = (rects[0], rects[1]);
        let color = self.color(on);

        BaseDecorator::new(self.style(on)).decorate(icon_box, renderer, |renderer| {
            renderer.push(RenderCommand::Icon {
                bounds: icon_box.center_child(Size::new(Self::ICON_SIZE, Self::ICON_SIZE)),
                glyph: Self::glyph(on),
                tint: color,
            });
        });
        label.render(label_rect, self.theme.neutral, renderer);
    }
}

/// A decorated checkbox-style toggle bound to a host value.
#[derive(Debug, Clone)]
pub struct Toggle<L> {
    state: ControlState,
    label: L,
    value: Binding<bool>,
    decorator: ToggleDecorator,
}

impl<L: View> Toggle<L> {
    /// Creates a toggle over `value` with the default theme.
    #[must_use]
    pub fn new(value: Binding<bool>, label: L) -> Self {
        Self::with_theme(value, label, Theme::default())
    }

    /// Creates a toggle over `value` with a specific theme.
    #[must_use]
    pub fn with_theme(value: Binding<bool>, label: L, theme: Theme) -> Self {
        let decorator = ToggleDecorator::new(theme);
        let size = decorator.measure(label.size());
        Self {
            state: ControlState::new(size),
            label,
            value,
            decorator,
        }
    }

    /// Current value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.value.get()
    }

    /// Flips the bound value and returns the new value.
    pub fn toggle(&mut self) -> bool {
        let on = self.value.update(|on| !on);
        tracing::debug!(on, "toggle flipped");
        on
    }
}

impl<L: View> Control for Toggle<L> {
    fn state(&self) -> &ControlState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }

    fn size(&self) -> Size {
        self.decorator.measure(self.label.size())
    }

    fn update(&mut self, input: &InputState, _dt: f32) -> Response {
        if self.state.visible && input.tapped(self.state.rect) {
            self.toggle();
            return Response {
                clicked: true,
                changed: true,
                ..Response::default()
            };
        }
        Response::default()
    }

    fn render(&self, renderer: &mut Renderer) {
        if self.state.visible {
            self.decorator
                .render(self.is_on(), &self.label, self.state.rect, renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::Label;

    fn toggle(on: bool) -> (Binding<bool>, Toggle<Label>) {
        let value = Binding::new(on);
        let mut toggle = Toggle::new(value.clone(), Label::new("I agree"));
        toggle.place_at(0.0, 0.0);
        (value, toggle)
    }

    fn rendered(toggle: &Toggle<Label>) -> crate::render::Frame {
        let mut renderer = Renderer::new();
        toggle.render(&mut renderer);
        renderer.end_frame()
    }

    #[test]
    fn test_off_is_minus_and_neutral() {
        let (_, toggle) = toggle(false);
        let frame = rendered(&toggle);

        let (_, glyph, tint) = frame.icons().next().unwrap();
        assert_eq!(glyph, Glyph::Minus);
        assert_eq!(tint, Color::BLACK);
        let (_, border, _, _) = frame.strokes().next().unwrap();
        assert_eq!(border, Color::BLACK);
    }

    #[test]
    fn test_on_is_checkmark_and_accent() {
        let (_, toggle) = toggle(true);
        let frame = rendered(&toggle);

        let (_, glyph, tint) = frame.icons().next().unwrap();
        assert_eq!(glyph, Glyph::Checkmark);
        assert_eq!(tint, Theme::DEFAULT.accent);
        let (_, border, width, radius) = frame.strokes().next().unwrap();
        assert_eq!(border, Theme::DEFAULT.accent);
        assert_eq!(width, StyleConfig::DEFAULT.border_width);
        assert_eq!(radius, StyleConfig::DEFAULT.corner_radius);
    }

    #[test]
    fn test_label_stays_neutral() {
        let (_, toggle) = toggle(true);
        let frame = rendered(&toggle);

        let label_color = frame.commands.iter().find_map(|command| match command {
            RenderCommand::Text { color, .. } => Some(*color),
            _ => None,
        });
        assert_eq!(label_color, Some(Color::BLACK));
    }

    #[test]
    fn test_tap_flips_binding_once() {
        let (value, mut toggle) = toggle(false);
        let mut input = InputState::new();

        input.tap(5.0, 5.0);
        let response = toggle.update(&input, 0.016);
        assert!(response.changed);
        assert!(value.get());

        input.begin_frame();
        let response = toggle.update(&input, 0.016);
        assert!(!response.changed);
        assert!(value.get());
    }

    #[test]
    fn test_tap_on_label_also_flips() {
        let (value, mut toggle) = toggle(false);
        let label_x = ToggleDecorator::box_size().width + ToggleDecorator::SPACING + 4.0;
        let mut input = InputState::new();

        input.tap(label_x, 5.0);
        toggle.update(&input, 0.016);
        assert!(value.get());
    }

    #[test]
    fn test_external_change_is_rendered() {
        let (value, toggle) = toggle(false);
        value.set(true);

        let (_, glyph, _) = rendered(&toggle).icons().next().unwrap();
        assert_eq!(glyph, Glyph::Checkmark);
    }
}
