//! Button decorator: base look, 44pt minimum height, press-to-shrink.

use crate::animation::{Animation, Easing};
use crate::decorator::{BaseDecorator, Control, ControlState, Response, View};
use crate::input::InputState;
use crate::layout::{Rect, Size};
use crate::render::Renderer;
use crate::style::{Color, StyleConfig, Theme};

/// Styles a pressable label and owns its press-scale tween.
///
/// The decorator never decides whether it is pressed; the host's press
/// recognition does, through [`ButtonDecorator::set_pressed`].
#[derive(Debug, Clone)]
pub struct ButtonDecorator {
    base: BaseDecorator,
    pressed: bool,
    scale: Animation,
}

impl ButtonDecorator {
    /// Minimum tappable height.
    pub const MIN_HEIGHT: f32 = 44.0;
    /// Scale while pressed.
    pub const PRESSED_SCALE: f32 = 0.95;
    /// Length of the scale tween in seconds.
    pub const PRESS_DURATION: f32 = 0.2;

    /// Creates a button decorator with the given style.
    #[must_use]
    pub fn new(style: StyleConfig) -> Self {
        Self {
            base: BaseDecorator::new(style),
            pressed: false,
            scale: Animation::new(1.0, Easing::EaseOut).with_duration(Self::PRESS_DURATION),
        }
    }

    /// The accent-filled variant: default style on the theme's accent.
    #[must_use]
    pub fn filled(theme: &Theme) -> Self {
        Self::new(StyleConfig::default().with_background(theme.accent))
    }

    /// The style in use.
    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        self.base.style()
    }

    /// Feeds the host's pressed state; retargets the tween on change.
    pub fn set_pressed(&mut self, pressed: bool) {
        if pressed == self.pressed {
            return;
        }
        tracing::debug!(pressed, "button press state changed");
        self.pressed = pressed;
        self.scale.set_target(if pressed { Self::PRESSED_SCALE } else { 1.0 });
    }

    /// Whether the button is currently pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Advances the scale tween by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.scale.update(dt);
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Drops any press and snaps back to full size.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.scale.set_immediate(1.0);
    }

    /// Size of the decorated button around a label of `label` size.
    #[must_use]
    pub fn measure(&self, label: Size) -> Size {
        label.at_least_height(Self::MIN_HEIGHT)
    }

    /// Drawn and tappable frame for a button placed at `bounds`.
    #[must_use]
    pub fn frame(bounds: Rect) -> Rect {
        Rect::from_origin_size((bounds.x, bounds.y), bounds.size().at_least_height(Self::MIN_HEIGHT))
    }

    /// Emits the scaled, decorated button with `label` centered in `bounds`.
    pub fn render<V: View>(&self, label: &V, bounds: Rect, foreground: Color, renderer: &mut Renderer) {
        let frame = Self::frame(bounds);
        renderer.push_scale(self.scale(), frame.center());
        self.base.decorate(frame, renderer, |renderer| {
            label.render(frame.center_child(label.size()), foreground, renderer);
        });
        renderer.pop_scale();
    }
}

impl Default for ButtonDecorator {
    fn default() -> Self {
        Self::new(StyleConfig::DEFAULT)
    }
}

/// A decorated push button.
#[derive(Debug, Clone)]
pub struct Button<L> {
    state: ControlState,
    label: L,
    decorator: ButtonDecorator,
    foreground: Color,
}

impl<L: View> Button<L> {
    /// Creates a button with the default style.
    #[must_use]
    pub fn new(label: L) -> Self {
        Self::with_decorator(label, ButtonDecorator::default())
    }

    /// Creates a button with a specific decorator.
    #[must_use]
    pub fn with_decorator(label: L, decorator: ButtonDecorator) -> Self {
        let size = decorator.measure(label.size());
        Self {
            state: ControlState::new(size),
            label,
            decorator,
            foreground: Color::BLACK,
        }
    }

    /// Sets the label ink.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// The decorator, for inspecting press state and scale.
    #[must_use]
    pub const fn decorator(&self) -> &ButtonDecorator {
        &self.decorator
    }
}

impl<L: View> Control for Button<L> {
    fn state(&self) -> &ControlState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }

    fn size(&self) -> Size {
        self.decorator.measure(self.label.size())
    }

    fn update(&mut self, input: &InputState, dt: f32) -> Response {
        let rect = ButtonDecorator::frame(self.state.rect);
        let visible = self.state.visible;

        self.decorator.set_pressed(visible && input.is_pressing(rect));
        self.decorator.update(dt);

        Response {
            clicked: visible && input.tapped(rect),
            ..Response::default()
        }
    }

    fn render(&self, renderer: &mut Renderer) {
        if self.state.visible {
            self.decorator
                .render(&self.label, self.state.rect, self.foreground, renderer);
        }
    }

    fn disappear(&mut self) {
        self.state.visible = false;
        self.decorator.reset();
    }
}
