//! The base look: hard shadow, flat background, content, thick border.

use crate::decorator::View;
use crate::layout::{Rect, Size};
use crate::render::{RenderCommand, Renderer};
use crate::style::{Color, StyleConfig};

/// One step of the base decorator's draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Border color at 80% opacity, offset down and right, zero blur.
    Shadow,
    /// Background fill, rounded by the corner radius.
    Background,
    /// The wrapped content.
    Content,
    /// Rounded-rectangle stroke, drawn over the content.
    Border,
}

/// Applies a [`StyleConfig`] around arbitrary content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseDecorator {
    style: StyleConfig,
}

impl BaseDecorator {
    /// Draw order, back to front.
    pub const LAYERS: [Layer; 4] = [Layer::Shadow, Layer::Background, Layer::Content, Layer::Border];

    /// Creates a decorator. Negative or NaN numbers are clamped to zero.
    #[must_use]
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style: style.sanitized(),
        }
    }

    /// The (sanitized) style in use.
    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Wraps `content` so it can be used wherever a [`View`] is expected.
    #[must_use]
    pub fn apply<V: View>(self, content: V) -> Styled<V> {
        Styled {
            decorator: self,
            content,
        }
    }

    /// Emits the decorated layers for `bounds`, calling `content` at the
    /// [`Layer::Content`] step.
    pub fn decorate(&self, bounds: Rect, renderer: &mut Renderer, content: impl FnOnce(&mut Renderer)) {
        let style = &self.style;
        let mut content = Some(content);

        for layer in Self::LAYERS {
            match layer {
                Layer::Shadow => renderer.push(RenderCommand::Shadow {
                    bounds,
                    color: style.shadow_color(),
                    corner_radius: style.corner_radius,
                    offset: (style.shadow_offset, style.shadow_offset),
                }),
                Layer::Background => renderer.push(RenderCommand::Fill {
                    bounds,
                    color: style.background,
                    corner_radius: style.corner_radius,
                }),
                Layer::Content => {
                    if let Some(content) = content.take() {
                        content(renderer);
                    }
                }
                Layer::Border => renderer.push(RenderCommand::Stroke {
                    bounds,
                    color: style.border_color,
                    width: style.border_width,
                    corner_radius: style.corner_radius,
                }),
            }
        }
    }
}

impl Default for BaseDecorator {
    fn default() -> Self {
        Self::new(StyleConfig::DEFAULT)
    }
}

/// A view wrapped by a [`BaseDecorator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Styled<V> {
    decorator: BaseDecorator,
    content: V,
}

impl<V> Styled<V> {
    /// The decorator in use.
    #[must_use]
    pub const fn decorator(&self) -> &BaseDecorator {
        &self.decorator
    }

    /// The wrapped content.
    #[must_use]
    pub const fn content(&self) -> &V {
        &self.content
    }
}

impl<V: View> View for Styled<V> {
    fn size(&self) -> Size {
        self.content.size()
    }

    fn render(&self, bounds: Rect, foreground: Color, renderer: &mut Renderer) {
        self.decorator
            .decorate(bounds, renderer, |renderer| self.content.render(bounds, foreground, renderer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::Label;

    fn render_default(style: StyleConfig) -> Vec<RenderCommand> {
        let mut renderer = Renderer::new();
        let label = Label::new("NeubrutalismStyle").padding(8.0, 16.0);
        let bounds = Rect::from_origin_size((10.0, 10.0), label.size());
        BaseDecorator::new(style)
            .apply(label)
            .render(bounds, Color::BLACK, &mut renderer);
        renderer.end_frame().commands
    }

    #[test]
    fn test_layer_order() {
        let commands = render_default(StyleConfig::default());

        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], RenderCommand::Shadow { .. }));
        assert!(matches!(commands[1], RenderCommand::Fill { .. }));
        assert!(matches!(commands[2], RenderCommand::Text { .. }));
        assert!(matches!(commands[3], RenderCommand::Stroke { .. }));
    }

    #[test]
    fn test_style_echoed_into_commands() {
        let style = StyleConfig::default()
            .with_background(Color::YELLOW)
            .with_border_color(Color::BLUE)
            .with_corner_radius(12.0)
            .with_border_width(3.0)
            .with_shadow_offset(6.0);
        let commands = render_default(style);

        match &commands[0] {
            RenderCommand::Shadow {
                color,
                corner_radius,
                offset,
                ..
            } => {
                assert_eq!(*color, Color::BLUE.opacity(0.8));
                assert_eq!(*corner_radius, 12.0);
                assert_eq!(*offset, (6.0, 6.0));
            }
            other => panic!("expected shadow, got {other:?}"),
        }
        match &commands[1] {
            RenderCommand::Fill { color, corner_radius, .. } => {
                assert_eq!(*color, Color::YELLOW);
                assert_eq!(*corner_radius, 12.0);
            }
            other => panic!("expected fill, got {other:?}"),
        }
        match &commands[3] {
            RenderCommand::Stroke {
                color,
                width,
                corner_radius,
                ..
            } => {
                assert_eq!(*color, Color::BLUE);
                assert_eq!(*width, 3.0);
                assert_eq!(*corner_radius, 12.0);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_clamped() {
        let decorator = BaseDecorator::new(StyleConfig {
            corner_radius: -1.0,
            border_width: -2.0,
            shadow_offset: -4.0,
            ..StyleConfig::default()
        });

        assert_eq!(decorator.style().corner_radius, 0.0);
        assert_eq!(decorator.style().border_width, 0.0);
        assert_eq!(decorator.style().shadow_offset, 0.0);
    }

    #[test]
    fn test_styled_reports_content_size() {
        let styled = BaseDecorator::default().apply(Label::new("Card").padding(8.0, 16.0));
        assert_eq!(styled.content().text, "Card");
        assert_eq!(styled.size(), styled.content().size());
        assert_eq!(styled.decorator(), &BaseDecorator::default());
    }

    #[test]
    fn test_decorate_is_idempotent() {
        let first = render_default(StyleConfig::default());
        let second = render_default(StyleConfig::default());
        assert_eq!(first, second);
    }
}
