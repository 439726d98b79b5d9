//! The showcase screen: two note cards, a search field, a toggle and a
//! full-width button.

use neubrutalism::{
    Binding, Button, Canvas, Color, Control, Frame, Glyph, Icon, InputState, Insets, Label, Rect, RenderCommand,
    Renderer, Size, StyleSheet, Styled, TextEntry, TextField, Toggle, View,
};

const MARGIN: f32 = 16.0;
const GAP: f32 = 16.0;
const CARD_HEIGHT: f32 = 161.0;
const SWATCH_WIDTH: f32 = 96.0;
const BODY_FONT: f32 = 15.0;
const LINE_GAP: f32 = 8.0;

/// A note card: bold title with an arrow, gray timestamp, wrapped body.
#[derive(Debug, Clone)]
pub struct Card {
    title: Label,
    subtitle: Label,
    body: String,
    swatch: bool,
}

impl Card {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: Label::new(title).font_size(20.0).bold(),
            subtitle: Label::new("Edited on Sat, 12:05").font_size(BODY_FONT).color(Color::GRAY),
            body: body.to_owned(),
            swatch: false,
        }
    }

    /// Adds a translucent gray block down the left edge.
    fn with_swatch(mut self) -> Self {
        self.swatch = true;
        self
    }

    fn content_rect(&self, bounds: Rect) -> Rect {
        if self.swatch {
            let inner = bounds.inset(Insets::all(8.0));
            Rect::new(
                inner.x + SWATCH_WIDTH,
                inner.y,
                (inner.width - SWATCH_WIDTH - 8.0).max(0.0),
                inner.height,
            )
        } else {
            bounds.inset(Insets::all(MARGIN))
        }
    }
}

impl View for Card {
    fn size(&self) -> Size {
        Size::new(0.0, CARD_HEIGHT)
    }

    fn render(&self, bounds: Rect, foreground: Color, renderer: &mut Renderer) {
        if self.swatch {
            renderer.push(RenderCommand::Fill {
                bounds: Rect::new(bounds.x, bounds.y, SWATCH_WIDTH, bounds.height),
                color: Color::GRAY.opacity(0.4),
                corner_radius: 0.0,
            });
        }

        let content = self.content_rect(bounds);
        let mut y = content.y;

        let title = self.title.size();
        self.title
            .render(Rect::from_origin_size((content.x, y), title), foreground, renderer);
        let arrow = Icon::new(Glyph::ArrowRight);
        arrow.render(
            Rect::new(content.right() - arrow.size.width, y, arrow.size.width, title.height),
            foreground,
            renderer,
        );
        y += title.height + LINE_GAP;

        let subtitle = self.subtitle.size();
        self.subtitle
            .render(Rect::from_origin_size((content.x, y), subtitle), foreground, renderer);
        y += subtitle.height + LINE_GAP;

        let line = Label::new("").font_size(BODY_FONT).size();
        let columns = (content.width / (BODY_FONT * 0.6)).floor().max(1.0) as usize;
        for text in wrap(&self.body, columns) {
            if y + line.height > content.bottom() {
                break;
            }
            let label = Label::new(text).font_size(BODY_FONT);
            label.render(Rect::from_origin_size((content.x, y), label.size()), foreground, renderer);
            y += line.height;
        }
    }
}

/// Greedy word wrap to at most `columns` characters per line.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > columns && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Every element of the showcase screen, placed for one viewport.
pub struct Showcase {
    cards: Vec<(Rect, Styled<Card>)>,
    search: TextField,
    agree: Toggle<Label>,
    button: Button<Label>,
}

impl Showcase {
    /// Lays the screen out for a `width` x `height` viewport.
    pub fn new(sheet: &StyleSheet, width: f32, height: f32) -> Self {
        let column = (width - MARGIN * 2.0).max(0.0);
        let card = |y: f32| Rect::new(MARGIN, y, column, CARD_HEIGHT);

        let cards = vec![
            (
                card(MARGIN),
                sheet.base_decorator().apply(Card::new(
                    "Important!",
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vivamus in rutrum metus. \
                     Pellentesque commodo ante neque, eu hendrerit lorem gravida et. Aliquam scelerisque...",
                )),
            ),
            (
                card(MARGIN + CARD_HEIGHT + GAP),
                sheet.base_decorator().apply(
                    Card::new(
                        "Design Mood",
                        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vivamus in rutrum metus....",
                    )
                    .with_swatch(),
                ),
            ),
        ];

        let field_y = MARGIN + (CARD_HEIGHT + GAP) * 2.0;
        let decorator = sheet
            .text_field_decorator()
            .prefix(Icon::new(Glyph::Magnifier))
            .suffix(Icon::new(Glyph::Xmark));
        let mut search = TextField::new(TextEntry::new("Search"), decorator);
        search.place(Rect::new(MARGIN, field_y, column, search.size().height));

        let mut agree = Toggle::with_theme(
            Binding::new(false),
            Label::new("I agree to the terms"),
            sheet.theme,
        );
        agree.place_at(MARGIN, field_y + search.size().height + GAP);

        let mut button = Button::with_decorator(
            Label::new("NeubrutalismStyle").font_size(16.0).bold(),
            sheet.button_decorator(),
        );
        let button_height = button.size().height;
        button.place(Rect::new(MARGIN, height - MARGIN - button_height, column, button_height));

        Self {
            cards,
            search,
            agree,
            button,
        }
    }

    /// Simulates a tap on the search field's entry.
    pub fn tap_search(&mut self) {
        let (x, y) = self.search.layout().entry.center();
        let mut input = InputState::new();
        input.tap(x, y);

        self.search.update(&input, 0.0);
        self.agree.update(&input, 0.0);
        self.button.update(&input, 0.0);
    }

    /// Whether the search field has focus.
    pub fn search_focused(&self) -> bool {
        self.search.decorator().is_focused()
    }

    /// Render commands for the whole screen.
    pub fn frame(&self) -> Frame {
        let mut renderer = Renderer::new();
        renderer.begin_frame();
        for (bounds, card) in &self.cards {
            card.render(*bounds, Color::BLACK, &mut renderer);
        }
        self.search.render(&mut renderer);
        self.agree.render(&mut renderer);
        self.button.render(&mut renderer);
        renderer.end_frame()
    }

    /// Paints the screen onto a white canvas.
    pub fn paint(&self, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height, Color::WHITE);
        canvas.draw(&self.frame());
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_columns() {
        let lines = wrap("aaa bbb ccc dddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc", "dddd"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_tap_focuses_search() {
        let mut showcase = Showcase::new(&StyleSheet::default(), 375.0, 667.0);
        assert!(!showcase.search_focused());

        let before = showcase.paint(375, 667).fingerprint();
        showcase.tap_search();
        assert!(showcase.search_focused());
        assert_ne!(before, showcase.paint(375, 667).fingerprint());
    }

    #[test]
    fn test_button_pinned_to_bottom() {
        let showcase = Showcase::new(&StyleSheet::default(), 375.0, 667.0);
        let rect = showcase.button.state().rect;
        assert_eq!(rect.bottom(), 667.0 - MARGIN);
        assert_eq!(rect.width, 343.0);
    }
}
