//! # Pixel Tests
//!
//! Paints decorated controls into a [`Canvas`] and checks the pixels that
//! define the look: border thickness, shadow offset and opacity, rounded
//! corners, press shrink, accent recolor.

use neubrutalism::{
    BaseDecorator, Binding, Button, Canvas, Color, Control, InputState, Label, Rect, Renderer, Rgba8, StyleConfig,
    TextEntry, TextField, TextFieldDecorator, Theme, Toggle,
};

const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
/// Black at 80% over white.
const SHADOW: Rgba8 = Rgba8::new(51, 51, 51, 255);

fn paint(width: u32, height: u32, draw: impl FnOnce(&mut Renderer)) -> Canvas {
    let mut renderer = Renderer::new();
    renderer.begin_frame();
    draw(&mut renderer);
    let mut canvas = Canvas::new(width, height, Color::WHITE);
    canvas.draw(&renderer.end_frame());
    canvas
}

fn pixel(canvas: &Canvas, x: u32, y: u32) -> Rgba8 {
    canvas.pixel(x, y).unwrap()
}

/// Test: Default style draws a 2px border straddling the edge.
#[test]
fn test_default_border_is_two_pixels() {
    let canvas = paint(64, 64, |renderer| {
        BaseDecorator::default().decorate(Rect::new(10.0, 10.0, 40.0, 40.0), renderer, |_| {});
    });

    assert_eq!(pixel(&canvas, 8, 30), WHITE);
    assert_eq!(pixel(&canvas, 9, 30), BLACK);
    assert_eq!(pixel(&canvas, 10, 30), BLACK);
    assert_eq!(pixel(&canvas, 11, 30), WHITE);
    assert_eq!(pixel(&canvas, 30, 30), WHITE);
    assert_eq!(pixel(&canvas, 49, 30), BLACK);
    assert_eq!(pixel(&canvas, 50, 30), BLACK);
}

/// Test: Shadow is offset 4px down and right, border color at 80%.
#[test]
fn test_hard_shadow_offset_and_opacity() {
    let canvas = paint(64, 64, |renderer| {
        BaseDecorator::default().decorate(Rect::new(10.0, 10.0, 40.0, 40.0), renderer, |_| {});
    });

    assert!(pixel(&canvas, 51, 30).approx_eq(SHADOW, 1));
    assert!(pixel(&canvas, 53, 30).approx_eq(SHADOW, 1));
    assert_eq!(pixel(&canvas, 54, 30), WHITE);
    assert!(pixel(&canvas, 53, 53).approx_eq(SHADOW, 1));
    // Zero blur: nothing to the upper left
    assert_eq!(pixel(&canvas, 8, 8), WHITE);
    assert_eq!(pixel(&canvas, 12, 53), WHITE);
}

/// Test: Corner radius carves the corners out of the fill.
#[test]
fn test_corner_radius_rounds_fill() {
    let style = StyleConfig::default()
        .with_background(Color::BLACK)
        .with_corner_radius(12.0)
        .with_border_width(0.0)
        .with_shadow_offset(0.0);
    let canvas = paint(64, 64, |renderer| {
        BaseDecorator::new(style).decorate(Rect::new(10.0, 10.0, 40.0, 40.0), renderer, |_| {});
    });

    assert_eq!(pixel(&canvas, 10, 10), WHITE);
    assert_eq!(pixel(&canvas, 49, 49), WHITE);
    assert_eq!(pixel(&canvas, 30, 10), BLACK);
    assert_eq!(pixel(&canvas, 30, 30), BLACK);
}

/// Test: A pressed button shrinks about its center.
#[test]
fn test_pressed_button_shrinks() {
    let mut button = Button::new(Label::new("Press").font_size(10.0).padding(12.0, 20.0));
    button.place_at(10.0, 10.0);
    let render = |button: &Button<Label>| paint(100, 64, |renderer| button.render(renderer));

    let idle = render(&button);
    assert_eq!(pixel(&idle, 9, 32), BLACK);

    let mut input = InputState::new();
    input.pointer_down(45.0, 32.0);
    button.update(&input, 0.25);
    let pressed = render(&button);

    assert_eq!(pixel(&pressed, 9, 32), WHITE);
    assert_eq!(pixel(&pressed, 10, 32), WHITE);
    assert_eq!(pixel(&pressed, 12, 32), BLACK);
    assert_ne!(idle.fingerprint(), pressed.fingerprint());
}

/// Test: Focus recolors the text field border with the accent.
#[test]
fn test_focused_border_is_accent() {
    let mut field = TextField::new(TextEntry::new("Search"), TextFieldDecorator::new());
    field.place(Rect::new(10.0, 10.0, 300.0, 44.0));
    let render = |field: &TextField| paint(320, 64, |renderer| field.render(renderer));

    assert_eq!(pixel(&render(&field), 9, 32), BLACK);

    let (cx, cy) = field.layout().entry.center();
    let mut input = InputState::new();
    input.tap(cx, cy);
    field.update(&input, 0.0);

    let focused = render(&field);
    assert_eq!(pixel(&focused, 9, 32), Rgba8::from_color(Theme::DEFAULT.accent));
    assert_eq!(pixel(&focused, 10, 32), Rgba8::from_color(Theme::DEFAULT.accent));
}

/// Test: Off shows a minus bar, on shows a checkmark and an accent box.
#[test]
fn test_toggle_glyph_pixels() {
    let value = Binding::new(false);
    let mut toggle = Toggle::new(value.clone(), Label::new("I agree"));
    toggle.place_at(10.0, 10.0);
    let render = |toggle: &Toggle<Label>| paint(120, 40, |renderer| toggle.render(renderer));

    let off = render(&toggle);
    assert_eq!(pixel(&off, 21, 20), BLACK);
    assert_eq!(pixel(&off, 9, 20), BLACK);

    value.set(true);
    let on = render(&toggle);
    assert_eq!(pixel(&on, 21, 20), WHITE);
    assert_eq!(pixel(&on, 9, 20), Rgba8::from_color(Theme::DEFAULT.accent));
}

/// Test: Rendering the same state twice is pixel-identical.
#[test]
fn test_fingerprint_is_stable() {
    let field = {
        let mut field = TextField::new(TextEntry::new("Email"), TextFieldDecorator::new().focused(true));
        field.place(Rect::new(16.0, 16.0, 280.0, 44.0));
        field
    };

    let first = paint(320, 80, |renderer| field.render(renderer));
    let second = paint(320, 80, |renderer| field.render(renderer));
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first, second);
}
