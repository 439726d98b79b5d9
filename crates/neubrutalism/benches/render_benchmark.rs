//! Benchmark for command generation and rasterization.
//!
//! Run with: cargo bench --package neubrutalism --bench render_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neubrutalism::{
    BaseDecorator, Binding, Button, Canvas, Color, Control, Glyph, Icon, InputState, Label, Rect, Renderer,
    StyleConfig, TextEntry, TextField, TextFieldDecorator, Toggle, View,
};

fn create_controls() -> (Button<Label>, TextField, Toggle<Label>) {
    let mut button = Button::new(Label::new("Press Me").padding(12.0, 24.0).bold());
    button.place_at(16.0, 16.0);

    let decorator = TextFieldDecorator::new()
        .prefix(Icon::new(Glyph::Magnifier))
        .suffix(Icon::new(Glyph::Xmark));
    let mut field = TextField::new(TextEntry::new("Search"), decorator);
    field.place(Rect::new(16.0, 80.0, 343.0, 44.0));

    let mut toggle = Toggle::new(Binding::new(true), Label::new("I agree to the terms"));
    toggle.place_at(16.0, 140.0);

    (button, field, toggle)
}

fn benchmark_decorate_100_cards(c: &mut Criterion) {
    let card = BaseDecorator::new(StyleConfig::default().with_corner_radius(8.0)).apply(Label::new("Card").padding(8.0, 16.0));
    let mut renderer = Renderer::new();

    c.bench_function("decorate_100_cards", |b| {
        b.iter(|| {
            renderer.begin_frame();
            for i in 0..100u16 {
                let bounds = Rect::new(0.0, f32::from(i) * 50.0, 200.0, 44.0);
                card.render(bounds, Color::BLACK, &mut renderer);
            }
            black_box(renderer.end_frame())
        });
    });
}

fn benchmark_control_frame(c: &mut Criterion) {
    let (mut button, mut field, mut toggle) = create_controls();
    let mut renderer = Renderer::new();
    let mut input = InputState::new();

    c.bench_function("update_and_render_controls", |b| {
        b.iter(|| {
            input.begin_frame();
            input.tap(40.0, 100.0);
            button.update(&input, 1.0 / 60.0);
            field.update(&input, 1.0 / 60.0);
            toggle.update(&input, 1.0 / 60.0);

            renderer.begin_frame();
            button.render(&mut renderer);
            field.render(&mut renderer);
            toggle.render(&mut renderer);
            black_box(renderer.end_frame())
        });
    });
}

fn benchmark_rasterize_showcase(c: &mut Criterion) {
    let (button, field, toggle) = create_controls();
    let mut renderer = Renderer::new();
    button.render(&mut renderer);
    field.render(&mut renderer);
    toggle.render(&mut renderer);
    let frame = renderer.end_frame();

    c.bench_function("rasterize_375x667", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(375, 667, Color::WHITE);
            canvas.draw(black_box(&frame));
            black_box(canvas.fingerprint())
        });
    });
}

criterion_group!(
    benches,
    benchmark_decorate_100_cards,
    benchmark_control_frame,
    benchmark_rasterize_showcase
);
criterion_main!(benches);
