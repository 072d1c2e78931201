//! Integration tests driving an aligned form through the public API.

use std::sync::Arc;

use fieldcap::text::FixedAdvanceMeasure;
use fieldcap::theme::DISABLED_ALPHA;
use fieldcap::widget::{FieldArena, LabelWidth, Widget, WidgetEvent};
use fieldcap::{
    Appearance, Color, Font, LayoutDirection, PaintContext, Point, Rect, Renderer, RoundedRect,
    Stroke,
};

/// A renderer that collects drawn text and ignores everything else.
struct TextCollector {
    antialias: bool,
    texts: Vec<String>,
}

impl TextCollector {
    fn new() -> Self {
        Self {
            antialias: true,
            texts: Vec::new(),
        }
    }
}

impl Renderer for TextCollector {
    fn save(&mut self) {}
    fn restore(&mut self) {}

    fn set_antialias(&mut self, enabled: bool) {
        self.antialias = enabled;
    }

    fn antialias(&self) -> bool {
        self.antialias
    }

    fn clip_rect(&mut self, _rect: Rect) {}
    fn clip_rounded_rect(&mut self, _rect: RoundedRect) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn fill_rounded_rect(&mut self, _rect: RoundedRect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: Rect, _stroke: &Stroke) {}
    fn stroke_rounded_rect(&mut self, _rect: RoundedRect, _stroke: &Stroke) {}
    fn draw_line(&mut self, _from: Point, _to: Point, _stroke: &Stroke) {}

    fn draw_text(&mut self, text: &str, _origin: Point, _font: &Font, _color: Color) {
        self.texts.push(text.to_owned());
    }
}

fn test_arena() -> FieldArena {
    FieldArena::with_measure(Arc::new(FixedAdvanceMeasure::new(6.0)))
}

#[test]
fn form_captions_stay_aligned_as_content_changes() {
    let mut arena = test_arena();
    let red = arena.insert(arena.new_field().with_label("Red"));
    let green = arena.insert(arena.new_field().with_label("Green"));
    let blue = arena.insert(arena.new_field().with_label("Blue"));

    let group = arena.add_group(5.0);
    assert!(arena.group_add_all(group, &[red, green, blue]));

    // "Green" is the widest caption: 5 chars at 6.0 per char.
    assert_eq!(arena.sync_widths(group), Some(30.0));
    for id in [red, green, blue] {
        assert_eq!(arena.get(id).unwrap().label_width(), LabelWidth::Fixed(35.0));
    }

    // Growing one caption realigns the whole form before the call returns.
    assert!(arena.set_label_text(red, "Background")); // 10 chars = 60
    for id in [red, green, blue] {
        assert_eq!(arena.get(id).unwrap().label_width(), LabelWidth::Fixed(65.0));
    }

    // Destroying a member shrinks the shared width on the next sync.
    arena.remove(red);
    assert_eq!(arena.sync_widths(group), Some(30.0));
    assert_eq!(
        arena.get(green).unwrap().label_width(),
        LabelWidth::Fixed(35.0)
    );
}

#[test]
fn field_paints_caption_and_content_through_widget_trait() {
    let mut arena = test_arena();
    let id = arena.insert(
        arena
            .new_field()
            .with_label("Name")
            .with_text("Ada Lovelace"),
    );

    let field = arena.get_mut(id).unwrap();
    field.set_geometry(Rect::new(0.0, 0.0, 240.0, 24.0));
    assert!(field.needs_layout());
    field.layout();
    assert!(!field.needs_layout());

    let mut renderer = TextCollector::new();
    {
        let mut ctx = PaintContext::new(&mut renderer, field.rect())
            .with_appearance(Appearance::dark().with_high_contrast(true));
        field.paint(&mut ctx);
    }

    assert!(renderer.texts.iter().any(|t| t == "Name"));
    assert!(renderer.texts.iter().any(|t| t == "Ada Lovelace"));
    // The scoped antialias toggle was restored after the separator stroke.
    assert!(renderer.antialias);
}

#[test]
fn rtl_form_mirrors_edit_regions() {
    let mut arena = test_arena();
    let id = arena.insert(arena.new_field().with_label("Adresse"));

    let rect = Rect::new(0.0, 0.0, 240.0, 24.0);
    let field = arena.get_mut(id).unwrap();
    field.set_geometry(rect);
    field.layout();
    let ltr = field.edit_region();

    field.set_layout_direction(LayoutDirection::RightToLeft);
    field.layout();
    let rtl = field.edit_region();

    assert_eq!(ltr.width(), rtl.width());
    assert_eq!(rtl, ltr.mirrored_in(&rect));
}

#[test]
fn disabling_a_field_dims_its_caption() {
    let mut arena = test_arena();
    let id = arena.insert(arena.new_field().with_label("Key"));

    let field = arena.get_mut(id).unwrap();
    field.event(&mut WidgetEvent::attached_to_window());

    field.event(&mut WidgetEvent::enabled_change(false));
    assert!(!field.is_enabled());
    assert_eq!(field.label().opacity(), DISABLED_ALPHA);

    field.event(&mut WidgetEvent::enabled_change(true));
    assert_eq!(field.label().opacity(), 1.0);

    field.event(&mut WidgetEvent::detach_from_window());
}
