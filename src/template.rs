//! Declarative template model. A template is data: a list of positioned
//! elements carrying field paths and checkbox-group declarations. All
//! conditional logic lives in the resolver; population is a straight
//! replay of elements onto a canvas.

use crate::canvas::Canvas;
use crate::font::FontRegistry;
use crate::resolver::{self, CHECK_MARK, PLACEHOLDER};
use crate::types::{Color, Margins, Pt, Size};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillLine {
    /// Bare text, no rule underneath.
    None,
    /// Dotted fill line under the resolved value, the classic printed
    /// form underline.
    Dotted,
    Solid,
}

#[derive(Debug, Clone)]
pub struct CheckOption {
    pub x: Pt,
    pub y: Pt,
    pub value: String,
    pub label: String,
}

/// One positioned element of a layout unit. `y` is the text baseline for
/// textual elements and the top edge for boxes and images.
#[derive(Debug, Clone)]
pub enum Element {
    Label {
        x: Pt,
        y: Pt,
        text: String,
        size: Pt,
        align: TextAlign,
    },
    Field {
        x: Pt,
        y: Pt,
        width: Pt,
        path: String,
        size: Pt,
        align: TextAlign,
        line: FillLine,
    },
    /// Mutually exclusive checkbox group bound to one enumerated field.
    CheckGroup {
        path: String,
        box_size: Pt,
        label_size: Pt,
        options: Vec<CheckOption>,
    },
    HLine {
        x: Pt,
        y: Pt,
        width: Pt,
        dashed: bool,
    },
    Box {
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    },
    Image {
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
        resource_id: String,
    },
    PageNumber {
        x: Pt,
        y: Pt,
        size: Pt,
    },
}

impl Element {
    /// Lowest Pt coordinate this element reaches; drives the natural
    /// content height of continuous-flow bodies.
    pub fn bottom(&self) -> Pt {
        match self {
            Element::Label { y, size, .. } | Element::PageNumber { y, size, .. } => {
                *y + *size * 0.25
            }
            Element::Field { y, size, .. } => *y + *size * 0.35,
            Element::CheckGroup {
                options,
                label_size,
                ..
            } => options
                .iter()
                .map(|o| o.y + *label_size * 0.35)
                .fold(Pt::ZERO, Pt::max),
            Element::HLine { y, .. } => *y,
            Element::Box { y, height, .. } | Element::Image { y, height, .. } => *y + *height,
        }
    }
}

/// One layout unit: exactly one physical page for Pre-Paginated
/// templates, or the entire document body for Continuous-Flow ones.
/// Instantiated fresh per generation, never cached.
#[derive(Debug, Clone)]
pub struct UnitTemplate {
    pub elements: Vec<Element>,
}

impl UnitTemplate {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn content_bottom(&self) -> Pt {
        self.elements
            .iter()
            .map(Element::bottom)
            .fold(Pt::ZERO, Pt::max)
    }
}

#[derive(Debug, Clone)]
pub struct DocTemplateDef {
    pub name: &'static str,
    pub font_family: &'static str,
    pub page_size: Size,
    pub margins: Margins,
    pub units: Vec<UnitTemplate>,
}

impl DocTemplateDef {
    /// Natural content height of the continuous-flow body: the deepest
    /// element edge plus the bottom margin, at least one page tall so a
    /// nearly empty record still produces a full first page.
    pub fn natural_height(&self) -> Pt {
        let content = self
            .units
            .iter()
            .map(UnitTemplate::content_bottom)
            .fold(Pt::ZERO, Pt::max);
        (content + self.margins.bottom).max(self.page_size.height)
    }
}

pub struct PopulateContext<'a> {
    pub binding: &'a Value,
    pub fonts: &'a FontRegistry,
    pub font_family: &'a str,
    /// `None` in a continuous-flow body, where no physical page exists
    /// yet; page-number elements are skipped there.
    pub page_number: Option<usize>,
    pub page_count: usize,
}

/// Replays a unit's elements onto the canvas, resolving field paths and
/// checkbox groups against the binding value. Absent data renders as
/// placeholders; population itself cannot fail.
pub fn populate_unit(canvas: &mut Canvas, unit: &UnitTemplate, ctx: &PopulateContext<'_>) {
    canvas.set_font_name(ctx.font_family);
    for element in &unit.elements {
        match element {
            Element::Label {
                x,
                y,
                text,
                size,
                align,
            } => {
                draw_aligned_text(canvas, ctx, *x, *y, Pt::ZERO, text, *size, *align);
            }
            Element::Field {
                x,
                y,
                width,
                path,
                size,
                align,
                line,
            } => {
                match line {
                    FillLine::None => {}
                    FillLine::Dotted => {
                        let rule_y = *y + *size * 0.15;
                        canvas.save_state();
                        canvas.set_dash(vec![Pt::from_f32(1.0), Pt::from_f32(2.0)], Pt::ZERO);
                        canvas.set_line_width(Pt::from_f32(0.6));
                        canvas.move_to(*x, rule_y);
                        canvas.line_to(*x + *width, rule_y);
                        canvas.stroke();
                        canvas.restore_state();
                    }
                    FillLine::Solid => {
                        let rule_y = *y + *size * 0.15;
                        canvas.set_line_width(Pt::from_f32(0.6));
                        canvas.move_to(*x, rule_y);
                        canvas.line_to(*x + *width, rule_y);
                        canvas.stroke();
                    }
                }
                let text = resolver::resolve(ctx.binding, path);
                if text != PLACEHOLDER {
                    draw_aligned_text(canvas, ctx, *x, *y, *width, &text, *size, *align);
                }
            }
            Element::CheckGroup {
                path,
                box_size,
                label_size,
                options,
            } => {
                for option in options {
                    let box_top = option.y - *box_size * 0.8;
                    canvas.set_line_width(Pt::from_f32(0.8));
                    canvas.stroke_rect(option.x, box_top, *box_size, *box_size);
                    if resolver::is_checked_at(ctx.binding, path, &option.value) {
                        canvas.set_font_size(*box_size);
                        canvas.draw_string(
                            option.x + *box_size * 0.1,
                            option.y,
                            CHECK_MARK,
                        );
                    }
                    if !option.label.is_empty() {
                        canvas.set_font_size(*label_size);
                        canvas.draw_string(
                            option.x + *box_size + Pt::from_f32(4.0),
                            option.y,
                            option.label.clone(),
                        );
                    }
                }
            }
            Element::HLine {
                x,
                y,
                width,
                dashed,
            } => {
                canvas.save_state();
                if *dashed {
                    canvas.set_dash(vec![Pt::from_f32(2.0), Pt::from_f32(2.0)], Pt::ZERO);
                }
                canvas.set_line_width(Pt::from_f32(0.8));
                canvas.move_to(*x, *y);
                canvas.line_to(*x + *width, *y);
                canvas.stroke();
                canvas.restore_state();
            }
            Element::Box {
                x,
                y,
                width,
                height,
            } => {
                canvas.set_line_width(Pt::from_f32(0.8));
                canvas.stroke_rect(*x, *y, *width, *height);
            }
            Element::Image {
                x,
                y,
                width,
                height,
                resource_id,
            } => {
                // Confine the bitmap to its frame.
                canvas.save_state();
                canvas.clip_rect(*x, *y, *width, *height);
                canvas.draw_image(*x, *y, *width, *height, resource_id.clone());
                canvas.restore_state();
            }
            Element::PageNumber { x, y, size } => {
                let Some(number) = ctx.page_number else {
                    log::debug!("page number element has no page to number, skipped");
                    continue;
                };
                let text = format!("{number} / {}", ctx.page_count);
                draw_aligned_text(canvas, ctx, *x, *y, Pt::ZERO, &text, *size, TextAlign::Center);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_aligned_text(
    canvas: &mut Canvas,
    ctx: &PopulateContext<'_>,
    x: Pt,
    y: Pt,
    field_width: Pt,
    text: &str,
    size: Pt,
    align: TextAlign,
) {
    canvas.set_fill_color(Color::BLACK);
    canvas.set_font_size(size);
    let draw_x = match align {
        TextAlign::Left => x,
        TextAlign::Center => {
            let text_width = ctx.fonts.measure_text_width(ctx.font_family, size, text);
            let span = if field_width > Pt::ZERO {
                field_width
            } else {
                Pt::ZERO
            };
            x + (span - text_width) * 0.5
        }
        TextAlign::Right => {
            let text_width = ctx.fonts.measure_text_width(ctx.font_family, size, text);
            let span = if field_width > Pt::ZERO {
                field_width
            } else {
                Pt::ZERO
            };
            x + span - text_width
        }
    };
    canvas.draw_string(draw_x, y, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Command;
    use serde_json::json;

    fn label(y: f32) -> Element {
        Element::Label {
            x: Pt::from_f32(50.0),
            y: Pt::from_f32(y),
            text: "label".to_string(),
            size: Pt::from_f32(14.0),
            align: TextAlign::Left,
        }
    }

    fn ctx_with<'a>(binding: &'a Value, fonts: &'a FontRegistry) -> PopulateContext<'a> {
        PopulateContext {
            binding,
            fonts,
            font_family: "TestFamily",
            page_number: Some(1),
            page_count: 1,
        }
    }

    #[test]
    fn natural_height_tracks_deepest_element() {
        let def = DocTemplateDef {
            name: "test",
            font_family: "TestFamily",
            page_size: Size::a4(),
            margins: Margins::all(40.0),
            units: vec![UnitTemplate::new(vec![label(100.0), label(2000.0)])],
        };
        let expected = Pt::from_f32(2000.0) + Pt::from_f32(14.0) * 0.25 + Pt::from_f32(40.0);
        assert_eq!(def.natural_height(), expected);
    }

    #[test]
    fn natural_height_is_at_least_one_page() {
        let def = DocTemplateDef {
            name: "test",
            font_family: "TestFamily",
            page_size: Size::a4(),
            margins: Margins::all(40.0),
            units: vec![UnitTemplate::new(vec![label(100.0)])],
        };
        assert_eq!(def.natural_height(), Size::a4().height);
    }

    #[test]
    fn absent_field_emits_rule_but_no_text() {
        let binding = json!({});
        let fonts = FontRegistry::new();
        let ctx = ctx_with(&binding, &fonts);
        let unit = UnitTemplate::new(vec![Element::Field {
            x: Pt::from_f32(50.0),
            y: Pt::from_f32(100.0),
            width: Pt::from_f32(120.0),
            path: "personal.phone".to_string(),
            size: Pt::from_f32(14.0),
            align: TextAlign::Left,
            line: FillLine::Dotted,
        }]);
        let mut canvas = Canvas::new(Size::a4());
        populate_unit(&mut canvas, &unit, &ctx);
        let surface = canvas.finish();
        let strings = surface.pages[0]
            .commands
            .iter()
            .filter(|c| matches!(c, Command::DrawString { .. }))
            .count();
        let strokes = surface.pages[0]
            .commands
            .iter()
            .filter(|c| matches!(c, Command::Stroke))
            .count();
        assert_eq!(strings, 0);
        assert_eq!(strokes, 1);
    }

    #[test]
    fn present_field_emits_resolved_text() {
        let binding = json!({ "personal": { "phone": "021234567" } });
        let fonts = FontRegistry::new();
        let ctx = ctx_with(&binding, &fonts);
        let unit = UnitTemplate::new(vec![Element::Field {
            x: Pt::from_f32(50.0),
            y: Pt::from_f32(100.0),
            width: Pt::from_f32(120.0),
            path: "personal.phone".to_string(),
            size: Pt::from_f32(14.0),
            align: TextAlign::Left,
            line: FillLine::None,
        }]);
        let mut canvas = Canvas::new(Size::a4());
        populate_unit(&mut canvas, &unit, &ctx);
        let surface = canvas.finish();
        let found = surface.pages[0].commands.iter().any(|c| {
            matches!(c, Command::DrawString { text, .. } if text == "021234567")
        });
        assert!(found);
    }

    #[test]
    fn check_group_marks_at_most_one_box() {
        let binding = json!({ "personal": { "maritalStatus": "married" } });
        let fonts = FontRegistry::new();
        let ctx = ctx_with(&binding, &fonts);
        let options = ["single", "married", "divorced"]
            .iter()
            .enumerate()
            .map(|(i, v)| CheckOption {
                x: Pt::from_f32(50.0 + 60.0 * i as f32),
                y: Pt::from_f32(100.0),
                value: v.to_string(),
                label: v.to_string(),
            })
            .collect();
        let unit = UnitTemplate::new(vec![Element::CheckGroup {
            path: "personal.maritalStatus".to_string(),
            box_size: Pt::from_f32(10.0),
            label_size: Pt::from_f32(12.0),
            options,
        }]);
        let mut canvas = Canvas::new(Size::a4());
        populate_unit(&mut canvas, &unit, &ctx);
        let surface = canvas.finish();
        let marks = surface.pages[0]
            .commands
            .iter()
            .filter(|c| matches!(c, Command::DrawString { text, .. } if text == CHECK_MARK))
            .count();
        let boxes = surface.pages[0]
            .commands
            .iter()
            .filter(|c| matches!(c, Command::StrokeRect { .. }))
            .count();
        assert_eq!(marks, 1);
        assert_eq!(boxes, 3);
    }

    #[test]
    fn page_number_renders_current_over_total() {
        let binding = json!({});
        let fonts = FontRegistry::new();
        let ctx = PopulateContext {
            binding: &binding,
            fonts: &fonts,
            font_family: "TestFamily",
            page_number: Some(2),
            page_count: 3,
        };
        let unit = UnitTemplate::new(vec![Element::PageNumber {
            x: Pt::from_f32(297.0),
            y: Pt::from_f32(820.0),
            size: Pt::from_f32(12.0),
        }]);
        let mut canvas = Canvas::new(Size::a4());
        populate_unit(&mut canvas, &unit, &ctx);
        let surface = canvas.finish();
        let found = surface.pages[0]
            .commands
            .iter()
            .any(|c| matches!(c, Command::DrawString { text, .. } if text == "2 / 3"));
        assert!(found);
    }

    #[test]
    fn page_number_without_a_page_emits_nothing() {
        let binding = json!({});
        let fonts = FontRegistry::new();
        let ctx = PopulateContext {
            binding: &binding,
            fonts: &fonts,
            font_family: "TestFamily",
            page_number: None,
            page_count: 1,
        };
        let unit = UnitTemplate::new(vec![Element::PageNumber {
            x: Pt::from_f32(297.0),
            y: Pt::from_f32(820.0),
            size: Pt::from_f32(12.0),
        }]);
        let mut canvas = Canvas::new(Size::a4());
        populate_unit(&mut canvas, &unit, &ctx);
        let surface = canvas.finish();
        let strings = surface.pages[0]
            .commands
            .iter()
            .filter(|c| matches!(c, Command::DrawString { .. }))
            .count();
        assert_eq!(strings, 0);
    }

    #[test]
    fn image_is_clipped_to_its_frame() {
        let binding = json!({});
        let fonts = FontRegistry::new();
        let ctx = ctx_with(&binding, &fonts);
        let unit = UnitTemplate::new(vec![Element::Image {
            x: Pt::from_f32(400.0),
            y: Pt::from_f32(80.0),
            width: Pt::from_f32(110.0),
            height: Pt::from_f32(140.0),
            resource_id: "photo".to_string(),
        }]);
        let mut canvas = Canvas::new(Size::a4());
        populate_unit(&mut canvas, &unit, &ctx);
        let surface = canvas.finish();
        let kinds: Vec<&Command> = surface.pages[0]
            .commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    Command::SaveState
                        | Command::ClipRect { .. }
                        | Command::DrawImage { .. }
                        | Command::RestoreState
                )
            })
            .collect();
        assert!(matches!(kinds[0], Command::SaveState));
        assert!(matches!(kinds[1], Command::ClipRect { .. }));
        assert!(matches!(kinds[2], Command::DrawImage { .. }));
        assert!(matches!(kinds[3], Command::RestoreState));
    }
}
