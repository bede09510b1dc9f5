//! Template definitions for every supported document kind. Templates
//! are data: positioned elements with field paths and checkbox-group
//! declarations. Coordinates are Pt from the top-left of an A4 page.

pub mod application_sheet;
pub mod criminal_check;
pub mod employment_contract;
pub mod insurance;
pub mod social_security;
pub mod training_agreement;

use crate::template::{CheckOption, Element, FillLine, TextAlign};
use crate::types::Pt;

pub(crate) const FONT_FAMILY: &str = "THSarabunNew";
pub(crate) const PAGE_W: f32 = 595.28;
pub(crate) const MARGIN: f32 = 48.0;
pub(crate) const BODY_SIZE: f32 = 13.0;
pub(crate) const HEADING_SIZE: f32 = 17.0;

pub(crate) fn label(x: f32, y: f32, text: &str) -> Element {
    Element::Label {
        x: Pt::from_f32(x),
        y: Pt::from_f32(y),
        text: text.to_string(),
        size: Pt::from_f32(BODY_SIZE),
        align: TextAlign::Left,
    }
}

pub(crate) fn title(y: f32, text: &str) -> Element {
    Element::Label {
        x: Pt::from_f32(PAGE_W / 2.0),
        y: Pt::from_f32(y),
        text: text.to_string(),
        size: Pt::from_f32(HEADING_SIZE),
        align: TextAlign::Center,
    }
}

pub(crate) fn field(x: f32, y: f32, width: f32, path: &str) -> Element {
    Element::Field {
        x: Pt::from_f32(x),
        y: Pt::from_f32(y),
        width: Pt::from_f32(width),
        path: path.to_string(),
        size: Pt::from_f32(BODY_SIZE),
        align: TextAlign::Left,
        line: FillLine::Dotted,
    }
}

pub(crate) fn field_centered(x: f32, y: f32, width: f32, path: &str) -> Element {
    Element::Field {
        x: Pt::from_f32(x),
        y: Pt::from_f32(y),
        width: Pt::from_f32(width),
        path: path.to_string(),
        size: Pt::from_f32(BODY_SIZE),
        align: TextAlign::Center,
        line: FillLine::Dotted,
    }
}

/// A horizontal run of mutually exclusive checkboxes on one baseline.
pub(crate) fn check_row(path: &str, y: f32, options: &[(f32, &str, &str)]) -> Element {
    Element::CheckGroup {
        path: path.to_string(),
        box_size: Pt::from_f32(9.0),
        label_size: Pt::from_f32(BODY_SIZE),
        options: options
            .iter()
            .map(|(x, value, text)| CheckOption {
                x: Pt::from_f32(*x),
                y: Pt::from_f32(y),
                value: value.to_string(),
                label: text.to_string(),
            })
            .collect(),
    }
}

pub(crate) fn hline(x: f32, y: f32, width: f32) -> Element {
    Element::HLine {
        x: Pt::from_f32(x),
        y: Pt::from_f32(y),
        width: Pt::from_f32(width),
        dashed: false,
    }
}

pub(crate) fn boxed(x: f32, y: f32, width: f32, height: f32) -> Element {
    Element::Box {
        x: Pt::from_f32(x),
        y: Pt::from_f32(y),
        width: Pt::from_f32(width),
        height: Pt::from_f32(height),
    }
}

pub(crate) fn image(x: f32, y: f32, width: f32, height: f32, resource_id: &str) -> Element {
    Element::Image {
        x: Pt::from_f32(x),
        y: Pt::from_f32(y),
        width: Pt::from_f32(width),
        height: Pt::from_f32(height),
        resource_id: resource_id.to_string(),
    }
}

pub(crate) fn page_number(y: f32) -> Element {
    Element::PageNumber {
        x: Pt::from_f32(PAGE_W / 2.0),
        y: Pt::from_f32(y),
        size: Pt::from_f32(11.0),
    }
}

/// Signature block: dotted rule, optional image above it, caption and
/// name field below.
pub(crate) fn signature_block(x: f32, y: f32, caption: &str, name_path: &str) -> Vec<Element> {
    vec![
        Element::HLine {
            x: Pt::from_f32(x),
            y: Pt::from_f32(y),
            width: Pt::from_f32(150.0),
            dashed: true,
        },
        label(x + 20.0, y + 16.0, caption),
        field_centered(x, y + 34.0, 150.0, name_path),
    ]
}
