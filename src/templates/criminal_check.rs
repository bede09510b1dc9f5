//! Criminal record check consent form. Single pre-paginated page.

use super::*;
use crate::template::{DocTemplateDef, UnitTemplate};
use crate::types::{Margins, Size};

const LEFT: f32 = MARGIN;

pub fn template() -> DocTemplateDef {
    let mut e = Vec::new();
    e.push(title(70.0, "CONSENT TO CRIMINAL RECORD CHECK"));

    e.push(label(LEFT, 110.0, "I,"));
    e.push(field(LEFT + 15.0, 110.0, 200.0, "fullName"));
    e.push(label(LEFT + 228.0, 110.0, "national ID"));
    e.push(field(LEFT + 288.0, 110.0, 125.0, "personal.nationalId"));
    e.push(label(LEFT, 134.0, "born on"));
    e.push(field(LEFT + 45.0, 134.0, 110.0, "personal.birthDate"));
    e.push(label(LEFT + 170.0, 134.0, "residing at"));
    e.push(field(LEFT + 228.0, 134.0, 60.0, "personal.currentAddress.number"));
    e.push(label(LEFT + 298.0, 134.0, "Road"));
    e.push(field(LEFT + 328.0, 134.0, 130.0, "personal.currentAddress.road"));
    e.push(label(LEFT, 158.0, "Subdistrict"));
    e.push(field(LEFT + 60.0, 158.0, 110.0, "personal.currentAddress.subdistrict"));
    e.push(label(LEFT + 185.0, 158.0, "District"));
    e.push(field(LEFT + 228.0, 158.0, 110.0, "personal.currentAddress.district"));
    e.push(label(LEFT + 352.0, 158.0, "Province"));
    e.push(field(LEFT + 400.0, 158.0, 83.0, "personal.currentAddress.province"));

    for (i, line) in [
        "hereby consent to the verification of my criminal history records with the Royal Thai",
        "Police and relevant government agencies, in connection with my application for the",
        "position of",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT, 196.0 + i as f32 * 22.0, line));
    }
    e.push(field(LEFT + 60.0, 240.0, 170.0, "form.position"));
    e.push(label(
        LEFT + 242.0,
        240.0,
        "and to the use of the result solely for that purpose.",
    ));

    e.push(label(LEFT, 280.0, "Declared criminal record"));
    e.push(field(LEFT + 132.0, 280.0, 30.0, "statement.criminalRecord"));
    e.push(label(LEFT + 180.0, 280.0, "Details"));
    e.push(field(LEFT + 222.0, 280.0, 261.0, "statement.criminalRecordDetails"));

    e.push(label(
        LEFT,
        320.0,
        "This consent is valid for the duration of the recruitment process and, if engaged, the",
    ));
    e.push(label(LEFT, 340.0, "period of my employment."));

    e.push(image(LEFT + 260.0, 372.0, 150.0, 50.0, "signature"));
    e.extend(signature_block(LEFT + 260.0, 430.0, "Declarant", "fullName"));
    e.push(label(LEFT, 430.0, "Date"));
    e.push(field(LEFT + 32.0, 430.0, 130.0, "form.signingDate"));

    DocTemplateDef {
        name: "criminal_check_consent",
        font_family: FONT_FAMILY,
        page_size: Size::a4(),
        margins: Margins::all(MARGIN),
        units: vec![UnitTemplate::new(e)],
    }
}
