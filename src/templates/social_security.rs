//! Social security enrollment form. One pre-paginated page; the layout
//! differs depending on whether the applicant already holds coverage
//! from a previous employer, so the definition takes that flag up front
//! rather than branching at draw time.

use super::*;
use crate::template::{DocTemplateDef, UnitTemplate};
use crate::types::{Margins, Size};

const LEFT: f32 = MARGIN;

pub fn template(prior_insurance: bool) -> DocTemplateDef {
    let mut e = Vec::new();
    let heading = if prior_insurance {
        "SOCIAL SECURITY — CHANGE OF EMPLOYER"
    } else {
        "SOCIAL SECURITY — NEW ENROLLMENT"
    };
    e.push(title(70.0, heading));

    e.push(label(LEFT, 110.0, "Insured person"));
    e.push(field(LEFT + 85.0, 110.0, 200.0, "fullName"));
    e.push(label(LEFT + 300.0, 110.0, "National ID"));
    e.push(field(LEFT + 363.0, 110.0, 120.0, "personal.nationalId"));
    e.push(label(LEFT, 134.0, "Date of birth"));
    e.push(field(LEFT + 75.0, 134.0, 110.0, "personal.birthDate"));
    e.push(label(LEFT + 200.0, 134.0, "Nationality"));
    e.push(field(LEFT + 262.0, 134.0, 90.0, "personal.nationality"));
    e.push(label(LEFT, 158.0, "Start of employment"));
    e.push(field(LEFT + 110.0, 158.0, 120.0, "form.startDate"));
    e.push(label(LEFT + 245.0, 158.0, "Wage (baht)"));
    e.push(field(LEFT + 310.0, 158.0, 80.0, "form.dailyWage"));

    let mut y = 190.0;
    if prior_insurance {
        e.push(label(LEFT, y, "Previously insured at hospital"));
        e.push(field(LEFT + 155.0, y, 220.0, "form.priorHospital"));
        y += 24.0;
    }
    e.push(label(LEFT, y, "Chosen hospital"));
    e.push(field(LEFT + 90.0, y, 250.0, "form.chosenHospital"));
    y += 36.0;

    e.push(label(
        LEFT,
        y,
        "I certify that the information above is correct and consent to its submission to the",
    ));
    e.push(label(LEFT, y + 20.0, "Social Security Office."));

    e.push(image(LEFT + 260.0, y + 50.0, 150.0, 50.0, "signature"));
    e.extend(signature_block(LEFT + 260.0, y + 108.0, "Insured person", "fullName"));
    e.push(label(LEFT, y + 108.0, "Date"));
    e.push(field(LEFT + 32.0, y + 108.0, 130.0, "form.signingDate"));

    DocTemplateDef {
        name: if prior_insurance {
            "social_security_transfer"
        } else {
            "social_security_new"
        },
        font_family: FONT_FAMILY,
        page_size: Size::a4(),
        margins: Margins::all(MARGIN),
        units: vec![UnitTemplate::new(e)],
    }
}
