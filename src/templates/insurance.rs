//! Group insurance enrollment form. Single pre-paginated page.

use super::*;
use crate::template::{DocTemplateDef, UnitTemplate};
use crate::types::{Margins, Size};

const LEFT: f32 = MARGIN;

pub fn template() -> DocTemplateDef {
    let mut e = Vec::new();
    e.push(title(70.0, "GROUP INSURANCE ENROLLMENT"));

    e.push(label(LEFT, 110.0, "Member name"));
    e.push(field(LEFT + 80.0, 110.0, 200.0, "fullName"));
    e.push(label(LEFT + 295.0, 110.0, "National ID"));
    e.push(field(LEFT + 358.0, 110.0, 125.0, "personal.nationalId"));
    e.push(label(LEFT, 134.0, "Date of birth"));
    e.push(field(LEFT + 75.0, 134.0, 110.0, "personal.birthDate"));
    e.push(label(LEFT + 200.0, 134.0, "Phone"));
    e.push(field(LEFT + 238.0, 134.0, 130.0, "personal.phone"));
    e.push(label(LEFT, 158.0, "Position"));
    e.push(field(LEFT + 52.0, 158.0, 150.0, "form.position"));
    e.push(label(LEFT + 218.0, 158.0, "Department"));
    e.push(field(LEFT + 280.0, 158.0, 150.0, "form.department"));
    e.push(label(LEFT, 182.0, "Coverage start date"));
    e.push(field(LEFT + 105.0, 182.0, 120.0, "form.startDate"));

    e.push(hline(LEFT, 206.0, PAGE_W - 2.0 * MARGIN));
    e.push(label(LEFT, 232.0, "Beneficiary"));
    e.push(label(LEFT, 256.0, "Name"));
    e.push(field(LEFT + 40.0, 256.0, 180.0, "personal.emergencyContact.name"));
    e.push(label(LEFT + 235.0, 256.0, "Relationship"));
    e.push(field(LEFT + 302.0, 256.0, 110.0, "personal.emergencyContact.relation"));
    e.push(label(LEFT, 280.0, "Phone"));
    e.push(field(LEFT + 40.0, 280.0, 150.0, "personal.emergencyContact.phone"));

    e.push(label(
        LEFT,
        320.0,
        "Health declaration: I have a chronic condition requiring ongoing treatment",
    ));
    e.push(field(LEFT + 390.0, 320.0, 30.0, "health.chronicDisease"));
    e.push(label(LEFT, 344.0, "Details"));
    e.push(field(LEFT + 45.0, 344.0, 380.0, "health.chronicDiseaseDetails"));

    e.push(label(
        LEFT,
        384.0,
        "I apply to join the group policy and consent to the disclosure of the information above",
    ));
    e.push(label(LEFT, 404.0, "to the insurer for underwriting purposes."));

    e.push(image(LEFT + 260.0, 436.0, 150.0, 50.0, "signature"));
    e.extend(signature_block(LEFT + 260.0, 494.0, "Applicant", "fullName"));
    e.push(label(LEFT, 494.0, "Date"));
    e.push(field(LEFT + 32.0, 494.0, 130.0, "form.signingDate"));

    DocTemplateDef {
        name: "insurance_enrollment",
        font_family: FONT_FAMILY,
        page_size: Size::a4(),
        margins: Margins::all(MARGIN),
        units: vec![UnitTemplate::new(e)],
    }
}
