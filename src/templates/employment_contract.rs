//! Employment contract. Pre-paginated: three fixed pages, each authored
//! as its own unit so the clause blocks never reflow.

use super::*;
use crate::template::{DocTemplateDef, Element, FillLine, TextAlign, UnitTemplate};
use crate::types::{Margins, Pt, Size};

const LEFT: f32 = MARGIN;
const RIGHT: f32 = PAGE_W - MARGIN;
const FOOT: f32 = 800.0;

fn page_one() -> UnitTemplate {
    let mut e = Vec::new();
    e.push(title(70.0, "EMPLOYMENT CONTRACT"));
    e.push(label(LEFT, 104.0, "Made at"));
    e.push(field(LEFT + 50.0, 104.0, 180.0, "form.signingPlace"));
    e.push(label(LEFT + 250.0, 104.0, "Date"));
    e.push(field(LEFT + 282.0, 104.0, 130.0, "form.signingDate"));

    e.push(label(
        LEFT,
        136.0,
        "This contract is made between the Company (the \"Employer\") and",
    ));
    e.push(field(LEFT, 160.0, 220.0, "fullName"));
    e.push(label(LEFT + 235.0, 160.0, "holder of national ID"));
    e.push(field(LEFT + 342.0, 160.0, 115.0, "personal.nationalId"));
    e.push(label(LEFT, 184.0, "(the \"Employee\"), on the following terms:"));

    e.push(label(LEFT, 220.0, "1. Position and duties"));
    e.push(label(LEFT + 14.0, 244.0, "The Employee is engaged as"));
    e.push(field(LEFT + 160.0, 244.0, 150.0, "form.position"));
    e.push(label(LEFT + 322.0, 244.0, "in the"));
    e.push(field(LEFT + 356.0, 244.0, 100.0, "form.department"));
    e.push(label(
        LEFT + 14.0,
        268.0,
        "department, and shall perform the duties assigned by the Employer with care and diligence.",
    ));

    e.push(label(LEFT, 304.0, "2. Commencement and probation"));
    e.push(label(LEFT + 14.0, 328.0, "Employment commences on"));
    e.push(field(LEFT + 155.0, 328.0, 120.0, "form.startDate"));
    e.push(label(
        LEFT + 287.0,
        328.0,
        "with a probationary period of",
    ));
    e.push(field(LEFT + 14.0, 352.0, 45.0, "form.probationDays"));
    e.push(label(
        LEFT + 70.0,
        352.0,
        "days, during which either party may terminate without notice.",
    ));

    e.push(label(LEFT, 388.0, "3. Remuneration"));
    e.push(label(LEFT + 14.0, 412.0, "The Employer shall pay a wage of"));
    e.push(field(LEFT + 187.0, 412.0, 90.0, "form.dailyWage"));
    e.push(label(LEFT + 288.0, 412.0, "baht per"));
    e.push(field(LEFT + 335.0, 412.0, 70.0, "form.wagePeriod"));
    e.push(label(
        LEFT + 14.0,
        436.0,
        "payable into the Employee's bank account,",
    ));
    e.push(field(LEFT + 232.0, 436.0, 110.0, "form.bankName"));
    e.push(label(LEFT + 352.0, 436.0, "account no."));
    e.push(field(LEFT + 14.0, 460.0, 150.0, "form.bankAccount"));

    e.push(label(LEFT, 496.0, "4. Place of work and hours"));
    e.push(label(LEFT + 14.0, 520.0, "The normal place of work is"));
    e.push(field(LEFT + 160.0, 520.0, 296.0, "form.workplace"));
    e.push(label(
        LEFT + 14.0,
        544.0,
        "Working hours and rest days follow the Employer's announced work rules.",
    ));

    e.push(page_number(FOOT));
    UnitTemplate::new(e)
}

fn page_two() -> UnitTemplate {
    let mut e = Vec::new();
    e.push(label(LEFT, 70.0, "5. Duties of the Employee"));
    for (i, line) in [
        "The Employee shall comply with the Employer's work rules, orders and announcements,",
        "shall keep the Employer's business information confidential both during and after",
        "employment, and shall not undertake outside work that conflicts with the Employer's",
        "business without prior written consent.",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 94.0 + i as f32 * 22.0, line));
    }

    e.push(label(LEFT, 200.0, "6. Leave and benefits"));
    for (i, line) in [
        "Annual leave, sick leave and other statutory leave are granted in accordance with the",
        "Labour Protection Act and the Employer's work rules in force from time to time.",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 224.0 + i as f32 * 22.0, line));
    }

    e.push(label(LEFT, 290.0, "7. Termination"));
    for (i, line) in [
        "Either party may terminate this contract by giving notice of at least one wage period in",
        "advance. The Employer may terminate without notice or compensation where the Employee",
        "commits a serious breach as provided by law.",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 314.0 + i as f32 * 22.0, line));
    }

    e.push(label(LEFT, 380.0, "8. Return of property"));
    for (i, line) in [
        "Upon termination, the Employee shall return all property, documents and equipment",
        "belonging to the Employer in their possession without delay.",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 404.0 + i as f32 * 22.0, line));
    }

    e.push(page_number(FOOT));
    UnitTemplate::new(e)
}

fn page_three() -> UnitTemplate {
    let mut e = Vec::new();
    e.push(label(
        LEFT,
        70.0,
        "Both parties have read and understood this contract and sign below in acknowledgement.",
    ));

    e.push(image(LEFT + 30.0, 120.0, 150.0, 50.0, "signature"));
    e.extend(signature_block(LEFT + 30.0, 180.0, "Employee", "fullName"));
    e.extend(signature_block(
        RIGHT - 190.0,
        180.0,
        "Employer",
        "form.companySignerName",
    ));
    e.push(Element::Field {
        x: Pt::from_f32(RIGHT - 190.0),
        y: Pt::from_f32(244.0),
        width: Pt::from_f32(160.0),
        path: "form.companySignerTitle".to_string(),
        size: Pt::from_f32(BODY_SIZE),
        align: TextAlign::Center,
        line: FillLine::None,
    });

    e.push(label(LEFT, 300.0, "Signed at"));
    e.push(field(LEFT + 55.0, 300.0, 170.0, "form.signingPlace"));
    e.push(label(LEFT + 240.0, 300.0, "on"));
    e.push(field(LEFT + 258.0, 300.0, 130.0, "form.signingDate"));

    e.push(page_number(FOOT));
    UnitTemplate::new(e)
}

pub fn template() -> DocTemplateDef {
    DocTemplateDef {
        name: "employment_contract",
        font_family: FONT_FAMILY,
        page_size: Size::a4(),
        margins: Margins::all(MARGIN),
        units: vec![page_one(), page_two(), page_three()],
    }
}
