//! Pre-employment training agreement. Pre-paginated, two fixed pages.

use super::*;
use crate::template::{DocTemplateDef, UnitTemplate};
use crate::types::{Margins, Size};

const LEFT: f32 = MARGIN;
const RIGHT: f32 = PAGE_W - MARGIN;
const FOOT: f32 = 800.0;

fn page_one() -> UnitTemplate {
    let mut e = Vec::new();
    e.push(title(70.0, "TRAINING AGREEMENT"));
    e.push(label(LEFT, 104.0, "Made at"));
    e.push(field(LEFT + 50.0, 104.0, 180.0, "form.signingPlace"));
    e.push(label(LEFT + 250.0, 104.0, "Date"));
    e.push(field(LEFT + 282.0, 104.0, 130.0, "form.signingDate"));

    e.push(label(LEFT, 140.0, "The Company agrees to admit"));
    e.push(field(LEFT + 153.0, 140.0, 200.0, "fullName"));
    e.push(label(LEFT + 365.0, 140.0, "(the \"Trainee\")"));
    e.push(label(LEFT, 164.0, "to the training course"));
    e.push(field(LEFT + 112.0, 164.0, 240.0, "form.courseTitle"));
    e.push(label(LEFT, 188.0, "held during"));
    e.push(field(LEFT + 62.0, 188.0, 160.0, "form.coursePeriod"));
    e.push(label(LEFT + 234.0, 188.0, "at"));
    e.push(field(LEFT + 248.0, 188.0, 208.0, "form.workplace"));

    e.push(label(LEFT, 226.0, "1. Allowance"));
    e.push(label(
        LEFT + 14.0,
        250.0,
        "During the course the Company shall pay the Trainee an allowance of",
    ));
    e.push(field(LEFT + 14.0, 274.0, 90.0, "form.trainingAllowance"));
    e.push(label(
        LEFT + 115.0,
        274.0,
        "baht per day. The allowance is not a wage and creates no employment relationship.",
    ));

    e.push(label(LEFT, 312.0, "2. Conduct"));
    for (i, line) in [
        "The Trainee shall attend every scheduled session, follow the instructions of the trainers,",
        "and observe the Company's safety and conduct rules while on its premises.",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 336.0 + i as f32 * 22.0, line));
    }

    e.push(label(LEFT, 402.0, "3. Engagement after completion"));
    for (i, line) in [
        "Upon satisfactory completion of the course, the Company may offer the Trainee employment",
        "commencing on",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 426.0 + i as f32 * 22.0, line));
    }
    e.push(field(LEFT + 95.0, 448.0, 120.0, "form.startDate"));
    e.push(label(
        LEFT + 227.0,
        448.0,
        "in the position of",
    ));
    e.push(field(LEFT + 318.0, 448.0, 138.0, "form.position"));
    e.push(label(
        LEFT + 14.0,
        472.0,
        "Completion of the course does not by itself oblige either party to enter employment.",
    ));

    e.push(page_number(FOOT));
    UnitTemplate::new(e)
}

fn page_two() -> UnitTemplate {
    let mut e = Vec::new();
    e.push(label(LEFT, 70.0, "4. Withdrawal"));
    for (i, line) in [
        "Either party may end the training at any time by written notice. Allowance already",
        "accrued remains payable for sessions actually attended.",
    ]
    .iter()
    .enumerate()
    {
        e.push(label(LEFT + 14.0, 94.0 + i as f32 * 22.0, line));
    }

    e.push(label(
        LEFT,
        160.0,
        "The parties sign below to confirm their agreement to the above terms.",
    ));

    e.push(image(LEFT + 30.0, 204.0, 150.0, 50.0, "signature"));
    e.extend(signature_block(LEFT + 30.0, 264.0, "Trainee", "fullName"));
    e.extend(signature_block(
        RIGHT - 190.0,
        264.0,
        "For the Company",
        "form.companySignerName",
    ));

    e.push(page_number(FOOT));
    UnitTemplate::new(e)
}

pub fn template() -> DocTemplateDef {
    DocTemplateDef {
        name: "training_agreement",
        font_family: FONT_FAMILY,
        page_size: Size::a4(),
        margins: Margins::all(MARGIN),
        units: vec![page_one(), page_two()],
    }
}
