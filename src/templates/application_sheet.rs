//! Job application sheet. Continuous-flow: the whole form is one tall
//! body sliced into A4 windows, so row layout never has to dodge page
//! boundaries.

use super::*;
use crate::template::{DocTemplateDef, UnitTemplate};
use crate::types::{Margins, Size};

pub fn template() -> DocTemplateDef {
    let mut e = Vec::new();
    let left = MARGIN;
    let right = PAGE_W - MARGIN;

    // Header with photo corner.
    e.push(title(70.0, "JOB APPLICATION FORM"));
    e.push(boxed(right - 90.0, 40.0, 90.0, 110.0));
    e.push(image(right - 88.0, 42.0, 86.0, 106.0, "photo"));
    e.push(label(left, 98.0, "Date of application"));
    e.push(field(left + 110.0, 98.0, 140.0, "submissionDate"));
    e.push(label(left, 120.0, "Position applied for"));
    e.push(field(left + 110.0, 120.0, 140.0, "form.position"));
    e.push(hline(left, 140.0, right - left));

    // Personal particulars.
    e.push(label(left, 168.0, "1. PERSONAL PARTICULARS"));
    e.push(label(left, 192.0, "Name"));
    e.push(field(left + 40.0, 192.0, 150.0, "personal.firstName"));
    e.push(label(left + 200.0, 192.0, "Surname"));
    e.push(field(left + 250.0, 192.0, 150.0, "personal.lastName"));
    e.push(label(left, 216.0, "Nickname"));
    e.push(field(left + 60.0, 216.0, 90.0, "personal.nickname"));
    e.push(label(left + 170.0, 216.0, "Date of birth"));
    e.push(field(left + 240.0, 216.0, 100.0, "personal.birthDate"));
    e.push(label(left + 360.0, 216.0, "Age"));
    e.push(field(left + 390.0, 216.0, 40.0, "personal.age"));
    e.push(label(left, 240.0, "National ID"));
    e.push(field(left + 70.0, 240.0, 150.0, "personal.nationalId"));
    e.push(label(left + 240.0, 240.0, "Nationality"));
    e.push(field(left + 305.0, 240.0, 80.0, "personal.nationality"));
    e.push(label(left, 264.0, "Religion"));
    e.push(field(left + 55.0, 264.0, 90.0, "personal.religion"));
    e.push(label(left + 170.0, 264.0, "Height (cm)"));
    e.push(field(left + 235.0, 264.0, 50.0, "personal.heightCm"));
    e.push(label(left + 305.0, 264.0, "Weight (kg)"));
    e.push(field(left + 370.0, 264.0, 50.0, "personal.weightKg"));

    e.push(label(left, 290.0, "Gender"));
    e.push(check_row(
        "personal.gender",
        290.0,
        &[
            (left + 60.0, "male", "Male"),
            (left + 130.0, "female", "Female"),
        ],
    ));
    e.push(label(left, 314.0, "Marital status"));
    e.push(check_row(
        "personal.maritalStatus",
        314.0,
        &[
            (left + 80.0, "single", "Single"),
            (left + 150.0, "married", "Married"),
            (left + 230.0, "divorced", "Divorced"),
            (left + 315.0, "widowed", "Widowed"),
        ],
    ));
    e.push(label(left, 338.0, "Military service"));
    e.push(check_row(
        "personal.militaryStatus",
        338.0,
        &[
            (left + 90.0, "exempted", "Exempted"),
            (left + 180.0, "completed", "Completed"),
            (left + 280.0, "pending", "Pending"),
        ],
    ));

    // Addresses.
    e.push(label(left, 370.0, "Registered address: No."));
    e.push(field(left + 125.0, 370.0, 45.0, "personal.registeredAddress.number"));
    e.push(label(left + 180.0, 370.0, "Moo"));
    e.push(field(left + 205.0, 370.0, 35.0, "personal.registeredAddress.moo"));
    e.push(label(left + 250.0, 370.0, "Road"));
    e.push(field(left + 280.0, 370.0, 120.0, "personal.registeredAddress.road"));
    e.push(label(left, 394.0, "Subdistrict"));
    e.push(field(left + 60.0, 394.0, 100.0, "personal.registeredAddress.subdistrict"));
    e.push(label(left + 175.0, 394.0, "District"));
    e.push(field(left + 220.0, 394.0, 100.0, "personal.registeredAddress.district"));
    e.push(label(left + 335.0, 394.0, "Province"));
    e.push(field(left + 383.0, 394.0, 80.0, "personal.registeredAddress.province"));
    e.push(label(left, 418.0, "Current address: No."));
    e.push(field(left + 110.0, 418.0, 45.0, "personal.currentAddress.number"));
    e.push(label(left + 165.0, 418.0, "Road"));
    e.push(field(left + 195.0, 418.0, 110.0, "personal.currentAddress.road"));
    e.push(label(left + 318.0, 418.0, "Province"));
    e.push(field(left + 366.0, 418.0, 90.0, "personal.currentAddress.province"));
    e.push(label(left, 442.0, "Phone"));
    e.push(field(left + 40.0, 442.0, 120.0, "personal.phone"));
    e.push(label(left + 180.0, 442.0, "E-mail"));
    e.push(field(left + 220.0, 442.0, 180.0, "personal.email"));

    // Family.
    e.push(hline(left, 462.0, right - left));
    e.push(label(left, 488.0, "2. FAMILY"));
    e.push(label(left, 512.0, "Father"));
    e.push(field(left + 45.0, 512.0, 140.0, "parents.father.name"));
    e.push(label(left + 200.0, 512.0, "Occupation"));
    e.push(field(left + 262.0, 512.0, 110.0, "parents.father.occupation"));
    e.push(label(left, 536.0, "Mother"));
    e.push(field(left + 45.0, 536.0, 140.0, "parents.mother.name"));
    e.push(label(left + 200.0, 536.0, "Occupation"));
    e.push(field(left + 262.0, 536.0, 110.0, "parents.mother.occupation"));
    e.push(label(left, 560.0, "Spouse"));
    e.push(field(left + 45.0, 560.0, 140.0, "family.spouseName"));
    e.push(label(left + 200.0, 560.0, "Children"));
    e.push(field(left + 252.0, 560.0, 40.0, "family.childrenCount"));
    e.push(label(left + 310.0, 560.0, "Siblings"));
    e.push(field(left + 358.0, 560.0, 40.0, "family.siblingsCount"));

    // Education rows.
    e.push(hline(left, 580.0, right - left));
    e.push(label(left, 606.0, "3. EDUCATION"));
    let mut y = 630.0;
    for i in 0..4 {
        e.push(field(left, y, 95.0, &format!("education.entries[{i}].level")));
        e.push(field(left + 105.0, y, 160.0, &format!("education.entries[{i}].institution")));
        e.push(field(left + 275.0, y, 120.0, &format!("education.entries[{i}].major")));
        e.push(field(left + 405.0, y, 50.0, &format!("education.entries[{i}].gpa")));
        y += 24.0;
    }

    // Work experience rows.
    e.push(hline(left, 730.0, right - left));
    e.push(label(left, 756.0, "4. EMPLOYMENT HISTORY (most recent first)"));
    let mut y = 780.0;
    for i in 0..4 {
        e.push(field(left, y, 140.0, &format!("experience.entries[{i}].company")));
        e.push(field(left + 150.0, y, 110.0, &format!("experience.entries[{i}].position")));
        e.push(field(left + 270.0, y, 55.0, &format!("experience.entries[{i}].from")));
        e.push(field(left + 333.0, y, 55.0, &format!("experience.entries[{i}].to")));
        e.push(field(left + 396.0, y, 60.0, &format!("experience.entries[{i}].salary")));
        y += 24.0;
    }
    e.push(label(left, 880.0, "Reason for leaving last position"));
    e.push(field(left + 165.0, 880.0, 290.0, "experience.entries[0].leavingReason"));

    // Skills and training.
    e.push(hline(left, 902.0, right - left));
    e.push(label(left, 928.0, "5. SKILLS AND TRAINING"));
    e.push(label(left, 952.0, "Typing speed"));
    e.push(field(left + 75.0, 952.0, 70.0, "skills.typingSpeed"));
    e.push(label(left + 165.0, 952.0, "Special skills"));
    e.push(field(left + 240.0, 952.0, 215.0, "skills.specialSkills"));
    let mut y = 976.0;
    for i in 0..3 {
        e.push(field(left, y, 180.0, &format!("training.entries[{i}].course")));
        e.push(field(left + 190.0, y, 150.0, &format!("training.entries[{i}].institution")));
        e.push(field(left + 350.0, y, 55.0, &format!("training.entries[{i}].year")));
        y += 24.0;
    }
    let mut y = 1052.0;
    e.push(label(left, y - 4.0, "Languages (speak / read / write)"));
    y += 20.0;
    for i in 0..2 {
        e.push(field(left, y, 100.0, &format!("skills.languages[{i}].name")));
        e.push(field(left + 110.0, y, 80.0, &format!("skills.languages[{i}].speaking")));
        e.push(field(left + 200.0, y, 80.0, &format!("skills.languages[{i}].reading")));
        e.push(field(left + 290.0, y, 80.0, &format!("skills.languages[{i}].writing")));
        y += 24.0;
    }

    // Health and statement.
    e.push(hline(left, 1120.0, right - left));
    e.push(label(left, 1146.0, "6. HEALTH AND DECLARATIONS"));
    e.push(label(left, 1170.0, "Chronic illness"));
    e.push(field(left + 85.0, 1170.0, 30.0, "health.chronicDisease"));
    e.push(label(left + 130.0, 1170.0, "Details"));
    e.push(field(left + 172.0, 1170.0, 283.0, "health.chronicDiseaseDetails"));
    e.push(label(left, 1194.0, "Criminal record"));
    e.push(field(left + 88.0, 1194.0, 30.0, "statement.criminalRecord"));
    e.push(label(left + 130.0, 1194.0, "Details"));
    e.push(field(left + 172.0, 1194.0, 283.0, "statement.criminalRecordDetails"));
    e.push(label(left, 1218.0, "Emergency contact"));
    e.push(field(left + 100.0, 1218.0, 130.0, "personal.emergencyContact.name"));
    e.push(label(left + 245.0, 1218.0, "Phone"));
    e.push(field(left + 282.0, 1218.0, 110.0, "personal.emergencyContact.phone"));
    e.push(label(left, 1242.0, "Referred by"));
    e.push(field(left + 65.0, 1242.0, 130.0, "referral.source"));
    e.push(field(left + 210.0, 1242.0, 150.0, "referral.referrerName"));

    // Certification and signature.
    e.push(hline(left, 1268.0, right - left));
    e.push(label(
        left,
        1296.0,
        "I certify that the statements above are true and complete to the best of my knowledge.",
    ));
    e.push(image(right - 200.0, 1320.0, 150.0, 50.0, "signature"));
    e.extend(signature_block(
        right - 200.0,
        1378.0,
        "Applicant's signature",
        "fullName",
    ));

    DocTemplateDef {
        name: "application_sheet",
        font_family: FONT_FAMILY,
        page_size: Size::a4(),
        margins: Margins::all(MARGIN),
        units: vec![UnitTemplate::new(e)],
    }
}
