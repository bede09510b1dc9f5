//! Applicant record model. Every section and every leaf is optional:
//! absence is a first-class state, never an error. The resolver turns
//! absent paths into layout-preserving placeholders at render time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub number: Option<String>,
    pub moo: Option<String>,
    pub road: Option<String>,
    pub subdistrict: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyContact {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalSection {
    pub prefix: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub nickname: Option<String>,
    pub birth_date: Option<String>,
    pub age: Option<u32>,
    pub national_id: Option<String>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    pub religion: Option<String>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub military_status: Option<String>,
    pub registered_address: Option<Address>,
    pub current_address: Option<Address>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sibling {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilySection {
    pub spouse_name: Option<String>,
    pub spouse_occupation: Option<String>,
    pub spouse_workplace: Option<String>,
    pub children_count: Option<u32>,
    pub siblings_count: Option<u32>,
    pub sibling_order: Option<u32>,
    pub siblings: Option<Vec<Sibling>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub level: Option<String>,
    pub institution: Option<String>,
    pub major: Option<String>,
    pub from_year: Option<String>,
    pub to_year: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationSection {
    pub highest_level: Option<String>,
    pub highest_institution: Option<String>,
    pub entries: Option<Vec<EducationEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSkill {
    pub name: Option<String>,
    pub speaking: Option<String>,
    pub reading: Option<String>,
    pub writing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsSection {
    pub typing_speed: Option<String>,
    pub driving_licenses: Option<Vec<String>>,
    pub own_vehicle: Option<bool>,
    pub languages: Option<Vec<LanguageSkill>>,
    pub special_skills: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingEntry {
    pub course: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingSection {
    pub entries: Option<Vec<TrainingEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub salary: Option<String>,
    pub leaving_reason: Option<String>,
    pub supervisor: Option<String>,
    pub contactable: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceSection {
    pub entries: Option<Vec<ExperienceEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthSection {
    pub chronic_disease: Option<bool>,
    pub chronic_disease_details: Option<String>,
    pub surgeries: Option<String>,
    pub disabilities: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub name: Option<String>,
    pub position: Option<String>,
    pub workplace: Option<String>,
    pub phone: Option<String>,
    pub relation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatementSection {
    pub criminal_record: Option<bool>,
    pub criminal_record_details: Option<String>,
    pub applied_before: Option<bool>,
    pub acquaintances_in_company: Option<String>,
    pub references: Option<Vec<Reference>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralSection {
    pub source: Option<String>,
    pub referrer_name: Option<String>,
    pub referrer_phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentInfo {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
    pub phone: Option<String>,
    pub alive: Option<bool>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentsSection {
    pub father: Option<ParentInfo>,
    pub mother: Option<ParentInfo>,
}

/// Root aggregate. A completely empty record is valid input to every
/// document kind; templates render placeholders for whatever is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantRecord {
    pub full_name: Option<String>,
    pub photo_ref: Option<String>,
    pub signature_ref: Option<String>,
    pub status: Option<String>,
    pub submission_date: Option<String>,
    pub personal: Option<PersonalSection>,
    pub family: Option<FamilySection>,
    pub education: Option<EducationSection>,
    pub skills: Option<SkillsSection>,
    pub training: Option<TrainingSection>,
    pub experience: Option<ExperienceSection>,
    pub health: Option<HealthSection>,
    pub statement: Option<StatementSection>,
    pub referral: Option<ReferralSection>,
    pub parents: Option<ParentsSection>,
}

impl ApplicantRecord {
    /// Display name used for deterministic output filenames.
    pub fn subject_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("applicant")
    }
}

/// Per-document auxiliary input supplied alongside the record and merged
/// under the `form` key of the binding value. Never persisted inside the
/// applicant record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentFormData {
    pub start_date: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub daily_wage: Option<String>,
    pub wage_period: Option<String>,
    pub probation_days: Option<u32>,
    pub workplace: Option<String>,
    pub signing_date: Option<String>,
    pub signing_place: Option<String>,
    pub company_signer_name: Option<String>,
    pub company_signer_title: Option<String>,
    pub course_title: Option<String>,
    pub course_period: Option<String>,
    pub training_allowance: Option<String>,
    pub prior_insurance: Option<bool>,
    pub prior_hospital: Option<String>,
    pub chosen_hospital: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
}

/// Builds the read-only binding value templates resolve against: the
/// record at the root, form data under `"form"`. Serialization failures
/// cannot occur for these derive-only types, so the fallback is an empty
/// object rather than an error path.
pub fn binding_value(record: &ApplicantRecord, form: &DocumentFormData) -> Value {
    let mut root = serde_json::to_value(record).unwrap_or_else(|_| Value::Object(Default::default()));
    let form_value = serde_json::to_value(form).unwrap_or_else(|_| Value::Object(Default::default()));
    if let Value::Object(map) = &mut root {
        map.insert("form".to_string(), form_value);
    }
    root
}
