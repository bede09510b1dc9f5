//! Maps each document kind an applicant file can produce to its layout
//! strategy and template definition.

use crate::strategy::LayoutStrategy;
use crate::template::DocTemplateDef;
use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    ApplicationSheet,
    EmploymentContract,
    TrainingAgreement,
    SocialSecurityEnrollment { prior_insurance: bool },
    InsuranceEnrollment,
    CriminalCheckConsent,
}

impl DocumentKind {
    /// Short stable label, used in artifact filenames and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::ApplicationSheet => "application_sheet",
            DocumentKind::EmploymentContract => "employment_contract",
            DocumentKind::TrainingAgreement => "training_agreement",
            DocumentKind::SocialSecurityEnrollment {
                prior_insurance: true,
            } => "social_security_transfer",
            DocumentKind::SocialSecurityEnrollment {
                prior_insurance: false,
            } => "social_security_new",
            DocumentKind::InsuranceEnrollment => "insurance_enrollment",
            DocumentKind::CriminalCheckConsent => "criminal_check_consent",
        }
    }

    pub fn strategy(&self) -> LayoutStrategy {
        match self {
            DocumentKind::ApplicationSheet => LayoutStrategy::ContinuousFlow,
            _ => LayoutStrategy::PrePaginated,
        }
    }

    /// Builds a fresh template definition. Templates are constructed per
    /// call so one generation can never observe another's state.
    pub fn template(&self) -> DocTemplateDef {
        match self {
            DocumentKind::ApplicationSheet => templates::application_sheet::template(),
            DocumentKind::EmploymentContract => templates::employment_contract::template(),
            DocumentKind::TrainingAgreement => templates::training_agreement::template(),
            DocumentKind::SocialSecurityEnrollment { prior_insurance } => {
                templates::social_security::template(*prior_insurance)
            }
            DocumentKind::InsuranceEnrollment => templates::insurance::template(),
            DocumentKind::CriminalCheckConsent => templates::criminal_check::template(),
        }
    }

    /// Every kind, with both social-security variants.
    pub fn all() -> Vec<DocumentKind> {
        vec![
            DocumentKind::ApplicationSheet,
            DocumentKind::EmploymentContract,
            DocumentKind::TrainingAgreement,
            DocumentKind::SocialSecurityEnrollment {
                prior_insurance: false,
            },
            DocumentKind::SocialSecurityEnrollment {
                prior_insurance: true,
            },
            DocumentKind::InsuranceEnrollment,
            DocumentKind::CriminalCheckConsent,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = DocumentKind::all().iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), DocumentKind::all().len());
    }

    #[test]
    fn only_application_sheet_flows() {
        for kind in DocumentKind::all() {
            let expect = matches!(kind, DocumentKind::ApplicationSheet);
            assert_eq!(kind.strategy() == LayoutStrategy::ContinuousFlow, expect);
        }
    }

    #[test]
    fn templates_have_units() {
        for kind in DocumentKind::all() {
            let def = kind.template();
            assert!(!def.units.is_empty(), "{} has no units", kind.label());
            assert_eq!(def.name, kind.label());
        }
    }

    #[test]
    fn prepaginated_units_fit_one_page() {
        for kind in DocumentKind::all() {
            if kind.strategy() != LayoutStrategy::PrePaginated {
                continue;
            }
            let def = kind.template();
            for unit in &def.units {
                assert!(
                    unit.content_bottom() <= def.page_size.height,
                    "{} unit overflows its page",
                    kind.label()
                );
            }
        }
    }

    #[test]
    fn social_security_variants_differ() {
        let new = templates::social_security::template(false);
        let transfer = templates::social_security::template(true);
        assert_ne!(new.name, transfer.name);
        assert!(transfer.units[0].elements.len() > new.units[0].elements.len());
    }
}
