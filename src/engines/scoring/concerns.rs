use serde::{Deserialize, Serialize};

use super::domain::Application;
use super::rules::{background_consent_given, has_sufficient_references, meets_income_target};
use super::GOOD_MATCH_MIN;

/// Reviewer-facing flags for low-scoring applications. Each flag re-derives
/// the same predicate the scorer uses, so the two surfaces cannot drift
/// apart on threshold values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernFlag {
    IncomeRatioShortfall,
    InsufficientReferences,
    MissingBackgroundConsent,
}

impl ConcernFlag {
    pub const fn summary(self) -> &'static str {
        match self {
            ConcernFlag::IncomeRatioShortfall => "income below three times the monthly rent",
            ConcernFlag::InsufficientReferences => "fewer than two references provided",
            ConcernFlag::MissingBackgroundConsent => "background check consent not given",
        }
    }
}

/// Concerns are only surfaced for applications that fall below the Good
/// Match threshold; stronger applications get a clean review panel.
pub(crate) fn derive(application: &Application, raw_score: u8) -> Vec<ConcernFlag> {
    if raw_score >= GOOD_MATCH_MIN {
        return Vec::new();
    }

    let mut flags = Vec::new();
    if !meets_income_target(application) {
        flags.push(ConcernFlag::IncomeRatioShortfall);
    }
    if !has_sufficient_references(application) {
        flags.push(ConcernFlag::InsufficientReferences);
    }
    if !background_consent_given(application) {
        flags.push(ConcernFlag::MissingBackgroundConsent);
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_application_raises_every_concern() {
        let flags = derive(&Application::default(), 0);
        assert_eq!(
            flags,
            vec![
                ConcernFlag::IncomeRatioShortfall,
                ConcernFlag::InsufficientReferences,
                ConcernFlag::MissingBackgroundConsent,
            ]
        );
    }

    #[test]
    fn good_match_scores_suppress_concerns() {
        let flags = derive(&Application::default(), GOOD_MATCH_MIN);
        assert!(flags.is_empty());
    }

    #[test]
    fn qualifying_income_clears_the_income_flag() {
        let application = Application {
            applicant_income: 4_500.0,
            monthly_rent: 1_500.0,
            ..Application::default()
        };

        let flags = derive(&application, 40);

        assert!(!flags.contains(&ConcernFlag::IncomeRatioShortfall));
        assert!(flags.contains(&ConcernFlag::InsufficientReferences));
    }
}
