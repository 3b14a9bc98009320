//! Weighted compatibility scoring for rental applications. Five fixed
//! category budgets sum to 100 points; missing data earns zero in its
//! category without shrinking the scale, so incomplete drafts score low
//! rather than erroring.

mod concerns;
mod domain;
mod rules;

pub use concerns::ConcernFlag;
pub use domain::{
    Application, Cleanliness, Consents, EmploymentLength, EmploymentRecord, EmploymentStatus,
    LifestyleProfile, PetOwnership, Reference, SmokingStatus,
};
pub use rules::{
    background_consent_given, has_sufficient_references, meets_income_target, CategoryScore,
    ScoreCategory,
};

use serde::{Deserialize, Serialize};

/// Raw score at or above which an application is an "Excellent Match".
pub const EXCELLENT_MATCH_MIN: u8 = 80;
/// Raw score at or above which an application is a "Good Match"; anything
/// below is routed to closer human review with concern flags.
pub const GOOD_MATCH_MIN: u8 = 60;

/// Stateless engine applying the fixed category budgets to an application.
/// Safe to share and invoke concurrently; each call reads only its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Scores an application against the full 100-point scale. Partially
    /// populated drafts are scored, not rejected, so the form can show a
    /// live score while the applicant types.
    pub fn score(&self, application: &Application) -> ScoringOutcome {
        let (components, raw_score) = rules::score_application(application);
        let label = MatchLabel::from_score(raw_score);
        let concerns = concerns::derive(application, raw_score);

        ScoringOutcome {
            score: CompatibilityScore { raw_score, label },
            components,
            concerns,
        }
    }
}

/// The headline score shown next to an application in the review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub raw_score: u8,
    pub label: MatchLabel,
}

/// Deterministic banding of the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLabel {
    ExcellentMatch,
    GoodMatch,
    NeedsReview,
}

impl MatchLabel {
    pub fn from_score(raw_score: u8) -> Self {
        if raw_score >= EXCELLENT_MATCH_MIN {
            Self::ExcellentMatch
        } else if raw_score >= GOOD_MATCH_MIN {
            Self::GoodMatch
        } else {
            Self::NeedsReview
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchLabel::ExcellentMatch => "Excellent Match",
            MatchLabel::GoodMatch => "Good Match",
            MatchLabel::NeedsReview => "Needs Review",
        }
    }
}

/// Full scoring output: headline score, per-category audit trail, and any
/// reviewer concerns for low scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub score: CompatibilityScore,
    pub components: Vec<CategoryScore>,
    pub concerns: Vec<ConcernFlag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds_band_the_score() {
        assert_eq!(MatchLabel::from_score(100), MatchLabel::ExcellentMatch);
        assert_eq!(MatchLabel::from_score(80), MatchLabel::ExcellentMatch);
        assert_eq!(MatchLabel::from_score(79), MatchLabel::GoodMatch);
        assert_eq!(MatchLabel::from_score(60), MatchLabel::GoodMatch);
        assert_eq!(MatchLabel::from_score(59), MatchLabel::NeedsReview);
        assert_eq!(MatchLabel::from_score(0), MatchLabel::NeedsReview);
    }

    #[test]
    fn display_labels_match_review_queue_copy() {
        assert_eq!(MatchLabel::ExcellentMatch.label(), "Excellent Match");
        assert_eq!(MatchLabel::GoodMatch.label(), "Good Match");
        assert_eq!(MatchLabel::NeedsReview.label(), "Needs Review");
    }

    #[test]
    fn empty_draft_scores_zero_needs_review() {
        let outcome = ScoringEngine::new().score(&Application::default());

        assert_eq!(outcome.score.raw_score, 0);
        assert_eq!(outcome.score.label, MatchLabel::NeedsReview);
        assert_eq!(outcome.components.len(), 5);
        assert_eq!(outcome.concerns.len(), 3);
    }
}
