//! Integration specifications for the application scoring engine, covering
//! the review-queue contract: raw score bounds, labels, category credit,
//! and the concern flags surfaced for weak applications.

use roomfair::engines::scoring::{
    Application, Cleanliness, ConcernFlag, Consents, EmploymentLength, EmploymentRecord,
    EmploymentStatus, LifestyleProfile, MatchLabel, PetOwnership, Reference, ScoreCategory,
    ScoringEngine, SmokingStatus,
};

fn reference(name: &str) -> Reference {
    Reference {
        name: name.to_string(),
        phone: Some("555-0100".to_string()),
        relationship: Some("landlord".to_string()),
    }
}

fn complete_application() -> Application {
    Application {
        applicant_income: 30_000.0,
        monthly_rent: 10_000.0,
        lifestyle: Some(LifestyleProfile {
            cleanliness: Cleanliness::VeryClean,
            smoking: SmokingStatus::NonSmoker,
            pets: PetOwnership::NoPets,
        }),
        employment: Some(EmploymentRecord {
            status: EmploymentStatus::FullTime,
            length: EmploymentLength::MoreThanFiveYears,
        }),
        references: vec![reference("Prior landlord"), reference("Employer")],
        consents: Consents {
            background_check: true,
            credit_check: true,
        },
        motivation_text: Some("Quiet professional looking for a long stay.".to_string()),
        emergency_contact_provided: true,
    }
}

#[test]
fn complete_application_scores_a_perfect_hundred() {
    let outcome = ScoringEngine::new().score(&complete_application());

    assert_eq!(outcome.score.raw_score, 100);
    assert_eq!(outcome.score.label, MatchLabel::ExcellentMatch);
    assert_eq!(outcome.score.label.label(), "Excellent Match");
    assert!(outcome.concerns.is_empty());
    assert!(outcome
        .components
        .iter()
        .all(|component| component.earned == component.max));
}

#[test]
fn empty_draft_scores_zero_without_panicking() {
    let outcome = ScoringEngine::new().score(&Application::default());

    assert_eq!(outcome.score.raw_score, 0);
    assert_eq!(outcome.score.label, MatchLabel::NeedsReview);
    assert_eq!(
        outcome.concerns,
        vec![
            ConcernFlag::IncomeRatioShortfall,
            ConcernFlag::InsufficientReferences,
            ConcernFlag::MissingBackgroundConsent,
        ]
    );
}

#[test]
fn raw_score_stays_within_bounds_across_partial_drafts() {
    let drafts = [
        Application::default(),
        Application {
            applicant_income: 1_000_000.0,
            monthly_rent: 1.0,
            ..Application::default()
        },
        Application {
            monthly_rent: 1_500.0,
            ..Application::default()
        },
        complete_application(),
    ];

    for draft in drafts {
        let outcome = ScoringEngine::new().score(&draft);
        assert!(outcome.score.raw_score <= 100);
    }
}

#[test]
fn missing_employment_scores_against_the_full_scale() {
    let mut application = complete_application();
    application.employment = None;

    let outcome = ScoringEngine::new().score(&application);

    // 100 minus the untouched 20-point employment budget.
    assert_eq!(outcome.score.raw_score, 80);
    let employment = outcome
        .components
        .iter()
        .find(|component| component.category == ScoreCategory::EmploymentStability)
        .expect("employment component present");
    assert_eq!(employment.earned, 0);
    assert_eq!(employment.max, 20);
}

#[test]
fn improving_income_never_lowers_the_score() {
    let mut weak = complete_application();
    weak.applicant_income = 15_000.0; // ratio 1.5, below every tier

    let weak_outcome = ScoringEngine::new().score(&weak);
    let strong_outcome = ScoringEngine::new().score(&complete_application());

    assert!(weak_outcome.score.raw_score < strong_outcome.score.raw_score);
    assert_eq!(strong_outcome.score.raw_score - weak_outcome.score.raw_score, 30);
}

#[test]
fn partial_income_tiers_award_graduated_credit() {
    let engine = ScoringEngine::new();
    for (income, expected_raw) in [(25_000.0, 90), (20_000.0, 80)] {
        let mut application = complete_application();
        application.applicant_income = income;

        let outcome = engine.score(&application);
        assert_eq!(outcome.score.raw_score, expected_raw, "income {income}");
    }
}

#[test]
fn single_reference_earns_no_reference_credit() {
    let mut application = complete_application();
    application.references = vec![reference("Only one")];

    let outcome = ScoringEngine::new().score(&application);

    assert_eq!(outcome.score.raw_score, 90);
}

#[test]
fn concern_flags_stay_in_lockstep_with_the_score_predicates() {
    // Scores below 60 but clears the income bar: only the other two flags.
    let application = Application {
        applicant_income: 4_500.0,
        monthly_rent: 1_500.0,
        motivation_text: Some("Hello".to_string()),
        emergency_contact_provided: true,
        ..Application::default()
    };

    let outcome = ScoringEngine::new().score(&application);

    assert!(outcome.score.raw_score < 60);
    assert_eq!(
        outcome.concerns,
        vec![
            ConcernFlag::InsufficientReferences,
            ConcernFlag::MissingBackgroundConsent,
        ]
    );
}

#[test]
fn good_match_applications_surface_no_concerns() {
    let mut application = complete_application();
    application.employment = None;
    application.lifestyle = Some(LifestyleProfile {
        cleanliness: Cleanliness::Average,
        smoking: SmokingStatus::NonSmoker,
        pets: PetOwnership::NoPets,
    });

    let outcome = ScoringEngine::new().score(&application);

    assert_eq!(outcome.score.label, MatchLabel::GoodMatch);
    assert!(outcome.concerns.is_empty());
}

#[test]
fn wire_format_uses_the_marketplace_snake_case_literals() {
    let raw = r#"{
        "applicant_income": 30000,
        "monthly_rent": 10000,
        "lifestyle": {
            "cleanliness": "very_clean",
            "smoking": "non_smoker",
            "pets": "no_pets"
        },
        "employment": { "status": "full_time", "length": "more_than_5_years" },
        "references": [{ "name": "Prior landlord" }, { "name": "Employer" }],
        "consents": { "background_check": true, "credit_check": true },
        "motivation_text": "Quiet professional.",
        "emergency_contact_provided": true
    }"#;

    let application: Application = serde_json::from_str(raw).expect("application parses");
    let outcome = ScoringEngine::new().score(&application);

    assert_eq!(outcome.score.raw_score, 100);
}

#[test]
fn partially_filled_json_draft_parses_and_scores() {
    let application: Application =
        serde_json::from_str(r#"{ "applicant_income": 2000 }"#).expect("draft parses");

    let outcome = ScoringEngine::new().score(&application);

    assert_eq!(outcome.score.raw_score, 0);
    assert_eq!(outcome.score.label, MatchLabel::NeedsReview);
}
