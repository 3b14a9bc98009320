use serde::{Deserialize, Serialize};

use super::domain::{
    Application, Cleanliness, EmploymentLength, EmploymentStatus, PetOwnership, SmokingStatus,
};

/// Weighted categories making up the 100-point compatibility scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    IncomeRatio,
    LifestyleFit,
    EmploymentStability,
    ReferencesBackground,
    Completeness,
}

/// Earned points for one category alongside its fixed budget, so reviewers
/// can audit how a score was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub earned: u8,
    pub max: u8,
    pub notes: String,
}

const INCOME_RATIO_MAX: u8 = 30;
const LIFESTYLE_MAX: u8 = 25;
const EMPLOYMENT_MAX: u8 = 20;
const REFERENCES_MAX: u8 = 15;
const COMPLETENESS_MAX: u8 = 10;

const STRONG_INCOME_RATIO: f64 = 3.0;
const SOLID_INCOME_RATIO: f64 = 2.5;
const MARGINAL_INCOME_RATIO: f64 = 2.0;
const SUFFICIENT_REFERENCES: usize = 2;

/// Income-to-rent ratio when the rent is meaningful. A draft without a
/// positive rent has no ratio and earns nothing in the income category.
pub(crate) fn income_ratio(application: &Application) -> Option<f64> {
    (application.monthly_rent > 0.0)
        .then(|| application.applicant_income / application.monthly_rent)
}

/// Shared predicate: the applicant clears the 3x-rent affordability bar.
/// Used by both the numeric score and the reviewer concern flags, so the
/// threshold lives in exactly one place.
pub fn meets_income_target(application: &Application) -> bool {
    income_ratio(application).is_some_and(|ratio| ratio >= STRONG_INCOME_RATIO)
}

/// Shared predicate: at least two references are listed.
pub fn has_sufficient_references(application: &Application) -> bool {
    application.references.len() >= SUFFICIENT_REFERENCES
}

/// Shared predicate: background check consent granted.
pub fn background_consent_given(application: &Application) -> bool {
    application.consents.background_check
}

/// Scores every category and derives the 0-100 raw score. Each category
/// always contributes its full budget to the denominator: missing data earns
/// zero, it does not shrink the scale.
pub(crate) fn score_application(application: &Application) -> (Vec<CategoryScore>, u8) {
    let components = vec![
        income_component(application),
        lifestyle_component(application),
        employment_component(application),
        references_component(application),
        completeness_component(application),
    ];

    let earned: u32 = components
        .iter()
        .map(|component| u32::from(component.earned))
        .sum();
    let max: u32 = components
        .iter()
        .map(|component| u32::from(component.max))
        .sum();

    let raw_score = if max == 0 {
        0
    } else {
        (100.0 * f64::from(earned) / f64::from(max)).round() as u8
    };

    (components, raw_score)
}

fn income_component(application: &Application) -> CategoryScore {
    let (earned, notes) = match income_ratio(application) {
        Some(ratio) if ratio >= STRONG_INCOME_RATIO => {
            (30, format!("income ratio {ratio:.2} clears the {STRONG_INCOME_RATIO}x rent bar"))
        }
        Some(ratio) if ratio >= SOLID_INCOME_RATIO => {
            (20, format!("income ratio {ratio:.2} close to the affordability bar"))
        }
        Some(ratio) if ratio >= MARGINAL_INCOME_RATIO => {
            (10, format!("income ratio {ratio:.2} marginal"))
        }
        Some(ratio) => (0, format!("income ratio {ratio:.2} below the marginal threshold")),
        None => (0, "no positive rent on file; income ratio not evaluable".to_string()),
    };

    CategoryScore {
        category: ScoreCategory::IncomeRatio,
        earned,
        max: INCOME_RATIO_MAX,
        notes,
    }
}

fn lifestyle_component(application: &Application) -> CategoryScore {
    let mut earned = 0u8;
    let mut traits = Vec::new();

    if let Some(lifestyle) = &application.lifestyle {
        if lifestyle.cleanliness == Cleanliness::VeryClean {
            earned += 10;
            traits.push("very clean");
        }
        if lifestyle.smoking == SmokingStatus::NonSmoker {
            earned += 8;
            traits.push("non-smoker");
        }
        if lifestyle.pets == PetOwnership::NoPets {
            earned += 7;
            traits.push("no pets");
        }
    }

    let notes = if traits.is_empty() {
        "no matching lifestyle traits".to_string()
    } else {
        traits.join(", ")
    };

    CategoryScore {
        category: ScoreCategory::LifestyleFit,
        earned,
        max: LIFESTYLE_MAX,
        notes,
    }
}

fn employment_component(application: &Application) -> CategoryScore {
    let mut earned = 0u8;
    let mut traits = Vec::new();

    if let Some(employment) = &application.employment {
        if employment.status == EmploymentStatus::FullTime {
            earned += 15;
            traits.push("full-time");
        }
        if employment.length == EmploymentLength::MoreThanFiveYears {
            earned += 5;
            traits.push("more than five years tenure");
        }
    }

    let notes = if traits.is_empty() {
        "no employment stability signals".to_string()
    } else {
        traits.join(", ")
    };

    CategoryScore {
        category: ScoreCategory::EmploymentStability,
        earned,
        max: EMPLOYMENT_MAX,
        notes,
    }
}

fn references_component(application: &Application) -> CategoryScore {
    let mut earned = 0u8;
    let mut traits = Vec::new();

    if has_sufficient_references(application) {
        earned += 10;
        traits.push("two or more references");
    }
    if background_consent_given(application) {
        earned += 3;
        traits.push("background check consent");
    }
    if application.consents.credit_check {
        earned += 2;
        traits.push("credit check consent");
    }

    let notes = if traits.is_empty() {
        "no references or screening consents".to_string()
    } else {
        traits.join(", ")
    };

    CategoryScore {
        category: ScoreCategory::ReferencesBackground,
        earned,
        max: REFERENCES_MAX,
        notes,
    }
}

fn completeness_component(application: &Application) -> CategoryScore {
    let mut earned = 0u8;
    let mut traits = Vec::new();

    let has_motivation = application
        .motivation_text
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty());
    if has_motivation {
        earned += 5;
        traits.push("motivation letter");
    }
    if application.emergency_contact_provided {
        earned += 5;
        traits.push("emergency contact");
    }

    let notes = if traits.is_empty() {
        "application details incomplete".to_string()
    } else {
        traits.join(", ")
    };

    CategoryScore {
        category: ScoreCategory::Completeness,
        earned,
        max: COMPLETENESS_MAX,
        notes,
    }
}
