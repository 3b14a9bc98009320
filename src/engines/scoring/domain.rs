use serde::{Deserialize, Serialize};

/// A rental application as submitted (or partially drafted) by an applicant.
/// Every optional field may be absent while the form is still being filled
/// in; the scorer treats absence as earning zero, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub applicant_income: f64,
    #[serde(default)]
    pub monthly_rent: f64,
    #[serde(default)]
    pub lifestyle: Option<LifestyleProfile>,
    #[serde(default)]
    pub employment: Option<EmploymentRecord>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub consents: Consents,
    #[serde(default)]
    pub motivation_text: Option<String>,
    #[serde(default)]
    pub emergency_contact_provided: bool,
}

/// Self-reported living habits used for roommate compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    pub cleanliness: Cleanliness,
    pub smoking: SmokingStatus,
    pub pets: PetOwnership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleanliness {
    VeryClean,
    Average,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    NonSmoker,
    OccasionalSmoker,
    Smoker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetOwnership {
    NoPets,
    SmallPets,
    LargePets,
}

/// Employment situation at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    pub status: EmploymentStatus,
    pub length: EmploymentLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
    SelfEmployed,
    Student,
    Unemployed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentLength {
    #[serde(rename = "less_than_1_year")]
    LessThanOneYear,
    #[serde(rename = "1_to_5_years")]
    OneToFiveYears,
    #[serde(rename = "more_than_5_years")]
    MoreThanFiveYears,
}

/// Prior landlord or personal reference. Only the count feeds the score;
/// the contact details are for the reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
}

/// Screening consents granted by the applicant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consents {
    #[serde(default)]
    pub background_check: bool,
    #[serde(default)]
    pub credit_check: bool,
}
