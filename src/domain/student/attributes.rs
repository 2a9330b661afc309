//! Categorical attributes of a student record.
//!
//! The serde spellings mirror the UCI student performance dataset columns,
//! which is also the wire format the upstream predictor was trained on.
//! Changing a spelling here silently changes what the predictor receives,
//! so every variant is pinned with an explicit rename where needed.

use serde::{Deserialize, Serialize};

/// School the student is enrolled at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum School {
    /// Gabriel Pereira
    #[serde(rename = "GP")]
    GabrielPereira,
    /// Mousinho da Silveira
    #[serde(rename = "MS")]
    MousinhoDaSilveira,
}

/// Student's sex as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

/// Home address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Address {
    #[serde(rename = "U")]
    Urban,
    #[serde(rename = "R")]
    Rural,
}

/// Family size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilySize {
    /// Three household members or fewer.
    #[serde(rename = "LE3")]
    ThreeOrFewer,
    /// More than three household members.
    #[serde(rename = "GT3")]
    MoreThanThree,
}

/// Parents' cohabitation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentStatus {
    #[serde(rename = "T")]
    Together,
    #[serde(rename = "A")]
    Apart,
}

/// Occupation of a parent. Used for both mother and father.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentJob {
    Teacher,
    Health,
    Services,
    AtHome,
    Other,
}

/// Reason the student chose this school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentReason {
    /// Close to home.
    Home,
    /// School reputation.
    Reputation,
    /// Course preference.
    Course,
    Other,
}

/// Student's guardian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guardian {
    Mother,
    Father,
    Other,
}

/// Binary flag fields (extra support, internet access, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_school_wire_spellings() {
        assert_eq!(serde_json::to_value(School::GabrielPereira).unwrap(), json!("GP"));
        assert_eq!(serde_json::to_value(School::MousinhoDaSilveira).unwrap(), json!("MS"));
    }

    #[test]
    fn test_family_size_wire_spellings() {
        assert_eq!(serde_json::to_value(FamilySize::ThreeOrFewer).unwrap(), json!("LE3"));
        assert_eq!(serde_json::to_value(FamilySize::MoreThanThree).unwrap(), json!("GT3"));
    }

    #[test]
    fn test_parent_job_uses_snake_case() {
        assert_eq!(serde_json::to_value(ParentJob::AtHome).unwrap(), json!("at_home"));
        let parsed: ParentJob = serde_json::from_value(json!("services")).unwrap();
        assert_eq!(parsed, ParentJob::Services);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        assert!(serde_json::from_value::<School>(json!("XX")).is_err());
        assert!(serde_json::from_value::<YesNo>(json!("maybe")).is_err());
    }
}
