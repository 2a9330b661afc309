//! The full student record submitted for prediction.

use serde::{Deserialize, Serialize};

use super::attributes::{
    Address, EnrollmentReason, FamilySize, Guardian, ParentJob, ParentStatus, School, Sex, YesNo,
};

/// A single student record as collected by the form and forwarded to the
/// upstream predictor.
///
/// Field names on the wire follow the UCI student performance dataset, with
/// its mixed casing (`Medu`, `Pstatus`, `Dalc`). The numeric ranges quoted
/// below are what the dataset uses; they are deliberately not enforced here.
/// An out-of-range number is forwarded untouched and the predictor answers
/// as it sees fit. Categorical fields are a different matter: an unknown
/// spelling would be garbage to the model, so those are typed as enums and
/// rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    /// Student's age (15 to 22).
    pub age: u8,
    /// Mother's education level (0 none to 4 higher education).
    #[serde(rename = "Medu")]
    pub medu: u8,
    /// Father's education level (0 none to 4 higher education).
    #[serde(rename = "Fedu")]
    pub fedu: u8,
    /// Home-to-school travel time bucket (1 under 15min to 4 over 1h).
    pub traveltime: u8,
    /// Weekly study time bucket (1 under 2h to 4 over 10h).
    pub studytime: u8,
    /// Number of past class failures.
    pub failures: u32,
    /// Quality of family relationships (1 very bad to 5 excellent).
    pub famrel: u8,
    /// Free time after school (1 very low to 5 very high).
    pub freetime: u8,
    /// Going out with friends (1 very low to 5 very high).
    pub goout: u8,
    /// Workday alcohol consumption (1 very low to 5 very high).
    #[serde(rename = "Dalc")]
    pub dalc: u8,
    /// Weekend alcohol consumption (1 very low to 5 very high).
    #[serde(rename = "Walc")]
    pub walc: u8,
    /// Current health status (1 very bad to 5 very good).
    pub health: u8,
    /// Number of school absences.
    pub absences: u32,
    pub school: School,
    pub sex: Sex,
    pub address: Address,
    pub famsize: FamilySize,
    #[serde(rename = "Pstatus")]
    pub pstatus: ParentStatus,
    /// Mother's job.
    #[serde(rename = "Mjob")]
    pub mjob: ParentJob,
    /// Father's job.
    #[serde(rename = "Fjob")]
    pub fjob: ParentJob,
    pub reason: EnrollmentReason,
    pub guardian: Guardian,
    /// Extra educational support from school.
    pub schoolsup: YesNo,
    /// Educational support from family.
    pub famsup: YesNo,
    /// Extra paid classes in the course subject.
    pub paid: YesNo,
    /// Extra-curricular activities.
    pub activities: YesNo,
    /// Attended nursery school.
    pub nursery: YesNo,
    /// Wants to take higher education.
    pub higher: YesNo,
    /// Internet access at home.
    pub internet: YesNo,
    /// In a romantic relationship.
    pub romantic: YesNo,
}

impl Default for StudentInput {
    /// The record the form starts from: a median-ish student profile rather
    /// than zeroed fields, so a bare submission still produces a sensible
    /// prediction.
    fn default() -> Self {
        Self {
            age: 16,
            medu: 2,
            fedu: 2,
            traveltime: 1,
            studytime: 2,
            failures: 0,
            famrel: 4,
            freetime: 3,
            goout: 2,
            dalc: 1,
            walc: 1,
            health: 5,
            absences: 0,
            school: School::GabrielPereira,
            sex: Sex::Female,
            address: Address::Urban,
            famsize: FamilySize::MoreThanThree,
            pstatus: ParentStatus::Together,
            mjob: ParentJob::Other,
            fjob: ParentJob::Other,
            reason: EnrollmentReason::Course,
            guardian: Guardian::Mother,
            schoolsup: YesNo::No,
            famsup: YesNo::Yes,
            paid: YesNo::No,
            activities: YesNo::Yes,
            nursery: YesNo::Yes,
            higher: YesNo::Yes,
            internet: YesNo::Yes,
            romantic: YesNo::No,
        }
    }
}
