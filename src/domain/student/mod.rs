//! Student record types submitted for prediction.

pub mod attributes;
pub mod record;

pub use attributes::{
    Address, EnrollmentReason, FamilySize, Guardian, ParentJob, ParentStatus, School, Sex, YesNo,
};
pub use record::StudentInput;
