//! Schema description of the student record, served to API consumers so a
//! form can be rendered without hardcoding the field list twice.

use serde::Serialize;

/// Wire names of the thirteen numeric features, in dataset order.
pub const NUMERICAL_FEATURES: &[&str] = &[
    "age",
    "Medu",
    "Fedu",
    "traveltime",
    "studytime",
    "failures",
    "famrel",
    "freetime",
    "goout",
    "Dalc",
    "Walc",
    "health",
    "absences",
];

const YES_NO: &[&str] = &["yes", "no"];
const PARENT_JOBS: &[&str] = &["teacher", "health", "services", "at_home", "other"];

/// Names and allowed values of every feature the predictor consumes.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCatalog {
    pub numerical_features: &'static [&'static str],
    pub categorical_features: CategoricalFeatures,
}

/// Allowed values per categorical feature, keyed by dataset column name.
#[derive(Debug, Clone, Serialize)]
pub struct CategoricalFeatures {
    pub school: &'static [&'static str],
    pub sex: &'static [&'static str],
    pub address: &'static [&'static str],
    pub famsize: &'static [&'static str],
    #[serde(rename = "Pstatus")]
    pub pstatus: &'static [&'static str],
    #[serde(rename = "Mjob")]
    pub mjob: &'static [&'static str],
    #[serde(rename = "Fjob")]
    pub fjob: &'static [&'static str],
    pub reason: &'static [&'static str],
    pub guardian: &'static [&'static str],
    pub schoolsup: &'static [&'static str],
    pub famsup: &'static [&'static str],
    pub paid: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub nursery: &'static [&'static str],
    pub higher: &'static [&'static str],
    pub internet: &'static [&'static str],
    pub romantic: &'static [&'static str],
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self {
            numerical_features: NUMERICAL_FEATURES,
            categorical_features: CategoricalFeatures {
                school: &["GP", "MS"],
                sex: &["F", "M"],
                address: &["U", "R"],
                famsize: &["LE3", "GT3"],
                pstatus: &["T", "A"],
                mjob: PARENT_JOBS,
                fjob: PARENT_JOBS,
                reason: &["home", "reputation", "course", "other"],
                guardian: &["mother", "father", "other"],
                schoolsup: YES_NO,
                famsup: YES_NO,
                paid: YES_NO,
                activities: YES_NO,
                nursery: YES_NO,
                higher: YES_NO,
                internet: YES_NO,
                romantic: YES_NO,
            },
        }
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::new()
    }
}
