//! Prediction results returned by the upstream predictor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grade classes the predictor can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class probabilities as reported by the predictor.
///
/// Values are relayed exactly as received. Whether they sum to one is the
/// predictor's business, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeProbabilities {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "F")]
    pub f: f64,
}

/// The prediction payload returned to the caller.
///
/// Deserializing the upstream response through this type narrows it: any
/// extra fields the predictor attaches are dropped, and the public contract
/// stays exactly these two fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Grade,
    pub probabilities: GradeProbabilities,
}
