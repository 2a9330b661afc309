//! Domain layer - student records, prediction results and their errors.

pub mod error;
pub mod features;
pub mod prediction;
pub mod predictor;
pub mod student;

pub use error::{PredictorError, TRANSPORT_FALLBACK_MESSAGE, UPSTREAM_FALLBACK_MESSAGE};
pub use features::{CategoricalFeatures, FeatureCatalog};
pub use prediction::{Grade, GradeProbabilities, PredictionResult};
pub use predictor::PredictorClient;
pub use student::StudentInput;
