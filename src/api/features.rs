//! Feature schema endpoint handler

use crate::api::types::Json;
use crate::domain::FeatureCatalog;

/// GET /api/features
///
/// Describes the record the predictor expects, so clients can build their
/// form from the same schema the API validates against.
pub async fn list_features() -> Json<FeatureCatalog> {
    Json(FeatureCatalog::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_full_schema() {
        let Json(catalog) = list_features().await;

        assert_eq!(catalog.numerical_features.len(), 13);
        assert_eq!(catalog.categorical_features.school, ["GP", "MS"]);
    }
}
