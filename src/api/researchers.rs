use crate::api::types::AnalysisReport;
use crate::api::{ApiClient, ApiClientError, encode_path_segment};

impl ApiClient {
    /// Fetch the precomputed impact analysis for a researcher ID.
    pub async fn get_analysis(
        &self,
        researcher_id: &str,
    ) -> Result<AnalysisReport, ApiClientError> {
        let path = format!("/researcher/{}", encode_path_segment(researcher_id));
        self.get(&path).await
    }
}
