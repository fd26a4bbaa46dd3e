//! Per-region collection metrics.

use dataexplorer_core::arm::{collection_region_metrics_path, CollectionRegionRef, MetricListResult};
use reqwest::Method;

use super::ArmClient;
use crate::error::Result;

impl ArmClient {
    /// List metrics of one collection in one region, filtered by an OData `$filter`.
    pub async fn list_collection_region_metrics(
        &self,
        collection: &CollectionRegionRef,
        filter: &str,
    ) -> Result<MetricListResult> {
        let path = collection_region_metrics_path(collection);
        let response = self
            .request_with_query(Method::GET, &path, &[("$filter", filter)])?
            .send()
            .await?;
        self.handle_response(&path, response).await
    }
}
