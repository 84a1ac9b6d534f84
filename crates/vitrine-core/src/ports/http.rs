// Port implementations over the vitrine-api HTTP clients.

use async_trait::async_trait;

use vitrine_api::{DirectoryClient, ImageClient};

use crate::error::{DirectoryError, PreloadError};
use crate::model::{Configuration, Property};
use crate::ports::{DirectoryService, ImagePreloader};

#[async_trait]
impl DirectoryService for DirectoryClient {
    async fn get_configuration(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<Configuration, DirectoryError> {
        let response = self.fetch_configuration(branch_id, tv_id).await?;
        Ok(response.into())
    }

    async fn get_properties(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<Vec<Property>, DirectoryError> {
        let response = self.fetch_properties(branch_id, tv_id).await?;
        Ok(response.properties.into_iter().map(Property::from).collect())
    }
}

#[async_trait]
impl ImagePreloader for ImageClient {
    async fn preload(&self, url: &str) -> Result<(), PreloadError> {
        self.fetch(url).await.map_err(|e| PreloadError {
            url: url.to_owned(),
            message: e.to_string(),
        })
    }
}
