use crate::core::builder::LandscapeBuilder;
use crate::core::logo::LogoResolver;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{Landscape, ProjectRecord};
use crate::utils::error::Result;
use reqwest::Client;
use std::fs;

pub struct LandscapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    logos: LogoResolver,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> LandscapePipeline<S, C> {
    pub fn new(storage: S, config: C, logos: LogoResolver) -> Self {
        Self {
            storage,
            config,
            logos,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LandscapePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ProjectRecord>> {
        if let Some(path) = self.config.input_file() {
            tracing::debug!("Reading project list from {}", path);
            let data = fs::read(path)?;
            let records = serde_json::from_slice(&data)?;
            return Ok(records);
        }

        tracing::debug!("Fetching project list from {}", self.config.api_endpoint());
        let response = self
            .client
            .get(self.config.api_endpoint())
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());
        let records = response.json::<Vec<ProjectRecord>>().await?;
        Ok(records)
    }

    async fn transform(&self, records: Vec<ProjectRecord>) -> Result<Landscape> {
        let mut builder = LandscapeBuilder::new();

        for record in records {
            // Empty logo strings count as absent, like every other field.
            let logo_url = record.logo.as_deref().filter(|url| !url.is_empty());
            let logo = self.logos.resolve(logo_url).await;
            builder.push(record, logo);
        }

        Ok(builder.finish())
    }

    async fn load(&self, landscape: Landscape) -> Result<String> {
        let yaml = serde_yaml::to_string(&landscape)?;

        let output_file = self.config.output_file();
        tracing::debug!("Writing {} bytes to {}", yaml.len(), output_file);
        self.storage.write_file(output_file, yaml.as_bytes()).await?;

        Ok(output_file.to_string())
    }
}
