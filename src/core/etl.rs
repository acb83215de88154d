use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching project list...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} project records", records.len());

        tracing::info!("Building landscape...");
        let landscape = self.pipeline.transform(records).await?;
        tracing::info!("Grouped into {} categories", landscape.categories.len());

        let output_path = self.pipeline.load(landscape).await?;
        tracing::info!("Output written to {}", output_path);

        Ok(output_path)
    }
}
