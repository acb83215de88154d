use crate::domain::model::{Landscape, ProjectRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn input_file(&self) -> Option<&str>;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ProjectRecord>>;
    async fn transform(&self, records: Vec<ProjectRecord>) -> Result<Landscape>;
    async fn load(&self, landscape: Landscape) -> Result<String>;
}
