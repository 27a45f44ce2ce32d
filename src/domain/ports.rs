use crate::domain::model::{SourceData, SplitResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn members_file(&self) -> &str;
    fn regions_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn archive_name(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceData>;
    async fn transform(&self, source: SourceData) -> Result<SplitResult>;
    async fn load(&self, result: SplitResult) -> Result<String>;
}
