use crate::domain::model::{CardDefaults, CardRequest, RenderResult};
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
    fn output_path(&self) -> &str;
    fn cards(&self) -> &[CardRequest];
    fn defaults(&self) -> CardDefaults;
    fn write_index(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CardRequest>>;
    async fn transform(&self, cards: Vec<CardRequest>) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
