use crate::domain::model::{Extraction, MatchOptions, ModelRequest, SummaryArtifacts};
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
    fn api_endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn roster_image(&self) -> &str;
    fn notes_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn roster_prompt(&self) -> String;
    fn notes_prompt(&self) -> String;
    fn match_options(&self) -> MatchOptions;
    fn output_formats(&self) -> &[String];
    fn bundle(&self) -> bool;
}

/// Port over the external inference endpoint. The contract is deliberately
/// thin: send a payload, get back free-form text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, request: ModelRequest) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Extraction>;
    async fn transform(&self, data: Extraction) -> Result<SummaryArtifacts>;
    async fn load(&self, result: SummaryArtifacts) -> Result<String>;
}
