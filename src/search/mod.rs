//! 联网搜索能力

use async_trait::async_trait;
use thiserror::Error;

use crate::types::evidence::RawSearchResult;

pub mod tavily;

pub use tavily::TavilySearch;

/// 搜索错误
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search credentials are not configured")]
    MissingCredentials,
    #[error("search request failed: {0}")]
    RequestFailed(String),
    #[error("search API returned status {0}")]
    ApiError(u16),
    #[error("failed to parse search response: {0}")]
    ParseError(String),
}

/// 联网搜索服务
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// 执行一次搜索，最多返回max_results条原始结果
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawSearchResult>, SearchError>;
}
