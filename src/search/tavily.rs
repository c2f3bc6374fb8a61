use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{SearchError, WebSearch};
use crate::config::SearchConfig;
use crate::types::evidence::RawSearchResult;

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'static str,
    max_results: u32,
    include_answer: bool,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    title: String,
    url: String,
    #[serde(default)]
    content: String,
    published_date: Option<String>,
    score: Option<f64>,
}

impl From<TavilyResult> for RawSearchResult {
    fn from(result: TavilyResult) -> Self {
        Self {
            title: result.title,
            url: result.url,
            content: result.content,
            published_date: result.published_date,
            score: result.score,
        }
    }
}

/// 基于Tavily API的搜索实现
#[derive(Clone)]
pub struct TavilySearch {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl TavilySearch {
    pub fn new(config: &SearchConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/search", config.api_base_url.trim_end_matches('/')),
        })
    }

    /// 是否配置了搜索凭据
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[async_trait]
impl WebSearch for TavilySearch {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawSearchResult>, SearchError> {
        if !self.has_credentials() {
            return Err(SearchError::MissingCredentials);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&TavilyRequest {
                api_key: &self.api_key,
                query,
                search_depth: "basic",
                max_results,
                include_answer: false,
            })
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::ApiError(response.status().as_u16()));
        }

        let body: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        Ok(body.results.into_iter().map(RawSearchResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credentials_short_circuits() {
        let config = SearchConfig {
            api_key: String::new(),
            ..SearchConfig::default()
        };
        let search = TavilySearch::new(&config).unwrap();
        assert!(!search.has_credentials());

        let result = search.search("rust async", 5).await;
        assert!(matches!(result, Err(SearchError::MissingCredentials)));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = SearchConfig {
            api_base_url: "https://search.example.com/".to_string(),
            ..SearchConfig::default()
        };
        let search = TavilySearch::new(&config).unwrap();
        assert_eq!(search.endpoint, "https://search.example.com/search");
    }

    #[test]
    fn test_response_parsing() {
        let body: TavilyResponse = serde_json::from_str(
            r#"{"query": "q", "results": [
                {"title": "A", "url": "https://a.example", "content": "alpha", "score": 0.9},
                {"title": "B", "url": "https://b.example", "published_date": "2026-09-30"}
            ]}"#,
        )
        .unwrap();
        let results: Vec<RawSearchResult> = body.results.into_iter().map(Into::into).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, Some(0.9));
        assert_eq!(results[1].content, "");
        assert_eq!(results[1].published_date.as_deref(), Some("2026-09-30"));
    }
}
