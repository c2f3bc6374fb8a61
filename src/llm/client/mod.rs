//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::config::LLMConfig;

mod providers;
pub mod utils;

use providers::ProviderClient;
use utils::log_token_usage;

/// 流水线依赖的模型能力：结构化输出与自由文本补全
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// 按T的JSON Schema抽取结构化结果
    async fn extract<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<T>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static;

    /// 单轮对话，返回原始文本
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// LLM客户端，进程启动时创建一次，之后只读
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// 按配置的次数调用，每次失败之间固定等待
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let max_attempts = self.config.retry_attempts.max(1);
        let retry_delay_ms = self.config.retry_delay_ms;
        let mut attempts = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    attempts += 1;
                    if attempts >= max_attempts {
                        tracing::error!(attempts, "[LLM ERROR] {}", err);
                        return Err(err);
                    }
                    tracing::warn!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {}次尝试): {}",
                        attempts,
                        max_attempts,
                        err
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }
}

#[async_trait]
impl LanguageModel for LLMClient {
    async fn extract<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<T>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
    {
        let extractor = self
            .client
            .create_extractor::<T>(system_prompt, &self.config);

        let result = self
            .retry_with_backoff(|| async { extractor.extract(user_prompt).await })
            .await?;

        let output = serde_json::to_string(&result).unwrap_or_default();
        log_token_usage("extract", system_prompt, user_prompt, &output);
        Ok(result)
    }

    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self.client.create_agent(system_prompt, &self.config);

        let response = self
            .retry_with_backoff(|| async { agent.prompt(user_prompt).await })
            .await?;

        log_token_usage("prompt", system_prompt, user_prompt, &response);
        Ok(response)
    }
}
