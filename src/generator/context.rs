use anyhow::Result;

use crate::{
    config::Config,
    llm::client::{LLMClient, LanguageModel},
    search::{TavilySearch, WebSearch},
};

/// 生成器上下文
///
/// 模型与搜索客户端在启动时创建一次，之后作为只读依赖传给各阶段。
pub struct GeneratorContext<M = LLMClient, S = TavilySearch> {
    /// LLM调用器，用于与AI通信。
    pub llm_client: M,
    /// 联网搜索
    pub searcher: S,
    /// 配置
    pub config: Config,
}

impl GeneratorContext<LLMClient, TavilySearch> {
    /// 根据配置创建生产环境使用的上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.llm.clone())?;
        let searcher = TavilySearch::new(&config.search)?;
        Ok(Self::with_clients(config, llm_client, searcher))
    }
}

impl<M, S> GeneratorContext<M, S>
where
    M: LanguageModel,
    S: WebSearch,
{
    /// 使用外部提供的客户端创建上下文
    pub fn with_clients(config: Config, llm_client: M, searcher: S) -> Self {
        Self {
            llm_client,
            searcher,
            config,
        }
    }
}
