use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 搜索服务返回的原始结果，尚未经过整理
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawSearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    pub published_date: Option<String>,
    pub score: Option<f64>,
}

/// 整理后的单条证据
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct EvidenceItem {
    pub title: String,
    pub url: String,
    /// 发布日期，尽量使用YYYY-MM-DD
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    /// 来源站点或出版方
    #[serde(default)]
    pub source: Option<String>,
}

/// 证据提取的输出结构
#[derive(Debug, Serialize, Deserialize, Clone, Default, JsonSchema)]
pub struct EvidencePack {
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}
