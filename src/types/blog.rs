use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 文章类型
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlogKind {
    #[default]
    Explainer,
    Tutorial,
    NewsRoundup,
    Comparison,
    SystemDesign,
}

impl std::fmt::Display for BlogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlogKind::Explainer => write!(f, "explainer"),
            BlogKind::Tutorial => write!(f, "tutorial"),
            BlogKind::NewsRoundup => write!(f, "news_roundup"),
            BlogKind::Comparison => write!(f, "comparison"),
            BlogKind::SystemDesign => write!(f, "system_design"),
        }
    }
}

/// 规划出的单个章节
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct Task {
    /// 仅用于最终拼装时排序
    pub id: i64,
    pub title: String,
    /// 一句话说明读者读完本节应当理解或能做到什么
    pub goal: String,
    /// 本节要覆盖的要点（3-6条）
    pub bullets: Vec<String>,
    /// 目标字数（120-550）
    pub target_words: u32,

    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub requires_research: bool,
    #[serde(default)]
    pub requires_citations: bool,
    #[serde(default)]
    pub requires_code: bool,
}

/// 文章规划
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct Plan {
    pub blog_title: String,
    pub audience: String,
    pub tone: String,
    #[serde(default)]
    pub blog_kind: BlogKind,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub tasks: Vec<Task>,
}

/// 一次生成请求
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BlogRequest {
    pub topic: String,
    pub as_of: chrono::NaiveDate,
}

impl BlogRequest {
    /// 创建请求，主题为空时返回错误
    pub fn new(topic: &str, as_of: chrono::NaiveDate) -> anyhow::Result<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            anyhow::bail!("Topic must not be empty");
        }
        Ok(Self {
            topic: topic.to_string(),
            as_of,
        })
    }
}
