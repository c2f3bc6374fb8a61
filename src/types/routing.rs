use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 调研模式
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResearchMode {
    /// 常青话题，无需联网
    #[default]
    ClosedBook,
    /// 常青话题，但需要最新的示例、工具或模型
    Hybrid,
    /// 时效性强的话题（新闻、价格、政策等）
    OpenBook,
}

impl ResearchMode {
    /// 该模式下可接受的证据最大天数
    pub fn recency_days(&self) -> u32 {
        match self {
            ResearchMode::OpenBook => 7,
            ResearchMode::Hybrid => 45,
            ResearchMode::ClosedBook => 3650,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchMode::ClosedBook => "closed_book",
            ResearchMode::Hybrid => "hybrid",
            ResearchMode::OpenBook => "open_book",
        }
    }
}

impl std::fmt::Display for ResearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "closed_book" => Ok(ResearchMode::ClosedBook),
            "hybrid" => Ok(ResearchMode::Hybrid),
            "open_book" => Ok(ResearchMode::OpenBook),
            _ => Err(format!("Unknown research mode: {}", s)),
        }
    }
}

/// 路由决策，由模型在规划之前给出
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct RouterDecision {
    /// 是否需要联网调研
    pub needs_research: bool,

    /// 调研模式
    pub mode: ResearchMode,

    /// 决策理由
    pub reason: String,

    /// 候选搜索词
    #[serde(default)]
    pub queries: Vec<String>,

    /// 每个搜索词的最大结果数
    #[serde(default = "default_max_results_per_query")]
    pub max_results_per_query: u32,
}

fn default_max_results_per_query() -> u32 {
    5
}

/// 路由阶段写回运行状态的结果
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoutingOutcome {
    pub needs_research: bool,
    pub mode: ResearchMode,
    pub queries: Vec<String>,
    pub recency_days: u32,
}

impl RoutingOutcome {
    /// 决策失败时走最便宜的路径：不调研、闭卷、不限时效
    pub fn fallback() -> Self {
        Self {
            needs_research: false,
            mode: ResearchMode::ClosedBook,
            queries: Vec::new(),
            recency_days: ResearchMode::ClosedBook.recency_days(),
        }
    }
}

impl From<RouterDecision> for RoutingOutcome {
    fn from(decision: RouterDecision) -> Self {
        Self {
            needs_research: decision.needs_research,
            recency_days: decision.mode.recency_days(),
            mode: decision.mode,
            queries: decision.queries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_days_per_mode() {
        assert_eq!(ResearchMode::OpenBook.recency_days(), 7);
        assert_eq!(ResearchMode::Hybrid.recency_days(), 45);
        assert_eq!(ResearchMode::ClosedBook.recency_days(), 3650);
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&ResearchMode::OpenBook).unwrap();
        assert_eq!(json, "\"open_book\"");
        let mode: ResearchMode = serde_json::from_str("\"hybrid\"").unwrap();
        assert_eq!(mode, ResearchMode::Hybrid);
        assert_eq!("closed_book".parse::<ResearchMode>().unwrap(), ResearchMode::ClosedBook);
        assert!("sideways".parse::<ResearchMode>().is_err());
    }

    #[test]
    fn test_decision_defaults() {
        let decision: RouterDecision = serde_json::from_str(
            r#"{"needs_research": true, "mode": "hybrid", "reason": "needs fresh tools"}"#,
        )
        .unwrap();
        assert!(decision.queries.is_empty());
        assert_eq!(decision.max_results_per_query, 5);

        let outcome = RoutingOutcome::from(decision);
        assert!(outcome.needs_research);
        assert_eq!(outcome.recency_days, 45);
    }

    #[test]
    fn test_fallback_outcome() {
        let outcome = RoutingOutcome::fallback();
        assert!(!outcome.needs_research);
        assert_eq!(outcome.mode, ResearchMode::ClosedBook);
        assert!(outcome.queries.is_empty());
        assert_eq!(outcome.recency_days, 3650);
    }
}
