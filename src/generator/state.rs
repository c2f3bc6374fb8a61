use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::generator::sections::SectionSet;
use crate::types::{
    blog::{BlogRequest, Plan},
    evidence::EvidenceItem,
    image::ImageSpec,
    routing::{ResearchMode, RoutingOutcome},
};

/// 一次运行的全部状态，各阶段依次读写
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BlogState {
    pub topic: String,
    pub as_of: NaiveDate,
    pub mode: ResearchMode,
    pub needs_research: bool,
    pub queries: Vec<String>,
    pub evidence: Vec<EvidenceItem>,
    pub plan: Option<Plan>,
    pub recency_days: u32,
    pub sections: SectionSet,
    pub merged_md: String,
    pub md_with_placeholders: String,
    pub image_specs: Vec<ImageSpec>,
    pub final_md: String,
}

/// 路由之后的下一个阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStage {
    Research,
    Orchestrator,
}

impl BlogState {
    pub fn new(request: &BlogRequest) -> Self {
        Self {
            topic: request.topic.clone(),
            as_of: request.as_of,
            mode: ResearchMode::default(),
            needs_research: false,
            queries: Vec::new(),
            evidence: Vec::new(),
            plan: None,
            recency_days: 7,
            sections: SectionSet::new(),
            merged_md: String::new(),
            md_with_placeholders: String::new(),
            image_specs: Vec::new(),
            final_md: String::new(),
        }
    }

    pub fn apply_routing(&mut self, outcome: RoutingOutcome) {
        self.needs_research = outcome.needs_research;
        self.mode = outcome.mode;
        self.queries = outcome.queries;
        self.recency_days = outcome.recency_days;
    }

    /// 规划完成后才可用
    pub fn plan(&self) -> Result<&Plan> {
        self.plan
            .as_ref()
            .ok_or_else(|| anyhow!("Plan is not available before the orchestrator stage"))
    }

    /// 路由后的条件分支
    pub fn route_next(&self) -> NextStage {
        if self.needs_research {
            NextStage::Research
        } else {
            NextStage::Orchestrator
        }
    }
}
