use anyhow::{Context, Result};

use crate::generator::{context::GeneratorContext, prompts, state::BlogState};
use crate::llm::client::LanguageModel;
use crate::search::WebSearch;
use crate::types::{blog::Plan, evidence::EvidenceItem, routing::ResearchMode};

/// 建议的章节数量范围，仅写在提示词里，不做强制校验
pub const SUGGESTED_TASK_RANGE: std::ops::RangeInclusive<usize> = 5..=9;

/// 规划文章结构，规划失败会中断整个运行
pub async fn plan<M, S>(
    context: &GeneratorContext<M, S>,
    topic: &str,
    mode: ResearchMode,
    evidence: &[EvidenceItem],
) -> Result<Plan>
where
    M: LanguageModel,
    S: WebSearch,
{
    let plan: Plan = context
        .llm_client
        .extract(
            prompts::ORCHESTRATOR_SYSTEM,
            &prompts::orchestrator_user_prompt(topic, mode, evidence),
        )
        .await
        .context("Failed to plan the article")?;

    if !SUGGESTED_TASK_RANGE.contains(&plan.tasks.len()) {
        tracing::warn!(tasks = plan.tasks.len(), "⚠️ 章节数量超出建议范围");
    }

    Ok(plan)
}

pub async fn execute<M, S>(context: &GeneratorContext<M, S>, state: &mut BlogState) -> Result<()>
where
    M: LanguageModel,
    S: WebSearch,
{
    let plan = plan(context, &state.topic, state.mode, &state.evidence).await?;
    tracing::info!(
        title = %plan.blog_title,
        kind = %plan.blog_kind,
        tasks = plan.tasks.len(),
        "🧩 规划完成"
    );
    state.plan = Some(plan);
    Ok(())
}
