use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::generator::{
    context::GeneratorContext,
    prompts,
    sections::{SectionResult, SectionSet},
    state::BlogState,
};
use crate::llm::client::LanguageModel;
use crate::search::WebSearch;
use crate::types::{
    blog::{Plan, Task},
    evidence::EvidenceItem,
    routing::ResearchMode,
};
use crate::utils::threads::do_parallel_with_limit;

/// 分发给单个worker的私有数据副本
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkerPayload {
    pub task: Task,
    pub plan: Plan,
    pub topic: String,
    pub mode: ResearchMode,
    pub evidence: Vec<EvidenceItem>,
}

/// 为规划中的每个章节生成一个payload
pub fn fan_out(state: &BlogState) -> Result<Vec<WorkerPayload>> {
    let plan = state.plan()?;
    Ok(plan
        .tasks
        .iter()
        .map(|task| WorkerPayload {
            task: task.clone(),
            plan: plan.clone(),
            topic: state.topic.clone(),
            mode: state.mode,
            evidence: state.evidence.clone(),
        })
        .collect())
}

/// 写作单个章节
pub async fn write_section<M, S>(
    context: &GeneratorContext<M, S>,
    payload: WorkerPayload,
) -> Result<SectionResult>
where
    M: LanguageModel,
    S: WebSearch,
{
    let WorkerPayload {
        task,
        plan,
        topic,
        mode,
        evidence,
    } = payload;

    let user_prompt = prompts::worker_user_prompt(&task, &plan, &topic, mode, &evidence);
    let markdown = context
        .llm_client
        .prompt(prompts::WORKER_SYSTEM, &user_prompt)
        .await
        .with_context(|| format!("Failed to write section {} ({})", task.id, task.title))?;

    Ok(SectionResult::new(task.id, markdown.trim()))
}

/// 并发写作所有章节，等待全部完成后汇总
///
/// 任意一个章节失败都会使整个运行失败。
pub async fn write_all_sections<M, S>(
    context: &GeneratorContext<M, S>,
    payloads: Vec<WorkerPayload>,
) -> Result<SectionSet>
where
    M: LanguageModel,
    S: WebSearch,
{
    let max_parallels = context.config.llm.max_parallels;
    tracing::info!(
        sections = payloads.len(),
        max_parallels,
        "🚀 启动并发章节写作"
    );

    let futures: Vec<_> = payloads
        .into_iter()
        .map(|payload| Box::pin(write_section(context, payload)))
        .collect();

    let results = do_parallel_with_limit(futures, max_parallels).await;

    let mut sections = SectionSet::new();
    for result in results {
        sections.push(result?);
    }
    Ok(sections)
}

pub async fn execute<M, S>(context: &GeneratorContext<M, S>, state: &mut BlogState) -> Result<()>
where
    M: LanguageModel,
    S: WebSearch,
{
    let payloads = fan_out(state)?;
    let written = write_all_sections(context, payloads).await?;
    state.sections = std::mem::take(&mut state.sections).merge(written);
    tracing::info!(sections = state.sections.len(), "✅ 章节写作完成");
    Ok(())
}
