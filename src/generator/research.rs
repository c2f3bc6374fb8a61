use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::generator::{context::GeneratorContext, prompts, state::BlogState};
use crate::llm::client::LanguageModel;
use crate::search::{SearchError, WebSearch};
use crate::types::evidence::{EvidenceItem, EvidencePack, RawSearchResult};

/// 依次执行搜索词（最多max_queries个），单个搜索词失败视为没有结果
pub async fn collect_raw_results<M, S>(
    context: &GeneratorContext<M, S>,
    queries: &[String],
) -> Vec<RawSearchResult>
where
    M: LanguageModel,
    S: WebSearch,
{
    let search_config = &context.config.search;
    let mut raw = Vec::new();

    for query in queries.iter().take(search_config.max_queries) {
        match context
            .searcher
            .search(query, search_config.max_results_per_query)
            .await
        {
            Ok(results) => {
                tracing::debug!(query = %query, results = results.len(), "🔎 搜索完成");
                raw.extend(results);
            }
            Err(SearchError::MissingCredentials) => {
                tracing::warn!("[RESEARCH] No search key found, skipping web research");
                break;
            }
            Err(e) => {
                tracing::warn!(query = %query, "[RESEARCH ERROR] {}", e);
            }
        }
    }

    raw
}

/// 调研阶段：搜索并把原始结果整理为证据
///
/// 没有任何原始结果时直接返回空集合，不调用模型。
pub async fn research<M, S>(
    context: &GeneratorContext<M, S>,
    queries: &[String],
    as_of: NaiveDate,
    recency_days: u32,
) -> Result<Vec<EvidenceItem>>
where
    M: LanguageModel,
    S: WebSearch,
{
    let raw = collect_raw_results(context, queries).await;
    if raw.is_empty() {
        tracing::info!("🔎 没有搜索结果，跳过证据整理");
        return Ok(Vec::new());
    }

    tracing::info!(raw_results = raw.len(), "🔎 整理搜索结果...");
    let pack: EvidencePack = context
        .llm_client
        .extract(
            prompts::EXTRACTOR_SYSTEM,
            &prompts::extractor_user_prompt(&raw, as_of, recency_days),
        )
        .await
        .context("Failed to extract evidence from search results")?;

    Ok(pack.evidence)
}

pub async fn execute<M, S>(context: &GeneratorContext<M, S>, state: &mut BlogState) -> Result<()>
where
    M: LanguageModel,
    S: WebSearch,
{
    state.evidence = research(context, &state.queries, state.as_of, state.recency_days).await?;
    tracing::info!(evidence = state.evidence.len(), "✅ 调研完成");
    Ok(())
}
