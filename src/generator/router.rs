use anyhow::Result;

use crate::generator::{context::GeneratorContext, prompts, state::BlogState};
use crate::llm::client::LanguageModel;
use crate::search::WebSearch;
use crate::types::{
    blog::BlogRequest,
    routing::{RouterDecision, RoutingOutcome},
};

/// 请求模型给出路由决策
pub async fn decide<M, S>(
    context: &GeneratorContext<M, S>,
    request: &BlogRequest,
) -> Result<RouterDecision>
where
    M: LanguageModel,
    S: WebSearch,
{
    context
        .llm_client
        .extract::<RouterDecision>(
            prompts::ROUTER_SYSTEM,
            &prompts::router_user_prompt(&request.topic, request.as_of),
        )
        .await
}

/// 路由阶段，决策失败时退回到不调研的闭卷模式，不会中断流程
pub async fn route<M, S>(context: &GeneratorContext<M, S>, request: &BlogRequest) -> RoutingOutcome
where
    M: LanguageModel,
    S: WebSearch,
{
    match decide(context, request).await {
        Ok(decision) => {
            tracing::info!(
                mode = %decision.mode,
                needs_research = decision.needs_research,
                queries = decision.queries.len(),
                "🧭 路由决策: {}",
                decision.reason
            );
            RoutingOutcome::from(decision)
        }
        Err(e) => {
            tracing::warn!("⚠️ 路由决策失败，使用闭卷模式: {}", e);
            RoutingOutcome::fallback()
        }
    }
}

pub async fn execute<M, S>(context: &GeneratorContext<M, S>, state: &mut BlogState)
where
    M: LanguageModel,
    S: WebSearch,
{
    let request = BlogRequest {
        topic: state.topic.clone(),
        as_of: state.as_of,
    };
    let outcome = route(context, &request).await;
    state.apply_routing(outcome);
}
