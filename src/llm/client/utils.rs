use crate::utils::token_estimator::{TokenEstimator, TokenUsage};

use std::sync::LazyLock;

static TOKEN_ESTIMATOR: LazyLock<TokenEstimator> = LazyLock::new(TokenEstimator::new);

/// 估算一次调用的token用量并写入日志
pub fn log_token_usage(
    call_kind: &str,
    system_prompt: &str,
    user_prompt: &str,
    output_text: &str,
) -> TokenUsage {
    let usage = TOKEN_ESTIMATOR.estimate_usage(system_prompt, user_prompt, output_text);
    tracing::info!(
        call = call_kind,
        prompt_tokens = usage.prompt_tokens,
        completion_tokens = usage.completion_tokens,
        total_tokens = usage.total_tokens,
        "[LLM] token usage (estimated)"
    );
    usage
}
