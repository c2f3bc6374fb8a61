use serde::{Deserialize, Serialize};

/// Token估算规则
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCalculationRules {
    /// 拉丁字符的平均token比例（字符数/token数）
    pub latin_char_per_token: f64,
    /// CJK字符的平均token比例
    pub cjk_char_per_token: f64,
    /// 每条消息的固定开销
    pub message_overhead: usize,
}

impl Default for TokenCalculationRules {
    fn default() -> Self {
        Self {
            // 基于GPT系列模型的经验值
            latin_char_per_token: 4.0,
            cjk_char_per_token: 1.5,
            message_overhead: 4,
        }
    }
}

/// 单次模型调用的token用量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

impl TokenUsage {
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Token估算器，provider不返回用量时用于日志统计
#[derive(Debug, Clone, Default)]
pub struct TokenEstimator {
    rules: TokenCalculationRules,
}

impl TokenEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 估算一段文本的token数量
    pub fn estimate_tokens(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let cjk = text.chars().filter(|c| is_cjk_char(*c)).count();
        let latin = text.chars().count() - cjk;

        let cjk_tokens = (cjk as f64 / self.rules.cjk_char_per_token).ceil() as usize;
        let latin_tokens = (latin as f64 / self.rules.latin_char_per_token).ceil() as usize;
        cjk_tokens + latin_tokens
    }

    /// 估算一次 system + user -> completion 调用的用量
    pub fn estimate_usage(&self, system_prompt: &str, user_prompt: &str, completion: &str) -> TokenUsage {
        let prompt_tokens = self.estimate_tokens(system_prompt)
            + self.estimate_tokens(user_prompt)
            + 2 * self.rules.message_overhead;
        let completion_tokens = self.estimate_tokens(completion) + self.rules.message_overhead;
        TokenUsage::new(prompt_tokens, completion_tokens)
    }
}

fn is_cjk_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF |  // CJK统一汉字
        0x3400..=0x4DBF |  // CJK扩展A
        0x3040..=0x30FF |  // 日文假名
        0xAC00..=0xD7AF |  // 韩文音节
        0x20000..=0x2A6DF  // CJK扩展B
    )
}
