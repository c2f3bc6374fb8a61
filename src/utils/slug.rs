use regex::Regex;
use std::sync::LazyLock;

/// slug为空时使用的目录名
pub const FALLBACK_SLUG: &str = "blog";

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 _-]+").expect("valid slug regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// 由标题生成文件系统安全的目录名
///
/// 转小写，任意空白先统一为空格，再去掉 `[a-z0-9 _-]` 之外的字符，
/// 连续空格折叠为下划线，去掉首尾下划线。
/// 结果为空时返回 [`FALLBACK_SLUG`]。
pub fn safe_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let spaced = WHITESPACE_RUNS.replace_all(&lowered, " ");
    let stripped = DISALLOWED_CHARS.replace_all(&spaced, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, "_");
    let slug = collapsed.trim_matches('_');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
