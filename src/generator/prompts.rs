//! 各阶段的提示词

use chrono::NaiveDate;

use crate::types::{
    blog::{Plan, Task},
    evidence::{EvidenceItem, RawSearchResult},
    routing::ResearchMode,
};

pub const ROUTER_SYSTEM: &str = r#"You decide whether a technical article needs web research before it is planned.

Pick exactly one mode:
- closed_book: evergreen concepts, no research (needs_research=false).
- hybrid: evergreen concepts that benefit from current tools, models or examples (needs_research=true).
- open_book: volatile subjects such as news, releases, pricing or policy (needs_research=true).

When research is needed, propose up to 10 precise search queries."#;

pub const EXTRACTOR_SYSTEM: &str = r#"You turn raw web search results into clean evidence items.
Keep only results that carry a usable title and URL. Do not invent facts, dates or sources.
Normalize publish dates to YYYY-MM-DD when they are known."#;

pub const ORCHESTRATOR_SYSTEM: &str = r#"You are a senior technical writer planning an article.

Produce between 5 and 9 sections. Every section needs a unique integer id in reading order,
a goal sentence, 3 to 6 bullets and a target length between 120 and 550 words.
Flag sections that need research, citations or code.
If the evidence is thin, plan for stating uncertainty rather than guessing."#;

pub const WORKER_SYSTEM: &str = r#"You write exactly ONE section of a technical article in markdown.
Start with a level-2 heading carrying the section title. Cover every bullet and stay near the target length.
Only cite URLs from the provided evidence. When a claim is not supported by the evidence, write:
"Limited evidence available in provided sources.""#;

pub fn router_user_prompt(topic: &str, as_of: NaiveDate) -> String {
    format!("Topic: {}\nAs-of date: {}", topic, as_of.format("%Y-%m-%d"))
}

pub fn extractor_user_prompt(raw: &[RawSearchResult], as_of: NaiveDate, recency_days: u32) -> String {
    let mut prompt = format!(
        "As-of date: {}\nPrefer sources published within the last {} days.\n\nRaw results:\n",
        as_of.format("%Y-%m-%d"),
        recency_days
    );
    for (index, result) in raw.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {} | {} | published: {}\n   {}\n",
            index + 1,
            result.title,
            result.url,
            result.published_date.as_deref().unwrap_or("unknown"),
            result.content
        ));
    }
    prompt
}

pub fn orchestrator_user_prompt(topic: &str, mode: ResearchMode, evidence: &[EvidenceItem]) -> String {
    let mut prompt = format!("Topic: {}\nMode: {}\n", topic, mode);
    if !evidence.is_empty() {
        prompt.push_str("\nEvidence:\n");
        prompt.push_str(&format_evidence(evidence));
    }
    prompt
}

pub fn worker_user_prompt(
    task: &Task,
    plan: &Plan,
    topic: &str,
    mode: ResearchMode,
    evidence: &[EvidenceItem],
) -> String {
    let mut prompt = format!(
        "Article: {}\nTopic: {}\nAudience: {}\nTone: {}\nKind: {}\nMode: {}\n\n\
         Section: {}\nGoal: {}\nTarget words: {}\n",
        plan.blog_title,
        topic,
        plan.audience,
        plan.tone,
        plan.blog_kind,
        mode,
        task.title,
        task.goal,
        task.target_words,
    );
    prompt.push_str("Bullets:\n");
    for bullet in &task.bullets {
        prompt.push_str(&format!("- {}\n", bullet));
    }
    if !plan.constraints.is_empty() {
        prompt.push_str(&format!("Constraints: {}\n", plan.constraints.join("; ")));
    }
    if task.requires_code {
        prompt.push_str("Include at least one code example.\n");
    }
    if task.requires_citations && !evidence.is_empty() {
        prompt.push_str("Cite the evidence URLs you rely on.\n");
    }
    if (task.requires_research || task.requires_citations) && !evidence.is_empty() {
        prompt.push_str("\nEvidence:\n");
        prompt.push_str(&format_evidence(evidence));
    }
    prompt
}

fn format_evidence(evidence: &[EvidenceItem]) -> String {
    evidence
        .iter()
        .map(|item| {
            format!(
                "- {} ({}) {}\n",
                item.title,
                item.url,
                item.published_at.as_deref().unwrap_or("")
            )
        })
        .collect()
}
