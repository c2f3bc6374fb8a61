use anyhow::Result;
use chrono::NaiveDate;

use crate::generator::{
    outlet::{Outlet, SavedRun},
    sections::SectionSet,
    state::BlogState,
};
use crate::types::{blog::Plan, routing::ResearchMode};

/// 按task id排序后拼接正文，章节之间空一行
pub fn merge_body(sections: &SectionSet) -> String {
    sections
        .ordered()
        .iter()
        .map(|section| section.markdown.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 生成带front-matter的完整文档
///
/// 标题原样写入双引号内，不做YAML转义，标题含 `"` 时front-matter不是合法YAML。
pub fn merge_content(plan: &Plan, as_of: NaiveDate, mode: ResearchMode, sections: &SectionSet) -> String {
    let body = merge_body(sections);
    format!(
        "---\ntitle: \"{title}\"\ndate: \"{date}\"\nmode: \"{mode}\"\n---\n\n# {title}\n\n{body}\n",
        title = plan.blog_title,
        date = as_of.format("%Y-%m-%d"),
        mode = mode,
        body = body,
    )
}

/// 配图规划：目前不生成任何图片，正文原样作为最终结果
pub fn place_images(state: &mut BlogState) {
    state.md_with_placeholders = state.merged_md.clone();
    state.image_specs.clear();
    state.final_md = state.merged_md.clone();
}

/// 归并阶段：合并、配图、持久化
pub async fn execute<O>(outlet: &O, state: &mut BlogState) -> Result<SavedRun>
where
    O: Outlet,
{
    let plan = state.plan()?;
    let merged = merge_content(plan, state.as_of, state.mode, &state.sections);
    let title = plan.blog_title.clone();
    state.merged_md = merged;

    place_images(state);

    outlet.save(&title, &state.final_md).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sections::SectionResult;
    use crate::types::blog::{BlogKind, Task};

    fn plan_with_ids(ids: &[i64]) -> Plan {
        Plan {
            blog_title: "Test Post".to_string(),
            audience: "devs".to_string(),
            tone: "plain".to_string(),
            blog_kind: BlogKind::Explainer,
            constraints: vec![],
            tasks: ids
                .iter()
                .map(|id| Task {
                    id: *id,
                    title: format!("Section {}", id),
                    goal: "goal".to_string(),
                    bullets: vec!["a".into(), "b".into(), "c".into()],
                    target_words: 200,
                    tags: vec![],
                    requires_research: false,
                    requires_citations: false,
                    requires_code: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_body_follows_id_order() {
        let sections: SectionSet = [
            SectionResult::new(3, "C"),
            SectionResult::new(1, "A"),
            SectionResult::new(2, "B"),
        ]
        .into_iter()
        .collect();

        assert_eq!(merge_body(&sections), "A\n\nB\n\nC");
    }

    #[test]
    fn test_merge_content_front_matter() {
        let plan = plan_with_ids(&[1, 2]);
        let sections: SectionSet = [SectionResult::new(2, "## Two"), SectionResult::new(1, "## One")]
            .into_iter()
            .collect();
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();

        let merged = merge_content(&plan, date, ResearchMode::Hybrid, &sections);

        assert_eq!(
            merged,
            "---\ntitle: \"Test Post\"\ndate: \"2026-03-09\"\nmode: \"hybrid\"\n---\n\n# Test Post\n\n## One\n\n## Two\n"
        );
    }

    #[test]
    fn test_merge_content_without_sections() {
        let plan = plan_with_ids(&[]);
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let merged = merge_content(&plan, date, ResearchMode::ClosedBook, &SectionSet::new());
        assert!(merged.ends_with("# Test Post\n\n\n"));
    }

    #[test]
    fn test_place_images_is_passthrough() {
        let request = crate::types::blog::BlogRequest::new(
            "topic",
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        )
        .unwrap();
        let mut state = BlogState::new(&request);
        state.merged_md = "# merged\n".to_string();

        place_images(&mut state);

        assert_eq!(state.final_md, "# merged\n");
        assert_eq!(state.md_with_placeholders, "# merged\n");
        assert!(state.image_specs.is_empty());
    }
}
