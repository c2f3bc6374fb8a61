use serde::{Deserialize, Serialize};

/// 单个章节的写作结果
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub task_id: i64,
    pub markdown: String,
}

impl SectionResult {
    pub fn new(task_id: i64, markdown: impl Into<String>) -> Self {
        Self {
            task_id,
            markdown: markdown.into(),
        }
    }
}

/// 并行写作结果的累加容器
///
/// 内部是无序多重集合，合并只做追加，读取时才按task id排序，
/// 因此结果与worker的完成顺序无关。
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SectionSet {
    items: Vec<SectionResult>,
}

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: SectionResult) {
        self.items.push(section);
    }

    /// 合并另一组结果
    pub fn merge(mut self, other: SectionSet) -> SectionSet {
        self.items.extend(other.items);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按task id升序返回，id相同的保持插入顺序
    pub fn ordered(&self) -> Vec<&SectionResult> {
        let mut ordered: Vec<&SectionResult> = self.items.iter().collect();
        ordered.sort_by_key(|section| section.task_id);
        ordered
    }
}

impl Extend<SectionResult> for SectionSet {
    fn extend<I: IntoIterator<Item = SectionResult>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<SectionResult> for SectionSet {
    fn from_iter<I: IntoIterator<Item = SectionResult>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
