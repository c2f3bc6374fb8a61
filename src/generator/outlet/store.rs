//! 已保存运行的查找与加载

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

use super::BLOG_FILE_NAME;
use crate::utils::slug::safe_slug;
use crate::types::{blog::Plan, evidence::EvidenceItem, image::ImageSpec};

#[derive(Debug, Error)]
pub enum RunStoreError {
    #[error("no saved run at {0}")]
    NotFound(PathBuf),
    #[error("invalid run slug: {0:?}")]
    InvalidSlug(String),
}

/// 解析 <root>/<slug>，slug必须是 [`safe_slug`] 的输出，不能跳出根目录
pub fn run_dir_for(root: &Path, slug: &str) -> Result<PathBuf> {
    if slug.is_empty() || safe_slug(slug) != slug {
        return Err(RunStoreError::InvalidSlug(slug.to_string()).into());
    }
    Ok(root.join(slug))
}

/// 磁盘上的一次历史运行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastRun {
    pub slug: String,
    pub blog_path: PathBuf,
    pub modified: SystemTime,
}

/// 从磁盘重新加载的运行结果
///
/// 只有最终文档会被持久化，规划与证据在重新加载后为空。
#[derive(Debug, Clone)]
pub struct LoadedRun {
    pub run_dir: PathBuf,
    pub plan: Option<Plan>,
    pub evidence: Vec<EvidenceItem>,
    pub image_specs: Vec<ImageSpec>,
    pub final_md: String,
}

/// 列出 <root>/*/blog.md，按修改时间从新到旧排序
pub fn list_past_runs(root: &Path) -> Result<Vec<PastRun>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped_root).join("*").join(BLOG_FILE_NAME);
    let pattern = pattern.to_string_lossy();

    let mut runs = Vec::new();
    for entry in glob::glob(&pattern).context("Invalid run listing pattern")? {
        let blog_path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("⚠️ 无法读取运行目录: {}", e);
                continue;
            }
        };
        if !blog_path.is_file() {
            continue;
        }
        let slug = blog_path
            .parent()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let modified = std::fs::metadata(&blog_path)
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        runs.push(PastRun {
            slug,
            blog_path,
            modified,
        });
    }

    runs.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(runs)
}

/// 按slug加载 <root>/<slug>/blog.md
pub fn load_run(root: &Path, slug: &str) -> Result<LoadedRun> {
    load_run_file(&run_dir_for(root, slug)?.join(BLOG_FILE_NAME))
}

/// 加载指定的blog.md文件，内容与文件逐字节一致（非法UTF-8会被替换）
pub fn load_run_file(blog_path: &Path) -> Result<LoadedRun> {
    if !blog_path.is_file() {
        return Err(RunStoreError::NotFound(blog_path.to_path_buf()).into());
    }

    let bytes = std::fs::read(blog_path)
        .with_context(|| format!("Failed to read {}", blog_path.display()))?;
    let final_md = String::from_utf8_lossy(&bytes).into_owned();

    Ok(LoadedRun {
        run_dir: blog_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
        plan: None,
        evidence: Vec::new(),
        image_specs: Vec::new(),
        final_md,
    })
}
