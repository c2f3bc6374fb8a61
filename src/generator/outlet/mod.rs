use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

use crate::utils::slug::safe_slug;

pub mod bundle;
pub mod store;

pub use bundle::{bundle_run_dir, write_bundle};
pub use store::{
    LoadedRun, PastRun, RunStoreError, list_past_runs, load_run, load_run_file, run_dir_for,
};

/// 文档文件名
pub const BLOG_FILE_NAME: &str = "blog.md";
/// 配图目录名
pub const IMAGES_DIR_NAME: &str = "images";

/// 一次运行保存后的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRun {
    pub slug: String,
    pub run_dir: PathBuf,
    pub blog_path: PathBuf,
    pub images_dir: PathBuf,
}

#[allow(async_fn_in_trait)]
pub trait Outlet {
    async fn save(&self, title: &str, markdown: &str) -> Result<SavedRun>;
}

/// 写入本地磁盘: <root>/<slug>/blog.md 以及 <root>/<slug>/images/
///
/// 同名标题的运行会覆盖之前的结果。
pub struct DiskOutlet {
    root: PathBuf,
}

impl DiskOutlet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, title: &str, markdown: &str) -> Result<SavedRun> {
        let slug = safe_slug(title);
        let run_dir = self.root.join(&slug);
        let images_dir = run_dir.join(IMAGES_DIR_NAME);

        fs::create_dir_all(&images_dir)
            .await
            .with_context(|| format!("Failed to create run directory {}", run_dir.display()))?;

        let blog_path = run_dir.join(BLOG_FILE_NAME);
        fs::write(&blog_path, markdown)
            .await
            .with_context(|| format!("Failed to write {}", blog_path.display()))?;

        tracing::info!("💾 已保存文档: {}", blog_path.display());

        Ok(SavedRun {
            slug,
            run_dir,
            blog_path,
            images_dir,
        })
    }
}
