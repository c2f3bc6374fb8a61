//! 文档预览：图片引用检查与HTML渲染

use anyhow::{Result, anyhow};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<src>[^)]+)\)").expect("valid image reference regex")
});

/// 文档中的一处图片引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub alt: String,
    pub src: String,
}

impl ImageRef {
    /// 远程地址不在本地检查范围内
    pub fn is_remote(&self) -> bool {
        let src = self.src.to_ascii_lowercase();
        src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
    }
}

/// 按出现顺序找出所有 `![alt](src)` 引用
pub fn find_image_refs(markdown: &str) -> Vec<ImageRef> {
    IMAGE_REF
        .captures_iter(markdown)
        .map(|caps| ImageRef {
            alt: caps["alt"].to_string(),
            src: caps["src"].trim().to_string(),
        })
        .collect()
}

/// 检查相对路径的图片是否存在，每个缺失的文件返回一条警告
pub fn check_images(markdown: &str, base_dir: &Path) -> Vec<String> {
    find_image_refs(markdown)
        .into_iter()
        .filter(|image| !image.is_remote())
        .filter_map(|image| {
            let path = base_dir.join(&image.src);
            if path.is_file() {
                None
            } else {
                Some(format!(
                    "Image not found: {} (alt: \"{}\")",
                    path.display(),
                    image.alt
                ))
            }
        })
        .collect()
}

/// 渲染为HTML，front-matter不会出现在输出中
pub fn render_html(markdown: &str) -> Result<String> {
    let options = markdown::Options {
        parse: markdown::ParseOptions {
            constructs: markdown::Constructs {
                frontmatter: true,
                ..markdown::Constructs::gfm()
            },
            ..markdown::ParseOptions::gfm()
        },
        ..markdown::Options::gfm()
    };

    markdown::to_html_with_options(markdown, &options)
        .map_err(|message| anyhow!("Failed to render markdown: {}", message))
}
