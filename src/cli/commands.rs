//! 各子命令的执行逻辑

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use super::Command;
use crate::config::Config;
use crate::generator::outlet::{
    IMAGES_DIR_NAME, list_past_runs, load_run, run_dir_for, write_bundle,
};
use crate::generator::workflow::launch;
use crate::preview::{check_images, render_html};
use crate::types::blog::BlogRequest;

pub async fn execute(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Generate { topic, as_of, html } => generate(config, &topic, as_of, html).await,
        Command::List => list(config),
        Command::Show { slug, html } => show(config, &slug, html),
        Command::Bundle { slug, output } => bundle(config, &slug, output),
        Command::Images { slug } => images(config, &slug),
    }
}

async fn generate(
    config: &Config,
    topic: &str,
    as_of: Option<chrono::NaiveDate>,
    html: bool,
) -> Result<()> {
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let request = BlogRequest::new(topic, as_of)?;

    let report = launch(config, &request).await?;

    println!("📝 {}", report.state.plan()?.blog_title);
    println!("📂 {}", report.saved.run_dir.display());
    print_image_warnings(&report.state.final_md, &report.saved.run_dir);

    if html {
        println!("{}", render_html(&report.state.final_md)?);
    }
    Ok(())
}

fn list(config: &Config) -> Result<()> {
    let runs = list_past_runs(&config.output_root)?;
    if runs.is_empty() {
        println!("📭 {} 下没有已保存的文章", config.output_root.display());
        return Ok(());
    }

    for run in runs {
        let modified: DateTime<Local> = run.modified.into();
        println!(
            "{}  {}  {}",
            modified.format("%Y-%m-%d %H:%M"),
            run.slug,
            run.blog_path.display()
        );
    }
    Ok(())
}

fn show(config: &Config, slug: &str, html: bool) -> Result<()> {
    let loaded = load_run(&config.output_root, slug)?;

    if html {
        println!("{}", render_html(&loaded.final_md)?);
    } else {
        print!("{}", loaded.final_md);
    }
    print_image_warnings(&loaded.final_md, &loaded.run_dir);
    Ok(())
}

fn bundle(config: &Config, slug: &str, output: Option<PathBuf>) -> Result<()> {
    let run_dir = run_dir_for(&config.output_root, slug)?;
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.tar.gz", slug)));

    match write_bundle(&run_dir, &output)? {
        Some(bytes) => {
            println!("📦 已打包 {} ({} bytes)", output.display(), bytes);
            Ok(())
        }
        None => bail!("No saved run at {}", run_dir.display()),
    }
}

fn images(config: &Config, slug: &str) -> Result<()> {
    let images_dir = run_dir_for(&config.output_root, slug)?.join(IMAGES_DIR_NAME);
    let files = list_image_files(&images_dir)?;

    if files.is_empty() {
        println!("🖼️ 没有配图: {}", images_dir.display());
    } else {
        for file in files {
            println!("{}", file.display());
        }
    }
    Ok(())
}

/// 配图目录下的文件，目录不存在时返回空
pub fn list_image_files(images_dir: &Path) -> Result<Vec<PathBuf>> {
    if !images_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(images_dir)
        .with_context(|| format!("Failed to read {}", images_dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn print_image_warnings(markdown: &str, run_dir: &Path) {
    for warning in check_images(markdown, run_dir) {
        eprintln!("⚠️ 警告: {}", warning);
    }
}
