use crate::config::{Config, LLMProvider};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// blog-writer - 由Rust与AI驱动的技术文章生成引擎
#[derive(Parser, Debug)]
#[command(name = "blog-writer")]
#[command(
    about = "LLM-driven article generator. It decides whether a topic needs web research, plans the sections, writes them in parallel and saves one markdown document per run."
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 运行结果根目录
    #[arg(long, global = true)]
    pub output_root: Option<PathBuf>,

    /// LLM Provider (openai, deepseek, openrouter, anthropic, ollama)
    #[arg(long, global = true)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long, global = true)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long, global = true)]
    pub llm_api_base_url: Option<String>,

    /// 模型名称
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    /// 并行写作的最大章节数，0表示不限制
    #[arg(long, global = true)]
    pub max_parallels: Option<usize>,

    /// 搜索服务API KEY
    #[arg(long, global = true)]
    pub search_api_key: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// 生成一篇新文章
    Generate {
        /// 文章主题
        topic: String,

        /// 基准日期 (YYYY-MM-DD)，默认今天
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// 生成后输出HTML预览
        #[arg(long)]
        html: bool,
    },
    /// 列出已保存的运行，最新的在前
    List,
    /// 输出某次运行的文档
    Show {
        slug: String,

        /// 渲染为HTML
        #[arg(long)]
        html: bool,
    },
    /// 打包某次运行的目录
    Bundle {
        slug: String,

        /// 输出路径，默认 <slug>.tar.gz
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 列出某次运行的配图
    Images { slug: String },
}

impl Args {
    /// 加载配置文件并用命令行参数覆盖
    pub fn build_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(output_root) = &self.output_root {
            config.output_root = output_root.clone();
        }

        // 覆盖LLM配置
        if let Some(provider_str) = &self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = &self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url.clone();
        }
        if let Some(llm_api_key) = &self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(max_parallels) = self.max_parallels {
            config.llm.max_parallels = max_parallels;
        }

        if let Some(search_api_key) = &self.search_api_key {
            config.search.api_key = search_api_key.clone();
        }

        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
