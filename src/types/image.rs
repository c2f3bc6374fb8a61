//! 配图相关的数据结构。流水线目前不生成任何图片，这些类型只在数据模型中占位。

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Default)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    #[default]
    Square,
    #[serde(rename = "1024x1536")]
    Portrait,
    #[serde(rename = "1536x1024")]
    Landscape,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Low,
    #[default]
    Medium,
    High,
}

/// 单张配图的描述
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ImageSpec {
    /// 正文中的占位符，例如 [[IMAGE_1]]
    pub placeholder: String,
    /// 保存到images目录下的文件名
    pub filename: String,
    pub alt: String,
    pub caption: String,
    pub prompt: String,
    #[serde(default)]
    pub size: ImageSize,
    #[serde(default)]
    pub quality: ImageQuality,
}

/// 全文配图规划
#[derive(Debug, Serialize, Deserialize, Clone, Default, JsonSchema)]
pub struct GlobalImagePlan {
    pub md_with_placeholders: String,
    #[serde(default)]
    pub images: Vec<ImageSpec>,
}
