//! 生成作业
//!
//! 原界面上各表单控件的取值，这里由 TOML 作业文件提供

use crate::error::ConfigError;
use crate::models::{catalog, Distribution};
use serde::Deserialize;

/// 生成作业
///
/// 控件级约束（数量 1-50、百分比 0-100）在加载时硬校验；
/// 百分比总和是否为 100 不在这里管（那是建议性校验，见流程层）
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationJob {
    /// 模型标识（来自固定目录，目录外只警告）
    #[serde(default = "default_model")]
    pub model: String,

    /// 学科名称（例如 Physics）
    #[serde(default)]
    pub subject: String,

    /// 主题名称（例如 Quantum Mechanics）
    #[serde(default)]
    pub topic: String,

    /// 总题数，1-50
    #[serde(default = "default_total")]
    pub total_questions: u32,

    /// 简单题百分比，0-100
    #[serde(default = "default_easy_pct")]
    pub easy_pct: u32,

    /// 中等题百分比，0-100
    #[serde(default = "default_medium_pct")]
    pub medium_pct: u32,

    /// 困难题百分比，0-100
    #[serde(default = "default_hard_pct")]
    pub hard_pct: u32,

    /// 种子文档路径（.docx，可选）
    #[serde(default)]
    pub source_docx: Option<String>,
}

fn default_model() -> String {
    catalog::DEFAULT_MODEL.to_string()
}

fn default_total() -> u32 {
    10
}

fn default_easy_pct() -> u32 {
    30
}

fn default_medium_pct() -> u32 {
    50
}

fn default_hard_pct() -> u32 {
    20
}

impl Default for GenerationJob {
    fn default() -> Self {
        Self {
            model: default_model(),
            subject: String::new(),
            topic: String::new(),
            total_questions: default_total(),
            easy_pct: default_easy_pct(),
            medium_pct: default_medium_pct(),
            hard_pct: default_hard_pct(),
            source_docx: None,
        }
    }
}

impl GenerationJob {
    /// 校验控件级约束
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.is_empty() {
            return Err(ConfigError::EmptyField { field: "model" });
        }
        check_range("total_questions", self.total_questions, 1, 50)?;
        check_range("easy_pct", self.easy_pct, 0, 100)?;
        check_range("medium_pct", self.medium_pct, 0, 100)?;
        check_range("hard_pct", self.hard_pct, 0, 100)?;
        Ok(())
    }

    /// 取百分比分布
    pub fn distribution(&self) -> Distribution {
        Distribution::new(self.easy_pct, self.medium_pct, self.hard_pct)
    }
}

fn check_range(field: &'static str, value: u32, min: i64, max: i64) -> Result<(), ConfigError> {
    let value = i64::from(value);
    if value < min || value > max {
        return Err(ConfigError::ValueOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_ui() {
        let job = GenerationJob::default();
        assert_eq!(job.model, "llama3-8b-8192");
        assert_eq!(job.total_questions, 10);
        assert_eq!(job.easy_pct, 30);
        assert_eq!(job.medium_pct, 50);
        assert_eq!(job.hard_pct, 20);
        assert!(job.source_docx.is_none());
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_total() {
        let mut job = GenerationJob::default();
        job.total_questions = 0;
        assert!(job.validate().is_err());
        job.total_questions = 51;
        assert!(job.validate().is_err());
        job.total_questions = 50;
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_pct() {
        let mut job = GenerationJob::default();
        job.hard_pct = 101;
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_validate_allows_advisory_sum_mismatch() {
        // 总和 != 100 不是加载错误，只在流程层给出警告
        let mut job = GenerationJob::default();
        job.easy_pct = 10;
        job.medium_pct = 10;
        job.hard_pct = 10;
        assert!(job.validate().is_ok());
    }
}
