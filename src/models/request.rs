//! 生成请求
//!
//! 封装"这一次调用要生成什么"这一信息

use crate::models::Difficulty;

/// 单次生成请求
///
/// 每次调用生成器前新建，调用结束即丢弃，不做任何持久化
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// 模型标识
    pub model: String,

    /// 学科名称
    pub subject: String,

    /// 主题名称
    pub topic: String,

    /// 种子内容（从上传文档提取的全文，可选）
    pub seed_text: Option<String>,

    /// 题目数量（百分比切分的结果，可以为 0 甚至为负）
    pub count: i64,

    /// 难度
    pub difficulty: Difficulty,
}

impl GenerationRequest {
    /// 创建新的生成请求
    pub fn new(
        model: String,
        subject: String,
        topic: String,
        seed_text: Option<String>,
        count: i64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            model,
            subject,
            topic,
            seed_text,
            count,
            difficulty,
        }
    }
}

impl std::fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[模型#{} 难度#{} 数量#{}]",
            self.model,
            self.difficulty,
            self.count
        )
    }
}
