//! 会话流程 - 流程层
//!
//! 核心职责：定义一次生成动作的完整处理流程
//!
//! 流程顺序：
//! 1. 按百分比切分各难度题数（总和偏离 100 只警告，不阻断）
//! 2. 逐难度顺序调用生成器（"全部生成"是三次串行调用）
//! 3. 把结果写入对应槽位：成功写题目文本，失败写可显示的错误文本
//!
//! 失败被折叠成 `Error: ...` 字符串存进槽位，界面照常有内容可显示；
//! 类型区分只存在于生成器边界，这里是决定"怎么展示"的地方

use tracing::{info, warn};

use crate::models::{
    Difficulty, GenerationJob, GenerationRequest, QuestionCounts, SessionState,
};
use crate::services::QuestionSource;

/// 会话流程
///
/// - 编排"全部生成"和"重新生成某难度"两种动作
/// - 不持有会话状态（状态由应用层按引用传入）
/// - 只依赖题目来源能力（QuestionSource）
pub struct SessionFlow<S: QuestionSource> {
    source: S,
}

impl<S: QuestionSource> SessionFlow<S> {
    /// 创建新的会话流程
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 全部生成
    ///
    /// 按 easy/medium/hard 固定顺序依次调用三次生成器，
    /// 无条件覆盖三个槽位。数量为 0 的难度同样发起调用，
    /// 模型对"0 道题"返回什么就存什么，没有本地短路
    pub async fn generate_all(
        &self,
        job: &GenerationJob,
        seed_text: Option<&str>,
        state: &mut SessionState,
    ) -> QuestionCounts {
        let counts = self.split_counts(job);

        for difficulty in Difficulty::ALL {
            self.fill_slot(job, seed_text, state, difficulty, counts.get(difficulty))
                .await;
        }

        counts
    }

    /// 重新生成某个难度
    ///
    /// 只调用一次生成器，只覆盖该难度的槽位，其余槽位原封不动
    pub async fn regenerate(
        &self,
        job: &GenerationJob,
        seed_text: Option<&str>,
        state: &mut SessionState,
        difficulty: Difficulty,
    ) -> i64 {
        let count = self.split_counts(job).get(difficulty);
        self.fill_slot(job, seed_text, state, difficulty, count)
            .await;
        count
    }

    /// 切分题数，并对百分比总和做建议性校验
    fn split_counts(&self, job: &GenerationJob) -> QuestionCounts {
        let dist = job.distribution();
        if !dist.sums_to_100() {
            warn!(
                "⚠️ 三个难度的百分比之和应为 100，当前为 {}，按现值继续生成",
                job.easy_pct + job.medium_pct + job.hard_pct
            );
        }
        dist.split(job.total_questions)
    }

    /// 生成一个难度并写入槽位
    async fn fill_slot(
        &self,
        job: &GenerationJob,
        seed_text: Option<&str>,
        state: &mut SessionState,
        difficulty: Difficulty,
        count: i64,
    ) {
        info!("🤖 正在生成 {} 道 '{}' 难度的题目...", count, difficulty);

        let request = GenerationRequest::new(
            job.model.clone(),
            job.subject.clone(),
            job.topic.clone(),
            seed_text.map(str::to_string),
            count,
            difficulty,
        );

        let text = match self.source.generate(&request).await {
            Ok(text) => {
                info!("✓ '{}' 难度生成完成", difficulty);
                text
            }
            Err(e) => {
                warn!("⚠️ '{}' 难度生成失败，错误信息将作为内容展示: {}", difficulty, e);
                format!("Error: {}", e)
            }
        };

        state.set(difficulty, text);
    }
}
