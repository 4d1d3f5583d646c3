//! 提示词模块
//!
//! 把一次生成请求拼接成发给模型的指令字符串。
//! 这里的措辞是线上可见的行为，不要随意改动

use crate::models::GenerationRequest;

/// 系统消息（两条消息对话中的第一条）
pub const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant who generates questions based on difficulty.";

/// 构建用户提示词
///
/// 按种子内容是否存在分两个分支：
/// - 有种子内容时把提取的全文原样内嵌（不截断、不限长，
///   超长文档可能超出模型上下文窗口，这是沿袭下来的已知缺陷）
/// - 否则内嵌学科和主题
///
/// 两个分支都追加固定的格式要求（4 个选项、标注正确答案、末尾答案汇总）
pub fn build_user_prompt(request: &GenerationRequest) -> String {
    match &request.seed_text {
        Some(seed) => format!(
            "Create {} university-level multiple-choice questions based on the following content:\n{} \
             categorized as '{}' difficulty.\n\
             Each question must have 4 options (A, B, C, D) and a labeled 'Correct Answer'. \
             Provide a summarized answer key at the end.",
            request.count, seed, request.difficulty
        ),
        None => format!(
            "Create {} university-level multiple-choice questions on the subject {} \
             focused on the topic '{}' categorized as '{}' difficulty.\n\
             Each question must have 4 options (A, B, C, D) and a labeled 'Correct Answer'. \
             Provide a summarized answer key at the end.",
            request.count, request.subject, request.topic, request.difficulty
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn request(seed: Option<&str>, count: i64) -> GenerationRequest {
        GenerationRequest::new(
            "llama3-8b-8192".to_string(),
            "Physics".to_string(),
            "Quantum Mechanics".to_string(),
            seed.map(str::to_string),
            count,
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_subject_topic_branch() {
        let prompt = build_user_prompt(&request(None, 5));
        assert_eq!(
            prompt,
            "Create 5 university-level multiple-choice questions on the subject Physics \
             focused on the topic 'Quantum Mechanics' categorized as 'easy' difficulty.\n\
             Each question must have 4 options (A, B, C, D) and a labeled 'Correct Answer'. \
             Provide a summarized answer key at the end."
        );
    }

    #[test]
    fn test_seed_branch_embeds_full_text() {
        let prompt = build_user_prompt(&request(Some("paragraph one paragraph two"), 3));
        assert_eq!(
            prompt,
            "Create 3 university-level multiple-choice questions based on the following content:\n\
             paragraph one paragraph two categorized as 'easy' difficulty.\n\
             Each question must have 4 options (A, B, C, D) and a labeled 'Correct Answer'. \
             Provide a summarized answer key at the end."
        );
    }

    #[test]
    fn test_seed_branch_does_not_truncate() {
        let long_seed = "x".repeat(100_000);
        let prompt = build_user_prompt(&request(Some(&long_seed), 1));
        assert!(prompt.contains(&long_seed));
    }

    #[test]
    fn test_zero_and_negative_counts_are_embedded_verbatim() {
        // 数量为 0 或为负也照样拼进提示词，没有本地短路
        assert!(build_user_prompt(&request(None, 0)).starts_with("Create 0 "));
        assert!(build_user_prompt(&request(None, -10)).starts_with("Create -10 "));
    }
}
