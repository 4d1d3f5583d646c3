//! 题目生成服务 - 业务能力层
//!
//! 只负责"调用 LLM 生成题目"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点（兼容 OpenAI API 的服务，默认 Groq）
//! - 流式接收：响应按到达顺序以增量片段传来，这里折叠成一个完整字符串

use crate::config::Config;
use crate::error::LlmError;
use crate::models::GenerationRequest;
use crate::services::prompt;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, warn};

/// 题目来源
///
/// 生成器边界：输入一次生成请求，输出题目文本或类型化错误。
/// 流程层通过这个 trait 依赖生成能力，测试时可以换成记录调用的假实现
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

/// 题目生成器
///
/// 职责：
/// - 构建两条消息的对话（system + user）并发起流式请求
/// - 按到达顺序折叠增量片段
/// - 只处理单次请求，不持有会话状态
/// - 不重试、不设超时：流卡住时当前动作一直阻塞，直到 API 完成或报错
pub struct QuestionGenerator {
    client: Client<OpenAIConfig>,
}

impl QuestionGenerator {
    /// 创建新的题目生成器
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self { client }
    }

    /// 发起流式请求并折叠响应
    ///
    /// # 参数
    /// - `model`: 模型标识（来自本次请求，不同请求可以用不同模型）
    /// - `user_message`: 用户提示词
    ///
    /// # 返回
    /// 返回折叠后的完整文本（单遍消费，不可重启）
    async fn stream_completion(&self, model: &str, user_message: &str) -> Result<String, LlmError> {
        debug!("调用 LLM API，模型: {}", model);
        debug!("用户消息长度: {} 字符", user_message.chars().count());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(prompt::SYSTEM_MESSAGE)
            .build()
            .map_err(LlmError::request_build_failed)?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(LlmError::request_build_failed)?;

        let messages = vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ];

        // 构建请求：temperature 0.7、max_tokens 2048、top_p 1、流式开启
        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(0.7)
            .max_tokens(2048u32)
            .top_p(1.0)
            .stream(true)
            .build()
            .map_err(LlmError::request_build_failed)?;

        let mut stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                LlmError::api_call_failed(model, e)
            })?;

        // 按到达顺序折叠增量片段
        let mut questions = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                warn!("LLM 流式响应中断: {}", e);
                LlmError::stream_interrupted(model, e)
            })?;

            for choice in &chunk.choices {
                if let Some(content) = &choice.delta.content {
                    questions.push_str(content);
                }
            }
        }

        debug!("LLM API 调用成功，共接收 {} 字符", questions.chars().count());

        Ok(questions)
    }
}

#[async_trait]
impl QuestionSource for QuestionGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        debug!("收到生成请求 {}", request);
        let user_message = prompt::build_user_prompt(request);
        self.stream_completion(&request.model, &user_message).await
    }
}
