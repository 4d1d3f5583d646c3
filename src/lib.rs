//! # MCQ Generator
//!
//! 一个通过 LLM 生成大学水平多选题并导出为 TXT/DOCX/PDF 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 纯数据与纯计算，不做 I/O
//! - `Difficulty` / `Distribution` - 难度与百分比切分（hard 吸收舍入差值）
//! - `GenerationJob` / `GenerationRequest` - 作业输入与单次请求
//! - `SessionState` - 三个难度槽位的会话状态
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次调用
//! - `extractor` - 从 .docx 提取种子文本能力
//! - `prompt` - 提示词拼接能力
//! - `QuestionGenerator` - 流式 LLM 生成能力（`QuestionSource` 为其边界）
//! - `exporter` - TXT / DOCX / PDF 导出能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次生成动作"的完整处理流程
//! - `SessionFlow` - 流程编排（切分题数 → 串行生成 → 写入槽位）
//!
//! ### ④ 应用层（App）
//! - `app` - 动作分发循环：每行一个动作，处理一次，渲染一次
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{Action, App, ExportFormat};
pub use config::Config;
pub use error::{ConfigError, DocumentError, ExportError, LlmError};
pub use models::{Difficulty, GenerationJob, GenerationRequest, SessionState};
pub use services::{QuestionGenerator, QuestionSource};
pub use workflow::SessionFlow;
