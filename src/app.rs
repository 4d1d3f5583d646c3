use crate::config::Config;
use crate::models::{catalog, load_job_or_default, Difficulty, GenerationJob, SessionState};
use crate::services::{exporter, extractor, QuestionGenerator};
use crate::utils::truncate_text;
use crate::workflow::SessionFlow;
use anyhow::Result;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// 用户动作
///
/// 每行输入解析成一个动作；一个动作只处理一次，
/// 处理完做一次渲染，没有隐藏的重复执行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 全部生成（三个难度串行）
    GenerateAll,
    /// 重新生成某难度
    Regenerate(Difficulty),
    /// 显示全部已生成内容
    Show,
    /// 导出某难度为 TXT
    Save(Difficulty),
    /// 导出最终合并结果
    Export(ExportFormat),
    /// 退出
    Quit,
}

/// 最终导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Docx,
    Pdf,
}

impl Action {
    /// 解析一行输入
    pub fn parse(line: &str) -> Option<Action> {
        let mut parts = line.split_whitespace();
        match parts.next()? {
            "generate" | "g" => Some(Action::GenerateAll),
            "regen" | "r" => Difficulty::find(parts.next()?).map(Action::Regenerate),
            "show" | "s" => Some(Action::Show),
            "save" => Difficulty::find(parts.next()?).map(Action::Save),
            "export" | "e" => match parts.next()? {
                "txt" => Some(Action::Export(ExportFormat::Txt)),
                "docx" => Some(Action::Export(ExportFormat::Docx)),
                "pdf" => Some(Action::Export(ExportFormat::Pdf)),
                _ => None,
            },
            "quit" | "q" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    job: GenerationJob,
    seed_text: Option<String>,
    flow: SessionFlow<QuestionGenerator>,
    state: SessionState,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        if config.llm_api_key.is_empty() {
            warn!("⚠️ 未设置 LLM_API_KEY，调用 API 将会失败");
        }

        // 加载作业文件
        let job = load_job_or_default(&config.job_file).await?;
        log_job(&job);

        // 模型目录校验只是建议性的
        if !catalog::is_supported(&job.model) {
            warn!(
                "⚠️ 模型 {} 不在目录 {:?} 中，按原样继续",
                job.model,
                catalog::SUPPORTED_MODELS
            );
        }

        // 提取种子内容（失败直接向上传播）
        let seed_text = match &job.source_docx {
            Some(path) => {
                info!("📁 正在提取种子文档: {}", path);
                let text = extractor::extract_text(path)?;
                info!("✓ 提取完成，共 {} 字符", text.chars().count());
                info!("提取内容预览: {}", truncate_text(&text, 1000));
                Some(text)
            }
            None => None,
        };

        let flow = SessionFlow::new(QuestionGenerator::new(&config));

        Ok(Self {
            config,
            job,
            seed_text,
            flow,
            state: SessionState::new(),
        })
    }

    /// 运行动作循环
    ///
    /// 每行一个动作：解析 -> 处理一次 -> 单次渲染。
    /// 生成动作会在网络 I/O 上同步阻塞，期间无法取消
    pub async fn run(&mut self) -> Result<()> {
        print_usage();
        self.render();

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(action) = Action::parse(line) else {
                warn!("无法识别的动作: {}", line);
                print_usage();
                continue;
            };

            if action == Action::Quit {
                break;
            }

            self.handle(action).await?;
            self.render();
        }

        info!("👋 会话结束");
        Ok(())
    }

    /// 处理单个动作
    async fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::GenerateAll => {
                let counts = self
                    .flow
                    .generate_all(&self.job, self.seed_text.as_deref(), &mut self.state)
                    .await;
                info!(
                    "✅ 全部生成完成 (easy {} / medium {} / hard {})",
                    counts.easy, counts.medium, counts.hard
                );
            }
            Action::Regenerate(difficulty) => {
                let count = self
                    .flow
                    .regenerate(
                        &self.job,
                        self.seed_text.as_deref(),
                        &mut self.state,
                        difficulty,
                    )
                    .await;
                info!("✅ '{}' 难度重新生成完成 ({} 道)", difficulty, count);
            }
            Action::Show => self.render_full(),
            Action::Save(difficulty) => self.save_difficulty(difficulty)?,
            Action::Export(format) => self.export_final(format)?,
            Action::Quit => {}
        }
        Ok(())
    }

    /// 导出某难度为 TXT
    fn save_difficulty(&self, difficulty: Difficulty) -> Result<()> {
        if !self.state.is_populated(difficulty) {
            warn!("⚠️ '{}' 难度还没有内容，先 generate 或 regen", difficulty);
            return Ok(());
        }

        let filename = format!("{}_questions.txt", difficulty);
        let bytes = exporter::export_txt(self.state.get(difficulty));
        let path = exporter::write_export(Path::new(&self.config.export_dir), &filename, &bytes)?;

        info!("💾 已导出: {}", path.display());
        Ok(())
    }

    /// 导出最终合并结果
    ///
    /// 至少一个槽位已生成才可导出；空槽位整段跳过，连标题都不出现
    fn export_final(&self, format: ExportFormat) -> Result<()> {
        let Some(final_text) = self.state.final_text() else {
            warn!("⚠️ 所有难度都还没有内容，无法导出");
            return Ok(());
        };

        let (filename, bytes) = match format {
            ExportFormat::Txt => ("final_questions.txt", exporter::export_txt(&final_text)),
            ExportFormat::Docx => ("final_questions.docx", exporter::export_docx(&final_text)?),
            ExportFormat::Pdf => ("final_questions.pdf", exporter::export_pdf(&final_text)?),
        };

        let path = exporter::write_export(Path::new(&self.config.export_dir), filename, &bytes)?;

        info!("💾 已导出: {}", path.display());
        Ok(())
    }

    // ========== 渲染辅助方法 ==========

    /// 单次渲染：概览三个槽位
    fn render(&self) {
        info!("{}", "─".repeat(60));
        for difficulty in Difficulty::ALL {
            if self.state.is_populated(difficulty) {
                let text = self.state.get(difficulty);
                if self.config.verbose_logging {
                    info!("[{}] {}", difficulty.title(), text);
                } else {
                    info!("[{}] {}", difficulty.title(), truncate_text(text, 120));
                }
            } else {
                info!("[{}] 尚未生成", difficulty.title());
            }
        }
        info!("{}", "─".repeat(60));
    }

    /// 完整渲染：打印全部已生成内容
    fn render_full(&self) {
        for difficulty in Difficulty::ALL {
            println!("\n{}", "=".repeat(60));
            println!("{} Questions", difficulty.title());
            println!("{}", "=".repeat(60));
            if self.state.is_populated(difficulty) {
                println!("{}", self.state.get(difficulty));
            } else {
                println!("No {} questions generated yet.", difficulty);
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - MCQ 生成会话");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📡 API 端点: {}", config.llm_api_base_url);
    info!("📂 导出目录: {}", config.export_dir);
    info!("{}", "=".repeat(60));
}

fn log_job(job: &GenerationJob) {
    info!("✓ 作业已加载");
    info!("📋 模型: {} | 学科: {} | 主题: {}", job.model, job.subject, job.topic);
    info!(
        "📊 总题数: {} | 难度分布: {}% / {}% / {}%",
        job.total_questions, job.easy_pct, job.medium_pct, job.hard_pct
    );
}

fn print_usage() {
    info!("可用动作:");
    info!("  generate              生成全部三个难度");
    info!("  regen <难度>          重新生成某难度 (easy/medium/hard)");
    info!("  show                  显示全部已生成内容");
    info!("  save <难度>           导出某难度为 TXT");
    info!("  export <txt|docx|pdf> 导出最终合并结果");
    info!("  quit                  退出");
}
