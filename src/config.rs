/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 作业文件路径（描述要生成什么题目）
    pub job_file: String,
    /// 导出文件存放目录
    pub export_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    /// API 密钥，只从环境变量读取，绝不硬编码
    pub llm_api_key: String,
    pub llm_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            job_file: "job.toml".to_string(),
            export_dir: "exports".to_string(),
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.groq.com/openai/v1".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            job_file: std::env::var("JOB_FILE").unwrap_or(default.job_file),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or(default.export_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
        }
    }
}
