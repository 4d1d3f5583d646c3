/// 日志工具模块
///
/// 提供日志初始化和文本预览的辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志级别默认 info，可通过 RUST_LOG 环境变量覆盖；
/// 重复调用（例如在测试里）不报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("abcdef", 3), "abc...");
    }
}
