/// 可选模型目录
///
/// 对应原界面上的固定下拉列表；选择目录之外的模型只产生
/// 建议性警告，不阻断生成
pub const SUPPORTED_MODELS: [&str; 3] = ["llama3-8b-8192", "llama3-13b", "llama3-30b"];

/// 默认模型
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// 判断模型是否在目录中
pub fn is_supported(model: &str) -> bool {
    SUPPORTED_MODELS.contains(&model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_listed() {
        assert!(is_supported(DEFAULT_MODEL));
    }

    #[test]
    fn test_unknown_model() {
        assert!(!is_supported("gpt-4"));
    }
}
