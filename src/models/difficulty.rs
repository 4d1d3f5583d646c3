/// 难度枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单
    Easy,
    /// 中等
    Medium,
    /// 困难
    Hard,
}

impl Difficulty {
    /// 三个难度的固定顺序（生成和导出都按此顺序）
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 获取小写名称（用于提示词和文件名）
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 获取标题名称（用于导出小节标题）
    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 尝试从字符串解析难度（精确匹配，忽略大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// 智能查找难度（支持前缀简写，如 e / m / h）
    pub fn find(s: &str) -> Option<Self> {
        // 先尝试精确匹配
        if let Some(difficulty) = Self::from_str(s) {
            return Some(difficulty);
        }

        // 前缀匹配
        let s_lower = s.to_lowercase();
        if s_lower.is_empty() {
            return None;
        }
        if "easy".starts_with(&s_lower) {
            return Some(Difficulty::Easy);
        }
        if "medium".starts_with(&s_lower) {
            return Some(Difficulty::Medium);
        }
        if "hard".starts_with(&s_lower) {
            return Some(Difficulty::Hard);
        }

        None
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
