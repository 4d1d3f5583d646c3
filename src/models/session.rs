//! 会话状态
//!
//! 三个难度槽位的文本，寿命与一次程序会话相同，不做持久化

use crate::models::Difficulty;

/// 会话状态
///
/// 每个难度一个槽位，初始为空字符串，只会被生成/重新生成动作覆盖。
/// 状态由应用层持有并按引用传入各动作处理函数，没有全局可变量
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    easy: String,
    medium: String,
    hard: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取某个难度槽位的文本
    pub fn get(&self, difficulty: Difficulty) -> &str {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// 覆盖某个难度槽位（无条件覆盖，populated -> populated 也允许）
    pub fn set(&mut self, difficulty: Difficulty, text: String) {
        match difficulty {
            Difficulty::Easy => self.easy = text,
            Difficulty::Medium => self.medium = text,
            Difficulty::Hard => self.hard = text,
        }
    }

    /// 槽位是否已有内容
    pub fn is_populated(&self, difficulty: Difficulty) -> bool {
        !self.get(difficulty).is_empty()
    }

    /// 是否至少有一个槽位已有内容（最终导出的可用条件）
    pub fn any_populated(&self) -> bool {
        Difficulty::ALL.iter().any(|d| self.is_populated(*d))
    }

    /// 拼接最终导出文本
    ///
    /// 按 easy/medium/hard 固定顺序，只包含非空槽位，
    /// 小节之间用空行分隔；空槽位连标题都不出现。
    /// 所有槽位都为空时返回 None
    pub fn final_text(&self) -> Option<String> {
        let sections: Vec<String> = Difficulty::ALL
            .iter()
            .filter(|d| self.is_populated(**d))
            .map(|d| format!("{} Questions:\n{}", d.title(), self.get(*d)))
            .collect();

        if sections.is_empty() {
            None
        } else {
            Some(sections.join("\n\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_empty() {
        let state = SessionState::new();
        assert!(!state.any_populated());
        assert_eq!(state.final_text(), None);
    }

    #[test]
    fn test_final_text_all_populated() {
        let mut state = SessionState::new();
        state.set(Difficulty::Easy, "A".to_string());
        state.set(Difficulty::Medium, "B".to_string());
        state.set(Difficulty::Hard, "C".to_string());

        assert_eq!(
            state.final_text().unwrap(),
            "Easy Questions:\nA\n\nMedium Questions:\nB\n\nHard Questions:\nC"
        );
    }

    #[test]
    fn test_final_text_skips_empty_slot() {
        let mut state = SessionState::new();
        state.set(Difficulty::Easy, "A".to_string());
        state.set(Difficulty::Hard, "C".to_string());

        // 空的 medium 槽位连标题都不出现
        assert_eq!(
            state.final_text().unwrap(),
            "Easy Questions:\nA\n\nHard Questions:\nC"
        );
    }

    #[test]
    fn test_overwrite_leaves_other_slots_unchanged() {
        let mut state = SessionState::new();
        state.set(Difficulty::Easy, "old easy".to_string());
        state.set(Difficulty::Medium, "medium text".to_string());
        state.set(Difficulty::Hard, "hard text".to_string());

        let medium_before = state.get(Difficulty::Medium).as_bytes().to_vec();
        let hard_before = state.get(Difficulty::Hard).as_bytes().to_vec();

        state.set(Difficulty::Easy, "new easy".to_string());

        assert_eq!(state.get(Difficulty::Easy), "new easy");
        assert_eq!(state.get(Difficulty::Medium).as_bytes(), &medium_before[..]);
        assert_eq!(state.get(Difficulty::Hard).as_bytes(), &hard_before[..]);
    }
}
