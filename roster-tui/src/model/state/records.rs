//! 列表面板状态

use roster_core::RecordQuery;

/// 列表面板状态
///
/// `selected` 是渲染后（过滤后）列表中的索引，不是记录在存储中的位置。
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 当前选中的索引
    pub selected: usize,
    /// 已生效的过滤条件
    pub query: RecordQuery,
    /// 过滤栏输入（`Some` 表示正在编辑过滤条件）
    pub filter_input: Option<String>,
}

impl RecordsState {
    /// 创建新的列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表变短后保证选中项不越界
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ===== 过滤栏 =====

    /// 是否正在编辑过滤条件
    pub fn is_filtering(&self) -> bool {
        self.filter_input.is_some()
    }

    /// 打开过滤栏，预填当前过滤条件
    pub fn start_filter(&mut self) {
        self.filter_input = Some(self.query.as_str().to_string());
    }

    /// 应用过滤栏中的输入
    pub fn apply_filter(&mut self) {
        if let Some(input) = self.filter_input.take() {
            self.query = RecordQuery::new(input);
            self.selected = 0;
        }
    }

    /// 清除过滤条件并关闭过滤栏
    pub fn clear_filter(&mut self) {
        self.filter_input = None;
        self.query = RecordQuery::default();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = RecordsState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.select_next(0);
        assert_eq!(state.selected, 2);

        state.clamp(1);
        assert_eq!(state.selected, 0);

        state.select_last(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn filter_bar_prefills_and_applies() {
        let mut state = RecordsState::new();
        state.selected = 4;

        state.start_filter();
        assert_eq!(state.filter_input.as_deref(), Some(""));

        if let Some(input) = state.filter_input.as_mut() {
            input.push_str("Ana");
        }
        state.apply_filter();

        assert!(!state.is_filtering());
        assert_eq!(state.query.as_str(), "Ana");
        assert_eq!(state.selected, 0);

        state.start_filter();
        assert_eq!(state.filter_input.as_deref(), Some("Ana"));

        state.clear_filter();
        assert!(!state.is_filtering());
        assert!(state.query.is_blank());
    }
}
