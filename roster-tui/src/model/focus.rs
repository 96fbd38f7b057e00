//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧表单面板
    #[default]
    Form,
    /// 右侧列表面板
    List,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::List,
            FocusPanel::List => FocusPanel::Form,
        }
    }

    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是列表面板
    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(FocusPanel::Form.toggle(), FocusPanel::List);
        assert_eq!(FocusPanel::List.toggle(), FocusPanel::Form);
        assert!(FocusPanel::default().is_form());
    }
}
