//! 表单面板状态
//!
//! 输入框的内容保存在 `FormController` 的 `RecordForm` 中，
//! 这里只记录当前聚焦的输入框。

use roster_core::FormField;

/// 表单面板状态
#[derive(Debug, Clone, Copy, Default)]
pub struct FormState {
    /// 当前聚焦的输入框
    pub focused: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 下一个输入框（循环）
    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// 上一个输入框（循环）
    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// 回到第一个输入框
    pub fn reset(&mut self) {
        self.focused = FormField::Name;
    }
}
