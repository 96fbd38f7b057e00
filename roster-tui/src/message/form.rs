//! 表单面板消息

/// 表单面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个输入框
    NextField,
    /// 上一个输入框
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 提交表单
    Submit,
}
