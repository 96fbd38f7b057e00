//! 列表面板消息
//!
//! 处理列表中的选择、编辑、删除与过滤

/// 列表面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 条目操作 ==========
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项
    Delete,

    // ========== 过滤栏 ==========
    /// 打开过滤栏
    StartFilter,
    /// 过滤栏输入字符
    FilterInput(char),
    /// 过滤栏删除字符
    FilterBackspace,
    /// 应用过滤条件
    ApplyFilter,
    /// 清除过滤条件
    ClearFilter,
}
