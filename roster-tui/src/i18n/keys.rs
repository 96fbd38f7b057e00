//! 文本键定义
//!
//! 定义所有界面文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **面板内容归对应面板**：如 `form.*`, `records.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有界面文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 表单面板文本
    pub form: FormTexts,
    /// 记录列表面板文本
    pub records: RecordsTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
    pub arrows_lr: &'static str, // "←→"
    pub edit: &'static str,
    pub delete: &'static str,
    pub filter: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub select: &'static str,
    pub switch_option: &'static str,
    pub apply: &'static str,
    pub clear: &'static str,
}

// ============================================================================
// 面板文本
// ============================================================================

/// 表单面板
pub struct FormTexts {
    pub title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    /// 提交按钮：新增模式
    pub create: &'static str,
    /// 提交按钮：编辑模式
    pub update: &'static str,
    pub editing: &'static str,
}

/// 记录列表面板
pub struct RecordsTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub no_match: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub filter: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

pub struct ModalTexts {
    /// 确认删除弹窗
    pub confirm_delete: ConfirmDeleteTexts,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏消息
pub struct StatusTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub filter_cleared: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub list_shortcuts: &'static str,
    pub close_hint: &'static str,
}
