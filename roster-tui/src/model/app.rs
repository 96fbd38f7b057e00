//! 应用主状态结构

use roster_core::{render_filtered, FormController, ListEntry, RenderedList};

use super::{FocusPanel, FormState, ModalState, RecordsState};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 记录、表单输入与编辑游标
    pub controller: FormController,

    // === 各面板状态 ===
    /// 表单面板状态
    pub form: FormState,
    /// 列表面板状态
    pub records: RecordsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 删除前是否弹窗确认
    pub confirm_delete: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        Self::with_controller(FormController::new(), config)
    }

    /// 以已有的控制器创建应用实例
    pub fn with_controller(controller: FormController, config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Form,
            controller,
            form: FormState::new(),
            records: RecordsState::new(),
            modal: ModalState::new(),
            status_message: None,
            confirm_delete: config.confirm_delete,
        }
    }

    /// 当前可见的列表（应用过滤条件）
    pub fn visible_records(&self) -> RenderedList {
        render_filtered(self.controller.store(), &self.records.query)
    }

    /// 当前选中的列表项
    pub fn selected_entry(&self) -> Option<ListEntry> {
        self.visible_records()
            .entries
            .into_iter()
            .nth(self.records.selected)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
