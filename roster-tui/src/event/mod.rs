//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 只处理 Press 事件
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 过滤栏打开时，调用 handle_filter_keys 处理
//!                 - 全局快捷键，就地处理
//!                 - 焦点位于表单面板，调用 handle_form_keys 处理
//!                 - 焦点位于列表面板，调用 handle_list_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         确认删除弹窗：
//!             Esc             → ModalMessage::Close（等同于取消）
//!             Tab / ← / →     → ModalMessage::ToggleDeleteFocus
//!             Enter           → ModalMessage::Confirm（按当前焦点作答）
//!
//!         帮助弹窗：
//!             Esc / Enter     → ModalMessage::Close
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
