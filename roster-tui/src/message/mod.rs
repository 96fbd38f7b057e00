//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod form;           // 表单面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod records;        // 列表面板子消息
//!
//!
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             match event {
//!                 Event::Key(key) if ... => AppMessage::...,
//!                 _ => AppMessage::Noop,
//!             }
//!         }
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     去往 src/update/mod.rs 吧
//!

mod app;
mod form;
mod modal;
mod records;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use records::RecordsMessage;
