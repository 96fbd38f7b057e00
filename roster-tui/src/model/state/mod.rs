//! 面板状态模块
//!
//! 定义表单面板、列表面板和弹窗的状态数据结构

mod form;
mod modal;
mod records;

pub use form::FormState;
pub use modal::{Modal, ModalState};
pub use records::RecordsState;
