//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 记录本身由 roster-core 的 `FormController` 持有，
//! 这里只保存界面相关的状态（焦点、选中项、过滤输入、弹窗等）。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Form / List）
//!
//!         pub mod state;      // 面板与弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub controller: FormController,     // 记录 + 表单 + 编辑游标
//!             pub form: FormState,                // 表单面板状态
//!             pub records: RecordsState,          // 列表面板状态
//!             pub modal: ModalState,              // 弹窗状态
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub confirm_delete: bool,           // 删除前是否弹窗确认
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(&config);
//!         - 在 update/mod.rs 中修改
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - ConfirmDelete { command, record_name, focus }
//!         - Help
//!
//!     删除分两步完成：
//!         列表中按 d
//!             ↓
//!         update/records.rs 打开 ConfirmDelete，保存待执行的 Command::Delete(id)
//!             ↓
//!         用户在弹窗中选择 取消 / 删除
//!             ↓
//!         update/modal.rs 以 PresetAnswer(answer) 调用 controller.dispatch(...)
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{FormState, Modal, ModalState, RecordsState};
