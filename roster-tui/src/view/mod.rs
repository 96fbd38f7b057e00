//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，把状态画到终端上，不修改任何状态。
//! 每一帧都从 `FormController` 重新生成列表（roster-core 的 List Renderer），
//! 不做增量对比。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 表单 + 列表 + 状态栏）
//!         mod panels;         // 表单面板、列表面板
//!         mod components;     // 状态栏、弹窗
//!         pub mod theme;      // 主题颜色与常用样式
//!

mod components;
mod layout;
mod panels;
pub mod theme;

pub use layout::render;
