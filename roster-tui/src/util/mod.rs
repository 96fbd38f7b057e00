//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志文件的初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志（tracing + 每日滚动文件）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显：按键不会显示在终端上
//!         - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 应用在备用屏幕运行
//!         - 退出后自动恢复主屏幕内容
//!
//!     无论程序是正常退出、返回错误还是 panic，都必须恢复终端：
//!         - 正常退出 / 错误：main.rs 在 app::run 之后调用 restore_terminal
//!         - panic：init_terminal 安装的 panic hook 负责恢复
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
