//!
//! src/backend/mod.rs
//! Backend 层：本地服务
//!
//! 记录只保存在内存中（由 roster-core 的 `FormController` 持有），
//! Backend 层只负责读写应用配置。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置文件位于 <config_dir>/roster/config.json，可用 --config <path> 覆盖：
//!
//!         {
//!             "theme": "dark",            // dark | light
//!             "log_level": "info",        // 日志过滤指令，RUST_LOG 优先
//!             "confirm_delete": true      // false 时删除不弹窗确认
//!         }
//!
//!     文件不存在时使用默认值；文件格式错误时启动失败。
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
