//! Roster TUI
//!
//! 一个只存在于内存中的用户记录编辑器：
//! 左侧表单新增 / 修改记录，右侧列表逐条提供编辑与删除操作。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置读写 (`backend/`)
//!
//! 记录、表单与编辑游标由 roster-core 的 `FormController` 持有。
//!
//!
//! main.rs 的执行顺序：
//!
//!     parse_args()            // --config <path>
//!     LocalConfigService      // 加载配置（文件格式错误时直接退出）
//!     init_logging()          // 日志写入文件
//!     set_theme()             // 应用主题
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     model::App::new()       // 创建 App 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use backend::{ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

/// 命令行参数
struct Args {
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("Usage: roster [--config <path>]");
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {other}"),
        }
    }

    Ok(Args { config_path })
}

fn main() -> Result<(), anyhow::Error> {
    let args = parse_args()?;

    // 1. 加载配置
    let config_service = args
        .config_path
        .map_or_else(LocalConfigService::default, LocalConfigService::new);
    let config = config_service.load()?;

    // 2. 初始化日志（guard 需存活到退出）
    let _log_guard = init_logging(&config.log_level)?;
    tracing::info!(
        "Roster v{} starting, config: {}",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display()
    );

    // 3. 应用主题
    view::theme::set_theme(config.theme);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(&config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Roster exiting");

    // 8. 返回结果
    result
}
