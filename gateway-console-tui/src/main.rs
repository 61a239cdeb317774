//! SMS Gateway Console 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     TomlConfigService::load()   // 读取配置（失败时使用默认值并提示）
//!     init_logging()              // 文件日志，guard 持有到退出
//!     Runtime::new()              // 后台任务使用的 tokio 运行时
//!     init_terminal()             // Raw Mode + 备用屏幕
//!     app::run()                  // 运行主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use gateway_console_tui::app;
use gateway_console_tui::backend::{
    AppConfig, ConfigService, CoreService, SimulatedGateway, TaskRunner, TomlConfigService,
};
use gateway_console_tui::i18n::{set_language, Language};
use gateway_console_tui::model::App;
use gateway_console_tui::util::{init_logging, init_terminal, install_panic_hook, restore_terminal};
use gateway_console_tui::view::theme::set_theme;

fn main() -> Result<()> {
    // 1. 配置
    let config_service = Arc::new(TomlConfigService::default());
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // 2. 日志（guard 必须活到 main 结束）
    let _log_guard = init_logging(&config.log.resolved_directory(), &config.log.level)?;
    tracing::info!(
        config = %config_service.path().display(),
        "Starting gateway console v{}",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(e) = &config_error {
        tracing::warn!(error = %e, "failed to load config, using defaults");
    }

    set_language(Language::from_code(&config.language).unwrap_or_default());
    set_theme(config.theme);

    // 3. 后台运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("gateway-worker")
        .build()
        .context("failed to build tokio runtime")?;

    let gateway = Arc::new(SimulatedGateway::new(&config.simulator));
    let core = Arc::new(CoreService::new(gateway, config.gateway.policy()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = TaskRunner::new(runtime.handle().clone(), core.clone(), config_service, tx);

    let mut app = App::new(config, core.gateway_name());
    if let Some(e) = config_error {
        app.set_status(e.to_string());
    }

    // 4. 终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 主循环
    let result = app::run(&mut terminal, &mut app, &runner, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 进行中的任务最多再等一秒
    drop(runner);
    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("Gateway console exited");

    result
}
