#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Language and theme switches are persisted through the config service.
//!
//! Kept in its own test binary: the current language is process-global.

use std::sync::Arc;

use gateway_console_tui::backend::{
    execute, AppConfig, ConfigService, CoreService, SimulatedGateway, Task, TomlConfigService,
};
use gateway_console_tui::i18n::{current_language, t, Language};
use gateway_console_tui::message::{AppMessage, BackendMessage};
use gateway_console_tui::model::App;
use gateway_console_tui::update::update;
use gateway_console_tui::view::theme::Theme;
use tokio::sync::mpsc;

#[test]
fn toggles_are_saved_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let config_service = TomlConfigService::new(dir.path().join("nested").join("config.toml"));

    let config = AppConfig::default();
    let gateway = Arc::new(SimulatedGateway::new(&config.simulator));
    let core = CoreService::new(gateway, config.gateway.policy());
    let mut app = App::new(config, core.gateway_name());
    assert_eq!(current_language(), Language::EnUs);

    let save = |app: &mut App, task: Option<Task>| {
        let task = task.expect("toggle should persist the config");
        assert!(matches!(task, Task::SaveConfig(_)));
        let (tx, _rx) = mpsc::unbounded_channel();
        let msg = tokio_test::block_on(execute(task, &core, &config_service, &tx));
        assert!(matches!(msg, BackendMessage::ConfigSaved(Ok(()))));
        update(app, AppMessage::Backend(msg));
    };

    let task = update(&mut app, AppMessage::ToggleLanguage);
    save(&mut app, task);
    assert_eq!(current_language(), Language::ZhCn);
    assert_eq!(t().nav.dashboard, "仪表盘");

    let task = update(&mut app, AppMessage::ToggleTheme);
    save(&mut app, task);

    let reloaded = config_service.load().unwrap();
    assert_eq!(reloaded.language, "zh-CN");
    assert_eq!(reloaded.theme, Theme::Light);
    assert_eq!(reloaded, app.config);
}
