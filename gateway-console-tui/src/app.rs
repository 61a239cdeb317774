//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!
//! ```text
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!
//!     while let Ok(msg) = backend_rx.try_recv() {     // 先取出所有已完成的后台结果
//!         dispatch(AppMessage::Backend(msg))              // 可能产生后续任务（如操作后重新加载）
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询输入，在此最多等待 100ms
//!         let msg = handle_event(event, &app);            // 翻译为消息
//!         dispatch(msg)                                   // update + 启动返回的任务
//!     }
//! ```
//! }
//!
//!
//! update 不会阻塞：网关调用都在 tokio 运行时上进行，
//! 慢网关只会让结果晚一些回来，界面始终可以响应按键。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::TaskRunner;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    runner: &TaskRunner,
    backend_rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    // 启动时加载首页数据
    dispatch(app, runner, AppMessage::Refresh);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已完成的后台任务
        while let Ok(msg) = backend_rx.try_recv() {
            dispatch(app, runner, AppMessage::Backend(msg));
        }

        // 4. 轮询事件并更新状态
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            dispatch(app, runner, msg);
        }
    }

    Ok(())
}

/// 更新状态，并启动 update 返回的后台任务
fn dispatch(app: &mut App, runner: &TaskRunner, msg: AppMessage) {
    if let Some(task) = update::update(app, msg) {
        runner.spawn(task);
    }
}
