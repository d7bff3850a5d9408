//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Some(done) = backend.try_recv() {     // 收取后台完成的请求
//!         update::update(&mut app , Backend(done))
//!     }
//!     for cmd in app.take_commands() {                // 把 update 排队的命令交给后台
//!         backend.spawn(cmd)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，在此最多等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//! }
//!
//! 请求在后台运行时上执行，主循环从不阻塞在网络上。

use std::time::Duration;

use anyhow::Result;

use crate::backend::FormBackend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, mut backend: FormBackend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取后台结果
        while let Some(completion) = backend.try_recv() {
            update::update(app, AppMessage::Backend(completion));
        }

        // 4. 派发新命令
        for command in app.take_commands() {
            backend.spawn(command);
        }

        // 5. 轮询事件
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
