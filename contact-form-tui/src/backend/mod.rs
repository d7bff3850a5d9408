//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有远程调用。
//! 通过 contact-form-core 的 `FormService` 访问表单存储。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod form_backend;       // 命令执行器（tokio 运行时 + 结果通道）
//!         mod config_service;     // 配置文件读写
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、命令执行器（FormBackend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     UI 主循环是同步的，不能等待网络请求。
//!
//!         主循环取出 app.outbox 中的 Command
//!             ↓
//!         backend.spawn(command)          // 在运行时上执行 FormService::execute
//!             ↓
//!         Completion 通过 mpsc 通道发回
//!             ↓
//!         主循环每一轮 backend.try_recv() 取出结果
//!             ↓
//!         update(app, AppMessage::Backend(completion))
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置保存在 <config dir>/contact-form-tui/config.json：
//!
//!         {
//!             "apiBaseUrl": "http://localhost:5001",
//!             "language": "en-US",
//!             "theme": "dark"
//!         }
//!
//!     文件不存在时使用默认值。
//!

mod config_service;
mod form_backend;

pub use config_service::{default_log_path, AppConfig, ConfigService, LocalConfigService};
pub use form_backend::FormBackend;
