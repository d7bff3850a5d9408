//! Contact Form TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 表单服务与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     merge_cli()             // 参数 > 环境变量 > 配置文件 > 默认值
//!     init_logging()          // 日志写入文件
//!     FormBackend::new()      // 后台运行时 + HTTP 客户端
//!     init_terminal()         // raw mode + 备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

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

use anyhow::Result;
use clap::Parser;

use backend::{default_log_path, AppConfig, ConfigService, FormBackend, LocalConfigService};
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::{self, Theme};

/// 联系表单终端客户端
#[derive(Debug, Parser)]
#[command(name = "contact-form-tui", version, about)]
struct Cli {
    /// 表单服务地址
    #[arg(long, env = "CONTACT_FORM_API_URL")]
    api_url: Option<String>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 日志文件路径
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// 界面语言（en-US / zh-CN）
    #[arg(long)]
    language: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    let service = match &cli.config {
        Some(path) => LocalConfigService::with_path(path),
        None => LocalConfigService::new(),
    };
    log::debug!("Loading config from {}", service.path().display());
    let stored = service.load()?;

    let config = merge_cli(&stored, &cli);
    log::info!(
        "Starting contact-form-tui {} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url
    );

    let (language, theme) = resolve_preferences(&config);
    i18n::set_language(language);
    theme::set_theme(theme);

    if cli.language.is_some() {
        if let Err(e) = remember_preferences(&service, stored, language, theme) {
            log::warn!("Could not save preferences: {e:#}");
        }
    }

    let backend = FormBackend::new(&config.api_base_url)?;

    let mut terminal = init_terminal()?;
    let mut app = model::App::new();

    let result = app::run(&mut terminal, &mut app, backend);

    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}

/// 命令行参数覆盖配置文件
fn merge_cli(stored: &AppConfig, cli: &Cli) -> AppConfig {
    let mut config = stored.clone();
    if let Some(url) = &cli.api_url {
        config.api_base_url.clone_from(url);
    }
    if let Some(language) = &cli.language {
        config.language.clone_from(language);
    }
    config
}

/// 解析语言与主题，无法识别时回退到默认值
fn resolve_preferences(config: &AppConfig) -> (Language, Theme) {
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language '{}', keeping default", config.language);
        Language::default()
    });
    let theme = Theme::from_name(&config.theme).unwrap_or_else(|| {
        log::warn!("Unknown theme '{}', keeping default", config.theme);
        Theme::default()
    });
    (language, theme)
}

/// 把 `--language` 选择的语言写回配置文件（服务地址不写回）
fn remember_preferences(
    service: &impl ConfigService,
    mut stored: AppConfig,
    language: Language,
    theme: Theme,
) -> Result<bool> {
    if stored.language == language.code() && stored.theme == theme.name() {
        return Ok(false);
    }
    stored.language = language.code().to_string();
    stored.theme = theme.name().to_string();
    service.save(&stored)?;
    log::info!("Saved language {} to config", language.code());
    Ok(true)
}
