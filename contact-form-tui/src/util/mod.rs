//! 工具模块
//!
//!     terminal.rs     终端初始化与恢复
//!     logging.rs      日志输出到文件（终端被 TUI 占用）
//!     text.rs         按显示宽度截断 / 补齐

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{pad_to_width, truncate_to_width};
