//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     layout.rs           标题栏 + 内容区 + 状态栏 + 弹窗
//!     pages/form.rs       表单视图
//!     pages/list.rs       已提交表单列表
//!     components/         状态栏、弹窗
//!     theme.rs            颜色与常用样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
