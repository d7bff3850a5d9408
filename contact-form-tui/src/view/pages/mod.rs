//! 视图页面

pub mod form;
pub mod list;
