//! 列表界面状态

use chrono::{DateTime, Local};

/// 列表界面状态
#[derive(Debug, Default)]
pub struct ListState {
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 正在删除的记录 ID
    pub deleting: Option<String>,
    /// 上次成功刷新的时间
    pub last_refreshed: Option<DateTime<Local>>,
}

impl ListState {
    /// 创建新的列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表内容变化后保证选中项不越界
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// 标记刷新完成
    pub fn mark_refreshed(&mut self, len: usize) {
        self.loading = false;
        self.last_refreshed = Some(Local::now());
        self.clamp(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = ListState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.clamp(1);
        assert_eq!(state.selected, 0);

        state.select_last(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn refresh_records_time() {
        let mut state = ListState {
            loading: true,
            selected: 4,
            ..ListState::default()
        };
        state.mark_refreshed(2);
        assert!(!state.loading);
        assert!(state.last_refreshed.is_some());
        assert_eq!(state.selected, 1);
    }
}
