//! # 视图导航控制器
//!
//! 在 Form / Summary / History 三个视图之间切换的有限状态机。
//! 初始视图为 Form，没有终止状态，控制器存活于整个会话。
//!
//! ## 转换表
//!
//! | 当前视图 | 动作 | 目标视图 | 副作用 |
//! |----------|------|----------|--------|
//! | Form | `show_summary(msg)` | Summary | 携带消息与提交序号 |
//! | Summary / History | `go_back` | Form | 无 |
//! | 任意 | `go_to_form` | Form | 无 |
//! | 任意 | `go_to_history` | History | 先刷新历史投影，再切换视图 |
//!
//! 表中没有列出的组合均为空操作（例如在 Form 上 `go_back`）。
//! 已处于 History 时再次 `go_to_history` 视图不变，但仍会刷新投影。

use serde::Serialize;

use crate::models::display::SubmissionSummary;
use crate::models::message::ContactMessage;

/// 视图枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Form,
    Summary,
    History,
}

/// 导航控制器
#[derive(Debug)]
pub struct Navigator {
    view: View,
    /// 最近一次提交的摘要，进入 Summary 时写入
    summary: Option<SubmissionSummary>,
    /// 本次会话累计的提交次数
    submissions: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            view: View::Form,
            summary: None,
            submissions: 0,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Summary 视图当前展示的摘要
    pub fn summary(&self) -> Option<&SubmissionSummary> {
        self.summary.as_ref()
    }

    /// 提交成功：Form → Summary
    ///
    /// 只在 Form 视图上生效，返回是否发生了切换。
    pub fn show_summary(&mut self, message: ContactMessage) -> bool {
        if self.view != View::Form {
            return false;
        }
        self.submissions += 1;
        self.summary = Some(SubmissionSummary {
            message,
            sequence: self.submissions,
        });
        self.view = View::Summary;
        true
    }

    /// 切换到 Form，已在 Form 时为空操作
    pub fn go_to_form(&mut self) -> bool {
        if self.view == View::Form {
            return false;
        }
        self.view = View::Form;
        true
    }

    /// 切换到 History
    ///
    /// `refresh` 在视图标记为 History 之前执行完毕，保证显示的表格不是旧数据。
    /// 每次调用都会刷新，即使已经处于 History。
    pub fn go_to_history(&mut self, refresh: impl FnOnce()) -> bool {
        refresh();
        if self.view == View::History {
            return false;
        }
        self.view = View::History;
        true
    }

    /// 从 Summary 或 History 返回 Form，在 Form 上为空操作
    pub fn go_back(&mut self) -> bool {
        match self.view {
            View::Summary | View::History => {
                self.view = View::Form;
                true
            }
            View::Form => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage::new("Ana", "ana@example.com", "Hi")
    }

    #[test]
    fn test_initial_view_is_form() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), View::Form);
        assert!(nav.summary().is_none());
    }

    #[test]
    fn test_history_round_trip() {
        let mut nav = Navigator::new();
        let mut refreshes = 0;

        assert!(nav.go_to_history(|| refreshes += 1));
        assert_eq!(nav.view(), View::History);
        // 第二次：视图不变，投影仍刷新
        assert!(!nav.go_to_history(|| refreshes += 1));
        assert_eq!(nav.view(), View::History);
        assert_eq!(refreshes, 2);

        assert!(nav.go_back());
        assert_eq!(nav.view(), View::Form);
    }

    #[test]
    fn test_go_back_from_form_is_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert!(!nav.go_to_form());
        assert_eq!(nav.view(), View::Form);
    }

    #[test]
    fn test_summary_carries_message_and_sequence() {
        let mut nav = Navigator::new();
        assert!(nav.show_summary(message()));
        assert_eq!(nav.view(), View::Summary);
        let summary = nav.summary().unwrap();
        assert_eq!(summary.message.name(), "Ana");
        assert_eq!(summary.sequence, 1);

        assert!(nav.go_back());
        assert!(nav.show_summary(message()));
        assert_eq!(nav.summary().unwrap().sequence, 2);
    }

    #[test]
    fn test_summary_only_reachable_from_form() {
        let mut nav = Navigator::new();
        nav.go_to_history(|| {});
        assert!(!nav.show_summary(message()));
        assert_eq!(nav.view(), View::History);
        assert!(nav.summary().is_none());
    }

    #[test]
    fn test_history_reachable_from_summary() {
        let mut nav = Navigator::new();
        nav.show_summary(message());
        assert!(nav.go_to_history(|| {}));
        assert_eq!(nav.view(), View::History);
        assert!(nav.go_to_form());
        assert_eq!(nav.view(), View::Form);
    }
}
