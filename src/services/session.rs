//! # 会话状态服务
//!
//! 将表单状态机、消息历史、导航控制器和历史投影组合为一个会话对象，
//! 通过 Tauri 的 `manage()` 注册为应用状态，所有 command 函数通过
//! `State<ContactSession>` 访问。
//!
//! ## 数据流
//! ```text
//! update_field / blur_field → ContactForm（逐字段校验 + 提交闸门）
//! submit → ContactForm::submit → MessageHistory::append → Navigator → Summary → 释放锁 → 回调
//! go_to_history → projection::project（先刷新）→ Navigator → History
//! ```
//!
//! ## 线程安全
//! Tauri 的 command 可能在不同线程上并发执行：
//! - 历史自带互斥锁（见 `services::history`）
//! - 表单、导航和当前投影放在同一个 `Mutex` 中，导航转换彼此串行，
//!   进入 History 时的投影刷新在同一次加锁内完成，之后视图才可见
//! - 提交回调单独加锁，在释放 UI 锁之后调用，回调内可以再读取会话

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::display::{FormSnapshot, HistoryTable, ViewState};
use crate::models::message::ContactMessage;
use crate::models::settings::Preferences;
use crate::services::form::{ContactForm, FieldId};
use crate::services::history::MessageHistory;
use crate::services::navigation::{Navigator, View};
use crate::services::projection;

/// 提交回调：每次成功提交恰好调用一次，调用时消息已在历史中
pub type SubmitCallback = Box<dyn FnMut(&ContactMessage) + Send>;

/// 一次提交的结果
#[derive(Debug, Clone)]
pub struct Submission {
    /// 被接受的消息；提交被忽略时为 None
    pub message: Option<ContactMessage>,
    /// 与提交在同一次加锁内得到的视图状态
    pub view: ViewState,
}

/// 由 UI 事件顺序驱动的会话状态
struct UiState {
    form: ContactForm,
    navigator: Navigator,
    /// History 视图当前显示的投影
    table: HistoryTable,
}

/// 应用会话状态
pub struct ContactSession {
    history: MessageHistory,
    ui: Mutex<UiState>,
    on_submit: Mutex<Option<SubmitCallback>>,
}

impl ContactSession {
    /// 以指定历史容量创建会话
    pub fn new(history_max_size: usize) -> Self {
        Self {
            history: MessageHistory::new(history_max_size),
            ui: Mutex::new(UiState {
                form: ContactForm::new(),
                navigator: Navigator::new(),
                table: HistoryTable::default(),
            }),
            on_submit: Mutex::new(None),
        }
    }

    /// 按已保存的偏好创建会话：使用钳制后的历史容量，并预填姓名和邮箱
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let session = Self::new(prefs.history_max_size());
        session.prefill(&prefs.name, &prefs.last_email);
        log::info!(
            "会话已创建：历史容量 {}，预填姓名 {}",
            session.history.capacity(),
            !prefs.name.is_empty()
        );
        session
    }

    fn ui(&self) -> MutexGuard<'_, UiState> {
        self.ui.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ======== 表单 ========

    /// 预填姓名和邮箱，非空内容会立即校验
    pub fn prefill(&self, name: &str, email: &str) {
        let mut ui = self.ui();
        ui.form.prefill(FieldId::Name, name);
        ui.form.prefill(FieldId::Email, email);
    }

    /// 注册提交回调，替换之前注册的回调
    pub fn on_submit(&self, callback: SubmitCallback) {
        *self.on_submit.lock().unwrap_or_else(PoisonError::into_inner) = Some(callback);
    }

    pub fn form_state(&self) -> FormSnapshot {
        self.ui().form.snapshot()
    }

    /// 字段内容变化
    pub fn update_field(&self, field: FieldId, value: &str) -> FormSnapshot {
        let mut ui = self.ui();
        ui.form.set_value(field, value);
        ui.form.snapshot()
    }

    /// 字段失去焦点
    pub fn blur_field(&self, field: FieldId) -> FormSnapshot {
        let mut ui = self.ui();
        ui.form.blur(field);
        ui.form.snapshot()
    }

    /// 提交表单
    ///
    /// 仅在 Form 视图且提交闸门打开时生效：消息追加到历史，切换到 Summary，
    /// 释放 UI 锁后再调用提交回调。其他情况为空操作，`message` 为 None。
    pub fn submit(&self) -> Submission {
        let mut ui = self.ui();
        let accepted = if ui.navigator.view() == View::Form {
            ui.form.submit()
        } else {
            log::debug!("当前不在表单视图，忽略提交");
            None
        };

        let Some(message) = accepted else {
            return Submission {
                message: None,
                view: Self::snapshot_view(&ui),
            };
        };

        self.history.append(Some(message.clone()));
        ui.navigator.show_summary(message.clone());
        let view = Self::snapshot_view(&ui);
        drop(ui);
        log::debug!("已提交消息，历史共 {} 条", self.history.count());

        if let Some(callback) = self
            .on_submit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            callback(&message);
        }

        Submission {
            message: Some(message),
            view,
        }
    }

    // ======== 导航 ========

    pub fn view(&self) -> View {
        self.ui().navigator.view()
    }

    /// 当前视图的完整显示状态
    pub fn view_state(&self) -> ViewState {
        Self::snapshot_view(&self.ui())
    }

    fn snapshot_view(ui: &UiState) -> ViewState {
        let view = ui.navigator.view();
        ViewState {
            view,
            summary: match view {
                View::Summary => ui.navigator.summary().cloned(),
                _ => None,
            },
            history: match view {
                View::History => Some(ui.table.clone()),
                _ => None,
            },
        }
    }

    pub fn go_to_form(&self) -> ViewState {
        let mut ui = self.ui();
        ui.navigator.go_to_form();
        Self::snapshot_view(&ui)
    }

    /// 进入 History，切换前先从历史重新计算投影
    pub fn go_to_history(&self) -> ViewState {
        let mut guard = self.ui();
        let ui = &mut *guard;
        let history = &self.history;
        let table = &mut ui.table;
        ui.navigator.go_to_history(|| {
            *table = projection::project(history, table.revision + 1);
        });
        Self::snapshot_view(ui)
    }

    pub fn go_back(&self) -> ViewState {
        let mut ui = self.ui();
        ui.navigator.go_back();
        Self::snapshot_view(&ui)
    }

    // ======== 历史查询 ========

    pub fn all_messages(&self) -> Vec<ContactMessage> {
        self.history.all()
    }

    pub fn message_count(&self) -> usize {
        self.history.count()
    }

    pub fn last_message(&self) -> Option<ContactMessage> {
        self.history.last()
    }

    pub fn messages_by_email(&self, email: Option<&str>) -> Vec<ContactMessage> {
        self.history.by_email(email)
    }

    /// 清空历史
    ///
    /// 正在显示 History 时同步刷新投影，避免表格残留已清空的行。
    pub fn clear_history(&self) {
        let mut ui = self.ui();
        self.history.clear();
        if ui.navigator.view() == View::History {
            let revision = ui.table.revision + 1;
            ui.table = projection::project(&self.history, revision);
        }
        log::info!("历史记录已清空");
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }
}
