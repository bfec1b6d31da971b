//! # 显示层数据模型
//!
//! 定义了前端渲染所需的独立数据结构，均只派生 `Serialize`，
//! 由 `services` 层计算后通过 IPC 直接交给前端渲染。
//!
//! ## 数据流
//! ```text
//! 表单输入 → form::ContactForm → FormSnapshot（逐字段状态 + 提交闸门）
//! 提交成功 → navigation::Navigator → SubmissionSummary
//! 进入历史 → projection::project → HistoryTable（倒序、截断）
//! 任意导航 → session::ContactSession::view_state → ViewState
//! ```

use serde::Serialize;

use crate::models::message::ContactMessage;
use crate::services::navigation::View;

/// 历史表格中的一行
///
/// 所有字段都已格式化为最终显示文本，前端不做任何文本处理。
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub name: String,
    pub email: String,
    /// 创建时间，格式为 `日/月/年 时:分`
    pub created_at: String,
    /// 正文预览：超过 50 个字符时截断为前 47 个字符加 "..."
    pub preview: String,
}

/// 历史表格投影
///
/// `rows[0]` 为最近一次提交的消息（倒序）。
/// `revision` 在每次刷新时递增，前端据此判断是否需要重绘。
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryTable {
    pub rows: Vec<HistoryRow>,
    pub count: usize,
    pub revision: u64,
}

/// 单个表单字段的显示状态
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatus {
    /// 字段当前内容（未去除空白）
    pub value: String,
    /// 是否已通过校验；未触碰的字段为 false
    pub valid: bool,
    /// 是否尚未被触碰（未触碰时不显示错误提示）
    pub untouched: bool,
    /// 校验失败原因；有效或未触碰时为空字符串
    pub error: String,
}

/// 表单整体显示状态
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub name: FieldStatus,
    pub email: FieldStatus,
    pub body: FieldStatus,
    /// 提交闸门：三个字段全部有效时为 true
    pub can_submit: bool,
}

/// 提交摘要：Summary 视图显示的内容
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub message: ContactMessage,
    /// 本次会话中的提交序号（从 1 开始）
    pub sequence: u64,
}

/// 当前视图的完整显示状态
///
/// 每个导航 command 都返回此结构，前端据此切换视图：
/// - `summary` 仅在 Summary 视图时有值
/// - `history` 仅在 History 视图时有值
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SubmissionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryTable>,
}
