//! # 表单 Tauri Commands
//!
//! 前端在每次输入和失焦时调用，Rust 端同步完成校验并返回整张表单的状态，
//! 前端据此显示逐字段错误提示并启用/禁用提交按钮：
//! - `get_form_state` - 获取表单当前状态
//! - `update_field` - 字段内容变化
//! - `blur_field` - 字段失去焦点
//! - `submit_message` - 提交表单

use tauri::State;

use crate::models::display::{FormSnapshot, ViewState};
use crate::services::form::FieldId;
use crate::services::session::ContactSession;

/// 获取表单当前状态（启动时用于渲染预填内容）
#[tauri::command]
pub async fn get_form_state(session: State<'_, ContactSession>) -> Result<FormSnapshot, String> {
    Ok(session.form_state())
}

/// 字段内容变化：更新内容并重新校验
///
/// # 参数
/// - `field` - 字段标识（"name" | "email" | "body"）
/// - `value` - 字段的完整新内容
#[tauri::command]
pub async fn update_field(
    field: FieldId,
    value: String,
    session: State<'_, ContactSession>,
) -> Result<FormSnapshot, String> {
    Ok(session.update_field(field, &value))
}

/// 字段失去焦点：按当前内容重新校验
#[tauri::command]
pub async fn blur_field(
    field: FieldId,
    session: State<'_, ContactSession>,
) -> Result<FormSnapshot, String> {
    Ok(session.blur_field(field))
}

/// 提交表单
///
/// 校验未通过时不做任何事情，返回的视图状态仍为 Form；
/// 提交成功时消息进入历史，返回 Summary 视图状态。
/// 视图状态与提交在同一次加锁内得到，不会混入其他 command 的导航。
#[tauri::command]
pub async fn submit_message(session: State<'_, ContactSession>) -> Result<ViewState, String> {
    Ok(session.submit().view)
}
