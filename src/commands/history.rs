//! # 消息历史 Tauri Commands
//!
//! 提供会话消息历史的查询与清空：
//! - `list_messages` - 全部消息（最早在前）
//! - `message_count` - 消息条数
//! - `last_message` - 最近一条消息
//! - `messages_by_email` - 按邮箱筛选（不区分大小写）
//! - `clear_history` - 经用户确认后清空历史

use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::models::message::ContactMessage;
use crate::services::session::ContactSession;

#[tauri::command]
pub async fn list_messages(
    session: State<'_, ContactSession>,
) -> Result<Vec<ContactMessage>, String> {
    Ok(session.all_messages())
}

#[tauri::command]
pub async fn message_count(session: State<'_, ContactSession>) -> Result<usize, String> {
    Ok(session.message_count())
}

#[tauri::command]
pub async fn last_message(
    session: State<'_, ContactSession>,
) -> Result<Option<ContactMessage>, String> {
    Ok(session.last_message())
}

/// 按邮箱筛选消息
///
/// # 参数
/// - `email` - 要匹配的邮箱；为 null 时返回空数组
#[tauri::command]
pub async fn messages_by_email(
    email: Option<String>,
    session: State<'_, ContactSession>,
) -> Result<Vec<ContactMessage>, String> {
    Ok(session.messages_by_email(email.as_deref()))
}

/// 清空历史记录
///
/// 先弹出原生警告对话框请求确认，用户选择"确定"后才清空。
///
/// # 返回值
/// 是否执行了清空
///
/// # 错误
/// 对话框在返回结果前被关闭时返回错误
#[tauri::command]
pub async fn clear_history(
    app: AppHandle,
    session: State<'_, ContactSession>,
) -> Result<bool, String> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    app.dialog()
        .message("确定要清空全部历史记录吗？此操作无法撤销。")
        .title("确认清空")
        .kind(MessageDialogKind::Warning)
        .buttons(MessageDialogButtons::OkCancel)
        .show(move |confirmed| {
            let _ = tx.send(confirmed);
        });

    let confirmed = rx
        .await
        .map_err(|e| format!("等待确认对话框失败: {}", e))?;

    if confirmed {
        session.clear_history();
    }
    Ok(confirmed)
}
