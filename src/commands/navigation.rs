//! # 视图导航 Tauri Commands
//!
//! 每个 command 都返回切换后的完整视图状态（`ViewState`），前端直接据此渲染。
//! 不合法的切换（如在 Form 上返回）为空操作，返回当前视图状态。

use tauri::State;

use crate::models::display::ViewState;
use crate::services::session::ContactSession;

#[tauri::command]
pub async fn current_view(session: State<'_, ContactSession>) -> Result<ViewState, String> {
    Ok(session.view_state())
}

#[tauri::command]
pub async fn go_to_form(session: State<'_, ContactSession>) -> Result<ViewState, String> {
    Ok(session.go_to_form())
}

/// 进入历史视图，返回前已重新计算历史表格
#[tauri::command]
pub async fn go_to_history(session: State<'_, ContactSession>) -> Result<ViewState, String> {
    Ok(session.go_to_history())
}

#[tauri::command]
pub async fn go_back(session: State<'_, ContactSession>) -> Result<ViewState, String> {
    Ok(session.go_back())
}
