//! # 偏好设置 Tauri Commands
//!
//! 提供偏好设置的读写 command 处理函数：
//! - `read_preferences` - 读取全部偏好
//! - `set_remember_window_size` - 是否记住窗口尺寸
//! - `set_history_max_size` - 历史容量（至少 10 条，下次启动生效）
//!
//! 姓名、邮箱和窗口尺寸由提交回调和窗口事件自动保存，不经过 command。

use tauri::State;

use crate::models::settings::Preferences;
use crate::services::preferences::PreferencesStore;

/// 读取偏好设置
///
/// 偏好文件不存在或损坏时返回默认偏好。
#[tauri::command]
pub async fn read_preferences(store: State<'_, PreferencesStore>) -> Result<Preferences, String> {
    Ok(store.load().await)
}

/// 设置是否记住窗口尺寸
///
/// # 返回值
/// 写回后的完整偏好
///
/// # 错误
/// 偏好文件写入失败时返回错误
#[tauri::command]
pub async fn set_remember_window_size(
    remember: bool,
    store: State<'_, PreferencesStore>,
) -> Result<Preferences, String> {
    store.set_remember_window_size(remember).await
}

/// 设置历史容量
///
/// 小于 10 的值按 10 保存。当前会话的历史容量在创建时已确定，新值从下次启动起生效。
///
/// # 错误
/// 偏好文件写入失败时返回错误
#[tauri::command]
pub async fn set_history_max_size(
    max_size: usize,
    store: State<'_, PreferencesStore>,
) -> Result<Preferences, String> {
    store.set_history_max_size(max_size).await
}
