//! # Contact Form - 应用核心初始化模块
//!
//! 联系表单桌面应用：用户填写姓名、邮箱和留言，提交前逐字段实时校验，
//! 提交后显示摘要并进入会话内的固定容量历史，上次的姓名/邮箱、窗口尺寸
//! 和历史容量通过偏好文件跨会话保存。
//!
//! 本模块负责 Tauri 应用的完整初始化流程（需启用 `desktop` feature）：
//! - 注册 Tauri 插件（对话框、日志）
//! - 读取偏好并初始化会话状态，注册提交回调
//! - 恢复并跟踪主窗口尺寸
//! - 注册自定义 Tauri commands
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层，仅 desktop）
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（校验、历史、导航、投影、偏好）
//! - `utils/` - 通用工具函数

#[cfg(feature = "desktop")]
mod commands;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(feature = "desktop")]
use tauri::{Manager, WindowEvent};

#[cfg(feature = "desktop")]
use crate::models::message::ContactMessage;
#[cfg(feature = "desktop")]
use crate::models::settings::WindowSize;
#[cfg(feature = "desktop")]
use crate::services::preferences::PreferencesStore;
#[cfg(feature = "desktop")]
use crate::services::session::ContactSession;

/// 保存窗口尺寸（仅当偏好中开启了"记住窗口尺寸"）
///
/// 最大化或最小化时的尺寸不保存，下次启动仍恢复为普通窗口尺寸。
/// 返回需要执行的保存任务；无需保存时返回 None。
#[cfg(feature = "desktop")]
fn save_window_size(
    window: &tauri::Window,
    size: tauri::PhysicalSize<u32>,
) -> Option<impl Future<Output = ()> + Send + 'static> {
    if window.is_maximized().unwrap_or(false) || window.is_minimized().unwrap_or(false) {
        return None;
    }
    let store = window.try_state::<PreferencesStore>()?.inner().clone();
    let logical = size.to_logical::<u32>(window.scale_factor().unwrap_or(1.0));
    let size = WindowSize {
        width: logical.width,
        height: logical.height,
    };

    Some(async move {
        if !store.load().await.remember_window_size {
            return;
        }
        if let Err(e) = store.save_window_size(size).await {
            log::warn!("{}", e);
        }
    })
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// # Panics
/// 如果 Tauri 应用启动失败（例如配置文件缺失或窗口创建失败），
/// 将通过 `.expect()` 触发 panic 并输出错误信息。
#[cfg(feature = "desktop")]
pub fn run() {
    tauri::Builder::default()
        // 对话框插件：清空历史前的原生确认框
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            // 表单 commands
            commands::form::get_form_state,
            commands::form::update_field,
            commands::form::blur_field,
            commands::form::submit_message,
            // 导航 commands
            commands::navigation::current_view,
            commands::navigation::go_to_form,
            commands::navigation::go_to_history,
            commands::navigation::go_back,
            // 历史 commands
            commands::history::list_messages,
            commands::history::message_count,
            commands::history::last_message,
            commands::history::messages_by_email,
            commands::history::clear_history,
            // 偏好设置 commands
            commands::settings::read_preferences,
            commands::settings::set_remember_window_size,
            commands::settings::set_history_max_size,
        ])
        // `setup` 闭包：在应用窗口显示之前执行的初始化钩子
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let store = PreferencesStore::open_default()?;
            let prefs = tauri::async_runtime::block_on(store.load());

            // 会话状态：历史容量取自偏好（至少 10），预填上次的姓名和邮箱
            let session = ContactSession::from_preferences(&prefs);

            // 提交回调：在后台任务中保存姓名和邮箱，不阻塞表单
            let persist = store.clone();
            session.on_submit(Box::new(move |message: &ContactMessage| {
                let store = persist.clone();
                let message = message.clone();
                tauri::async_runtime::spawn(async move {
                    if let Err(e) = store.record_submission(&message).await {
                        log::warn!("{}", e);
                    }
                });
            }));

            if prefs.remember_window_size {
                if let Some(window) = app.get_webview_window("main") {
                    let size = prefs.window_size();
                    window.set_size(tauri::LogicalSize::new(size.width, size.height))?;
                }
            }

            app.manage(session);
            app.manage(store);
            Ok(())
        })
        .on_window_event(|window, event| match event {
            WindowEvent::Resized(size) => {
                if let Some(task) = save_window_size(window, *size) {
                    tauri::async_runtime::spawn(task);
                }
            }
            // 关闭前同步保存，避免进程退出时任务尚未完成
            WindowEvent::CloseRequested { .. } => {
                if let Some(task) = window
                    .inner_size()
                    .ok()
                    .and_then(|size| save_window_size(window, size))
                {
                    tauri::async_runtime::block_on(task);
                }
            }
            _ => {}
        })
        // 在编译时读取 `tauri.conf.json` 配置文件，生成应用上下文
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
