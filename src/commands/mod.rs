//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数。
//! 每个子模块对应一个功能域：
//! - `form` - 表单字段更新、失焦校验与提交
//! - `navigation` - Form / Summary / History 视图切换
//! - `history` - 会话消息历史的查询与清空
//! - `settings` - 偏好设置的读写

pub mod form;
pub mod history;
pub mod navigation;
pub mod settings;
