//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! - `message` - 已提交的联系消息
//! - `settings` - 跨会话持久化的用户偏好
//! - `display` - 表单状态、提交摘要、历史表格等显示层结构

pub mod display;
pub mod message;
pub mod settings;
