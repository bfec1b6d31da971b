//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `validation` - 字段校验规则（非空、邮箱形状）
//! - `history` - 固定容量的会话消息历史，超出容量时淘汰最早的消息
//! - `form` - 表单校验状态机与提交闸门
//! - `navigation` - Form / Summary / History 视图导航状态机
//! - `projection` - 历史表格投影（倒序、正文截断、时间格式化）
//! - `session` - 组合以上服务的会话状态（Tauri managed state）
//! - `preferences` - 偏好设置文件的读写

pub mod form;
pub mod history;
pub mod navigation;
pub mod preferences;
pub mod projection;
pub mod session;
pub mod validation;
