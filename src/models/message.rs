//! # 联系消息数据模型
//!
//! 定义了一条已提交的联系消息（ContactMessage），
//! 对应前端 TypeScript 中的 `ContactMessage` 接口。
//!
//! 消息一经构造即不可变：字段均为私有，只通过只读访问器暴露。
//! 校验发生在构造之前（见 `services::form`），构造本身不做校验。

use chrono::{DateTime, Local};
use serde::Serialize;

/// 联系消息数据结构
///
/// 表示用户通过表单成功提交的一条消息，包含姓名、邮箱、正文和创建时间。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ContactMessage {
///   name: string;
///   email: string;
///   body: string;
///   createdAt: string; // RFC 3339
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// 发送者姓名（已去除首尾空白）
    name: String,

    /// 发送者邮箱（已去除首尾空白）
    email: String,

    /// 消息正文（已去除首尾空白）
    body: String,

    /// 创建时间：构造时刻的本地时间，之后不再变化
    created_at: DateTime<Local>,
}

impl ContactMessage {
    /// 以当前本地时间构造一条消息
    ///
    /// 三个字段均会去除首尾空白。
    pub fn new(name: &str, email: &str, body: &str) -> Self {
        Self::with_timestamp(name, email, body, Local::now())
    }

    /// 以指定时间构造一条消息
    pub fn with_timestamp(
        name: &str,
        email: &str,
        body: &str,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            body: body.trim().to_string(),
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let msg = ContactMessage::new("  Ana ", " ana@example.com\n", "\tOlá  ");
        assert_eq!(msg.name(), "Ana");
        assert_eq!(msg.email(), "ana@example.com");
        assert_eq!(msg.body(), "Olá");
    }

    #[test]
    fn test_created_at_is_construction_time() {
        let before = Local::now();
        let msg = ContactMessage::new("Ana", "ana@example.com", "Hi");
        let after = Local::now();
        assert!(msg.created_at() >= before);
        assert!(msg.created_at() <= after);
    }

    #[test]
    fn test_serializes_camel_case() {
        let msg = ContactMessage::new("Ana", "ana@example.com", "Hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["name"], "Ana");
        assert!(value.get("createdAt").is_some());
    }
}
