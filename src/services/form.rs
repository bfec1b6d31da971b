//! # 表单校验状态机
//!
//! 跟踪姓名、邮箱、正文三个字段各自的校验状态，并派生出"可提交"闸门。
//!
//! ## 字段状态
//! - `Untouched`：初始状态，尚未交互（预填非空内容时立即解析为有效/无效）
//! - `Valid`：通过校验
//! - `Invalid(reason)`：未通过校验，附带显示给用户的原因
//!
//! 字段内容变化或失去焦点时重新执行对应的校验谓词。
//! 提交闸门是三个字段状态的纯函数，每次查询时即时计算，不存在监听器链。
//!
//! ## 提交
//! 闸门关闭时 `submit()` 是空操作，不信任调用方已禁用提交按钮。
//! 提交成功后：构造消息 → 清空正文并强制置为无效；
//! 姓名和邮箱保持不变，方便同一会话内连续提交。
//! 提交回调由 `services::session` 在消息入历史、释放会话锁之后调用。

use serde::Deserialize;

use crate::models::display::{FieldStatus, FormSnapshot};
use crate::models::message::ContactMessage;
use crate::services::validation;

/// 表单字段标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    Body,
}

/// 单个字段的校验状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Untouched,
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// 校验失败原因；有效或未触碰时为空字符串
    pub fn error_message(&self) -> &str {
        match self {
            Validity::Invalid(reason) => reason,
            _ => "",
        }
    }
}

#[derive(Debug, Clone)]
struct Field {
    value: String,
    validity: Validity,
}

impl Field {
    fn empty() -> Self {
        Self {
            value: String::new(),
            validity: Validity::Untouched,
        }
    }

    fn status(&self) -> FieldStatus {
        FieldStatus {
            value: self.value.clone(),
            valid: self.validity.is_valid(),
            untouched: self.validity == Validity::Untouched,
            error: self.validity.error_message().to_string(),
        }
    }
}

/// 对单个字段的内容执行对应的校验规则
fn check(field: FieldId, value: &str) -> Validity {
    let reason = match field {
        FieldId::Name if !validation::not_blank(value) => "请输入姓名",
        FieldId::Email if !validation::not_blank(value) => "请输入邮箱地址",
        FieldId::Email if !validation::is_email(value.trim()) => "邮箱地址格式无效",
        FieldId::Body if !validation::not_blank(value) => "请输入留言内容",
        _ => return Validity::Valid,
    };
    Validity::Invalid(reason.to_string())
}

/// 联系表单状态
pub struct ContactForm {
    name: Field,
    email: Field,
    body: Field,
}

impl ContactForm {
    /// 创建空表单，三个字段均为 `Untouched`
    pub fn new() -> Self {
        Self {
            name: Field::empty(),
            email: Field::empty(),
            body: Field::empty(),
        }
    }

    fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Body => &self.body,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Body => &mut self.body,
        }
    }

    /// 用已保存的内容预填字段
    ///
    /// 非空内容立即校验一次；空内容视为没有预填，字段保持 `Untouched`。
    pub fn prefill(&mut self, id: FieldId, value: &str) {
        if value.is_empty() {
            return;
        }
        self.set_value(id, value);
    }

    /// 字段内容变化：更新内容并重新校验
    pub fn set_value(&mut self, id: FieldId, value: &str) {
        let validity = check(id, value);
        let field = self.field_mut(id);
        field.value = value.to_string();
        field.validity = validity;
    }

    /// 字段失去焦点：按当前内容重新校验
    ///
    /// 未触碰的空字段失焦后同样会变为无效，以便显示错误提示。
    pub fn blur(&mut self, id: FieldId) {
        let validity = check(id, &self.field(id).value);
        self.field_mut(id).validity = validity;
    }

    pub fn validity(&self, id: FieldId) -> &Validity {
        &self.field(id).validity
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    /// 提交闸门：三个字段全部有效时为 true
    pub fn can_submit(&self) -> bool {
        self.name.validity.is_valid()
            && self.email.validity.is_valid()
            && self.body.validity.is_valid()
    }

    /// 尝试提交
    ///
    /// 闸门关闭时返回 None，不构造消息，字段保持不变。
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if !self.can_submit() {
            log::debug!("表单未通过校验，忽略提交");
            return None;
        }

        let message = ContactMessage::new(&self.name.value, &self.email.value, &self.body.value);

        // 清空后的正文一定无效
        self.set_value(FieldId::Body, "");

        Some(message)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.status(),
            email: self.email.status(),
            body: self.body.status(),
            can_submit: self.can_submit(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
