//! # 字段校验规则
//!
//! 无状态的纯谓词，对任意输入（包括空字符串）都返回布尔值，不产生副作用。
//!
//! 邮箱校验刻意保持宽松，只拒绝明显畸形的地址：
//! 缺少 `@`、`@` 前为空、域名部分没有 `.` 或 `.` 两侧为空。

use std::sync::LazyLock;

use regex::Regex;

/// 邮箱格式正则：`本地部分@域名.顶级域`，各段均非空且不含空白
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("邮箱正则无效")
});

/// 去除首尾空白后是否非空
pub fn not_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// 是否符合 `local-part@domain.tld` 的邮箱形状
pub fn is_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Ana"));
        assert!(not_blank("  a  "));
        assert!(!not_blank(""));
        assert!(!not_blank(" \t\n "));
    }

    #[test]
    fn test_is_email_accepts_simple_addresses() {
        assert!(is_email("ana@example.com"));
        assert!(is_email("first.last+tag@mail.example.co.uk"));
        assert!(is_email("A@B.com"));
    }

    #[test]
    fn test_is_email_rejects_malformed() {
        // 缺少 @
        assert!(!is_email("ana.example.com"));
        // @ 前为空
        assert!(!is_email("@example.com"));
        // 域名无分隔点
        assert!(!is_email("ana@localhost"));
        // 点两侧为空
        assert!(!is_email("ana@.com"));
        assert!(!is_email("ana@example."));
        assert!(!is_email("ana@example..com"));
        // 多个 @ / 空白
        assert!(!is_email("ana@b@example.com"));
        assert!(!is_email("ana maria@example.com"));
        assert!(!is_email(""));
    }
}
