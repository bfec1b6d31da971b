//! # 偏好设置数据模型
//!
//! 定义了跨会话持久化的用户偏好（Preferences）和窗口尺寸（WindowSize），
//! 对应前端 TypeScript 中的 `Preferences` 接口。
//!
//! 偏好文件是一个扁平的键值 JSON 对象（`~/.contact-form/preferences.json`），
//! 缺失的键一律取默认值。数值型偏好在读取时按下限钳制：
//! - 历史容量至少 10 条，默认 50 条
//! - 窗口尺寸至少 400 × 300，默认 560 × 440

use serde::{Deserialize, Serialize};

/// 历史容量默认值
pub const DEFAULT_HISTORY_MAX_SIZE: usize = 50;

/// 历史容量下限
pub const MIN_HISTORY_MAX_SIZE: usize = 10;

/// 默认窗口宽度（逻辑像素）
pub const DEFAULT_WINDOW_WIDTH: u32 = 560;

/// 默认窗口高度（逻辑像素）
pub const DEFAULT_WINDOW_HEIGHT: u32 = 440;

/// 窗口宽度下限
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// 窗口高度下限
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// 用户偏好数据结构
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Preferences {
///   name: string;
///   lastEmail: string;
///   rememberWindowSize: boolean;
///   windowWidth: number;
///   windowHeight: number;
///   historyMaxSize: number;
/// }
/// ```
///
/// 字段保持原样存储，钳制只在访问器中进行，
/// 这样手工编辑过的偏好文件在读写往返后不会被悄悄改写。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// 上一次提交使用的姓名，用于预填表单
    pub name: String,

    /// 上一次提交使用的邮箱，用于预填表单
    pub last_email: String,

    /// 是否记住窗口尺寸
    pub remember_window_size: bool,

    /// 上次保存的窗口宽度
    pub window_width: u32,

    /// 上次保存的窗口高度
    pub window_height: u32,

    /// 会话内历史记录的最大条数
    pub history_max_size: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            name: String::new(),
            last_email: String::new(),
            remember_window_size: true,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            history_max_size: DEFAULT_HISTORY_MAX_SIZE,
        }
    }
}

impl Preferences {
    /// 钳制后的历史容量（至少 `MIN_HISTORY_MAX_SIZE`）
    pub fn history_max_size(&self) -> usize {
        self.history_max_size.max(MIN_HISTORY_MAX_SIZE)
    }

    /// 钳制后的窗口尺寸（至少 `MIN_WINDOW_WIDTH` × `MIN_WINDOW_HEIGHT`）
    pub fn window_size(&self) -> WindowSize {
        WindowSize {
            width: self.window_width,
            height: self.window_height,
        }
        .clamped()
    }

    /// 写入历史容量，写入前同样按下限钳制
    pub fn set_history_max_size(&mut self, max_size: usize) {
        self.history_max_size = max_size.max(MIN_HISTORY_MAX_SIZE);
    }

    pub fn set_window_size(&mut self, size: WindowSize) {
        self.window_width = size.width;
        self.window_height = size.height;
    }
}

/// 窗口尺寸（逻辑像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(prefs.name, "Ana");
        assert_eq!(prefs.last_email, "");
        assert!(prefs.remember_window_size);
        assert_eq!(prefs.history_max_size(), DEFAULT_HISTORY_MAX_SIZE);
        assert_eq!(
            prefs.window_size(),
            WindowSize {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT
            }
        );
    }

    #[test]
    fn test_history_max_size_clamped_to_minimum() {
        let prefs: Preferences = serde_json::from_str(r#"{"historyMaxSize":3}"#).unwrap();
        assert_eq!(prefs.history_max_size(), MIN_HISTORY_MAX_SIZE);

        let mut prefs = Preferences::default();
        prefs.set_history_max_size(0);
        assert_eq!(prefs.history_max_size, MIN_HISTORY_MAX_SIZE);
        prefs.set_history_max_size(120);
        assert_eq!(prefs.history_max_size(), 120);
    }

    #[test]
    fn test_window_size_clamped_to_minimum() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"windowWidth":100,"windowHeight":900}"#).unwrap();
        assert_eq!(
            prefs.window_size(),
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: 900
            }
        );
    }
}
