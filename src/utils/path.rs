//! # 路径工具函数
//!
//! 提供与文件路径相关的工具函数：
//! - 获取应用自身配置目录路径（`~/.contact-form/`）

use std::path::PathBuf;

/// 应用配置目录名
const APP_CONFIG_DIR: &str = ".contact-form";

/// 获取应用配置目录的绝对路径
///
/// 使用 `dirs` crate 获取跨平台的主目录路径。
///
/// # 错误
/// 如果无法确定用户主目录（极端情况，如无 HOME 环境变量），返回错误信息。
///
/// # 示例
/// - Windows: `C:\Users\username\.contact-form`
/// - Linux/macOS: `/home/username/.contact-form`
pub fn get_app_config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "无法获取用户主目录".to_string())?;
    Ok(home.join(APP_CONFIG_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path_under_home() {
        // 没有主目录的环境下跳过
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let path = get_app_config_path().unwrap();
        assert_eq!(path, home.join(".contact-form"));
    }
}
