//! # 偏好设置持久化服务
//!
//! 读写 `~/.contact-form/preferences.json`，保存跨会话的用户偏好：
//! 上次的姓名/邮箱、窗口尺寸、是否记住窗口尺寸、历史容量。
//!
//! ## 容错策略
//! - 文件不存在：返回默认偏好
//! - 文件无法读取或 JSON 解析失败：记录警告并返回默认偏好，不阻断启动
//! - 写入失败：返回错误信息，由调用方决定是否记录
//!
//! 每次保存都是"读取 → 修改 → 整体写回"，不同键的更新互不覆盖。
//! 窗口尺寸与提交记录可能在不同任务中同时保存，写回过程由一把异步锁串行化。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::message::ContactMessage;
use crate::models::settings::{Preferences, WindowSize};
use crate::utils::path;

/// 偏好文件名
const PREFERENCES_FILE: &str = "preferences.json";

/// 偏好文件存储
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    /// 偏好文件的绝对路径
    file: PathBuf,

    /// 写回锁：克隆出的 store 共享同一把锁
    write_lock: Arc<Mutex<()>>,
}

impl PreferencesStore {
    /// 使用默认位置 `~/.contact-form/preferences.json`
    ///
    /// # 错误
    /// 无法确定用户主目录时返回错误信息
    pub fn open_default() -> Result<Self, String> {
        let dir = path::get_app_config_path()?;
        Ok(Self::at(dir.join(PREFERENCES_FILE)))
    }

    /// 使用指定的偏好文件路径
    pub fn at(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// 读取偏好
    ///
    /// 任何读取或解析错误都退回默认值，只记录警告。
    pub async fn load(&self) -> Preferences {
        match self.try_load().await {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("{}，使用默认偏好", e);
                Preferences::default()
            }
        }
    }

    async fn try_load(&self) -> Result<Preferences, String> {
        // 文件不存在时返回默认偏好
        if !self.file.exists() {
            return Ok(Preferences::default());
        }

        let content = tokio::fs::read_to_string(&self.file)
            .await
            .map_err(|e| format!("读取偏好文件失败: {}", e))?;

        serde_json::from_str(&content).map_err(|e| format!("解析偏好文件失败: {}", e))
    }

    /// 保存完整偏好
    ///
    /// 偏好目录不存在时自动递归创建。
    ///
    /// # 错误
    /// 目录创建、序列化或文件写入失败时返回错误
    pub async fn save(&self, prefs: &Preferences) -> Result<(), String> {
        if let Some(dir) = self.file.parent() {
            if !dir.exists() {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| format!("创建偏好目录失败: {}", e))?;
            }
        }

        let content = serde_json::to_string_pretty(prefs)
            .map_err(|e| format!("序列化偏好失败: {}", e))?;

        tokio::fs::write(&self.file, content)
            .await
            .map_err(|e| format!("写入偏好文件失败: {}", e))
    }

    /// 读取 → 修改 → 写回，返回写回后的偏好
    pub async fn update(
        &self,
        change: impl FnOnce(&mut Preferences),
    ) -> Result<Preferences, String> {
        let _guard = self.write_lock.lock().await;
        let mut prefs = self.load().await;
        change(&mut prefs);
        self.save(&prefs).await?;
        Ok(prefs)
    }

    /// 记录最近一次提交的姓名和邮箱，用于下次启动时预填
    pub async fn record_submission(&self, message: &ContactMessage) -> Result<(), String> {
        let name = message.name().to_string();
        let email = message.email().to_string();
        self.update(|prefs| {
            prefs.name = name;
            prefs.last_email = email;
        })
        .await
        .map(|_| ())
    }

    pub async fn save_window_size(&self, size: WindowSize) -> Result<(), String> {
        self.update(|prefs| prefs.set_window_size(size))
            .await
            .map(|_| ())
    }

    pub async fn set_remember_window_size(&self, remember: bool) -> Result<Preferences, String> {
        self.update(|prefs| prefs.remember_window_size = remember)
            .await
    }

    /// 写入历史容量（至少 10），下次会话生效
    pub async fn set_history_max_size(&self, max_size: usize) -> Result<Preferences, String> {
        self.update(|prefs| prefs.set_history_max_size(max_size))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{DEFAULT_HISTORY_MAX_SIZE, MIN_HISTORY_MAX_SIZE};

    fn store_in(dir: &tempfile::TempDir) -> PreferencesStore {
        PreferencesStore::at(dir.path().join("nested").join(PREFERENCES_FILE))
    }

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().await, Preferences::default());
    }

    #[tokio::test]
    async fn test_malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join(PREFERENCES_FILE));
        tokio::fs::write(store.path(), "{ not json").await.unwrap();
        assert_eq!(store.load().await, Preferences::default());
    }

    #[tokio::test]
    async fn test_record_submission_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let message = ContactMessage::new("Ana", "ana@example.com", "Hi");

        store.record_submission(&message).await.unwrap();

        let prefs = store.load().await;
        assert_eq!(prefs.name, "Ana");
        assert_eq!(prefs.last_email, "ana@example.com");
        assert_eq!(prefs.history_max_size(), DEFAULT_HISTORY_MAX_SIZE);
    }

    #[tokio::test]
    async fn test_updates_do_not_clobber_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save_window_size(WindowSize {
                width: 800,
                height: 600,
            })
            .await
            .unwrap();
        store.set_history_max_size(5).await.unwrap();
        store.set_remember_window_size(false).await.unwrap();
        store
            .record_submission(&ContactMessage::new("Ana", "ana@example.com", "Hi"))
            .await
            .unwrap();

        let prefs = store.load().await;
        assert_eq!(
            prefs.window_size(),
            WindowSize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(prefs.history_max_size(), MIN_HISTORY_MAX_SIZE);
        assert!(!prefs.remember_window_size);
        assert_eq!(prefs.name, "Ana");
    }

    #[tokio::test]
    async fn test_file_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_history_max_size(30).await.unwrap();

        let content = tokio::fs::read_to_string(store.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["historyMaxSize"], 30);
        assert_eq!(value["rememberWindowSize"], true);
        assert_eq!(value["lastEmail"], "");
    }
}
