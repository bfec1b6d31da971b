//! # 会话消息历史服务
//!
//! 固定容量、按插入顺序排列的消息集合，超出容量时淘汰最早的消息。
//! 历史只存在于进程内存中，随会话结束而销毁，不做持久化。
//!
//! ## 容量不变式
//! 每次追加后立即从队首淘汰，直到 `len <= capacity`。
//! 容量在构造时确定，至少为 1。
//!
//! ## 线程安全
//! 内部使用 `std::sync::Mutex` 包装，追加与淘汰在同一次加锁内完成，
//! 并发的读取不会观察到"已追加未淘汰"的中间状态。
//! Tauri 的 command 可能在不同线程上并发执行，因此所有方法只需 `&self`。
//!
//! 锁中毒时直接取回内部数据继续使用：每个方法在加锁期间都保持不变式，
//! 其他线程的 panic 不应使整个会话的历史不可读。

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::message::ContactMessage;

/// 会话消息历史
pub struct MessageHistory {
    /// 消息队列：队首最早，队尾最新
    messages: Mutex<VecDeque<ContactMessage>>,

    /// 容量上限（至少为 1）
    capacity: usize,
}

impl MessageHistory {
    /// 以指定容量创建空历史，容量小于 1 时按 1 处理
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ContactMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 追加一条消息
    ///
    /// `None` 视为空操作。追加后从队首淘汰最早的消息，直到不超过容量。
    pub fn append(&self, message: Option<ContactMessage>) {
        let Some(message) = message else {
            return;
        };

        let mut messages = self.lock();
        messages.push_back(message);
        while messages.len() > self.capacity {
            messages.pop_front();
        }
        debug_assert!(messages.len() <= self.capacity);
    }

    /// 返回当前所有消息的快照（最早在前）
    ///
    /// 返回的是副本，之后的追加或清空不会影响它。
    pub fn all(&self) -> Vec<ContactMessage> {
        self.lock().iter().cloned().collect()
    }

    /// 最近一次追加的消息；历史为空时返回 None
    pub fn last(&self) -> Option<ContactMessage> {
        self.lock().back().cloned()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// 清空全部历史（不可恢复）
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// 按邮箱筛选（不区分大小写的完全匹配），保持时间顺序
    ///
    /// 查询为 None 时返回空列表。
    pub fn by_email(&self, email: Option<&str>) -> Vec<ContactMessage> {
        let Some(email) = email else {
            return vec![];
        };

        // 逐字符小写后比较，不做完整的 Unicode 大小写折叠
        let needle = email.to_lowercase();
        self.lock()
            .iter()
            .filter(|msg| msg.email().to_lowercase() == needle)
            .cloned()
            .collect()
    }
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new(crate::models::settings::DEFAULT_HISTORY_MAX_SIZE)
    }
}
