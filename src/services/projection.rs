//! # 历史表格投影
//!
//! 将 `MessageHistory` 转换为只读的表格行列表，供 History 视图直接渲染：
//! - 倒序：第 0 行是最近一次追加的消息
//! - 时间格式化为 `日/月/年 时:分`
//! - 正文超过 50 个字符时截断为前 47 个字符并追加 "..."
//!
//! 投影每次都从历史快照重新计算，不做缓存。

use crate::models::display::{HistoryRow, HistoryTable};
use crate::models::message::ContactMessage;
use crate::services::history::MessageHistory;

/// 表格时间列的格式
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// 正文预览的最大字符数（含截断标记）
const PREVIEW_MAX_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// 正文预览
///
/// 按字符（而非字节）计数，避免在多字节字符中间截断。
pub fn preview(body: &str) -> String {
    if body.chars().count() <= PREVIEW_MAX_CHARS {
        return body.to_string();
    }
    let keep = PREVIEW_MAX_CHARS - ELLIPSIS.len();
    let mut truncated: String = body.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn row(message: &ContactMessage) -> HistoryRow {
    HistoryRow {
        name: message.name().to_string(),
        email: message.email().to_string(),
        created_at: message.created_at().format(TIMESTAMP_FORMAT).to_string(),
        preview: preview(message.body()),
    }
}

/// 从历史快照计算表格投影
///
/// `revision` 由调用方提供，作为前端的变更通知。
pub fn project(history: &MessageHistory, revision: u64) -> HistoryTable {
    let rows: Vec<HistoryRow> = history.all().iter().rev().map(row).collect();
    HistoryTable {
        count: rows.len(),
        rows,
        revision,
    }
}
