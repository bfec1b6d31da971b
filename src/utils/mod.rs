//! # 通用工具模块
//!
//! - `path` - 应用配置目录定位

pub mod path;
