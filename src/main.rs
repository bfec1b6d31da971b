//! # Contact Form - Tauri 桌面应用原生入口点
//!
//! Rust 编译器从此处的 `main()` 函数开始执行，随后调用 `app_lib::run()`
//! 完成 Tauri 引擎的初始化与事件循环启动。
//!
//! 核心逻辑位于 `lib.rs` 中，本文件仅负责启动应用。

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

/// 应用程序主入口函数
fn main() {
    app_lib::run();
}
