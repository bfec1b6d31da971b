//! # Contact Form - Cargo 构建脚本
//!
//! 启用 `desktop` feature 时，由 Tauri 完成构建准备工作：
//! - 生成 Tauri 运行时所需的资源绑定代码
//! - 处理应用图标、权限清单等静态资源
//!
//! 未启用 `desktop` 时（仅构建核心库与测试），此脚本不做任何事情。

/// 构建脚本入口函数
///
/// 调用 `tauri_build::build()` 执行 Tauri 框架所需的全部构建前处理步骤，
/// 该函数会根据 `tauri.conf.json` 中的配置自动生成相应的编译产物。
fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build()
}
