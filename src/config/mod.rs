// ==========================================
// 瓦楞纸箱生产运营系统 - 配置层
// ==========================================
// 职责: 分类参数配置管理
// 存储: JSON 配置文件 (无文件时使用内置默认)
// ==========================================

pub mod classifier_config_trait;
pub mod config_manager;

// 重导出核心配置管理器
pub use classifier_config_trait::ClassifierConfigReader;
pub use config_manager::{ClassifierConfig, ConfigManager};
