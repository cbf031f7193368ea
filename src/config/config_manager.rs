// ==========================================
// 瓦楞纸箱生产运营系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 存储: JSON 配置文件 (路径由调用方显式传入)
// ==========================================

use crate::config::classifier_config_trait::ClassifierConfigReader;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use std::sync::RwLock;

// ==========================================
// ClassifierConfig - 分类配置全集
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierConfig {
    /// 备注挂起标记 (不区分大小写的子串)
    pub hold_remark_markers: Vec<String>,
    /// 备注重大挂起标记 (不区分大小写的子串)
    pub major_hold_markers: Vec<String>,
    /// 追加工序别名映射 (别名 → 规范名), 只增补静态表
    pub step_alias_overrides: HashMap<String, String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hold_remark_markers: vec!["hold".to_string()],
            major_hold_markers: vec!["major".to_string()],
            step_alias_overrides: HashMap::new(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: RwLock<ClassifierConfig>,
}

impl ConfigManager {
    /// 创建使用默认配置的 ConfigManager
    pub fn new() -> Self {
        Self {
            config: RwLock::new(ClassifierConfig::default()),
        }
    }

    /// 从 JSON 配置文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// 文件不存在时回退到默认配置; 文件存在但解析失败时报错
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "配置文件不存在, 使用默认配置");
            return Ok(Self::new());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&raw)?;
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// 覆盖当前配置
    pub fn overwrite(&self, config: ClassifierConfig) -> Result<(), Box<dyn Error>> {
        let mut guard = self
            .config
            .write()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        *guard = config;
        Ok(())
    }

    /// 将当前配置写入 JSON 配置文件
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let snapshot = self.snapshot()?;
        let raw = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// 获取当前配置快照
    ///
    /// # 用途
    /// - 看板刷新时记录分类参数, 保证同一轮聚合参数一致
    pub fn snapshot(&self) -> Result<ClassifierConfig, Box<dyn Error>> {
        let guard = self
            .config
            .read()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        Ok(guard.clone())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// ClassifierConfigReader 实现
// ==========================================
#[async_trait]
impl ClassifierConfigReader for ConfigManager {
    async fn get_hold_remark_markers(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.snapshot()?.hold_remark_markers)
    }

    async fn get_major_hold_markers(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.snapshot()?.major_hold_markers)
    }

    async fn get_step_alias_overrides(&self) -> Result<HashMap<String, String>, Box<dyn Error>> {
        Ok(self.snapshot()?.step_alias_overrides)
    }
}
