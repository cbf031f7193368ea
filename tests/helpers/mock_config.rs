// ==========================================
// Mock 配置读取器 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use corrugated_ops::config::ClassifierConfigReader;
use std::collections::HashMap;
use std::error::Error;

/// 可定制标记的 Mock 配置读取器
pub struct MockConfigReader {
    pub hold_markers: Vec<String>,
    pub major_markers: Vec<String>,
    pub alias_overrides: HashMap<String, String>,
}

impl MockConfigReader {
    pub fn new() -> Self {
        Self {
            hold_markers: vec!["hold".to_string()],
            major_markers: vec!["major".to_string()],
            alias_overrides: HashMap::new(),
        }
    }

    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.alias_overrides
            .insert(alias.to_string(), canonical.to_string());
        self
    }
}

impl Default for MockConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassifierConfigReader for MockConfigReader {
    async fn get_hold_remark_markers(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.hold_markers.clone())
    }

    async fn get_major_hold_markers(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.major_markers.clone())
    }

    async fn get_step_alias_overrides(&self) -> Result<HashMap<String, String>, Box<dyn Error>> {
        Ok(self.alias_overrides.clone())
    }
}
