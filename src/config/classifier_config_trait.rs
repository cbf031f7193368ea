// ==========================================
// 瓦楞纸箱生产运营系统 - 分类配置读取 Trait
// ==========================================
// 职责: 定义分类引擎所需的配置读取接口 (不包含实现)
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;

// ==========================================
// ClassifierConfigReader Trait
// ==========================================
// 用途: 分类引擎所需的配置读取接口
// 实现者: ConfigManager (从 JSON 配置文件读取)
#[async_trait]
pub trait ClassifierConfigReader: Send + Sync {
    /// 获取备注挂起标记列表
    ///
    /// # 返回
    /// - Vec<String>: 不区分大小写的子串标记
    ///
    /// # 默认值
    /// - ["hold"]
    async fn get_hold_remark_markers(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 获取备注重大挂起标记列表
    ///
    /// # 返回
    /// - Vec<String>: 不区分大小写的子串标记
    ///
    /// # 默认值
    /// - ["major"]
    async fn get_major_hold_markers(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 获取追加工序别名映射 (别名 → 规范名)
    ///
    /// 只能增补静态别名表, 静态表已覆盖的名称以静态表为准
    ///
    /// # 默认值
    /// - 空映射
    async fn get_step_alias_overrides(&self) -> Result<HashMap<String, String>, Box<dyn Error>>;
}
