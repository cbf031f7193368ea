// ==========================================
// 瓦楞纸箱生产运营系统 - 作业状态分类核心库
// ==========================================
// 定位: 看板前端消费的只读分类/聚合核心
// 数据流: REST 快照 (外围拉取) → 引擎折叠/聚合 → 看板 DTO
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 快照接入层 - 外部数据
pub mod feed;

// 配置层 - 分类参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 看板接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    DetailStatus, JobDemand, JobStatus, RangePreset, StepOutcome, StepStatus,
};

// 领域实体
pub use domain::{CanonicalStep, CompletedJob, JobPlan, Step, StepDetail, FIXED_VOCABULARY};

// 引擎
pub use engine::{
    ClassifierCore, DateRange, DateRangeCore, JobClassifyEngine, JobStatusBreakdown,
    StepBucketTally, StepTallyEngine, StepTallyReport, TimelineEngine, TimelinePoint,
};

// 快照接入
pub use feed::{FeedError, SnapshotFeed, StaticSnapshotFeed};

// 配置
pub use config::{ClassifierConfig, ClassifierConfigReader, ConfigManager};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardSummary};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "瓦楞纸箱生产运营系统";

// ==========================================
// 预编译检查
// ==========================================
