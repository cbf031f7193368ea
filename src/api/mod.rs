// ==========================================
// 瓦楞纸箱生产运营系统 - API 层
// ==========================================
// 职责: 面向看板前端的聚合查询接口
// 红线: 不重写引擎规则, 不发起网络请求
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, DashboardSummary};
pub use error::{ApiError, ApiResult};
