// ==========================================
// 瓦楞纸箱生产运营系统 - 数据快照接入层
// ==========================================
// 职责: 定义上游 REST 数据源的快照接口
// 红线: 本系统不发起 HTTP 请求; 快照由外围应用拉取后注入
// ==========================================

use crate::domain::job_plan::{CompletedJob, JobPlan};
use async_trait::async_trait;
use thiserror::Error;

// ==========================================
// FeedError - 快照接入错误
// ==========================================
#[derive(Error, Debug)]
pub enum FeedError {
    /// 上游数据源不可用 (网络/认证问题由外围应用转述)
    #[error("数据源不可用: {0}")]
    Unavailable(String),

    /// 快照解析失败
    #[error("快照解析失败: {0}")]
    Decode(String),
}

// ==========================================
// SnapshotFeed Trait
// ==========================================
// 用途: 看板 API 所需的数据快照读取接口
// 实现者: 外围应用 (REST 拉取) 或 StaticSnapshotFeed (已就绪快照)
#[async_trait]
pub trait SnapshotFeed: Send + Sync {
    /// 拉取作业计划全量快照
    async fn fetch_job_plans(&self) -> Result<Vec<JobPlan>, FeedError>;

    /// 拉取已完工作业全量快照
    async fn fetch_completed_jobs(&self) -> Result<Vec<CompletedJob>, FeedError>;
}

// ==========================================
// StaticSnapshotFeed - 内存快照实现
// ==========================================
// 用途: 外围应用已完成拉取时直接注入; 集成测试数据源
pub struct StaticSnapshotFeed {
    job_plans: Vec<JobPlan>,
    completed_jobs: Vec<CompletedJob>,
}

impl StaticSnapshotFeed {
    /// 从就绪数据创建快照源
    pub fn new(job_plans: Vec<JobPlan>, completed_jobs: Vec<CompletedJob>) -> Self {
        Self {
            job_plans,
            completed_jobs,
        }
    }

    /// 从后端 JSON 响应体创建快照源
    ///
    /// # 参数
    /// - job_plans_json: 作业计划接口响应 (JSON 数组)
    /// - completed_jobs_json: 已完工作业接口响应 (JSON 数组)
    pub fn from_json(job_plans_json: &str, completed_jobs_json: &str) -> Result<Self, FeedError> {
        let job_plans: Vec<JobPlan> = serde_json::from_str(job_plans_json)
            .map_err(|e| FeedError::Decode(format!("作业计划: {}", e)))?;
        let completed_jobs: Vec<CompletedJob> = serde_json::from_str(completed_jobs_json)
            .map_err(|e| FeedError::Decode(format!("已完工作业: {}", e)))?;
        Ok(Self::new(job_plans, completed_jobs))
    }
}

#[async_trait]
impl SnapshotFeed for StaticSnapshotFeed {
    async fn fetch_job_plans(&self) -> Result<Vec<JobPlan>, FeedError> {
        Ok(self.job_plans.clone())
    }

    async fn fetch_completed_jobs(&self) -> Result<Vec<CompletedJob>, FeedError> {
        Ok(self.completed_jobs.clone())
    }
}
