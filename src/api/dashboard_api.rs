// ==========================================
// 瓦楞纸箱生产运营系统 - 看板 API
// ==========================================
// 职责: 封装分类/聚合引擎, 提供看板聚合查询与点击穿透过滤
// 架构: API 层 → 引擎层 (ClassifierCore/各聚合引擎) → 快照接入层
// 红线: 作业状态只折叠一次, 各查询共享同一折叠结果
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ClassifierConfigReader;
use crate::domain::job_plan::JobPlan;
use crate::domain::types::{JobStatus, RangePreset};
use crate::engine::{
    DateRange, DateRangeCore, JobClassifyEngine, JobStatusBreakdown, StepTallyEngine,
    StepTallyReport, TimelineEngine, TimelinePoint,
};
use crate::feed::SnapshotFeed;

// ==========================================
// DashboardSummary - 看板总览 DTO
// ==========================================
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub range: DateRange,
    pub breakdown: JobStatusBreakdown,
    pub step_tally: StepTallyReport,
    pub timeline: Vec<TimelinePoint>,
    /// 已完工接口下发的作业数 (权威完工, 不参与折叠)
    pub completed_job_count: u32,
    pub active_user_count: u32,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 职责:
/// 1. 作业状态分桶查询与点击穿透过滤
/// 2. 工序完成度聚合查询
/// 3. 时间序列查询
/// 4. 时间范围解析
///
/// 架构说明:
/// - 数据经快照接入层注入, 本层不发起网络请求
/// - 全部状态判定委托引擎层, 不在此重写规则
pub struct DashboardApi {
    /// 数据快照源 (外围应用注入)
    feed: Arc<dyn SnapshotFeed>,
    /// 分类配置读取器
    config: Arc<dyn ClassifierConfigReader>,
    classify_engine: JobClassifyEngine,
    tally_engine: StepTallyEngine,
    timeline_engine: TimelineEngine,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - feed: 数据快照源
    /// - config: 分类配置读取器
    pub fn new(feed: Arc<dyn SnapshotFeed>, config: Arc<dyn ClassifierConfigReader>) -> Self {
        Self {
            feed,
            config,
            classify_engine: JobClassifyEngine::new(),
            tally_engine: StepTallyEngine::new(),
            timeline_engine: TimelineEngine::new(),
        }
    }

    // ==========================================
    // 时间范围解析
    // ==========================================

    /// 解析时间范围 (带输入校验)
    ///
    /// # 参数
    /// - preset: 预设名
    /// - custom: 自定义范围 (仅 custom 预设使用)
    /// - today: 当前日期 (由调用方传入, 本层不取时钟)
    ///
    /// # 返回
    /// - Ok(DateRange): 闭区间日期范围
    /// - Err(ApiError): 自定义范围起止颠倒时报错
    pub fn resolve_range(
        &self,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<DateRange> {
        if preset == RangePreset::Custom {
            if let Some(range) = custom {
                if range.start > range.end {
                    return Err(ApiError::InvalidInput(
                        "自定义时间范围起始日期不能晚于结束日期".to_string(),
                    ));
                }
            }
        }
        Ok(DateRangeCore::resolve(preset, custom, today))
    }

    // ==========================================
    // 作业状态查询
    // ==========================================

    /// 查询作业状态分桶 (计数 + 点击穿透数据)
    pub async fn get_job_status_breakdown(
        &self,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<JobStatusBreakdown> {
        let range = self.resolve_range(preset, custom, today)?;
        let jobs = self.feed.fetch_job_plans().await?;
        let scoped = DateRangeCore::filter_jobs(&range, &jobs);

        self.classify_engine
            .breakdown(&scoped, self.config.as_ref())
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// 点击穿透过滤: 按作业状态列出作业
    pub async fn list_jobs_by_status(
        &self,
        status: JobStatus,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<Vec<JobPlan>> {
        let breakdown = self.get_job_status_breakdown(preset, custom, today).await?;
        Ok(breakdown.jobs_for(status).to_vec())
    }

    /// 点击穿透过滤 (字符串状态版本, 供前端路由参数直接调用)
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 未知状态值
    pub async fn list_jobs_by_status_str(
        &self,
        status: &str,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<Vec<JobPlan>> {
        let parsed = JobStatus::from_str(status)
            .ok_or_else(|| ApiError::InvalidInput(format!("未知的作业状态: {}", status)))?;
        self.list_jobs_by_status(parsed, preset, custom, today).await
    }

    // ==========================================
    // 工序完成度查询
    // ==========================================

    /// 查询工序完成度聚合报告
    pub async fn get_step_tally(
        &self,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<StepTallyReport> {
        let range = self.resolve_range(preset, custom, today)?;
        let jobs = self.feed.fetch_job_plans().await?;
        let scoped = DateRangeCore::filter_jobs(&range, &jobs);

        self.tally_engine
            .build(&scoped, self.config.as_ref())
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    // ==========================================
    // 时间序列查询
    // ==========================================

    /// 查询时间序列 (图表数据)
    pub async fn get_timeline(
        &self,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<Vec<TimelinePoint>> {
        let range = self.resolve_range(preset, custom, today)?;
        let jobs = self.feed.fetch_job_plans().await?;
        let completed = self.feed.fetch_completed_jobs().await?;

        let scoped_jobs = DateRangeCore::filter_jobs(&range, &jobs);
        // poDate 缺失的记录透传给引擎显式跳过 (保留跳过日志)
        let scoped_completed: Vec<_> = completed
            .into_iter()
            .filter(|c| match c.po_date {
                Some(po_date) => DateRangeCore::contains_datetime(&range, po_date),
                None => true,
            })
            .collect();

        self.timeline_engine
            .build(&scoped_jobs, &scoped_completed, self.config.as_ref())
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    // ==========================================
    // 聚合接口
    // ==========================================

    /// 看板总览 (一次快照, 多视图共享同一折叠结果)
    pub async fn get_dashboard_summary(
        &self,
        preset: RangePreset,
        custom: Option<DateRange>,
        today: NaiveDate,
    ) -> ApiResult<DashboardSummary> {
        let range = self.resolve_range(preset, custom, today)?;
        let jobs = self.feed.fetch_job_plans().await?;
        let completed = self.feed.fetch_completed_jobs().await?;

        let scoped_jobs = DateRangeCore::filter_jobs(&range, &jobs);
        let scoped_completed: Vec<_> = completed
            .into_iter()
            .filter(|c| match c.po_date {
                Some(po_date) => DateRangeCore::contains_datetime(&range, po_date),
                None => true,
            })
            .collect();

        let breakdown = self
            .classify_engine
            .breakdown(&scoped_jobs, self.config.as_ref())
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        let step_tally = self
            .tally_engine
            .build(&scoped_jobs, self.config.as_ref())
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        let timeline = self
            .timeline_engine
            .build(&scoped_jobs, &scoped_completed, self.config.as_ref())
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;

        let completed_job_count = scoped_completed
            .iter()
            .filter(|c| c.po_date.is_some())
            .count() as u32;
        let active_user_count = step_tally.active_user_count() as u32;

        Ok(DashboardSummary {
            range,
            breakdown,
            step_tally,
            timeline,
            completed_job_count,
            active_user_count,
        })
    }
}
