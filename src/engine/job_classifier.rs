// ==========================================
// 瓦楞纸箱生产运营系统 - 作业状态派生引擎
// ==========================================
// 职责: 从 JobPlan 派生作业状态, 并对作业集合分桶计数
// 红线: 每个作业只折叠一次, 结果对看板分桶/计数/点击穿透全局权威
// 红线: 不访问 UI, 通过配置读取接口获取分类参数
// ==========================================

use crate::config::ClassifierConfigReader;
use crate::domain::job_plan::JobPlan;
use crate::domain::types::{JobStatus, StepOutcome};
use crate::engine::ClassifierCore;
use serde::Serialize;
use std::error::Error;

// ==========================================
// JobStatusBreakdown - 作业状态分桶结果
// ==========================================
// 互斥且全覆盖: 每个输入作业恰好进入一个桶
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusBreakdown {
    pub total_jobs: u32,

    pub in_progress_count: u32,
    pub planned_count: u32,
    pub on_hold_count: u32,
    pub major_hold_count: u32,
    pub completed_count: u32,

    // 点击穿透数据 (保持输入顺序)
    pub in_progress_jobs: Vec<JobPlan>,
    pub planned_jobs: Vec<JobPlan>,
    pub on_hold_jobs: Vec<JobPlan>,
    pub major_hold_jobs: Vec<JobPlan>,
    pub completed_jobs: Vec<JobPlan>,
}

impl JobStatusBreakdown {
    /// 按状态取点击穿透数据
    pub fn jobs_for(&self, status: JobStatus) -> &[JobPlan] {
        match status {
            JobStatus::InProgress => &self.in_progress_jobs,
            JobStatus::Planned => &self.planned_jobs,
            JobStatus::OnHold => &self.on_hold_jobs,
            JobStatus::MajorHold => &self.major_hold_jobs,
            JobStatus::Completed => &self.completed_jobs,
        }
    }
}

// ==========================================
// JobClassifyEngine - 作业状态派生引擎
// ==========================================
pub struct JobClassifyEngine;

impl JobClassifyEngine {
    /// 创建新的 JobClassifyEngine 实例
    pub fn new() -> Self {
        Self
    }

    /// 派生单个作业的状态 (主入口)
    ///
    /// # 参数
    /// - job: 作业计划
    /// - config: 配置读取器
    ///
    /// # 返回
    /// - (JobStatus, Vec<String>): 作业状态 + 决策原因
    pub async fn classify(
        &self,
        job: &JobPlan,
        config: &dyn ClassifierConfigReader,
    ) -> Result<(JobStatus, Vec<String>), Box<dyn Error>> {
        let hold_markers = config.get_hold_remark_markers().await?;
        let major_markers = config.get_major_hold_markers().await?;
        Ok(Self::classify_with(job, &hold_markers, &major_markers))
    }

    /// 派生单个作业的状态 (纯函数版本)
    pub fn classify_with(
        job: &JobPlan,
        hold_markers: &[String],
        major_markers: &[String],
    ) -> (JobStatus, Vec<String>) {
        let outcomes: Vec<StepOutcome> = job
            .steps
            .iter()
            .map(|step| ClassifierCore::normalize_step(step, hold_markers, major_markers).0)
            .collect();

        let (status, reasons) = ClassifierCore::reduce_job(&outcomes);

        if status == JobStatus::Completed {
            // 完工作业应当由独立的已完工接口下发; 走到这里是数据一致性信号
            tracing::warn!(
                nrc_job_no = %job.nrc_job_no,
                "作业计划全工序完工但未进入已完工接口"
            );
        }

        (status, reasons)
    }

    /// 对作业集合分桶 (看板聚合入口)
    ///
    /// # 参数
    /// - jobs: 作业计划集合 (同一快照)
    /// - config: 配置读取器
    ///
    /// # 返回
    /// - JobStatusBreakdown: 互斥分桶 + 计数
    pub async fn breakdown(
        &self,
        jobs: &[JobPlan],
        config: &dyn ClassifierConfigReader,
    ) -> Result<JobStatusBreakdown, Box<dyn Error>> {
        let hold_markers = config.get_hold_remark_markers().await?;
        let major_markers = config.get_major_hold_markers().await?;
        Ok(Self::breakdown_with(jobs, &hold_markers, &major_markers))
    }

    /// 对作业集合分桶 (纯函数版本)
    pub fn breakdown_with(
        jobs: &[JobPlan],
        hold_markers: &[String],
        major_markers: &[String],
    ) -> JobStatusBreakdown {
        let mut result = JobStatusBreakdown {
            total_jobs: jobs.len() as u32,
            ..Default::default()
        };

        for job in jobs {
            let (status, _reasons) = Self::classify_with(job, hold_markers, major_markers);
            match status {
                JobStatus::InProgress => {
                    result.in_progress_count += 1;
                    result.in_progress_jobs.push(job.clone());
                }
                JobStatus::Planned => {
                    result.planned_count += 1;
                    result.planned_jobs.push(job.clone());
                }
                JobStatus::OnHold => {
                    result.on_hold_count += 1;
                    result.on_hold_jobs.push(job.clone());
                }
                JobStatus::MajorHold => {
                    result.major_hold_count += 1;
                    result.major_hold_jobs.push(job.clone());
                }
                JobStatus::Completed => {
                    result.completed_count += 1;
                    result.completed_jobs.push(job.clone());
                }
            }
        }

        result
    }
}

impl Default for JobClassifyEngine {
    fn default() -> Self {
        Self::new()
    }
}
