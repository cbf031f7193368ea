// ==========================================
// 瓦楞纸箱生产运营系统 - 时间序列聚合引擎
// ==========================================
// 职责: 按自然日分桶生成看板图表序列
// 红线: 纯计算不改写输入; 输出按日期升序
// ==========================================

use crate::config::ClassifierConfigReader;
use crate::domain::job_plan::{CompletedJob, JobPlan};
use crate::domain::types::{JobStatus, StepOutcome};
use crate::engine::{ClassifierCore, JobClassifyEngine};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;

// ==========================================
// TimelinePoint - 单日聚合点
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub jobs_started: u32,    // 当日建档且折叠为进行中的作业数
    pub jobs_completed: u32,  // 采购订单日期落在当日的已完工作业数
    pub total_steps: u32,     // 当日建档作业的工序总数
    pub completed_steps: u32, // 其中归一为完工的工序数
}

// ==========================================
// TimelineEngine - 时间序列聚合引擎
// ==========================================
pub struct TimelineEngine;

impl TimelineEngine {
    /// 创建新的 TimelineEngine 实例
    pub fn new() -> Self {
        Self
    }

    /// 生成时间序列 (主入口)
    ///
    /// # 参数
    /// - jobs: 作业计划集合 (按 createdAt 自然日分桶)
    /// - completed: 已完工作业集合 (按 poDate 自然日分桶)
    /// - config: 配置读取器
    pub async fn build(
        &self,
        jobs: &[JobPlan],
        completed: &[CompletedJob],
        config: &dyn ClassifierConfigReader,
    ) -> Result<Vec<TimelinePoint>, Box<dyn Error>> {
        let hold_markers = config.get_hold_remark_markers().await?;
        let major_markers = config.get_major_hold_markers().await?;
        Ok(Self::build_with(jobs, completed, &hold_markers, &major_markers))
    }

    /// 生成时间序列 (纯函数版本)
    ///
    /// # 规则
    /// - 作业桶键 = createdAt 的自然日 (无时间分量)
    /// - totalSteps 累加该作业工序数, completedSteps 累加归一为完工的工序数
    /// - 作业折叠状态为 IN_PROGRESS 时 jobsStarted + 1
    /// - 已完工作业桶键 = poDate 的自然日; poDate 缺失时显式跳过该记录
    ///   (错误日期入桶比缺桶更破坏图表)
    /// - 输出按日期升序
    pub fn build_with(
        jobs: &[JobPlan],
        completed: &[CompletedJob],
        hold_markers: &[String],
        major_markers: &[String],
    ) -> Vec<TimelinePoint> {
        let mut buckets: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();

        for job in jobs {
            let date = job.created_at.date_naive();
            let point = buckets.entry(date).or_insert_with(|| TimelinePoint {
                date,
                jobs_started: 0,
                jobs_completed: 0,
                total_steps: 0,
                completed_steps: 0,
            });

            point.total_steps += job.steps.len() as u32;
            point.completed_steps += job
                .steps
                .iter()
                .filter(|step| {
                    ClassifierCore::normalize_step(step, hold_markers, major_markers).0
                        == StepOutcome::Completed
                })
                .count() as u32;

            let (status, _reasons) =
                JobClassifyEngine::classify_with(job, hold_markers, major_markers);
            if status == JobStatus::InProgress {
                point.jobs_started += 1;
            }
        }

        for done in completed {
            let date = match done.po_date {
                Some(po_date) => po_date.date_naive(),
                None => {
                    // 已知数据缺口: 无采购订单日期的完工记录不参与序列
                    tracing::debug!(nrc_job_no = %done.nrc_job_no, "完工作业缺少采购订单日期, 跳过");
                    continue;
                }
            };
            let point = buckets.entry(date).or_insert_with(|| TimelinePoint {
                date,
                jobs_started: 0,
                jobs_completed: 0,
                total_steps: 0,
                completed_steps: 0,
            });
            point.jobs_completed += 1;
        }

        // BTreeMap 迭代序即日期升序
        buckets.into_values().collect()
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new()
    }
}
