// ==========================================
// 瓦楞纸箱生产运营系统 - 工序完成度聚合引擎
// ==========================================
// 职责: 按规范工序键统计作业集合的完成度分布
// 红线: 幂等且与输入顺序无关 (计数恒等, 穿透列表保持输入顺序)
// 红线: 词表外工序按需建桶, 不丢弃
// ==========================================

use crate::config::ClassifierConfigReader;
use crate::domain::job_plan::{JobPlan, Step};
use crate::domain::step_name::{CanonicalStep, FIXED_VOCABULARY};
use crate::domain::types::StepOutcome;
use crate::engine::ClassifierCore;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::error::Error;

// ==========================================
// StepBucketTally - 单工序键的完成度分布
// ==========================================
// 挂起类归一结果 (ON_HOLD / MAJOR_HOLD) 合并入 onHold 桶,
// 保证每道参与统计的工序恰好进入一个桶 (全覆盖)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepBucketTally {
    pub completed: u32,
    pub in_progress: u32,
    pub planned: u32,
    pub on_hold: u32,

    // 点击穿透数据 (保持输入顺序)
    pub completed_data: Vec<JobPlan>,
    pub in_progress_data: Vec<JobPlan>,
    pub planned_data: Vec<JobPlan>,
    pub on_hold_data: Vec<JobPlan>,
}

// ==========================================
// StepTallyReport - 聚合报告
// ==========================================
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTallyReport {
    /// 规范工序键 → 完成度分布 (BTreeMap 保证确定性顺序)
    pub steps: BTreeMap<String, StepBucketTally>,
    /// 全部作业全部工序出现过的操作人集合
    pub active_users: BTreeSet<String>,
}

impl StepTallyReport {
    /// 活跃用户数
    pub fn active_user_count(&self) -> usize {
        self.active_users.len()
    }
}

// ==========================================
// StepTallyEngine - 工序完成度聚合引擎
// ==========================================
pub struct StepTallyEngine;

impl StepTallyEngine {
    /// 创建新的 StepTallyEngine 实例
    pub fn new() -> Self {
        Self
    }

    /// 聚合作业集合的工序完成度 (主入口)
    pub async fn build(
        &self,
        jobs: &[JobPlan],
        config: &dyn ClassifierConfigReader,
    ) -> Result<StepTallyReport, Box<dyn Error>> {
        let hold_markers = config.get_hold_remark_markers().await?;
        let major_markers = config.get_major_hold_markers().await?;
        let alias_overrides = config.get_step_alias_overrides().await?;
        Ok(Self::build_with(
            jobs,
            &hold_markers,
            &major_markers,
            &alias_overrides,
        ))
    }

    /// 聚合作业集合的工序完成度 (纯函数版本)
    ///
    /// # 规则
    /// - 固定工序词表的每个键预置零计数桶
    /// - 每个作业对每个规范键最多贡献一道工序 (别名合并后取首个命中)
    /// - 词表外工序按需建桶
    /// - 操作人集合跨全部作业全部工序收集
    pub fn build_with(
        jobs: &[JobPlan],
        hold_markers: &[String],
        major_markers: &[String],
        alias_overrides: &HashMap<String, String>,
    ) -> StepTallyReport {
        let mut report = StepTallyReport::default();

        // 词表预置零计数桶
        for canonical in FIXED_VOCABULARY {
            report
                .steps
                .insert(canonical.name().to_string(), StepBucketTally::default());
        }

        for job in jobs {
            // 操作人收集覆盖该作业的全部工序
            for step in &job.steps {
                if let Some(user) = &step.user {
                    if !user.trim().is_empty() {
                        report.active_users.insert(user.clone());
                    }
                }
            }

            // 别名合并: 每个规范键取首个命中的工序
            let mut per_key: Vec<(CanonicalStep, &Step)> = Vec::new();
            for step in &job.steps {
                let key = CanonicalStep::from_raw_with_overrides(&step.step_name, alias_overrides);
                if !per_key.iter().any(|(existing, _)| *existing == key) {
                    per_key.push((key, step));
                }
            }

            for (key, step) in per_key {
                let (outcome, _reasons) =
                    ClassifierCore::normalize_step(step, hold_markers, major_markers);
                let bucket = report.steps.entry(key.name().to_string()).or_default();
                match outcome {
                    StepOutcome::Completed => {
                        bucket.completed += 1;
                        bucket.completed_data.push(job.clone());
                    }
                    StepOutcome::InProgress => {
                        bucket.in_progress += 1;
                        bucket.in_progress_data.push(job.clone());
                    }
                    StepOutcome::Planned => {
                        bucket.planned += 1;
                        bucket.planned_data.push(job.clone());
                    }
                    StepOutcome::OnHold | StepOutcome::MajorHold => {
                        bucket.on_hold += 1;
                        bucket.on_hold_data.push(job.clone());
                    }
                }
            }
        }

        report
    }
}

impl Default for StepTallyEngine {
    fn default() -> Self {
        Self::new()
    }
}
