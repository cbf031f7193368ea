// ==========================================
// 瓦楞纸箱生产运营系统 - 作业计划领域模型
// ==========================================
// 职责: 作业计划/工序/已完工作业的数据形状
// 红线: 只读快照, 分类器不得回写任何字段
// ==========================================

use crate::domain::step_details::StepDetail;
use crate::domain::types::{JobDemand, StepStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Step - 作业计划内的一道工序
// ==========================================
// 字段命名与后端 JSON 一致 (camelCase)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_no: i32,     // 工序序号 (展示顺序, 别名合并后可能重复)
    pub step_name: String, // 原始工序名 (含历史别名)
    pub status: StepStatus, // 粗粒度状态 (上游系统写入)

    /// 工序明细 (逐工序接口拉取, 拉取失败时为 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_details: Option<StepDetail>,

    /// 机台分配 (对本系统不透明, 透传展示)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub machine_details: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>, // 操作人 (活跃用户统计用)
}

// ==========================================
// JobPlan - 作业计划
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPlan {
    pub nrc_job_no: String,  // 作业号 (外部唯一键)
    pub job_demand: JobDemand, // 需求等级 (透传属性)
    #[serde(default)]
    pub steps: Vec<Step>,    // 工序序列 (展示顺序, 不参与优先级)
    pub created_at: DateTime<Utc>, // 建档时间 (时间序列兜底桶键)
}

// ==========================================
// CompletedJob - 已完工作业
// ==========================================
// 来自独立的已完工作业接口, 权威完工, 本系统不再分类
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedJob {
    pub nrc_job_no: String,
    /// 采购订单日期 (时间序列桶键; 缺失时该记录跳过)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_demand: Option<JobDemand>,
}
