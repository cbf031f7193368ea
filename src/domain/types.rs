// ==========================================
// 瓦楞纸箱生产运营系统 - 领域类型定义
// ==========================================
// 职责: 工序状态、作业状态、需求等级等核心枚举
// 红线: 状态归一必须全覆盖 (每个输入恰好落入一个状态)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工序粗粒度状态 (Step Status)
// ==========================================
// 由上游运营系统写入, 本系统只读
// 序列化格式: snake_case (与后端 JSON 一致)
// 说明: hold 为历史数据中出现的粗粒度挂起标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Planned, // 已计划未开工
    Start,   // 已开工
    Stop,    // 已完工
    Hold,    // 挂起 (历史记录)
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Planned => write!(f, "planned"),
            StepStatus::Start => write!(f, "start"),
            StepStatus::Stop => write!(f, "stop"),
            StepStatus::Hold => write!(f, "hold"),
        }
    }
}

// ==========================================
// 工序明细状态 (Detail Status)
// ==========================================
// 来自工序专属明细接口, 可覆盖粗粒度状态
// 未知取值归入 Unknown, 分类时按缺失处理 (优雅降级)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailStatus {
    InProgress, // 进行中
    Accept,     // 已验收
    Hold,       // 挂起
    MajorHold,  // 重大挂起
    #[serde(other)]
    Unknown,    // 未识别取值
}

impl fmt::Display for DetailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailStatus::InProgress => write!(f, "in_progress"),
            DetailStatus::Accept => write!(f, "accept"),
            DetailStatus::Hold => write!(f, "hold"),
            DetailStatus::MajorHold => write!(f, "major_hold"),
            DetailStatus::Unknown => write!(f, "unknown"),
        }
    }
}

// ==========================================
// 工序归一结果 (Step Outcome)
// ==========================================
// 粗粒度状态 + 明细状态 归一后的唯一结果
// 序列化格式: SCREAMING_SNAKE_CASE (与看板展示层一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepOutcome {
    Completed,  // 已完工
    InProgress, // 进行中
    OnHold,     // 挂起
    MajorHold,  // 重大挂起
    Planned,    // 已计划
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Completed => write!(f, "COMPLETED"),
            StepOutcome::InProgress => write!(f, "IN_PROGRESS"),
            StepOutcome::OnHold => write!(f, "ON_HOLD"),
            StepOutcome::MajorHold => write!(f, "MAJOR_HOLD"),
            StepOutcome::Planned => write!(f, "PLANNED"),
        }
    }
}

// ==========================================
// 作业状态 (Job Status)
// ==========================================
// 全部工序归一结果折叠后的作业级状态
// 红线: 互斥且全覆盖 (每个作业恰好一个状态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Completed,  // 已完工
    MajorHold,  // 重大挂起
    OnHold,     // 挂起
    InProgress, // 进行中
    Planned,    // 已计划
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Completed => write!(f, "COMPLETED"),
            JobStatus::MajorHold => write!(f, "MAJOR_HOLD"),
            JobStatus::OnHold => write!(f, "ON_HOLD"),
            JobStatus::InProgress => write!(f, "IN_PROGRESS"),
            JobStatus::Planned => write!(f, "PLANNED"),
        }
    }
}

impl JobStatus {
    /// 从字符串解析作业状态 (看板点击穿透过滤用)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "COMPLETED" => Some(JobStatus::Completed),
            "MAJOR_HOLD" => Some(JobStatus::MajorHold),
            "ON_HOLD" => Some(JobStatus::OnHold),
            "IN_PROGRESS" => Some(JobStatus::InProgress),
            "PLANNED" => Some(JobStatus::Planned),
            _ => None,
        }
    }
}

// ==========================================
// 作业需求等级 (Job Demand)
// ==========================================
// 上游分类属性, 本系统透传不计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobDemand {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

impl fmt::Display for JobDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobDemand::Low => write!(f, "low"),
            JobDemand::Medium => write!(f, "medium"),
            JobDemand::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 时间范围预设 (Range Preset)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    Today,   // 当天
    Week,    // 本周 (周一..周日)
    Month,   // 本月
    Quarter, // 本季度
    Year,    // 本年
    Custom,  // 自定义
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangePreset::Today => write!(f, "today"),
            RangePreset::Week => write!(f, "week"),
            RangePreset::Month => write!(f, "month"),
            RangePreset::Quarter => write!(f, "quarter"),
            RangePreset::Year => write!(f, "year"),
            RangePreset::Custom => write!(f, "custom"),
        }
    }
}

impl RangePreset {
    /// 从字符串解析时间范围预设
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "today" => Some(RangePreset::Today),
            "week" => Some(RangePreset::Week),
            "month" => Some(RangePreset::Month),
            "quarter" => Some(RangePreset::Quarter),
            "year" => Some(RangePreset::Year),
            "custom" => Some(RangePreset::Custom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_status_serde_roundtrip() {
        let json = serde_json::to_string(&StepStatus::Stop).unwrap();
        assert_eq!(json, "\"stop\"");
        let back: StepStatus = serde_json::from_str("\"planned\"").unwrap();
        assert_eq!(back, StepStatus::Planned);
    }

    #[test]
    fn test_detail_status_unknown_fallback() {
        // 后端新增的未识别状态不应导致反序列化失败
        let parsed: DetailStatus = serde_json::from_str("\"rework\"").unwrap();
        assert_eq!(parsed, DetailStatus::Unknown);
    }

    #[test]
    fn test_job_status_from_str() {
        assert_eq!(JobStatus::from_str("in_progress"), Some(JobStatus::InProgress));
        assert_eq!(JobStatus::from_str("MAJOR_HOLD"), Some(JobStatus::MajorHold));
        assert_eq!(JobStatus::from_str("nonsense"), None);
    }

    #[test]
    fn test_range_preset_from_str() {
        assert_eq!(RangePreset::from_str("Quarter"), Some(RangePreset::Quarter));
        assert_eq!(RangePreset::from_str(""), None);
    }
}
