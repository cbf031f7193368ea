// ==========================================
// 瓦楞纸箱生产运营系统 - 状态归一纯函数库
// ==========================================
// 职责: 工序状态归一 + 作业状态折叠的唯一实现
// 红线: 无状态、无副作用、无 I/O; 所有规则必须输出 reason
// 红线: 任何调用点不得自行重写本规则 (历史缺陷即各视图各写一套)
// ==========================================

use crate::domain::job_plan::Step;
use crate::domain::types::{DetailStatus, JobStatus, StepOutcome, StepStatus};

// ==========================================
// ClassifierCore - 纯函数工具类
// ==========================================
pub struct ClassifierCore;

impl ClassifierCore {
    /// 工序状态归一 (主入口)
    ///
    /// # 规则 (优先级从高到低)
    /// 1. 明细状态 = major_hold, 或备注同时命中重大标记与挂起标记 → MAJOR_HOLD
    /// 2. 明细状态 = hold, 或粗粒度状态携带挂起 → ON_HOLD
    /// 3. 粗粒度状态 = stop, 或明细状态 = accept → COMPLETED
    /// 4. 粗粒度状态 = start, 或明细状态 = in_progress → IN_PROGRESS
    /// 5. 其他 → PLANNED
    ///
    /// 明细缺失 (拉取失败/接口无数据) 时仅凭粗粒度状态归一 (优雅降级)
    ///
    /// # 参数
    /// - step: 工序
    /// - hold_markers: 备注挂起标记 (不区分大小写的子串)
    /// - major_markers: 备注重大标记 (不区分大小写的子串)
    ///
    /// # 返回
    /// - (StepOutcome, Vec<String>): 归一结果 + 决策原因
    pub fn normalize_step(
        step: &Step,
        hold_markers: &[String],
        major_markers: &[String],
    ) -> (StepOutcome, Vec<String>) {
        let mut reasons = Vec::new();

        let detail_status = step.step_details.as_ref().and_then(|d| d.status());
        let remarks = step.step_details.as_ref().and_then(|d| d.remarks());

        // 规则 1: 重大挂起
        if detail_status == Some(DetailStatus::MajorHold) {
            reasons.push("MAJOR_HOLD: detail status".to_string());
            return (StepOutcome::MajorHold, reasons);
        }
        if let Some(text) = remarks {
            let major_hit = Self::match_marker(text, major_markers);
            let hold_hit = detail_status == Some(DetailStatus::Hold)
                || Self::match_marker(text, hold_markers);
            if major_hit && hold_hit {
                reasons.push(format!("MAJOR_HOLD: remark marker ({})", text.trim()));
                return (StepOutcome::MajorHold, reasons);
            }
        }

        // 规则 2: 挂起
        if detail_status == Some(DetailStatus::Hold) {
            reasons.push("ON_HOLD: detail status".to_string());
            return (StepOutcome::OnHold, reasons);
        }
        if step.status == StepStatus::Hold {
            reasons.push("ON_HOLD: coarse status".to_string());
            return (StepOutcome::OnHold, reasons);
        }

        // 规则 3: 完工
        if step.status == StepStatus::Stop {
            reasons.push("COMPLETED: coarse status stop".to_string());
            return (StepOutcome::Completed, reasons);
        }
        if detail_status == Some(DetailStatus::Accept) {
            reasons.push("COMPLETED: detail status accept".to_string());
            return (StepOutcome::Completed, reasons);
        }

        // 规则 4: 进行中
        if step.status == StepStatus::Start {
            reasons.push("IN_PROGRESS: coarse status start".to_string());
            return (StepOutcome::InProgress, reasons);
        }
        if detail_status == Some(DetailStatus::InProgress) {
            reasons.push("IN_PROGRESS: detail status".to_string());
            return (StepOutcome::InProgress, reasons);
        }

        // 规则 5: 默认已计划
        reasons.push("PLANNED: no activity".to_string());
        (StepOutcome::Planned, reasons)
    }

    /// 作业状态折叠
    ///
    /// # 规则 (优先级折叠, 非多数表决)
    /// 1. 任一工序 MAJOR_HOLD → 作业 MAJOR_HOLD
    /// 2. 否则任一工序 ON_HOLD → 作业 ON_HOLD
    /// 3. 否则任一工序 IN_PROGRESS → 作业 IN_PROGRESS
    /// 4. 否则全部工序 COMPLETED → 作业 COMPLETED
    ///    (正常路径下完工作业由独立接口下发, 走到此分支属数据一致性信号)
    /// 5. 其他 → PLANNED (含: 无工序开工, 或完工+计划混合且无进行中无挂起)
    ///
    /// 零工序作业按定义为 PLANNED (无活动不等于有进度)
    ///
    /// # 返回
    /// - (JobStatus, Vec<String>): 作业状态 + 决策原因
    pub fn reduce_job(outcomes: &[StepOutcome]) -> (JobStatus, Vec<String>) {
        let mut reasons = Vec::new();

        if outcomes.is_empty() {
            reasons.push("PLANNED: no steps".to_string());
            return (JobStatus::Planned, reasons);
        }

        let major_hold = outcomes.iter().filter(|o| **o == StepOutcome::MajorHold).count();
        if major_hold > 0 {
            reasons.push(format!("MAJOR_HOLD: {} step(s)", major_hold));
            return (JobStatus::MajorHold, reasons);
        }

        let on_hold = outcomes.iter().filter(|o| **o == StepOutcome::OnHold).count();
        if on_hold > 0 {
            reasons.push(format!("ON_HOLD: {} step(s)", on_hold));
            return (JobStatus::OnHold, reasons);
        }

        let in_progress = outcomes.iter().filter(|o| **o == StepOutcome::InProgress).count();
        if in_progress > 0 {
            reasons.push(format!("IN_PROGRESS: {} step(s)", in_progress));
            return (JobStatus::InProgress, reasons);
        }

        if outcomes.iter().all(|o| *o == StepOutcome::Completed) {
            reasons.push(format!("COMPLETED: all {} step(s)", outcomes.len()));
            return (JobStatus::Completed, reasons);
        }

        reasons.push("PLANNED: no active or held steps".to_string());
        (JobStatus::Planned, reasons)
    }

    /// 备注标记匹配 (不区分大小写的子串命中)
    fn match_marker(text: &str, markers: &[String]) -> bool {
        let lowered = text.to_lowercase();
        markers
            .iter()
            .any(|m| !m.is_empty() && lowered.contains(&m.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::step_details::{QualityDetail, StepDetail};

    fn markers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn bare_step(status: StepStatus) -> Step {
        Step {
            step_no: 1,
            step_name: "Corrugation".to_string(),
            status,
            step_details: None,
            machine_details: Vec::new(),
            start_date: None,
            end_date: None,
            user: None,
        }
    }

    fn step_with_detail(status: StepStatus, detail: Option<DetailStatus>, remarks: Option<&str>) -> Step {
        let mut step = bare_step(status);
        step.step_details = Some(StepDetail::QualityDept(QualityDetail {
            status: detail,
            remarks: remarks.map(|r| r.to_string()),
            ..Default::default()
        }));
        step
    }

    #[test]
    fn test_coarse_status_only() {
        let hold = markers(&["hold"]);
        let major = markers(&["major"]);

        let (outcome, reasons) = ClassifierCore::normalize_step(&bare_step(StepStatus::Stop), &hold, &major);
        assert_eq!(outcome, StepOutcome::Completed);
        assert!(reasons[0].contains("stop"));

        let (outcome, _) = ClassifierCore::normalize_step(&bare_step(StepStatus::Start), &hold, &major);
        assert_eq!(outcome, StepOutcome::InProgress);

        let (outcome, _) = ClassifierCore::normalize_step(&bare_step(StepStatus::Planned), &hold, &major);
        assert_eq!(outcome, StepOutcome::Planned);

        let (outcome, _) = ClassifierCore::normalize_step(&bare_step(StepStatus::Hold), &hold, &major);
        assert_eq!(outcome, StepOutcome::OnHold);
    }

    #[test]
    fn test_detail_overrides_coarse() {
        let hold = markers(&["hold"]);
        let major = markers(&["major"]);

        // stop + hold 明细 → 挂起优先于完工
        let step = step_with_detail(StepStatus::Stop, Some(DetailStatus::Hold), None);
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::OnHold);

        // planned + accept 明细 → 完工
        let step = step_with_detail(StepStatus::Planned, Some(DetailStatus::Accept), None);
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::Completed);

        // planned + in_progress 明细 → 进行中
        let step = step_with_detail(StepStatus::Planned, Some(DetailStatus::InProgress), None);
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::InProgress);
    }

    #[test]
    fn test_major_hold_precedence() {
        let hold = markers(&["hold"]);
        let major = markers(&["major"]);

        let step = step_with_detail(StepStatus::Start, Some(DetailStatus::MajorHold), None);
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::MajorHold);

        // 备注重大标记 + hold 明细 → 重大挂起
        let step = step_with_detail(StepStatus::Start, Some(DetailStatus::Hold), Some("MAJOR die damage"));
        let (outcome, reasons) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::MajorHold);
        assert!(reasons[0].contains("remark marker"));

        // 备注同时命中重大与挂起标记, 明细无状态 → 重大挂起
        let step = step_with_detail(StepStatus::Start, None, Some("on hold: major customer complaint"));
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::MajorHold);

        // 仅重大标记、无挂起信号 → 不是挂起
        let step = step_with_detail(StepStatus::Start, None, Some("major order, expedite"));
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::InProgress);
    }

    #[test]
    fn test_unknown_detail_status_degrades_to_coarse() {
        let hold = markers(&["hold"]);
        let major = markers(&["major"]);

        let step = step_with_detail(StepStatus::Start, Some(DetailStatus::Unknown), None);
        let (outcome, _) = ClassifierCore::normalize_step(&step, &hold, &major);
        assert_eq!(outcome, StepOutcome::InProgress);
    }

    #[test]
    fn test_reduce_precedence() {
        // 一个 MAJOR_HOLD 压过全部完工
        let (status, _) = ClassifierCore::reduce_job(&[
            StepOutcome::Completed,
            StepOutcome::MajorHold,
            StepOutcome::Completed,
        ]);
        assert_eq!(status, JobStatus::MajorHold);

        // 挂起压过进行中
        let (status, _) = ClassifierCore::reduce_job(&[StepOutcome::InProgress, StepOutcome::OnHold]);
        assert_eq!(status, JobStatus::OnHold);

        // 进行中压过计划/完工混合
        let (status, _) = ClassifierCore::reduce_job(&[
            StepOutcome::Completed,
            StepOutcome::InProgress,
            StepOutcome::Planned,
        ]);
        assert_eq!(status, JobStatus::InProgress);
    }

    #[test]
    fn test_reduce_all_completed() {
        let (status, reasons) =
            ClassifierCore::reduce_job(&[StepOutcome::Completed, StepOutcome::Completed]);
        assert_eq!(status, JobStatus::Completed);
        assert!(reasons[0].contains("all 2"));
    }

    #[test]
    fn test_reduce_empty_steps_is_planned() {
        let (status, reasons) = ClassifierCore::reduce_job(&[]);
        assert_eq!(status, JobStatus::Planned);
        assert!(reasons[0].contains("no steps"));
    }

    #[test]
    fn test_reduce_completed_plus_planned_is_planned() {
        let (status, _) = ClassifierCore::reduce_job(&[StepOutcome::Completed, StepOutcome::Planned]);
        assert_eq!(status, JobStatus::Planned);
    }
}
