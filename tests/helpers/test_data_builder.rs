// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use corrugated_ops::domain::step_details::{
    CorrugationDetail, DispatchDetail, FlapPastingDetail, FluteLaminationDetail,
    PaperStoreDetail, PrintingDetail, PunchingDetail, QualityDetail, StepDetail, UnknownDetail,
};
use corrugated_ops::domain::step_name::CanonicalStep;
use corrugated_ops::domain::types::{DetailStatus, JobDemand, StepStatus};
use corrugated_ops::domain::{CompletedJob, JobPlan, Step};

// ==========================================
// Step 构建器
// ==========================================

pub struct StepBuilder {
    step_no: i32,
    step_name: String,
    status: StepStatus,
    detail_status: Option<DetailStatus>,
    remarks: Option<String>,
    user: Option<String>,
}

impl StepBuilder {
    pub fn new(step_name: &str, status: StepStatus) -> Self {
        Self {
            step_no: 1,
            step_name: step_name.to_string(),
            status,
            detail_status: None,
            remarks: None,
            user: None,
        }
    }

    pub fn detail_status(mut self, status: DetailStatus) -> Self {
        self.detail_status = Some(status);
        self
    }

    pub fn remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    pub fn user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn build(self) -> Step {
        let step_details = if self.detail_status.is_some() || self.remarks.is_some() {
            Some(make_detail(&self.step_name, self.detail_status, self.remarks))
        } else {
            None
        };

        Step {
            step_no: self.step_no,
            step_name: self.step_name,
            status: self.status,
            step_details,
            machine_details: Vec::new(),
            start_date: None,
            end_date: None,
            user: self.user,
        }
    }
}

/// 按规范工序键选择明细变体 (词表外工序用兜底变体)
fn make_detail(
    step_name: &str,
    status: Option<DetailStatus>,
    remarks: Option<String>,
) -> StepDetail {
    match CanonicalStep::from_raw(step_name) {
        CanonicalStep::PaperStore => StepDetail::PaperStore(PaperStoreDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::PrintingDetails => StepDetail::PrintingDetails(PrintingDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::Corrugation => StepDetail::Corrugation(CorrugationDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::FluteLaminateBoardConversion => {
            StepDetail::FluteLaminateBoardConversion(FluteLaminationDetail {
                status,
                remarks,
                ..Default::default()
            })
        }
        CanonicalStep::Punching => StepDetail::Punching(PunchingDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::SideFlapPasting => StepDetail::SideFlapPasting(FlapPastingDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::QualityDept => StepDetail::QualityDept(QualityDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::DispatchProcess => StepDetail::DispatchProcess(DispatchDetail {
            status,
            remarks,
            ..Default::default()
        }),
        CanonicalStep::Other(_) => StepDetail::Unknown(UnknownDetail {
            status,
            remarks,
            ..Default::default()
        }),
    }
}

// ==========================================
// JobPlan 构建器
// ==========================================

pub struct JobPlanBuilder {
    nrc_job_no: String,
    job_demand: JobDemand,
    steps: Vec<Step>,
    created_at: DateTime<Utc>,
}

impl JobPlanBuilder {
    pub fn new(nrc_job_no: &str) -> Self {
        Self {
            nrc_job_no: nrc_job_no.to_string(),
            job_demand: JobDemand::Medium,
            steps: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap(),
        }
    }

    pub fn demand(mut self, demand: JobDemand) -> Self {
        self.job_demand = demand;
        self
    }

    pub fn created_at(mut self, y: i32, m: u32, d: u32) -> Self {
        self.created_at = Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap();
        self
    }

    pub fn created_at_time(mut self, y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
        self.created_at = Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap();
        self
    }

    pub fn step(mut self, step: StepBuilder) -> Self {
        let mut built = step.build();
        built.step_no = self.steps.len() as i32 + 1;
        self.steps.push(built);
        self
    }

    pub fn build(self) -> JobPlan {
        JobPlan {
            nrc_job_no: self.nrc_job_no,
            job_demand: self.job_demand,
            steps: self.steps,
            created_at: self.created_at,
        }
    }
}

// ==========================================
// CompletedJob 辅助构造
// ==========================================

pub fn completed_job(nrc_job_no: &str, po_date: Option<(i32, u32, u32)>) -> CompletedJob {
    CompletedJob {
        nrc_job_no: nrc_job_no.to_string(),
        po_date: po_date.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
        completed_at: None,
        job_demand: None,
    }
}
