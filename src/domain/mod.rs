// ==========================================
// 瓦楞纸箱生产运营系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、工序名称归一规则
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod job_plan;
pub mod step_details;
pub mod step_name;
pub mod types;

// 重导出核心类型
pub use job_plan::{CompletedJob, JobPlan, Step};
pub use step_details::{
    CorrugationDetail, DispatchDetail, FlapPastingDetail, FluteLaminationDetail,
    PaperStoreDetail, PrintingDetail, PunchingDetail, QualityDetail, StepDetail, UnknownDetail,
};
pub use step_name::{CanonicalStep, FIXED_VOCABULARY};
pub use types::{DetailStatus, JobDemand, JobStatus, RangePreset, StepOutcome, StepStatus};
