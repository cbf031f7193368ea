// ==========================================
// 瓦楞纸箱生产运营系统 - 引擎层
// ==========================================
// 职责: 实现状态归一、分桶、聚合的业务规则
// 红线: 引擎不做 I/O, 所有规则必须输出 reason
// 红线: 状态归一/折叠只有 ClassifierCore 一处实现
// ==========================================

pub mod classifier_core;
pub mod date_range;
pub mod job_classifier;
pub mod step_tally;
pub mod timeline;

// 重导出核心引擎
pub use classifier_core::ClassifierCore;
pub use date_range::{DateRange, DateRangeCore};
pub use job_classifier::{JobClassifyEngine, JobStatusBreakdown};
pub use step_tally::{StepBucketTally, StepTallyEngine, StepTallyReport};
pub use timeline::{TimelineEngine, TimelinePoint};
