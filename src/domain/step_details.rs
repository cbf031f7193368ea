// ==========================================
// 瓦楞纸箱生产运营系统 - 工序明细载荷
// ==========================================
// 职责: 按规范工序键建模工序明细 (标签联合)
// 红线: 分类逻辑只依赖 status/remarks, 其余字段透传展示
// ==========================================

use crate::domain::types::DetailStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// StepDetail - 工序明细标签联合
// ==========================================
// 每个变体只承载该工序真正需要的字段
// 词表外工序使用 Unknown 兜底变体 (原始载荷透传)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", content = "detail")]
pub enum StepDetail {
    PaperStore(PaperStoreDetail),
    PrintingDetails(PrintingDetail),
    Corrugation(CorrugationDetail),
    FluteLaminateBoardConversion(FluteLaminationDetail),
    Punching(PunchingDetail),
    SideFlapPasting(FlapPastingDetail),
    QualityDept(QualityDetail),
    DispatchProcess(DispatchDetail),
    Unknown(UnknownDetail),
}

impl StepDetail {
    /// 明细状态 (细粒度, 可覆盖粗粒度状态)
    pub fn status(&self) -> Option<DetailStatus> {
        match self {
            StepDetail::PaperStore(d) => d.status,
            StepDetail::PrintingDetails(d) => d.status,
            StepDetail::Corrugation(d) => d.status,
            StepDetail::FluteLaminateBoardConversion(d) => d.status,
            StepDetail::Punching(d) => d.status,
            StepDetail::SideFlapPasting(d) => d.status,
            StepDetail::QualityDept(d) => d.status,
            StepDetail::DispatchProcess(d) => d.status,
            StepDetail::Unknown(d) => d.status,
        }
    }

    /// 自由文本备注 (挂起标记匹配用)
    pub fn remarks(&self) -> Option<&str> {
        match self {
            StepDetail::PaperStore(d) => d.remarks.as_deref(),
            StepDetail::PrintingDetails(d) => d.remarks.as_deref(),
            StepDetail::Corrugation(d) => d.remarks.as_deref(),
            StepDetail::FluteLaminateBoardConversion(d) => d.remarks.as_deref(),
            StepDetail::Punching(d) => d.remarks.as_deref(),
            StepDetail::SideFlapPasting(d) => d.remarks.as_deref(),
            StepDetail::QualityDept(d) => d.remarks.as_deref(),
            StepDetail::DispatchProcess(d) => d.remarks.as_deref(),
            StepDetail::Unknown(d) => d.remarks.as_deref(),
        }
    }
}

// ==========================================
// 各工序明细结构
// ==========================================

/// 纸库明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperStoreDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub sheet_quantity: Option<i64>, // 领纸数量
    #[serde(default)]
    pub mill: Option<String>, // 纸厂
}

/// 印刷明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintingDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub no_of_colours: Option<i32>, // 色数
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// 瓦楞明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrugationDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub flute_type: Option<String>, // 楞型
}

/// 贴面裱纸明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluteLaminationDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// 模切明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchingDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub die_no: Option<String>, // 模具编号
}

/// 粘箱明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlapPastingDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// 质检明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub checked_qty: Option<i64>, // 检验数量
    #[serde(default)]
    pub rejected_qty: Option<i64>, // 不合格数量
}

/// 发运明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub dispatch_no: Option<String>, // 发运单号
    #[serde(default)]
    pub dispatch_qty: Option<i64>,
}

/// 词表外工序明细 (兜底)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownDetail {
    #[serde(default)]
    pub status: Option<DetailStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub raw: serde_json::Value, // 原始载荷透传
}
