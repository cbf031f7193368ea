// ==========================================
// 瓦楞纸箱生产运营系统 - 工序名称归一
// ==========================================
// 职责: 将历史别名折叠为唯一规范工序键
// 红线: 未知工序名透传为独立键, 不丢弃不报错
// ==========================================

use std::collections::HashMap;
use std::fmt;

// ==========================================
// CanonicalStep - 规范工序键
// ==========================================
// 固定工序词表 + 未知工序兜底变体
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalStep {
    PaperStore,                   // 纸库
    PrintingDetails,              // 印刷
    Corrugation,                  // 瓦楞
    FluteLaminateBoardConversion, // 贴面裱纸
    Punching,                     // 模切
    SideFlapPasting,              // 粘箱
    QualityDept,                  // 质检
    DispatchProcess,              // 发运
    Other(String),                // 词表外工序 (按需建桶)
}

/// 固定工序词表 (看板聚合的初始化桶集合)
pub const FIXED_VOCABULARY: [CanonicalStep; 8] = [
    CanonicalStep::PaperStore,
    CanonicalStep::PrintingDetails,
    CanonicalStep::Corrugation,
    CanonicalStep::FluteLaminateBoardConversion,
    CanonicalStep::Punching,
    CanonicalStep::SideFlapPasting,
    CanonicalStep::QualityDept,
    CanonicalStep::DispatchProcess,
];

impl CanonicalStep {
    /// 从原始工序名解析规范键
    ///
    /// # 静态别名表 (规范名 ↔ 历史变体)
    /// - PaperStore ↔ "Paper Store"
    /// - PrintingDetails ↔ "Printing"
    /// - Corrugation ↔ (无)
    /// - FluteLaminateBoardConversion ↔ "Flute Lamination"
    /// - Punching ↔ (无)
    /// - SideFlapPasting ↔ "Flap Pasting"
    /// - QualityDept ↔ "Quality Control"
    /// - DispatchProcess ↔ "Dispatch"
    ///
    /// 词表外名称原样透传为 Other (可扩展, 不视为错误)
    pub fn from_raw(raw: &str) -> CanonicalStep {
        match raw.trim() {
            "PaperStore" | "Paper Store" => CanonicalStep::PaperStore,
            "PrintingDetails" | "Printing" => CanonicalStep::PrintingDetails,
            "Corrugation" => CanonicalStep::Corrugation,
            "FluteLaminateBoardConversion" | "Flute Lamination" => {
                CanonicalStep::FluteLaminateBoardConversion
            }
            "Punching" => CanonicalStep::Punching,
            "SideFlapPasting" | "Flap Pasting" => CanonicalStep::SideFlapPasting,
            "QualityDept" | "Quality Control" => CanonicalStep::QualityDept,
            "DispatchProcess" | "Dispatch" => CanonicalStep::DispatchProcess,
            other => CanonicalStep::Other(other.to_string()),
        }
    }

    /// 从原始工序名解析规范键 (带配置追加别名)
    ///
    /// # 参数
    /// - raw: 原始工序名
    /// - overrides: 配置层追加的别名映射 (别名 → 规范名)
    ///
    /// 追加别名只能增补静态表, 不能改写静态表已覆盖的名称
    pub fn from_raw_with_overrides(
        raw: &str,
        overrides: &HashMap<String, String>,
    ) -> CanonicalStep {
        let resolved = Self::from_raw(raw);
        if let CanonicalStep::Other(ref unmatched) = resolved {
            if let Some(target) = overrides.get(unmatched) {
                return Self::from_raw(target);
            }
        }
        resolved
    }

    /// 规范工序键名 (聚合桶的键)
    pub fn name(&self) -> &str {
        match self {
            CanonicalStep::PaperStore => "PaperStore",
            CanonicalStep::PrintingDetails => "PrintingDetails",
            CanonicalStep::Corrugation => "Corrugation",
            CanonicalStep::FluteLaminateBoardConversion => "FluteLaminateBoardConversion",
            CanonicalStep::Punching => "Punching",
            CanonicalStep::SideFlapPasting => "SideFlapPasting",
            CanonicalStep::QualityDept => "QualityDept",
            CanonicalStep::DispatchProcess => "DispatchProcess",
            CanonicalStep::Other(raw) => raw.as_str(),
        }
    }

    /// 是否属于固定工序词表
    pub fn is_fixed(&self) -> bool {
        !matches!(self, CanonicalStep::Other(_))
    }
}

impl fmt::Display for CanonicalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
