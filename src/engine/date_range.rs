// ==========================================
// 瓦楞纸箱生产运营系统 - 时间范围纯函数库
// ==========================================
// 职责: 预设时间范围解析 + 包含判定
// 红线: 无状态、无副作用; 当前日期必须显式传参, 不得内部取时钟
// 红线: 不改写调用方传入的日期 (范围端点全部新建)
// ==========================================

use crate::domain::job_plan::JobPlan;
use crate::domain::types::RangePreset;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DateRange - 闭区间日期范围
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// 单日范围
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }
}

// ==========================================
// DateRangeCore - 纯函数工具类
// ==========================================
pub struct DateRangeCore;

impl DateRangeCore {
    /// 解析预设时间范围
    ///
    /// # 规则
    /// - today: start = end = 当天
    /// - week: 当周周一..周日 (ISO 周, 周日为周一偏移 6 天)
    /// - month: 当月首日..末日
    /// - quarter: 当季首日..末日 (季度起始月: 1/4/7/10)
    /// - year: 当年 1月1日..12月31日
    /// - custom: 调用方范围原样透传; 缺失时退化为 today
    ///
    /// # 参数
    /// - preset: 预设名
    /// - custom: 自定义范围 (仅 custom 预设使用)
    /// - today: 当前日期 (显式传参)
    pub fn resolve(preset: RangePreset, custom: Option<DateRange>, today: NaiveDate) -> DateRange {
        match preset {
            RangePreset::Today => DateRange::single_day(today),
            RangePreset::Week => {
                let offset = today.weekday().num_days_from_monday() as i64;
                let start = today - Duration::days(offset);
                DateRange {
                    start,
                    end: start + Duration::days(6),
                }
            }
            RangePreset::Month => DateRange {
                start: Self::first_of_month(today.year(), today.month(), today),
                end: Self::end_of_month(today.year(), today.month(), today),
            },
            RangePreset::Quarter => {
                let quarter_start_month = ((today.month() - 1) / 3) * 3 + 1;
                DateRange {
                    start: Self::first_of_month(today.year(), quarter_start_month, today),
                    end: Self::end_of_month(today.year(), quarter_start_month + 2, today),
                }
            }
            RangePreset::Year => DateRange {
                start: Self::first_of_month(today.year(), 1, today),
                end: NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
            },
            RangePreset::Custom => custom.unwrap_or_else(|| DateRange::single_day(today)),
        }
    }

    /// 闭区间包含判定 (自然日粒度)
    ///
    /// 候选时间戳先归约到自然日再比较, 等价于
    /// [start 00:00:00, end 23:59:59.999] 的时刻判定
    pub fn contains(range: &DateRange, candidate: NaiveDate) -> bool {
        range.start <= candidate && candidate <= range.end
    }

    /// 闭区间包含判定 (UTC 时间戳)
    pub fn contains_datetime(range: &DateRange, candidate: DateTime<Utc>) -> bool {
        Self::contains(range, candidate.date_naive())
    }

    /// 过滤建档时间落在范围内的作业
    pub fn filter_jobs(range: &DateRange, jobs: &[JobPlan]) -> Vec<JobPlan> {
        jobs.iter()
            .filter(|job| Self::contains_datetime(range, job.created_at))
            .cloned()
            .collect()
    }

    /// 月首日 (month 取值合法时不会落入 fallback)
    fn first_of_month(year: i32, month: u32, fallback: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(fallback)
    }

    /// 月末日 = 次月首日的前一天
    fn end_of_month(year: i32, month: u32, fallback: NaiveDate) -> NaiveDate {
        let (next_year, next_month) = if month >= 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        Self::first_of_month(next_year, next_month, fallback)
            .pred_opt()
            .unwrap_or(fallback)
    }
}
