// ==========================================
// 瓦楞纸箱生产运营系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换快照层/配置层错误为用户友好的错误消息
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use crate::feed::FeedError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据校验失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 数据接入错误
    // ==========================================
    #[error("数据源错误: {0}")]
    FeedError(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置读取失败: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 FeedError 转换
// 目的: 将快照层的技术错误转换为用户友好的业务错误
// ==========================================
impl From<FeedError> for ApiError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Unavailable(msg) => {
                ApiError::FeedError(format!("上游数据源不可用: {}", msg))
            }
            FeedError::Decode(msg) => ApiError::FeedError(format!("快照解析失败: {}", msg)),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
