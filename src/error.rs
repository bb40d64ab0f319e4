//! 错误类型定义

use crate::region::RegionLevel;
use thiserror::Error;

/// 数据加载与配置错误
///
/// 解析过程本身不会失败，未识别的字段保持为空；
/// 错误只会在构建参考数据或解析配置时出现。
#[derive(Debug, Error)]
pub enum AddressError {
    /// 数据加载失败
    #[error("Failed to load {table} data: {source}")]
    DataLoad {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// 上级行政区划编码不存在
    #[error("{level} {code} refers to unknown parent {parent}")]
    OrphanRecord {
        level: RegionLevel,
        code: String,
        parent: String,
    },

    /// 缺少上级行政区划编码
    #[error("{level} {code} has no parent code")]
    MissingParent { level: RegionLevel, code: String },

    /// 同级编码重复
    #[error("Duplicate {level} code: {code}")]
    DuplicateCode { level: RegionLevel, code: String },

    /// 无效的匹配方式
    #[error("Unknown match strategy: {0}")]
    UnknownStrategy(String),
}
