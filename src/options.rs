//! 解析配置

use crate::error::AddressError;
use crate::resolver::{PatternScan, RegionMatcher, TreeDescent};
use std::str::FromStr;

/// 省市区匹配方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// 逐字增长前缀，取最长匹配（默认）
    #[default]
    PatternScan,
    /// 按表顺序遍历名称，取第一个匹配
    TreeDescent,
}

impl MatchStrategy {
    /// 对应的匹配实现
    pub fn matcher(self) -> &'static dyn RegionMatcher {
        match self {
            MatchStrategy::PatternScan => &PatternScan,
            MatchStrategy::TreeDescent => &TreeDescent,
        }
    }
}

/// 数字编号：1 为正则式前缀匹配，2 为树查找，其他值按 1 处理
impl From<u8> for MatchStrategy {
    fn from(code: u8) -> Self {
        match code {
            2 => MatchStrategy::TreeDescent,
            _ => MatchStrategy::PatternScan,
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "pattern" | "pattern-scan" | "regexp" => Ok(MatchStrategy::PatternScan),
            "2" | "tree" | "tree-descent" => Ok(MatchStrategy::TreeDescent),
            _ => Err(AddressError::UnknownStrategy(s.to_string())),
        }
    }
}

/// 解析器配置，对之后的每次解析生效
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// 匹配方式
    pub strategy: MatchStrategy,
    /// 姓名最大字数
    pub name_max_length: usize,
    /// 额外过滤词，在内置标签词之后依次去除
    pub filter_words: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            name_max_length: 4,
            filter_words: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.strategy, MatchStrategy::PatternScan);
        assert_eq!(options.name_max_length, 4);
        assert!(options.filter_words.is_empty());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(MatchStrategy::from(1), MatchStrategy::PatternScan);
        assert_eq!(MatchStrategy::from(2), MatchStrategy::TreeDescent);
        assert_eq!(MatchStrategy::from(7), MatchStrategy::PatternScan);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("tree".parse::<MatchStrategy>().unwrap(), MatchStrategy::TreeDescent);
        assert_eq!(" Pattern ".parse::<MatchStrategy>().unwrap(), MatchStrategy::PatternScan);
        assert_eq!("2".parse::<MatchStrategy>().unwrap(), MatchStrategy::TreeDescent);
        let err = "fuzzy".parse::<MatchStrategy>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown match strategy: fuzzy");
    }
}
