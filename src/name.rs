//! 收件人姓名识别

use crate::data::SurnameSet;
use log::debug;

/// 称呼，出现即视为姓名
pub const HONORIFICS: [&str; 13] = [
    "先生", "小姐", "同志", "哥哥", "姐姐", "妹妹", "弟弟", "妈妈", "爸爸", "爷爷", "奶奶", "姑姑",
    "舅舅",
];

/// 地名类词语，不会被当作姓名
pub const STOPWORDS: [&str; 4] = ["街道", "乡镇", "镇", "乡"];

/// 兜底规则允许的最大字数
const FALLBACK_MAX_CHARS: usize = 4;

/// 是否为常用汉字
pub fn is_ideograph(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// 从详细地址片段中识别姓名
#[derive(Debug, Clone, Copy)]
pub struct NameExtractor<'a> {
    surnames: &'a SurnameSet,
    max_length: usize,
}

impl<'a> NameExtractor<'a> {
    pub fn new(surnames: &'a SurnameSet, max_length: usize) -> Self {
        Self {
            surnames,
            max_length,
        }
    }

    /// 单个片段是否像姓名
    ///
    /// 称呼直接接受，地名类词语直接拒绝；
    /// 其余要求长度不超过上限且首字是已知姓氏。
    pub fn is_name(&self, fragment: &str) -> bool {
        if HONORIFICS.contains(&fragment) {
            return true;
        }
        if STOPWORDS.contains(&fragment) {
            return false;
        }
        let len = fragment.chars().count();
        (1..=self.max_length).contains(&len) && self.surnames.contains_initial(fragment)
    }

    /// 识别姓名，返回 (姓名, 剩余详细地址片段)
    ///
    /// 先从每个片段中去掉已识别的省市区名称，再去重、去空。
    /// 候选片段按字典序排序后逐个判断，最后一个被接受的片段胜出；
    /// 某个片段不像姓名时，若排序后的第一个片段不超过四个字且含汉字，
    /// 则以它作为候选。
    ///
    /// ```rust
    /// use address_parse::{NameExtractor, SurnameSet};
    ///
    /// let surnames = SurnameSet::new(["张", "李"]);
    /// let extractor = NameExtractor::new(&surnames, 4);
    /// let detail = vec!["深圳市xx路1号".to_string(), "张三".to_string()];
    /// let (name, rest) = extractor.extract(&detail, &["广东省", "深圳市", ""]);
    /// assert_eq!(name, "张三");
    /// assert_eq!(rest, vec!["xx路1号".to_string()]);
    /// ```
    pub fn extract(&self, detail: &[String], region_names: &[&str]) -> (String, Vec<String>) {
        let mut remaining: Vec<String> = Vec::with_capacity(detail.len());
        for fragment in detail {
            let stripped = region_names
                .iter()
                .filter(|name| !name.is_empty())
                .fold(fragment.clone(), |text, name| text.replace(name, ""));
            if !stripped.is_empty() && !remaining.contains(&stripped) {
                remaining.push(stripped);
            }
        }

        let mut candidates: Vec<&str> = remaining.iter().map(String::as_str).collect();
        candidates.sort_unstable();

        let fallback = candidates.first().copied().filter(|first| {
            first.chars().count() <= FALLBACK_MAX_CHARS && first.chars().any(is_ideograph)
        });

        let mut name = None;
        for &candidate in &candidates {
            if self.is_name(candidate) {
                name = Some(candidate);
            } else if fallback.is_some() {
                name = fallback;
            }
        }

        match name.map(str::to_string) {
            Some(name) => {
                debug!("extracted name {:?}", name);
                remaining.retain(|fragment| *fragment != name);
                (name, remaining)
            }
            None => (String::new(), remaining),
        }
    }
}
