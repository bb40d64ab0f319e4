//! 省市区识别
//!
//! 地址文本按空格切成片段后逐个交给 [`RegionMatcher`]，直到省、市、区都已确定。
//! 每个片段内总是按 省 -> 市 -> 区 的顺序匹配，匹配到的前缀从片段开头去掉，
//! 剩余部分作为详细地址。识别出下级而上级未知时，按下级记录的上级编码回填。
//!
//! 两种匹配方式：
//!
//! - [`PatternScan`]：从两个字开始逐字增长前缀，只要表中仍有名称以该前缀开头就继续，
//!   取最长的那个前缀。
//! - [`TreeDescent`]：按表的顺序遍历每个名称，从全名逐字缩短到两个字，
//!   取第一个能匹配片段开头的记录。
//!
//! 名称互为前缀时两者的结果可能不同。

use crate::data::RegionTables;
use crate::region::{RegionLevel, RegionRecord};
use log::{debug, trace};

/// 参与匹配的最短前缀字数
const MIN_PREFIX_CHARS: usize = 2;

/// 已识别的省、市、区
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolved<'t> {
    pub province: Option<&'t RegionRecord>,
    pub city: Option<&'t RegionRecord>,
    pub area: Option<&'t RegionRecord>,
}

impl<'t> Resolved<'t> {
    /// 三级是否都已确定
    pub fn is_complete(&self) -> bool {
        self.province.is_some() && self.city.is_some() && self.area.is_some()
    }

    /// 省、市、区名称，未识别的为空字符串
    pub fn names(&self) -> [&'t str; 3] {
        [self.province, self.city, self.area].map(|r| r.map_or("", |r| r.name.as_str()))
    }

    fn commit(&mut self, level: RegionLevel, record: &'t RegionRecord, prefix: &str) {
        debug!("matched {} {} ({}) by {:?}", level, record.name, record.code, prefix);
        match level {
            RegionLevel::Province => self.province = Some(record),
            RegionLevel::City => self.city = Some(record),
            RegionLevel::Area => self.area = Some(record),
        }
    }

    /// 根据下级记录的上级编码回填未知的省、市
    fn backfill(&mut self, tables: &'t RegionTables, child: &RegionRecord) {
        if self.city.is_none() {
            if let Some(code) = &child.city_code {
                self.city = tables.city(code);
                debug!("back-filled city {:?} from {}", self.city.map(|c| &c.name), child.code);
            }
        }
        if self.province.is_none() {
            if let Some(code) = &child.province_code {
                self.province = tables.province(code);
                debug!("back-filled province {:?} from {}", self.province.map(|p| &p.name), child.code);
            }
        }
    }

    /// 区县候选须属于已知的省、市
    fn admits_area(&self, area: &RegionRecord) -> bool {
        is_child(self.province, area.province_code.as_deref())
            && is_child(self.city, area.city_code.as_deref())
    }
}

fn is_child(parent: Option<&RegionRecord>, parent_code: Option<&str>) -> bool {
    parent.map_or(true, |p| parent_code == Some(p.code.as_str()))
}

/// 单个片段的省市区匹配方式
pub trait RegionMatcher: Send + Sync {
    /// 在 `fragment` 上识别尚未确定的层级，结果写入 `found`
    ///
    /// 返回片段中未被匹配的剩余部分。
    fn resolve<'t, 'f>(
        &self,
        tables: &'t RegionTables,
        fragment: &'f str,
        found: &mut Resolved<'t>,
    ) -> &'f str;
}

/// 逐字增长前缀，取表中仍有名称匹配的最长前缀
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScan;

impl PatternScan {
    fn scan<'t, F>(
        tables: &'t RegionTables,
        level: RegionLevel,
        text: &str,
        accept: F,
    ) -> Option<(&'t RegionRecord, usize)>
    where
        F: Fn(&RegionRecord) -> bool,
    {
        let records = tables.records(level);
        tables
            .name_trie(level)
            .longest_prefix_match(text, MIN_PREFIX_CHARS, |i| accept(&records[i]))
            .map(|(i, len)| (&records[i], len))
    }
}

impl RegionMatcher for PatternScan {
    fn resolve<'t, 'f>(
        &self,
        tables: &'t RegionTables,
        fragment: &'f str,
        found: &mut Resolved<'t>,
    ) -> &'f str {
        let mut rest = fragment;

        if found.province.is_none() {
            if let Some((record, len)) = Self::scan(tables, RegionLevel::Province, rest, |_| true) {
                found.commit(RegionLevel::Province, record, &rest[..len]);
                rest = &rest[len..];
            }
        }

        if found.city.is_none() {
            let province = found.province;
            let hit = Self::scan(tables, RegionLevel::City, rest, |city| {
                is_child(province, city.province_code.as_deref())
            });
            if let Some((record, len)) = hit {
                found.commit(RegionLevel::City, record, &rest[..len]);
                found.backfill(tables, record);
                rest = &rest[len..];
            }
        }

        if found.area.is_none() {
            let known = *found;
            let hit = Self::scan(tables, RegionLevel::Area, rest, |area| known.admits_area(area));
            if let Some((record, len)) = hit {
                found.commit(RegionLevel::Area, record, &rest[..len]);
                found.backfill(tables, record);
                rest = &rest[len..];
            }
        }

        rest
    }
}

/// 按表的顺序遍历名称，取第一个前缀能匹配的记录
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeDescent;

impl TreeDescent {
    fn descend<'t, I>(records: I, text: &str) -> Option<(&'t RegionRecord, usize)>
    where
        I: IntoIterator<Item = &'t RegionRecord>,
    {
        records.into_iter().find_map(|record| {
            let name = record.name.as_str();
            let trials = name.chars().count().saturating_sub(MIN_PREFIX_CHARS - 1);
            name.char_indices()
                .rev()
                .take(trials)
                .map(|(i, ch)| i + ch.len_utf8())
                .find(|&end| text.starts_with(&name[..end]))
                .map(|end| (record, end))
        })
    }
}

impl RegionMatcher for TreeDescent {
    fn resolve<'t, 'f>(
        &self,
        tables: &'t RegionTables,
        fragment: &'f str,
        found: &mut Resolved<'t>,
    ) -> &'f str {
        let mut rest = fragment;

        if found.province.is_none() {
            if let Some((record, len)) = Self::descend(tables.provinces(), rest) {
                found.commit(RegionLevel::Province, record, &rest[..len]);
                rest = &rest[len..];
            }
        }

        if found.city.is_none() {
            let hit = match found.province {
                Some(province) => Self::descend(tables.cities_of(&province.code), rest),
                None => Self::descend(tables.cities(), rest),
            };
            if let Some((record, len)) = hit {
                found.commit(RegionLevel::City, record, &rest[..len]);
                found.backfill(tables, record);
                rest = &rest[len..];
            }
        }

        if found.area.is_none() {
            let hit = match (found.city, found.province) {
                (Some(city), _) => Self::descend(tables.areas_of_city(&city.code), rest),
                (None, Some(province)) => {
                    Self::descend(tables.areas_of_province(&province.code), rest)
                }
                (None, None) => Self::descend(tables.areas(), rest),
            };
            if let Some((record, len)) = hit {
                found.commit(RegionLevel::Area, record, &rest[..len]);
                found.backfill(tables, record);
                rest = &rest[len..];
            }
        }

        rest
    }
}

/// 逐片段识别后的省市区与详细地址片段
#[derive(Debug, Clone, Default)]
pub struct Resolution<'t> {
    pub regions: Resolved<'t>,
    /// 未被识别的片段，去重并保持首次出现的顺序
    pub detail: Vec<String>,
}

/// 依次处理各片段，直到省、市、区都已确定
///
/// 三级都确定后，后续片段不再参与匹配，直接作为详细地址。
pub fn resolve_fragments<'t, 'f, I>(
    matcher: &dyn RegionMatcher,
    tables: &'t RegionTables,
    fragments: I,
) -> Resolution<'t>
where
    I: IntoIterator<Item = &'f str>,
{
    let mut resolution = Resolution::default();
    for fragment in fragments {
        let rest = if resolution.regions.is_complete() {
            fragment
        } else {
            trace!("resolving fragment {:?}", fragment);
            matcher.resolve(tables, fragment, &mut resolution.regions)
        };
        if !rest.is_empty() && !resolution.detail.iter().any(|d| d == rest) {
            resolution.detail.push(rest.to_string());
        }
    }
    resolution
}
