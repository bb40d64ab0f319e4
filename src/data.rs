//! 省市区参考数据与索引构建

use crate::error::AddressError;
use crate::region::{RegionLevel, RegionRecord};
use crate::trie::Trie;
use std::collections::{HashMap, HashSet};

/// 省、市、区三级参考数据
///
/// 构建时校验层级一致性并建立编码索引、上级编码索引和名称前缀树，
/// 之后只读，可在多个线程间共享。
#[derive(Debug)]
pub struct RegionTables {
    provinces: Vec<RegionRecord>,
    cities: Vec<RegionRecord>,
    areas: Vec<RegionRecord>,
    /// 编码 -> 记录下标
    province_by_code: HashMap<String, usize>,
    city_by_code: HashMap<String, usize>,
    area_by_code: HashMap<String, usize>,
    /// 省份编码 -> 城市下标（保持表内顺序）
    province_cities: HashMap<String, Vec<usize>>,
    /// 城市编码 -> 区县下标
    city_areas: HashMap<String, Vec<usize>>,
    /// 省份编码 -> 区县下标
    province_areas: HashMap<String, Vec<usize>>,
    province_trie: Trie,
    city_trie: Trie,
    area_trie: Trie,
}

impl RegionTables {
    /// 从已解析的记录构建参考数据
    pub fn new(
        provinces: Vec<RegionRecord>,
        cities: Vec<RegionRecord>,
        areas: Vec<RegionRecord>,
    ) -> Result<Self, AddressError> {
        let province_by_code = code_index(&provinces, RegionLevel::Province)?;
        let city_by_code = code_index(&cities, RegionLevel::City)?;
        let area_by_code = code_index(&areas, RegionLevel::Area)?;

        let mut province_cities: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, city) in cities.iter().enumerate() {
            let province_code = parent_code(city, RegionLevel::City, &city.province_code)?;
            if !province_by_code.contains_key(province_code) {
                return Err(orphan(city, RegionLevel::City, province_code));
            }
            province_cities
                .entry(province_code.clone())
                .or_default()
                .push(i);
        }

        let mut city_areas: HashMap<String, Vec<usize>> = HashMap::new();
        let mut province_areas: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, area) in areas.iter().enumerate() {
            let province_code = parent_code(area, RegionLevel::Area, &area.province_code)?;
            let city_code = parent_code(area, RegionLevel::Area, &area.city_code)?;
            // 区县所属城市必须存在且属于同一省份
            let city_matches = city_by_code
                .get(city_code)
                .map(|&c| cities[c].province_code.as_ref() == Some(province_code))
                .unwrap_or(false);
            if !city_matches {
                return Err(orphan(area, RegionLevel::Area, city_code));
            }
            city_areas.entry(city_code.clone()).or_default().push(i);
            province_areas
                .entry(province_code.clone())
                .or_default()
                .push(i);
        }

        Ok(Self {
            province_trie: name_trie(&provinces),
            city_trie: name_trie(&cities),
            area_trie: name_trie(&areas),
            provinces,
            cities,
            areas,
            province_by_code,
            city_by_code,
            area_by_code,
            province_cities,
            city_areas,
            province_areas,
        })
    }

    /// 从 JSON 文本加载参考数据
    ///
    /// 每张表是扁平记录数组，字段为 `code`、`name`、`provinceCode`、`cityCode`。
    pub fn from_json(provinces: &str, cities: &str, areas: &str) -> Result<Self, AddressError> {
        Self::new(
            load_records(provinces, "province")?,
            load_records(cities, "city")?,
            load_records(areas, "area")?,
        )
    }

    /// 所有省份（表内顺序）
    pub fn provinces(&self) -> &[RegionRecord] {
        &self.provinces
    }

    /// 所有城市（表内顺序）
    pub fn cities(&self) -> &[RegionRecord] {
        &self.cities
    }

    /// 所有区县（表内顺序）
    pub fn areas(&self) -> &[RegionRecord] {
        &self.areas
    }

    /// 根据编码查找省份
    pub fn province(&self, code: &str) -> Option<&RegionRecord> {
        self.province_by_code.get(code).map(|&i| &self.provinces[i])
    }

    /// 根据编码查找城市
    pub fn city(&self, code: &str) -> Option<&RegionRecord> {
        self.city_by_code.get(code).map(|&i| &self.cities[i])
    }

    /// 根据编码查找区县
    pub fn area(&self, code: &str) -> Option<&RegionRecord> {
        self.area_by_code.get(code).map(|&i| &self.areas[i])
    }

    /// 某省份下的所有城市
    pub fn cities_of<'a>(&'a self, province_code: &str) -> impl Iterator<Item = &'a RegionRecord> + 'a {
        children(&self.cities, self.province_cities.get(province_code))
    }

    /// 某城市下的所有区县
    pub fn areas_of_city<'a>(&'a self, city_code: &str) -> impl Iterator<Item = &'a RegionRecord> + 'a {
        children(&self.areas, self.city_areas.get(city_code))
    }

    /// 某省份下的所有区县
    pub fn areas_of_province<'a>(
        &'a self,
        province_code: &str,
    ) -> impl Iterator<Item = &'a RegionRecord> + 'a {
        children(&self.areas, self.province_areas.get(province_code))
    }

    pub(crate) fn records(&self, level: RegionLevel) -> &[RegionRecord] {
        match level {
            RegionLevel::Province => &self.provinces,
            RegionLevel::City => &self.cities,
            RegionLevel::Area => &self.areas,
        }
    }

    pub(crate) fn name_trie(&self, level: RegionLevel) -> &Trie {
        match level {
            RegionLevel::Province => &self.province_trie,
            RegionLevel::City => &self.city_trie,
            RegionLevel::Area => &self.area_trie,
        }
    }
}

/// 姓氏集合
#[derive(Debug, Clone, Default)]
pub struct SurnameSet {
    names: HashSet<String>,
}

impl SurnameSet {
    /// 从姓氏列表构建
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// 从 JSON 字符串数组加载
    pub fn from_json(text: &str) -> Result<Self, AddressError> {
        let names: Vec<String> = serde_json::from_str(text).map_err(|source| {
            AddressError::DataLoad {
                table: "surname",
                source,
            }
        })?;
        Ok(Self::new(names))
    }

    /// 是否包含该姓氏
    pub fn contains(&self, surname: &str) -> bool {
        self.names.contains(surname)
    }

    /// 文本首字是否为已知姓氏
    pub fn contains_initial(&self, text: &str) -> bool {
        let mut buf = [0; 4];
        match text.chars().next() {
            Some(ch) => self.names.contains(&*ch.encode_utf8(&mut buf)),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn load_records(text: &str, table: &'static str) -> Result<Vec<RegionRecord>, AddressError> {
    serde_json::from_str(text).map_err(|source| AddressError::DataLoad { table, source })
}

fn code_index(
    records: &[RegionRecord],
    level: RegionLevel,
) -> Result<HashMap<String, usize>, AddressError> {
    let mut index = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if index.insert(record.code.clone(), i).is_some() {
            return Err(AddressError::DuplicateCode {
                level,
                code: record.code.clone(),
            });
        }
    }
    Ok(index)
}

fn parent_code<'a>(
    record: &RegionRecord,
    level: RegionLevel,
    code: &'a Option<String>,
) -> Result<&'a String, AddressError> {
    code.as_ref().ok_or_else(|| AddressError::MissingParent {
        level,
        code: record.code.clone(),
    })
}

fn orphan(record: &RegionRecord, level: RegionLevel, parent: &str) -> AddressError {
    AddressError::OrphanRecord {
        level,
        code: record.code.clone(),
        parent: parent.to_string(),
    }
}

fn name_trie(records: &[RegionRecord]) -> Trie {
    let mut trie = Trie::new();
    for (i, record) in records.iter().enumerate() {
        trie.insert(&record.name, i);
    }
    trie
}

fn children<'a>(
    records: &'a [RegionRecord],
    ids: Option<&'a Vec<usize>>,
) -> impl Iterator<Item = &'a RegionRecord> + 'a {
    ids.into_iter().flatten().map(move |&i| &records[i])
}

/// 测试用参考数据（全国数据的一致子集）
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const PROVINCES: &str = include_str!("../tests/fixtures/provinces.json");
    pub const CITIES: &str = include_str!("../tests/fixtures/cities.json");
    pub const AREAS: &str = include_str!("../tests/fixtures/areas.json");
    pub const SURNAMES: &str = include_str!("../tests/fixtures/surnames.json");

    pub fn tables() -> RegionTables {
        RegionTables::from_json(PROVINCES, CITIES, AREAS).unwrap()
    }

    pub fn surnames() -> SurnameSet {
        SurnameSet::from_json(SURNAMES).unwrap()
    }
}
