//! 地址解析器核心实现

use crate::clean::clean;
use crate::contact::{extract_phone, extract_postal_code};
use crate::data::{RegionTables, SurnameSet};
use crate::error::AddressError;
use crate::name::NameExtractor;
use crate::options::{MatchStrategy, ParserOptions};
use crate::region::{ParseResult, RegionRecord};
use crate::resolver::{resolve_fragments, Resolved};
use log::debug;

/// 城市名为这些占位名称时（直辖市等），用省份名代替
pub const CITY_PLACEHOLDERS: [&str; 4] = ["市辖区", "区", "县", "镇"];

/// 收货地址解析器
///
/// 持有只读的参考数据和配置；每次解析的中间状态只存在于调用内部，
/// 因此同一个解析器可以在多个线程中同时使用。
#[derive(Debug)]
pub struct AddressParser {
    tables: RegionTables,
    surnames: SurnameSet,
    options: ParserOptions,
}

/// 单次解析的中间状态
#[derive(Debug, Default)]
struct ParseState<'t> {
    regions: Resolved<'t>,
    detail: Vec<String>,
    phone: String,
    postal_code: String,
    name: String,
}

impl ParseState<'_> {
    /// 合并为最终结果
    fn into_result(self) -> ParseResult {
        let field = |r: Option<&RegionRecord>| {
            r.map(|r| (r.name.clone(), r.code.clone())).unwrap_or_default()
        };
        let (province, province_code) = field(self.regions.province);
        let (mut city, city_code) = field(self.regions.city);
        let (area, area_code) = field(self.regions.area);

        if CITY_PLACEHOLDERS.contains(&city.as_str()) {
            city = province.clone();
        }

        ParseResult {
            province,
            province_code,
            city,
            city_code,
            area,
            area_code,
            detail: self.detail.concat(),
            phone: self.phone,
            postal_code: self.postal_code,
            name: self.name,
        }
    }
}

impl AddressParser {
    /// 使用默认配置创建解析器
    pub fn new(tables: RegionTables, surnames: SurnameSet) -> Self {
        Self::with_options(tables, surnames, ParserOptions::default())
    }

    /// 使用指定配置创建解析器
    pub fn with_options(tables: RegionTables, surnames: SurnameSet, options: ParserOptions) -> Self {
        let mut parser = Self {
            tables,
            surnames,
            options,
        };
        let max = parser.options.name_max_length;
        parser.set_name_max_length(max);
        parser
    }

    /// 从 JSON 文本加载参考数据并创建解析器
    pub fn from_json(
        provinces: &str,
        cities: &str,
        areas: &str,
        surnames: &str,
    ) -> Result<Self, AddressError> {
        let tables = RegionTables::from_json(provinces, cities, areas)?;
        let surnames = SurnameSet::from_json(surnames)?;
        debug!(
            "loaded {} provinces, {} cities, {} areas, {} surnames",
            tables.provinces().len(),
            tables.cities().len(),
            tables.areas().len(),
            surnames.len()
        );
        Ok(Self::new(tables, surnames))
    }

    /// 设置匹配方式
    pub fn set_strategy(&mut self, strategy: MatchStrategy) -> &mut Self {
        self.options.strategy = strategy;
        self
    }

    /// 设置姓名最大字数，至少为 1
    pub fn set_name_max_length(&mut self, max: usize) -> &mut Self {
        self.options.name_max_length = max.max(1);
        self
    }

    /// 设置额外过滤词
    pub fn set_filter_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.filter_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// 当前配置
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// 参考数据
    pub fn tables(&self) -> &RegionTables {
        &self.tables
    }

    /// 解析收货地址
    ///
    /// 依次清洗文本、提取电话和邮编、按空格切分后识别省市区，
    /// 最后从剩余片段中识别姓名。未识别的字段为空字符串。
    pub fn parse(&self, address: &str) -> ParseResult {
        let mut text = clean(address, &self.options.filter_words);
        let mut state = ParseState {
            phone: extract_phone(&mut text),
            postal_code: extract_postal_code(&mut text),
            ..ParseState::default()
        };
        if !state.phone.is_empty() || !state.postal_code.is_empty() {
            debug!("phone {:?}, postal code {:?}", state.phone, state.postal_code);
        }

        let fragments = text.split(' ').map(str::trim).filter(|f| !f.is_empty());
        let resolution = resolve_fragments(self.options.strategy.matcher(), &self.tables, fragments);
        state.regions = resolution.regions;

        let extractor = NameExtractor::new(&self.surnames, self.options.name_max_length);
        let (name, detail) = extractor.extract(&resolution.detail, &state.regions.names());
        state.name = name;
        state.detail = detail;

        state.into_result()
    }

    /// 批量解析地址
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<ParseResult> {
        addresses.iter().map(|a| self.parse(a)).collect()
    }

    /// 检查地址是否有效（至少能解析出省或市）
    pub fn is_valid_address(&self, address: &str) -> bool {
        let result = self.parse(address);
        result.has_province() || result.has_city()
    }
}
