//! # address-parse - 收货地址智能解析
//!
//! 从一行粘贴的收货信息中提取姓名、电话、邮编、省市区和详细地址。
//!
//! ## 功能特性
//!
//! - 清洗常见标签词（"收货人"、"详细地址" 等）和中英文标点
//! - 识别手机号、座机号（含区号）和六位邮编
//! - 两种省市区匹配方式：最长前缀扫描和按表顺序的树查找
//! - 根据下级区划回填省、市，保证三级相互一致
//! - 支持省、市、区简称（如 "广东深圳南山"）
//! - 直辖市的 "市辖区" 等占位城市名自动替换为省份名
//! - 基于姓氏表和称呼识别收件人姓名
//!
//! 省市区和姓氏数据由调用方提供，解析器构建后只读，可跨线程共享。
//!
//! ## 快速开始
//!
//! ```rust
//! use address_parse::{AddressParser, MatchStrategy};
//!
//! let provinces = r#"[{"code":"44","name":"广东省"}]"#;
//! let cities = r#"[{"code":"4403","name":"深圳市","provinceCode":"44"}]"#;
//! let areas = r#"[{"code":"440305","name":"南山区","cityCode":"4403","provinceCode":"44"}]"#;
//! let surnames = r#"["张","王","李"]"#;
//!
//! let mut parser = AddressParser::from_json(provinces, cities, areas, surnames).unwrap();
//!
//! let result = parser.parse("广东省深圳市南山区xx路1号 张三 13800001234 518000");
//! assert_eq!(result.province, "广东省");
//! assert_eq!(result.city, "深圳市");
//! assert_eq!(result.area, "南山区");
//! assert_eq!(result.area_code, "440305");
//! assert_eq!(result.name, "张三");
//! assert_eq!(result.phone, "13800001234");
//! assert_eq!(result.postal_code, "518000");
//! assert_eq!(result.detail, "xx路1号");
//!
//! // 切换为树查找
//! parser.set_strategy(MatchStrategy::TreeDescent);
//! let result = parser.parse("深圳南山科技园1号楼");
//! assert_eq!(result.province, "广东省");
//! assert_eq!(result.detail, "科技园1号楼");
//! ```

mod clean;
mod contact;
mod data;
mod error;
mod name;
mod options;
mod parser;
mod region;
mod resolver;
mod trie;

pub use clean::{clean, LABEL_WORDS};
pub use contact::{extract_phone, extract_postal_code};
pub use data::{RegionTables, SurnameSet};
pub use error::AddressError;
pub use name::{is_ideograph, NameExtractor, HONORIFICS, STOPWORDS};
pub use options::{MatchStrategy, ParserOptions};
pub use parser::{AddressParser, CITY_PLACEHOLDERS};
pub use region::{ParseResult, RegionLevel, RegionRecord};
pub use resolver::{
    resolve_fragments, PatternScan, RegionMatcher, Resolution, Resolved, TreeDescent,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    fn parser() -> AddressParser {
        AddressParser::from_json(
            fixtures::PROVINCES,
            fixtures::CITIES,
            fixtures::AREAS,
            fixtures::SURNAMES,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_full_address() {
        let parser = parser();
        let result = parser.parse("广东省深圳市南山区科技园路1号");

        assert_eq!(result.province, "广东省");
        assert_eq!(result.city, "深圳市");
        assert_eq!(result.area, "南山区");
        assert_eq!(result.detail, "科技园路1号");
    }

    #[test]
    fn test_parse_short_name() {
        let parser = parser();
        let result = parser.parse("深圳南山科技园");

        assert_eq!(result.province, "广东省");
        assert_eq!(result.city, "深圳市");
        assert_eq!(result.area, "南山区");
    }

    #[test]
    fn test_parse_municipality() {
        let parser = parser();
        let result = parser.parse("上海市浦东新区陆家嘴环路1000号");

        assert_eq!(result.province, "上海市");
        assert_eq!(result.city, "上海市");
        assert_eq!(result.area, "浦东新区");
        assert_eq!(result.detail, "陆家嘴环路1000号");
    }

    #[test]
    fn test_parse_autonomous_region() {
        let parser = parser();
        let result = parser.parse("广西壮族自治区南宁市青秀区民族大道100号");

        assert_eq!(result.province, "广西壮族自治区");
        assert_eq!(result.city, "南宁市");
        assert_eq!(result.area, "青秀区");
    }
}
