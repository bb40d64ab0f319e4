//! 地区数据结构与解析结果

use serde::{Deserialize, Serialize};
use std::fmt;

/// 行政区划层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionLevel {
    Province,
    City,
    Area,
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegionLevel::Province => "province",
            RegionLevel::City => "city",
            RegionLevel::Area => "area",
        })
    }
}

/// 行政区划记录
///
/// 省份没有上级编码；城市带 `provinceCode`；区县同时带 `provinceCode` 和 `cityCode`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
}

impl RegionRecord {
    /// 创建省份记录
    pub fn province(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: None,
            city_code: None,
        }
    }

    /// 创建城市记录
    pub fn city(
        code: impl Into<String>,
        name: impl Into<String>,
        province_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: Some(province_code.into()),
            city_code: None,
        }
    }

    /// 创建区县记录
    pub fn area(
        code: impl Into<String>,
        name: impl Into<String>,
        province_code: impl Into<String>,
        city_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: Some(province_code.into()),
            city_code: Some(city_code.into()),
        }
    }
}

/// 解析结果
///
/// 未识别的字段为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// 省份
    pub province: String,
    pub province_code: String,
    /// 城市（直辖市等占位名称已替换为省份名）
    pub city: String,
    pub city_code: String,
    /// 区县
    pub area: String,
    pub area_code: String,
    /// 剩余详细地址
    pub detail: String,
    /// 电话
    pub phone: String,
    /// 邮政编码
    pub postal_code: String,
    /// 姓名
    pub name: String,
}

impl ParseResult {
    /// 创建空的解析结果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 是否解析到了省份
    pub fn has_province(&self) -> bool {
        !self.province.is_empty()
    }

    /// 是否解析到了城市
    pub fn has_city(&self) -> bool {
        !self.city.is_empty()
    }

    /// 是否解析到了区县
    pub fn has_area(&self) -> bool {
        !self.area.is_empty()
    }

    /// 是否完整解析（省市区都有）
    pub fn is_complete(&self) -> bool {
        self.has_province() && self.has_city() && self.has_area()
    }

    /// 获取完整地址（省市区 + 详细地址）
    pub fn full_address(&self) -> String {
        let mut result = self.province.clone();
        // 避免直辖市重复
        if self.city != self.province {
            result.push_str(&self.city);
        }
        result.push_str(&self.area);
        result.push_str(&self.detail);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize() {
        let json = r#"{"code":"440305","name":"南山区","cityCode":"4403","provinceCode":"44"}"#;
        let record: RegionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, RegionRecord::area("440305", "南山区", "44", "4403"));

        let json = r#"{"code":"44","name":"广东省"}"#;
        let record: RegionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.province_code, None);
        assert_eq!(record.city_code, None);
    }

    #[test]
    fn test_parse_result() {
        let result = ParseResult {
            province: "广东省".to_string(),
            city: "深圳市".to_string(),
            area: "南山区".to_string(),
            detail: "科技园".to_string(),
            ..ParseResult::default()
        };
        assert!(result.is_complete());
        assert_eq!(result.full_address(), "广东省深圳市南山区科技园");
        assert!(!ParseResult::empty().has_province());
    }

    #[test]
    fn test_municipality_full_address() {
        let result = ParseResult {
            province: "北京市".to_string(),
            city: "北京市".to_string(),
            area: "朝阳区".to_string(),
            detail: "望京".to_string(),
            ..ParseResult::default()
        };
        // 直辖市不重复显示
        assert_eq!(result.full_address(), "北京市朝阳区望京");
    }

    #[test]
    fn test_serialize_keys() {
        let result = ParseResult {
            postal_code: "518000".to_string(),
            ..ParseResult::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["postalCode"], "518000");
        assert_eq!(value["provinceCode"], "");
    }
}
