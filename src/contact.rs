//! 电话号码与邮政编码提取

use once_cell::sync::Lazy;
use regex::Regex;

/// 常见的手工分隔格式，合并为连续数字
static PHONE_SEPARATED: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"([0-9]{3})-([0-9]{4})-([0-9]{4})").unwrap(),
        Regex::new(r"([0-9]{3}) ([0-9]{4}) ([0-9]{4})").unwrap(),
        Regex::new(r"([0-9]{4}) ([0-9]{4}) ([0-9]{4})").unwrap(),
    ]
});

/// 按优先级排列的电话号码模式，取最左边的匹配
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{7,12}|[0-9]{3,4}-[0-9]{6,8}|86-1[0-9]{10}|861[0-9]{10}|1[0-9]{10}").unwrap()
});

static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{6}").unwrap());

/// 提取电话号码，并从文本中移除
///
/// 未找到时返回空字符串，文本只做分隔符归一化。
pub fn extract_phone(text: &mut String) -> String {
    for pattern in PHONE_SEPARATED.iter() {
        let normalized = pattern.replace_all(text.as_str(), "${1}${2}${3}").into_owned();
        *text = normalized;
    }
    take_first(&PHONE, text)
}

/// 提取六位邮政编码，并从文本中移除
pub fn extract_postal_code(text: &mut String) -> String {
    take_first(&POSTAL_CODE, text)
}

/// 取第一个匹配，并把文本中所有相同的片段替换为空格
fn take_first(pattern: &Regex, text: &mut String) -> String {
    let found = match pattern.find(text) {
        Some(m) => m.as_str().to_string(),
        None => return String::new(),
    };
    *text = text.replace(&found, " ");
    found
}
