//! 地址文本清洗

use once_cell::sync::Lazy;
use regex::Regex;

/// 内置的标签词，按顺序替换为空格
pub const LABEL_WORDS: [&str; 19] = [
    "详细地址",
    "收货地址",
    "收件地址",
    "地址",
    "所在地区",
    "地区",
    "姓名",
    "收货人",
    "收件人",
    "联系人",
    "收",
    "邮编",
    "联系电话",
    "电话",
    "联系人手机号码",
    "手机号码",
    "手机号",
    "自治区直辖县级行政区划",
    "省直辖县级行政区划",
];

/// 需要替换为空格的标点符号（半角与全角），不含连字符
const SYMBOLS: &[char] = &[
    '`', '~', '!', '@', '#', '$', '^', '&', '*', '(', ')', '=', '|', '{', '}', '\'', ':', ';',
    ',', '[', ']', '.', '<', '>', '/', '?', '！', '＠', '＃', '￥', '…', '＊', '（', '）', '—',
    '【', '】', '‘', '’', '；', '：', '”', '“', '。', '，', '、', '？',
];

static REPEATED_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// 清洗地址文本
///
/// 换行和制表符替换为空格，去掉标签词（内置词在前，`filter_words` 在后）和标点，
/// 最后把连续空白合并为一个空格。
///
/// ```rust
/// use address_parse::clean;
///
/// let text = clean("收货人：张三\n地址：深圳市南山区", &[]);
/// assert_eq!(text, " 张三 深圳市南山区");
/// ```
pub fn clean(raw: &str, filter_words: &[String]) -> String {
    let mut text = raw.replace(['\r', '\n', '\t'], " ");

    let words = LABEL_WORDS
        .iter()
        .copied()
        .chain(filter_words.iter().map(String::as_str));
    for word in words {
        if !word.is_empty() && text.contains(word) {
            text = text.replace(word, " ");
        }
    }

    let text = text.replace(SYMBOLS, " ");
    REPEATED_SPACE.replace_all(&text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FILTER: &[String] = &[];

    #[test]
    fn test_line_breaks() {
        assert_eq!(clean("广东省\r\n深圳市\t南山区", NO_FILTER), "广东省 深圳市 南山区");
    }

    #[test]
    fn test_label_words() {
        assert_eq!(
            clean("收货地址:广东省深圳市 联系电话:13800001234", NO_FILTER),
            " 广东省深圳市 13800001234"
        );
        // 长标签优先于其中包含的短标签
        assert_eq!(clean("所在地区广东省", NO_FILTER), " 广东省");
    }

    #[test]
    fn test_label_order_is_sequential() {
        // "联系人" 先于 "联系人手机号码" 被替换，后者不再整体命中
        assert_eq!(clean("联系人手机号码13800001234", NO_FILTER), " 13800001234");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(clean("张三，13800001234。【广东】", NO_FILTER), "张三 13800001234 广东 ");
        // 连字符保留给电话号码
        assert_eq!(clean("0755-12345678", NO_FILTER), "0755-12345678");
    }

    #[test]
    fn test_filter_words() {
        assert_eq!(clean("广东省深圳市 快递柜", &["快递柜".to_string()]), "广东省深圳市 ");
        assert_eq!(clean("广东省", &[String::new()]), "广东省");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "收货人: 张三  电话：138-0000-1234\n地址：广东省深圳市南山区（科技园）",
            "  \t ",
            "详细地址 北京市 朝阳区...望京SOHO",
        ];
        for input in inputs {
            let once = clean(input, NO_FILTER);
            assert_eq!(clean(&once, NO_FILTER), once);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean("", NO_FILTER), "");
        assert_eq!(clean("   ", NO_FILTER), " ");
    }
}
