//! 前缀树实现，用于按名称前缀查找地名

use std::collections::HashMap;

/// 前缀树节点
#[derive(Debug, Default)]
struct TrieNode {
    /// 子节点映射（字符 -> 子节点）
    children: HashMap<char, TrieNode>,
    /// 经过该节点的所有词的编号，按插入顺序排列
    ids: Vec<usize>,
}

/// 前缀树
///
/// 每个节点记录所有以该前缀开头的词，因此可以回答
/// "表中是否存在以某前缀开头的名称"。
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// 创建空的前缀树
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个词及其编号
    pub fn insert(&mut self, word: &str, id: usize) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
            node.ids.push(id);
        }
    }

    /// 从文本开头逐字增长前缀，返回仍有词匹配的最长前缀
    ///
    /// 前缀至少 `min_chars` 个字符；每个长度上取第一个通过 `accept` 的词，
    /// 一旦某个长度没有可接受的词就停止增长。
    ///
    /// 返回 (词编号, 前缀字节长度)
    pub fn longest_prefix_match<F>(
        &self,
        text: &str,
        min_chars: usize,
        mut accept: F,
    ) -> Option<(usize, usize)>
    where
        F: FnMut(usize) -> bool,
    {
        let mut node = &self.root;
        let mut last_match = None;
        let mut current_len = 0;

        for (depth, ch) in text.chars().enumerate() {
            match node.children.get(&ch) {
                Some(n) => {
                    node = n;
                    current_len += ch.len_utf8();
                    if depth + 1 < min_chars {
                        continue;
                    }
                    match node.ids.iter().copied().find(|&id| accept(id)) {
                        Some(id) => last_match = Some((id, current_len)),
                        None => break,
                    }
                }
                None => break,
            }
        }

        last_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> Trie {
        let mut trie = Trie::new();
        trie.insert("广西壮族自治区", 0);
        trie.insert("广东省", 1);
        trie.insert("广州市", 2);
        trie
    }

    #[test]
    fn test_first_inserted_wins() {
        // 同一前缀下取插入顺序最靠前的词
        let trie = trie();
        let mut seen = Vec::new();
        let result = trie.longest_prefix_match("广州", 2, |id| {
            seen.push(id);
            true
        });
        assert_eq!(result, Some((2, "广州".len())));
        assert_eq!(seen, vec![2]);
    }

    #[test]
    fn test_longest_prefix_match() {
        let trie = trie();
        let text = "广东省深圳市";
        let (id, len) = trie.longest_prefix_match(text, 2, |_| true).unwrap();
        assert_eq!(id, 1);
        assert_eq!(&text[..len], "广东省");
    }

    #[test]
    fn test_partial_prefix() {
        // 简称只匹配已输入的部分
        let trie = trie();
        let text = "广东深圳";
        let (id, len) = trie.longest_prefix_match(text, 2, |_| true).unwrap();
        assert_eq!(id, 1);
        assert_eq!(&text[..len], "广东");
    }

    #[test]
    fn test_single_char_never_matches() {
        let trie = trie();
        assert_eq!(trie.longest_prefix_match("广", 2, |_| true), None);
        assert_eq!(trie.longest_prefix_match("广大", 2, |_| true), None);
    }

    #[test]
    fn test_accept_filter_stops_growth() {
        let mut trie = Trie::new();
        trie.insert("朝阳区", 0);
        trie.insert("朝阳市", 1);
        // 只接受编号 1：朝阳 -> 1，朝阳区 -> 无可接受的词，停止
        let text = "朝阳区";
        let (id, len) = trie.longest_prefix_match(text, 2, |id| id == 1).unwrap();
        assert_eq!(id, 1);
        assert_eq!(&text[..len], "朝阳");
        assert_eq!(trie.longest_prefix_match(text, 2, |_| false), None);
    }
}
