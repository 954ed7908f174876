//! # Source Matcher Module / 源文本匹配模块
//!
//! Resolves a CSV row's English text to the catalog key it came from.
//! A match is equality after quote normalization; when several keys share the
//! same normalized source text, the first one in catalog order wins.
//!
//! 将 CSV 行中的英文文本解析为其来源的目录键。匹配即引号规范化后的相等；
//! 若多个键的规范化源文本相同，按目录顺序取第一个。

use std::collections::HashMap;

use crate::core::catalog::Catalog;
use crate::core::normalize::normalize_quotes;

/// A resolved key.
/// 已解析的键。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'a> {
    pub key: &'a str,
    /// The catalog text differs from the lookup text and only matched after
    /// quote normalization. Diagnostic only; it never changes the outcome.
    /// 目录文本与查询文本不同，仅在引号规范化后才匹配。仅用于诊断，不影响结果分类。
    pub normalized: bool,
}

/// Linear scan over the catalog's source texts.
/// 对目录源文本进行线性扫描。
pub fn find_key_for_source<'a>(catalog: &'a Catalog, source: &str) -> Option<KeyMatch<'a>> {
    let target = normalize_quotes(source);
    catalog
        .source_texts()
        .find(|(_, text)| normalize_quotes(text) == target)
        .map(|(key, text)| KeyMatch {
            key,
            normalized: text != source,
        })
}

/// One-time reverse index from normalized source text to the first key that
/// carries it. Lookups give the same answers as [`find_key_for_source`].
///
/// 从规范化源文本到首个对应键的一次性反向索引。查询结果与 [`find_key_for_source`] 相同。
#[derive(Debug)]
pub struct SourceIndex<'a> {
    by_text: HashMap<String, (&'a str, &'a str)>,
}

impl<'a> SourceIndex<'a> {
    pub fn build(catalog: &'a Catalog) -> Self {
        let mut by_text = HashMap::new();
        for (key, text) in catalog.source_texts() {
            by_text
                .entry(normalize_quotes(text).into_owned())
                .or_insert((key, text));
        }
        Self { by_text }
    }

    pub fn lookup(&self, source: &str) -> Option<KeyMatch<'a>> {
        self.by_text
            .get(&*normalize_quotes(source))
            .map(|&(key, text)| KeyMatch {
                key,
                normalized: text != source,
            })
    }

    pub fn len(&self) -> usize {
        self.by_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_text.is_empty()
    }
}
