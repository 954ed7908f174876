//! # Quote Normalization Module / 引号规范化模块
//!
//! Spreadsheet tools and translators routinely swap typographic quotes for
//! ASCII ones (and back). Source text is compared after folding those variants;
//! no other normalization is applied, so case, whitespace and accents still
//! have to match exactly.
//!
//! 电子表格工具和翻译人员经常在排版引号与 ASCII 引号之间互换。
//! 源文本在折叠这些变体后进行比较；不做其他规范化，大小写、空白和重音仍须完全一致。

use std::borrow::Cow;

/// Typographic quote characters and the ASCII character each one folds to.
/// 排版引号字符及其对应的 ASCII 字符。
const QUOTE_FOLDS: [(char, char); 6] = [
    ('\u{2018}', '\''), // left single quotation mark
    ('\u{2019}', '\''), // right single quotation mark
    ('\u{201C}', '"'),  // left double quotation mark
    ('\u{201D}', '"'),  // right double quotation mark
    ('\u{2032}', '\''), // prime
    ('\u{2033}', '"'),  // double prime
];

fn fold(c: char) -> char {
    QUOTE_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

/// Replaces typographic quote variants with their ASCII equivalents.
/// Borrows the input when there is nothing to replace.
///
/// 将排版引号变体替换为 ASCII 等价字符。无需替换时直接借用输入。
pub fn normalize_quotes(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| fold(c) != c) {
        Cow::Owned(text.chars().map(fold).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// `true` when both strings are equal after quote normalization.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    normalize_quotes(a) == normalize_quotes(b)
}
