//! # Catalog Model Module / 目录模型模块
//!
//! Typed view of an Xcode String Catalog (`.xcstrings`). Only the fields this
//! tool reads or writes are modelled explicitly; everything else is kept in
//! flattened `extra` maps so a load/save cycle does not drop data. Key order is
//! preserved at every level.
//!
//! Only the top-level `strings` map is required. An entry that does not have
//! the expected shape is kept verbatim as [`StringsEntry::Other`] and ignored
//! by export and matching.
//!
//! Xcode String Catalog（`.xcstrings`）的类型化视图。仅显式建模本工具读写的字段；
//! 其余字段保存在展平的 `extra` 映射中，因此加载/保存不会丢失数据。各层级的键顺序均被保留。
//!
//! 只有顶层的 `strings` 映射是必需的。形状不符的条目会作为 [`StringsEntry::Other`]
//! 原样保留，并被导出和匹配忽略。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language code of the reference text translators work from.
/// 翻译人员所依据的参考文本的语言代码。
pub const SOURCE_LANGUAGE: &str = "en";

/// State written on every value this tool sets.
pub const TRANSLATED_STATE: &str = "translated";

/// The whole catalog document.
/// 整个目录文档。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// Key -> entry, in document order. Required: a document without it is malformed.
    /// 键 -> 条目，保持文档顺序。必需字段：缺失即视为格式错误。
    pub strings: IndexMap<String, StringsEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A value of the `strings` map.
/// `strings` 映射中的一个值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringsEntry {
    Entry(Entry),
    /// Anything that is not an entry object (`null`, a string, an object whose
    /// `localizations` is not a map, ...). Written back unchanged.
    /// 任何不是条目对象的值（`null`、字符串、`localizations` 不是映射的对象等）。原样写回。
    Other(Value),
}

impl StringsEntry {
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            StringsEntry::Entry(entry) => Some(entry),
            StringsEntry::Other(_) => None,
        }
    }

    pub fn as_entry_mut(&mut self) -> Option<&mut Entry> {
        match self {
            StringsEntry::Entry(entry) => Some(entry),
            StringsEntry::Other(_) => None,
        }
    }
}

/// One localizable key. Fields are declared in the order Xcode writes them;
/// metadata is carried as raw JSON since this tool never interprets it.
///
/// 一个可本地化的键。字段按 Xcode 写出的顺序声明；元数据以原始 JSON 保存，本工具不解释它们。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_state: Option<Value>,
    /// Absent for metadata-only keys; such entries are ignored by export and matching.
    /// 仅含元数据的键没有此字段；导出和匹配会忽略这类条目。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localizations: Option<IndexMap<String, Localization>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_translate: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-language record. Plural/device variations are carried through untouched.
/// 单个语言的记录。复数/设备变体原样保留。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_unit: Option<StringUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// `None` when the unit has no `value` field; the language then counts as untranslated.
    /// 单元没有 `value` 字段时为 `None`；此时该语言视为未翻译。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    /// Parses a catalog document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Serializes with two-space indentation and literal non-ASCII characters.
    /// 以两个空格缩进序列化，非 ASCII 字符按原样输出。
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.strings.get(key)?.as_entry()
    }

    /// Iterates over entries that carry a localization map, in document order.
    /// 按文档顺序遍历带有本地化映射的条目。
    pub fn localizable(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Localization>)> {
        self.strings.iter().filter_map(|(key, slot)| {
            slot.as_entry()?
                .localizations
                .as_ref()
                .map(|locs| (key.as_str(), locs))
        })
    }

    pub fn string_unit(&self, key: &str, language: &str) -> Option<&StringUnit> {
        self.entry(key)?
            .localizations
            .as_ref()?
            .get(language)?
            .string_unit
            .as_ref()
    }

    /// Returns the string-unit value of `key` in `language`, or `None` when untranslated.
    /// 返回 `key` 在 `language` 下的值；未翻译时返回 `None`。
    pub fn value(&self, key: &str, language: &str) -> Option<&str> {
        self.string_unit(key, language)?.value.as_deref()
    }

    /// Iterates over `(key, source text)` for every entry with a source-language
    /// string unit. A unit without a value yields an empty source text.
    pub fn source_texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.localizable().filter_map(|(key, locs)| {
            locs.get(SOURCE_LANGUAGE)
                .and_then(|loc| loc.string_unit.as_ref())
                .map(|unit| (key, unit.value.as_deref().unwrap_or_default()))
        })
    }

    /// Sets `key`'s `language` value and marks it translated, creating the
    /// localization map and string unit as needed. Returns `false` when the key
    /// is not in the catalog or is not an entry object.
    ///
    /// 设置 `key` 在 `language` 下的值并标记为已翻译，必要时创建本地化映射和字符串单元。
    /// 若目录中没有该键或其不是条目对象则返回 `false`。
    pub fn set_translation(&mut self, key: &str, language: &str, value: &str) -> bool {
        let Some(entry) = self.strings.get_mut(key).and_then(StringsEntry::as_entry_mut) else {
            return false;
        };
        let unit = entry
            .localizations
            .get_or_insert_with(IndexMap::new)
            .entry(language.to_string())
            .or_default()
            .string_unit
            .get_or_insert_with(StringUnit::default);
        unit.value = Some(value.to_string());
        unit.state = Some(TRANSLATED_STATE.to_string());
        true
    }
}
