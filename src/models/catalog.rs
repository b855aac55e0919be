// ============================================================================
// i18n-extract - 翻译目录数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: 翻译目录与自动生成键的数据结构定义
// 边界:
//   - ✅ 有序 key → 文本映射
//   - ✅ 自动生成键的格式化与解析
//   - ✅ 键生成策略枚举
//   - ❌ 不应包含文件读写逻辑
//   - ❌ 不应包含合并算法
//
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// 默认自动键前缀
pub const DEFAULT_KEY_PREFIX: &str = "auto.msg";

/// 翻译目录：保持插入顺序的 key → 文本映射
///
/// 非字符串的值原样保留并写回，但不参与文本去重。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 追加条目；键已存在时不覆盖，返回 false
    pub fn append(&mut self, key: impl Into<String>, text: impl Into<String>) -> bool {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(Value::String(text.into()));
                true
            }
        }
    }

    /// 所有已存在的字符串文本（不论键）
    pub fn values(&self) -> HashSet<&str> {
        self.entries.values().filter_map(Value::as_str).collect()
    }

    /// 全部条目，包括非字符串值
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 字符串值的条目
    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|text| (k.as_str(), text)))
    }

    /// 目录中指定前缀下最大的自动键序号
    pub fn highest_generated_index(&self, prefix: &str) -> Option<usize> {
        self.entries
            .keys()
            .filter_map(|key| GeneratedKey::parse(key, prefix))
            .map(|key| key.index)
            .max()
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }
}

/// 自动生成的键，格式为 `<prefix>.NNN`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey<'a> {
    pub prefix: &'a str,
    pub index: usize,
}

impl<'a> GeneratedKey<'a> {
    pub fn new(prefix: &'a str, index: usize) -> Self {
        Self { prefix, index }
    }

    /// 从现有键解析；只接受纯数字后缀
    pub fn parse(key: &str, prefix: &'a str) -> Option<Self> {
        let suffix = key.strip_prefix(prefix)?.strip_prefix('.')?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        suffix.parse().ok().map(|index| Self { prefix, index })
    }
}

impl fmt::Display for GeneratedKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.prefix, self.index)
    }
}

/// 新键起始序号的计算方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStrategy {
    /// 从当前条目数 + 1 开始
    #[default]
    Sequential,
    /// 从 max(条目数, 已有最大自动序号) + 1 开始
    AfterHighest,
}

impl KeyStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyStrategy::Sequential => "sequential",
            KeyStrategy::AfterHighest => "after-highest",
        }
    }

    /// 计算本次运行的首个序号
    ///
    /// 已有最大序号无法再递增时回退到 `Sequential`。
    pub fn first_index(&self, catalog: &Catalog, prefix: &str) -> usize {
        let sequential = catalog.len() + 1;
        match self {
            KeyStrategy::Sequential => sequential,
            KeyStrategy::AfterHighest => {
                let highest = catalog.highest_generated_index(prefix).unwrap_or(0);
                catalog.len().max(highest).checked_add(1).unwrap_or_else(|| {
                    tracing::warn!(highest, "highest generated key cannot be advanced, using sequential keys");
                    sequential
                })
            }
        }
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_key_is_zero_padded() {
        assert_eq!(GeneratedKey::new("auto.msg", 2).to_string(), "auto.msg.002");
        assert_eq!(GeneratedKey::new("auto.msg", 1000).to_string(), "auto.msg.1000");
    }

    #[test]
    fn parse_rejects_foreign_keys() {
        assert_eq!(GeneratedKey::parse("auto.msg.017", "auto.msg").map(|k| k.index), Some(17));
        assert!(GeneratedKey::parse("auto.msg.", "auto.msg").is_none());
        assert!(GeneratedKey::parse("auto.msg.1a", "auto.msg").is_none());
        assert!(GeneratedKey::parse("auto.msgx.001", "auto.msg").is_none());
        assert!(GeneratedKey::parse("greeting", "auto.msg").is_none());
    }

    #[test]
    fn append_never_overwrites() {
        let mut catalog = Catalog::new();
        assert!(catalog.append("greeting", "Hello"));
        assert!(!catalog.append("greeting", "Hi"));
        assert_eq!(catalog.get("greeting"), Some("Hello"));
    }

    #[test]
    fn first_index_by_strategy() {
        let catalog: Catalog = [("a", "A"), ("auto.msg.009", "B")].into_iter().collect();
        assert_eq!(KeyStrategy::Sequential.first_index(&catalog, "auto.msg"), 3);
        assert_eq!(KeyStrategy::AfterHighest.first_index(&catalog, "auto.msg"), 10);
    }

    #[test]
    fn after_highest_falls_back_when_suffix_is_at_the_limit() {
        let key = format!("auto.msg.{}", usize::MAX);
        let catalog: Catalog = [(key.as_str(), "Edited")].into_iter().collect();
        assert_eq!(KeyStrategy::AfterHighest.first_index(&catalog, "auto.msg"), 2);
    }

    #[test]
    fn non_string_values_are_kept_but_not_texts() {
        let catalog: Catalog =
            serde_json::from_str(r#"{"greeting": "Hello", "count": 3, "nested": {"a": "b"}}"#)
                .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.values(), HashSet::from(["Hello"]));
        assert_eq!(catalog.texts().collect::<Vec<_>>(), vec![("greeting", "Hello")]);
        assert_eq!(catalog.get("count"), None);
        assert!(catalog.contains_key("count"));
    }
}
