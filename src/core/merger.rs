// ============================================================================
// i18n-extract - 目录合并器
// ============================================================================
//
// 文件: src/core/merger.rs
// 职责: 将新提取的字符串追加到现有目录
// 边界:
//   - ✅ 按文本值去重
//   - ✅ 顺序生成自动键
//   - ✅ 键冲突检测（跳过已占用的键）
//   - ❌ 不应修改或删除已有条目
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use crate::models::catalog::{Catalog, GeneratedKey, KeyStrategy};
use crate::models::report::{AddedEntry, ExtractedStrings, MergeReport};

/// 目录合并器
#[derive(Debug, Clone)]
pub struct CatalogMerger {
    key_prefix: String,
    strategy: KeyStrategy,
}

impl CatalogMerger {
    pub fn new(key_prefix: impl Into<String>, strategy: KeyStrategy) -> Self {
        Self {
            key_prefix: key_prefix.into(),
            strategy,
        }
    }

    /// 追加目录中尚不存在的文本，返回新增条目
    pub fn merge(&self, catalog: &mut Catalog, extracted: &ExtractedStrings) -> MergeReport {
        let mut report = MergeReport::default();

        let pending: Vec<&String> = {
            let existing = catalog.values();
            extracted
                .iter()
                .filter(|text| !existing.contains(text.as_str()))
                .collect()
        };

        let mut next_index = self.strategy.first_index(catalog, &self.key_prefix);

        for text in pending {
            let key = loop {
                let candidate = GeneratedKey::new(&self.key_prefix, next_index).to_string();
                next_index += 1;
                if !catalog.contains_key(&candidate) {
                    break candidate;
                }
                tracing::warn!(key = %candidate, "generated key already in use, advancing");
                report.collisions.push(candidate);
            };

            catalog.append(key.clone(), text.clone());
            report.added.push(AddedEntry {
                key,
                text: text.clone(),
            });
        }

        report
    }
}
