// ============================================================================
// i18n-extract - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 工具自身控制台消息的翻译管理
// 边界:
//   - ✅ 翻译表选择与查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 语言切换支持
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::OnceLock;

/// 界面语言（进程内只设置一次）
static LANGUAGE: OnceLock<String> = OnceLock::new();

/// 设置界面语言；重复设置无效
pub fn set_language(language: &str) {
    let _ = LANGUAGE.set(language.to_string());
}

fn table_for(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    }
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    let language = LANGUAGE.get().map(String::as_str).unwrap_or("en_us");

    table_for(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数的翻译辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    for arg in args.iter() {
        // 替换第一个 {} 占位符
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_define_the_same_keys() {
        let en: HashSet<_> = en_us::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        let zh: HashSet<_> = zh_cn::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, zh);
    }

    #[test]
    fn placeholders_fill_in_order() {
        let text = format_with_args("{} of {}".to_string(), vec!["1".into(), "2".into()]);
        assert_eq!(text, "1 of 2");
    }
}
