// ============================================================================
// i18n-extract - 源码扫描器
// ============================================================================
//
// 文件: src/core/scanner.rs
// 职责: 遍历源码目录并提取输出函数中的字符串字面量
// 边界:
//   - ✅ 源码目录遍历与忽略规则
//   - ✅ 按行模式匹配与字符串提取
//   - ✅ 非 UTF-8 文件处理
//   - ❌ 不应包含目录读写逻辑
//   - ❌ 不应包含合并逻辑
//   - ❌ 不应包含结果输出
//
// 匹配规则:
//   <函数名>( <可选空白> "<内容>"
//   内容截止于下一个双引号，不处理转义；跨行字面量不匹配。
//
// ============================================================================

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ExtractError, Result};
use crate::models::config::ScanConfig;
use crate::models::report::ScanReport;

/// 扫描进度回调：当前文件与已扫描文件数
pub type ProgressCallback<'a> = Box<dyn Fn(&Path, usize) + 'a>;

/// 根据函数名列表构建提取模式
pub fn build_pattern<S: AsRef<str>>(functions: &[S]) -> Result<Regex> {
    let alternatives = functions
        .iter()
        .map(|name| regex::escape(name.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r#"(?:{})\(\s*"([^"]+)""#, alternatives);
    Ok(Regex::new(&pattern)?)
}

/// 源码扫描器
pub struct SourceScanner<'a> {
    /// 源码根目录
    root: PathBuf,
    /// 扩展名（不含点）
    extensions: Vec<String>,
    /// 忽略模式
    ignore: Vec<glob::Pattern>,
    /// 提取模式
    pattern: Regex,
    skip_invalid_utf8: bool,
    progress: Option<ProgressCallback<'a>>,
}

impl<'a> SourceScanner<'a> {
    /// 从扫描配置创建扫描器
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let ignore = config
            .ignore
            .iter()
            .filter_map(|raw| match glob::Pattern::new(raw) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    tracing::warn!(pattern = %raw, error = %err, "ignoring invalid ignore pattern");
                    None
                }
            })
            .collect();

        Ok(Self {
            root: config.root.clone(),
            extensions: config.extensions.clone(),
            ignore,
            pattern: build_pattern(&config.functions)?,
            skip_invalid_utf8: config.skip_invalid_utf8,
            progress: None,
        })
    }

    /// 设置进度回调
    pub fn with_progress(mut self, callback: ProgressCallback<'a>) -> Self {
        self.progress = Some(callback);
        self
    }

    /// 扫描整个源码目录
    pub fn scan(&self) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        for entry in walker {
            let entry = entry.map_err(|source| {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                ExtractError::Walk { path, source }
            })?;

            if !Self::is_source_file(&entry) || !self.has_source_extension(entry.path()) {
                continue;
            }

            let path = entry.path();
            match self.scan_file(path)? {
                Some(matches) => {
                    tracing::debug!(path = %path.display(), matches = matches.len(), "scanned file");
                    report.total_matches += matches.len();
                    report.strings.extend(matches);
                    report.files_scanned += 1;
                }
                None => report.skipped_files.push(path.to_path_buf()),
            }

            if let Some(progress) = &self.progress {
                progress(path, report.files_scanned);
            }
        }

        Ok(report)
    }

    /// 扫描单个文件；非 UTF-8 且允许跳过时返回 None
    pub fn scan_file(&self, path: &Path) -> Result<Option<Vec<String>>> {
        let file = File::open(path).map_err(|source| ExtractError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;

        let mut matches = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    if self.skip_invalid_utf8 {
                        tracing::warn!(path = %path.display(), "skipping file that is not valid UTF-8");
                        return Ok(None);
                    }
                    return Err(ExtractError::InvalidUtf8 {
                        path: path.to_path_buf(),
                    });
                }
                Err(source) => {
                    return Err(ExtractError::ReadSource {
                        path: path.to_path_buf(),
                        source,
                    })
                }
            };
            matches.extend(self.extract_line(&line));
        }

        Ok(Some(matches))
    }

    /// 提取单行中的所有字符串
    pub fn extract_line(&self, line: &str) -> Vec<String> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 普通文件，或指向普通文件的符号链接（目录链接不跟随）
    fn is_source_file(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|wanted| wanted == ext))
            .unwrap_or(false)
    }

    /// 检查条目是否被忽略（整棵子树跳过）
    fn is_ignored(&self, entry: &DirEntry) -> bool {
        if self.ignore.is_empty() || entry.depth() == 0 {
            return false;
        }

        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or(entry.path());
        let file_name = entry.file_name().to_string_lossy();

        self.ignore
            .iter()
            .any(|pattern| pattern.matches_path(relative) || pattern.matches(&file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scanner_for(root: &Path) -> SourceScanner<'static> {
        let config = ScanConfig {
            root: root.to_path_buf(),
            ..ScanConfig::default()
        };
        SourceScanner::new(&config).unwrap()
    }

    #[test]
    fn recognizes_default_functions_only() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = scanner_for(dir.path());

        assert_eq!(scanner.extract_line(r#"print_err("Oops");"#), vec!["Oops"]);
        assert_eq!(scanner.extract_line(r#"    println!("Done");"#), vec!["Done"]);
        assert!(scanner.extract_line(r#"log_debug("ignored");"#).is_empty());
        assert!(scanner.extract_line(r#"let s = "plain";"#).is_empty());
    }

    #[test]
    fn captures_every_match_on_a_line_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = scanner_for(dir.path());

        let line = r#"print_info( "  Loading  ", v); print_warn("Careful")"#;
        assert_eq!(scanner.extract_line(line), vec!["Loading", "Careful"]);
        assert!(scanner.extract_line(r#"print_ok("   ")"#).is_empty());
        assert!(scanner.extract_line(r#"print_ok("")"#).is_empty());
    }

    #[test]
    fn escaped_quotes_stop_the_capture() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = scanner_for(dir.path());
        assert_eq!(
            scanner.extract_line(r#"panic!("say \"hi\"")"#),
            vec![r"say \"]
        );
    }

    #[test]
    fn scan_walks_tree_and_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("commands");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("main.rs"), "println!(\"Done\");\nprint_err(\"Oops\");\n").unwrap();
        fs::write(nested.join("add.rs"), "print_ok(\"Done\");\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "println!(\"Skipped\");\n").unwrap();

        let report = scanner_for(dir.path()).scan().unwrap();
        let strings: Vec<_> = report.strings.iter().cloned().collect();
        assert_eq!(strings, vec!["Done", "Oops"]);
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.total_matches, 3);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_scanned_but_linked_dirs_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        let root = dir.path().join("src");
        fs::create_dir_all(&real).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(real.join("l.rs"), "print_ok(\"Linked\");\n").unwrap();
        std::os::unix::fs::symlink(real.join("l.rs"), root.join("link.rs")).unwrap();
        std::os::unix::fs::symlink(&real, root.join("linked_dir")).unwrap();

        let report = scanner_for(&root).scan().unwrap();
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.total_matches, 1);
        assert!(report.strings.contains("Linked"));
    }

    #[test]
    fn invalid_utf8_is_skipped_or_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.rs"), b"println!(\"\xff\xfe\");\n").unwrap();
        fs::write(dir.path().join("good.rs"), "println!(\"Fine\");\n").unwrap();

        let report = scanner_for(dir.path()).scan().unwrap();
        assert_eq!(report.skipped_files, vec![dir.path().join("bad.rs")]);
        assert!(report.strings.contains("Fine"));

        let strict = ScanConfig {
            root: dir.path().to_path_buf(),
            skip_invalid_utf8: false,
            ..ScanConfig::default()
        };
        let err = SourceScanner::new(&strict).unwrap().scan().unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8 { .. }));
    }

    #[test]
    fn ignore_patterns_prune_subtrees() {
        let dir = tempfile::tempdir().unwrap();
        let generated = dir.path().join("generated");
        fs::create_dir_all(&generated).unwrap();
        fs::write(generated.join("out.rs"), "println!(\"Generated\");\n").unwrap();
        fs::write(dir.path().join("lib.rs"), "println!(\"Kept\");\n").unwrap();

        let config = ScanConfig {
            root: dir.path().to_path_buf(),
            ignore: vec!["generated".to_string()],
            ..ScanConfig::default()
        };
        let report = SourceScanner::new(&config).unwrap().scan().unwrap();
        assert_eq!(report.strings.len(), 1);
        assert!(report.strings.contains("Kept"));
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent");
        let err = scanner_for(&absent).scan().unwrap_err();
        match err {
            ExtractError::Walk { path, .. } => assert_eq!(path, absent),
            other => panic!("unexpected error: {other}"),
        }
    }
}
