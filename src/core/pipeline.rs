// ============================================================================
// i18n-extract - 提取流水线
// ============================================================================
//
// 文件: src/core/pipeline.rs
// 职责: 串联扫描、加载、合并、写入四个阶段
// 边界:
//   - ✅ 阶段调度与结果汇总
//   - ✅ 只在全部计算完成后写入目录
//   - ❌ 不应包含结果输出
//   - ❌ 不应包含 CLI 参数处理
//
// 流程:
// 1. 扫描源码目录，得到有序去重的字符串集合
// 2. 加载现有目录（缺失/损坏时为空）
// 3. 合并新字符串，生成自动键
// 4. 写入目录（dry-run 模式跳过）
//
// ============================================================================

use std::path::Path;

use crate::core::merger::CatalogMerger;
use crate::core::scanner::{ProgressCallback, SourceScanner};
use crate::core::store::CatalogStore;
use crate::error::Result;
use crate::models::config::Config;
use crate::models::report::RunReport;

/// 提取流水线
pub struct ExtractionPipeline<'a> {
    config: &'a Config,
    /// 只计算不写入
    dry_run: bool,
    progress: Option<ProgressCallback<'a>>,
}

impl<'a> ExtractionPipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            dry_run: false,
            progress: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_progress(mut self, callback: impl Fn(&Path, usize) + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// 执行完整流程
    pub fn run(self) -> Result<RunReport> {
        let mut scanner = SourceScanner::new(&self.config.scan)?;
        if let Some(progress) = self.progress {
            scanner = scanner.with_progress(progress);
        }
        let scan = scanner.scan()?;
        tracing::debug!(
            files = scan.files_scanned,
            unique = scan.strings.len(),
            "scan finished"
        );

        let store = CatalogStore::new(&self.config.catalog.path);
        let loaded = store.load()?;
        let mut catalog = loaded.catalog;
        let keys_before = catalog.len();

        let merger = CatalogMerger::new(
            self.config.catalog.key_prefix.as_str(),
            self.config.catalog.key_strategy,
        );
        let merge = merger.merge(&mut catalog, &scan.strings);

        if !self.dry_run {
            store.save(&catalog)?;
        }

        Ok(RunReport {
            scan,
            load_status: loaded.status,
            catalog_path: store.path().to_path_buf(),
            keys_before,
            keys_after: catalog.len(),
            merge,
            written: !self.dry_run,
        })
    }
}
