// ============================================================================
// i18n-extract - 运行结果数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 扫描、加载、合并和整体运行结果的数据结构
// 边界:
//   - ✅ 扫描结果（提取集合与统计）
//   - ✅ 目录加载状态
//   - ✅ 合并结果与整体运行汇总
//   - ❌ 不应包含结果输出逻辑
//
// ============================================================================

use std::collections::BTreeSet;
use std::path::PathBuf;

/// 一次扫描提取到的字符串集合（去重、字典序）
pub type ExtractedStrings = BTreeSet<String>;

/// 扫描结果
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// 提取到的唯一字符串
    pub strings: ExtractedStrings,
    /// 扫描的文件数
    pub files_scanned: usize,
    /// 因编码问题跳过的文件
    pub skipped_files: Vec<PathBuf>,
    /// 原始匹配次数（去重前）
    pub total_matches: usize,
}

/// 目录加载状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// 文件不存在，新建空目录
    Missing,
    /// 成功加载
    Loaded,
    /// 文件损坏，已丢弃并从空目录开始
    Corrupt(String),
}

/// 新增的目录条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedEntry {
    pub key: String,
    pub text: String,
}

/// 合并结果
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// 本次新增的条目，按提取顺序
    pub added: Vec<AddedEntry>,
    /// 因键已被占用而跳过的序号
    pub collisions: Vec<String>,
}

/// 整体运行汇总
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scan: ScanReport,
    pub load_status: LoadStatus,
    pub catalog_path: PathBuf,
    pub keys_before: usize,
    pub keys_after: usize,
    pub merge: MergeReport,
    /// 目录文件是否已写入
    pub written: bool,
}

impl RunReport {
    pub fn added_count(&self) -> usize {
        self.keys_after - self.keys_before
    }
}
