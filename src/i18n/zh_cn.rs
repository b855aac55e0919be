// ============================================================================
// i18n-extract - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 扫描
    ("extract.scanning", "正在扫描 {} 中的可翻译字符串..."),
    ("extract.found", "找到 {} 个唯一字符串（扫描 {} 个文件）"),
    ("extract.progress", "已扫描 {} 个文件，{}"),
    ("extract.skipped_file", "已跳过非 UTF-8 文件: {}"),
    // 目录
    ("catalog.created", "未找到目录 {}，将新建"),
    ("catalog.loaded", "已加载 {} 个键，来自 {}"),
    ("catalog.corrupt", "{} 不是有效的 JSON，从空目录开始"),
    ("catalog.corrupt_detail", "解析错误: {}"),
    // 合并
    ("merge.collision", "键 {} 已被占用，已跳过"),
    ("merge.new_entry", "新增条目"),
    // 汇总
    ("summary.title", "提取汇总"),
    ("summary.unique", "唯一字符串: {}"),
    ("summary.added", "新增字符串: {}"),
    ("summary.total", "键总数: {}"),
    ("summary.skipped", "跳过文件: {}"),
    ("summary.done", "完成。新增 {} 个字符串到 {}"),
    ("summary.dry_run", "试运行，未写入 {}"),
    // 检查模式
    ("check.pending", "目录中缺少 {} 个新字符串"),
    ("check.clean", "目录已是最新"),
    // 初始化
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "配置文件已创建: {}"),
    // 错误
    ("error.run_failed", "提取失败: {}"),
];
