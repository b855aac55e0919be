// ============================================================================
// i18n-extract - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Scanning
    ("extract.scanning", "Scanning {} for translatable strings..."),
    ("extract.found", "Found {} unique strings in {} files"),
    ("extract.progress", "{} files scanned, {}"),
    ("extract.skipped_file", "Skipped file that is not valid UTF-8: {}"),
    // Catalog
    ("catalog.created", "Catalog {} not found, a new one will be created"),
    ("catalog.loaded", "Loaded {} keys from {}"),
    ("catalog.corrupt", "{} is not valid JSON, starting fresh"),
    ("catalog.corrupt_detail", "Parse error: {}"),
    // Merging
    ("merge.collision", "Key {} is already in use, skipped"),
    ("merge.new_entry", "New entry"),
    // Summary
    ("summary.title", "Extraction summary"),
    ("summary.unique", "Unique strings found: {}"),
    ("summary.added", "New strings added: {}"),
    ("summary.total", "Total keys: {}"),
    ("summary.skipped", "Files skipped: {}"),
    ("summary.done", "Done. Added {} new strings to {}"),
    ("summary.dry_run", "Dry run, {} was not written"),
    // Check mode
    ("check.pending", "{} new strings are missing from the catalog"),
    ("check.clean", "Catalog is up to date"),
    // Init
    ("init.config_exists", "Config file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Config file created: {}"),
    // Errors
    ("error.run_failed", "Extraction failed: {}"),
];
