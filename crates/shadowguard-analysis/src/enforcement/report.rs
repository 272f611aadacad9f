//! Kept-duplicate report.

use std::path::Path;

use serde::Serialize;

use super::partition::Partition;
use crate::duplicates::DuplicateEntry;
use crate::policy::{ExclusionPolicy, OnDuplicate};

/// Inputs the report needs beyond the partition itself.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub main_root: &'a Path,
    pub clean_root: &'a Path,
    pub policy: ExclusionPolicy,
    /// Kept entries listed in full before truncation.
    pub max_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub kept: usize,
    pub text: String,
}

/// Build the report for kept duplicates. Returns `None` when nothing is kept
/// or the on-duplicate action is `none`.
pub fn build_report(
    ctx: &ReportContext<'_>,
    duplicates: &[DuplicateEntry],
    partition: &Partition,
) -> Option<DuplicateReport> {
    if partition.kept.is_empty() || ctx.policy.on_duplicate == OnDuplicate::None {
        return None;
    }

    let kept = partition.kept.len();
    let mut text = String::new();
    text.push_str(&format!(
        "[dup-fqcn] duplicate FQCN(s) will remain in the artifact (NOT excluded) (kept={kept})\n"
    ));
    text.push_str(&format!("  main : {}\n", ctx.main_root.display()));
    text.push_str(&format!("  clean: {}\n", ctx.clean_root.display()));
    text.push_str(&format!(
        "  filter={}, onDup={}, total={}, excluded(auto)={}, excluded(hard)={}, kept={}\n",
        ctx.policy.filter,
        ctx.policy.on_duplicate,
        partition.total(),
        partition.auto_excluded.len(),
        partition.hard_excluded.len(),
        kept
    ));
    text.push_str(
        "  hint: run with mode=all or add patterns to the manual exclusion list \
         to prevent classpath shadowing.\n",
    );

    for fqcn in partition.kept.iter().take(ctx.max_entries) {
        text.push_str(&format!("  [keep] {fqcn}\n"));
        if let Some(entry) = duplicates.iter().find(|d| &d.fqcn == fqcn) {
            text.push_str(&format!("    main : {}\n", entry.main_file.display()));
            text.push_str(&format!("    clean: {}\n", entry.clean_file.display()));
        }
    }
    if kept > ctx.max_entries {
        text.push_str(&format!("  ... ({} more)\n", kept - ctx.max_entries));
    }

    Some(DuplicateReport { kept, text })
}
