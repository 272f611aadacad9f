//! End-to-end resolver: scan both roots, detect and classify duplicates,
//! partition them under the policy, write the pattern file, and report.
//!
//! The resolver never terminates the process. It returns a `Resolution`
//! whose `outcome` tells the caller whether to continue, warn, or abort.

use std::path::{Path, PathBuf};

use serde::Serialize;
use shadowguard_core::config::ShadowguardConfig;
use shadowguard_core::errors::{EnforcementError, PipelineError};

use crate::duplicates::{find_duplicates, ClassIndex, Collision, DuplicateEntry};
use crate::enforcement::{
    build_report, partition, DuplicateReport, Outcome, Partition, ReportContext,
};
use crate::exclusions::{ManualExclusions, PatternFile};
use crate::policy::{mode_label, parse_policy, ExclusionPolicy, PolicyEngine};
use crate::scanner::SourceRoot;

/// Everything one resolver run needs.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub main: SourceRoot,
    pub clean: SourceRoot,
    /// Raw mode string; `None` means the default policy.
    pub mode: Option<String>,
    pub manual: ManualExclusions,
    pub output: PathBuf,
    pub report_max_entries: usize,
}

impl ResolverOptions {
    /// Resolve options from a loaded config, with paths rebased on `project_dir`.
    pub fn from_config(config: &ShadowguardConfig, project_dir: &Path) -> Self {
        let extension = config.scan.effective_extension();
        Self {
            main: SourceRoot::new(config.scan.effective_main_root(project_dir), extension),
            clean: SourceRoot::new(config.scan.effective_clean_root(project_dir), extension),
            mode: config.policy.mode.clone(),
            manual: ManualExclusions::new(config.exclusions.effective_manual()),
            output: config.output.effective_path(project_dir),
            report_max_entries: config.report.effective_max_entries(),
        }
    }
}

/// The result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub mode_label: String,
    pub policy: ExclusionPolicy,
    pub main_root: PathBuf,
    pub clean_root: PathBuf,
    pub output: PathBuf,
    pub duplicates: Vec<DuplicateEntry>,
    pub partition: Partition,
    /// Generated patterns in file order.
    pub patterns: Vec<String>,
    pub report: Option<DuplicateReport>,
    pub outcome: Outcome,
    /// Within-root FQCN collisions in the main root, then the clean root.
    pub collisions: Vec<Collision>,
}

impl Resolution {
    /// Convert a `Fail` outcome into an error carrying the report.
    pub fn into_result(self) -> Result<Self, EnforcementError> {
        match (&self.outcome, &self.report) {
            (Outcome::Fail, Some(report)) => Err(EnforcementError::UnresolvedDuplicates {
                kept: report.kept,
                report: report.text.clone(),
            }),
            _ => Ok(self),
        }
    }

    /// The pattern file this resolution generates.
    pub fn pattern_file(&self) -> PatternFile {
        PatternFile::new(
            &self.mode_label,
            &self.policy,
            self.partition.auto_excluded.iter().map(String::as_str),
        )
    }

    /// JSON summary for machine consumers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct Resolver {
    options: ResolverOptions,
}

impl Resolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// Analyze both roots without touching the output file.
    pub fn analyze(&self) -> Result<Resolution, PipelineError> {
        let opts = &self.options;
        let policy = parse_policy(opts.mode.as_deref());
        let label = mode_label(opts.mode.as_deref());
        tracing::debug!(mode = %label, %policy, "resolved policy");

        let (duplicates, collisions) = if opts.main.exists() && opts.clean.exists() {
            let main = ClassIndex::build(&opts.main)?;
            let clean = ClassIndex::build(&opts.clean)?;
            tracing::debug!(
                main = main.len(),
                clean = clean.len(),
                "indexed source roots"
            );
            let duplicates = find_duplicates(&main, &clean)?;
            let collisions: Vec<Collision> = main
                .collisions()
                .iter()
                .chain(clean.collisions())
                .cloned()
                .collect();
            (duplicates, collisions)
        } else {
            tracing::info!(
                main_root = %opts.main.path.display(),
                clean_root = %opts.clean.path.display(),
                "[dup-fqcn] skip (roots missing)"
            );
            (Vec::new(), Vec::new())
        };

        let engine = PolicyEngine::new(policy);
        let partition = partition(&duplicates, &engine, &opts.manual);
        let pattern_file = PatternFile::new(
            &label,
            &policy,
            partition.auto_excluded.iter().map(String::as_str),
        );

        let ctx = ReportContext {
            main_root: &opts.main.path,
            clean_root: &opts.clean.path,
            policy,
            max_entries: opts.report_max_entries,
        };
        let report = build_report(&ctx, &duplicates, &partition);
        let outcome = Outcome::decide(policy.on_duplicate, partition.kept.len());

        Ok(Resolution {
            mode_label: label,
            policy,
            main_root: opts.main.path.clone(),
            clean_root: opts.clean.path.clone(),
            output: opts.output.clone(),
            duplicates,
            partition,
            patterns: pattern_file.patterns().to_vec(),
            report,
            outcome,
            collisions,
        })
    }

    /// Analyze, then write the pattern file. The file is written before the
    /// outcome is known to the caller, so a failing run still leaves a
    /// current pattern file behind.
    pub fn run(&self) -> Result<Resolution, PipelineError> {
        let resolution = self.analyze()?;
        resolution.pattern_file().write(&resolution.output)?;

        tracing::info!(
            "[dup-fqcn] found {} duplicate(s); generated {} exclude(s) at: {} (hardExcluded={}, kept={})",
            resolution.duplicates.len(),
            resolution.patterns.len(),
            resolution.output.display(),
            resolution.partition.hard_excluded.len(),
            resolution.partition.kept.len()
        );

        Ok(resolution)
    }
}
