use crate::error::Result;
use crate::fs::{DirectoryWalker, WalkSummary};
use crate::options::{ConvertOptions, Dialect};
use crate::prompt::resolve_root_directory;
use crate::rewrite::{NormalizationScope, RewriterConfig};
use crate::tables::ClassTables;
use crate::validation::validate_prefix;
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct TranslateArgs {
    /// Also convert style sheets (.css, .scss, .sass)
    #[arg(long, short = 's')]
    pub styles: bool,

    /// Prefix prepended to every emitted Tailwind class (e.g. "tw-")
    #[arg(long, short = 'p', value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Number of files converted in parallel (defaults to the CPU count)
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<usize>,
}

impl TranslateArgs {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(self.styles, self.prefix.clone())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct LegacyTranslateArgs {
    #[command(flatten)]
    pub common: TranslateArgs,

    /// Rename 2.x classes only inside quoted strings instead of the whole file
    #[arg(long)]
    pub scoped_normalization: bool,
}

impl LegacyTranslateArgs {
    pub fn scope(&self) -> NormalizationScope {
        if self.scoped_normalization {
            NormalizationScope::QuotedLiterals
        } else {
            NormalizationScope::Document
        }
    }
}

/// Validates the arguments, asks for the root directory and converts it.
pub fn execute(args: &TranslateArgs, dialect: Dialect, scope: NormalizationScope) -> Result<()> {
    if let Some(prefix) = &args.prefix {
        validate_prefix(prefix)?;
    }

    let cwd = std::env::current_dir()?;
    let root = resolve_root_directory(&cwd)?;

    let summary = translate_directory(&root, args, dialect, scope)?;

    println!(
        "\n{} {} ({} of {} files changed)",
        "✓ Translation completed".green().bold(),
        format!("{} → Tailwind CSS", dialect.label()).dimmed(),
        summary.files_changed,
        summary.files_processed
    );

    Ok(())
}

/// Converts every eligible file below `root` without prompting.
pub fn translate_directory(
    root: &Path,
    args: &TranslateArgs,
    dialect: Dialect,
    scope: NormalizationScope,
) -> Result<WalkSummary> {
    let tables = ClassTables::bundled()?;
    let options = args.options();
    let config = RewriterConfig::for_dialect(dialect).with_normalization_scope(scope);

    log::info!(
        "Translating {} classes in {}",
        dialect.label(),
        root.display()
    );
    log::debug!("Options: {:?}, config: {:?}", options, config);

    let mut walker = DirectoryWalker::new(root, tables, &options, dialect)?.with_config(config);
    if let Some(jobs) = args.jobs {
        walker = walker.with_jobs(jobs);
    }

    let summary = walker.run()?;
    log::debug!("Summary: {:?}", summary);
    Ok(summary)
}
