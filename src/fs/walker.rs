//! In-place conversion of a directory tree.
//!
//! ## Selection
//!
//! - Directories whose path contains `node_modules`, `.git` or `.angular`
//!   anywhere are skipped with everything below them. The match is a plain
//!   substring test, so `.github/` is skipped too.
//! - Files are selected by name suffix: `.vue .js .tsx .jsx .ts .html`
//!   always, `.css .scss .sass` only with `styles` enabled.
//! - Hidden files and `.gitignore` rules are not consulted.
//!
//! ## Phases
//!
//! 1. **Collect**: walk the tree (single-threaded) and gather eligible paths
//! 2. **Convert**: read, rewrite and write each file on a bounded rayon pool
//!
//! The first I/O error stops the run and is returned. Files converted
//! before the failure stay converted; writes are not atomic.

use crate::error::{ConvertError, Result};
use crate::options::{ConvertOptions, Dialect};
use crate::rewrite::{Rewriter, RewriterConfig};
use crate::tables::ClassTables;

use colored::Colorize;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Directory name fragments that exclude a subtree.
pub const EXCLUDED_DIRECTORIES: &[&str] = &["node_modules", ".git", ".angular"];

/// Always converted.
pub const SOURCE_EXTENSIONS: &[&str] = &[".vue", ".js", ".tsx", ".jsx", ".ts", ".html"];

/// Converted only with `styles` enabled.
pub const STYLE_EXTENSIONS: &[&str] = &[".css", ".scss", ".sass"];

/// Returns `true` if `path` lies in an excluded directory.
pub fn is_excluded_dir(path: &Path) -> bool {
    let path = path.to_string_lossy();
    EXCLUDED_DIRECTORIES
        .iter()
        .any(|fragment| path.contains(fragment))
}

/// Returns `true` if a file with this name should be converted.
pub fn is_eligible(file_name: &str, styles: bool) -> bool {
    let matches = |exts: &[&str]| exts.iter().any(|ext| file_name.ends_with(ext));
    matches(SOURCE_EXTENSIONS) || (styles && matches(STYLE_EXTENSIONS))
}

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Files and directories seen below the root.
    pub entries_visited: usize,
    /// Eligible files read and written back.
    pub files_processed: usize,
    /// Processed files whose content differed after conversion.
    pub files_changed: usize,
}

/// Converts every eligible file below a root directory.
pub struct DirectoryWalker<'a> {
    root: PathBuf,
    options: &'a ConvertOptions,
    dialect: Dialect,
    rewriter: Rewriter<'a>,
    jobs: Option<usize>,
    progress: bool,
}

impl<'a> DirectoryWalker<'a> {
    /// Creates a walker for `root`.
    ///
    /// The rewriter configuration defaults to the dialect's profile
    /// (see [`RewriterConfig::for_dialect`]).
    ///
    /// # Errors
    ///
    /// - `RootNotFound`: `root` does not exist
    /// - `NotADirectory`: `root` is a file
    pub fn new(
        root: impl Into<PathBuf>,
        tables: &'a ClassTables,
        options: &'a ConvertOptions,
        dialect: Dialect,
    ) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(ConvertError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ConvertError::NotADirectory(root));
        }

        Ok(Self {
            rewriter: Rewriter::new(
                tables,
                options.prefix(),
                RewriterConfig::for_dialect(dialect),
            ),
            root,
            options,
            dialect,
            jobs: None,
            progress: true,
        })
    }

    /// Overrides the rewriter configuration.
    #[must_use]
    pub fn with_config(mut self, config: RewriterConfig) -> Self {
        self.rewriter = self.rewriter.with_config(config);
        self
    }

    /// Limits the worker pool to `jobs` threads (`0` = one per CPU).
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Enables or disables the per-file progress lines on stdout.
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Converts the tree and returns once every file has been written.
    pub fn run(&self) -> Result<WalkSummary> {
        if is_excluded_dir(&self.root) {
            log::warn!(
                "Root {} is inside an excluded directory, nothing to do",
                self.root.display()
            );
            return Ok(WalkSummary::default());
        }

        let (files, entries_visited) = self.collect_files()?;
        log::debug!(
            "Found {} eligible files ({} entries visited)",
            files.len(),
            entries_visited
        );

        let files_changed = self.convert_files(&files)?;

        Ok(WalkSummary {
            entries_visited,
            files_processed: files.len(),
            files_changed,
        })
    }

    fn collect_files(&self) -> Result<(Vec<PathBuf>, usize)> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(|e| {
                let is_dir = e.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && is_excluded_dir(e.path()))
            })
            .build();

        let mut files = Vec::new();
        let mut visited = 0;

        for entry in walker {
            let entry = entry?;
            if entry.depth() == 0 {
                continue;
            }

            visited += 1;
            log::debug!("Visiting {}", entry.path().display());

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            if is_eligible(&entry.file_name().to_string_lossy(), self.options.styles) {
                files.push(entry.into_path());
            }
        }

        Ok((files, visited))
    }

    fn convert_files(&self, files: &[PathBuf]) -> Result<usize> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs.unwrap_or(0))
            .thread_name(|i| format!("pf2tw-worker-{i}"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to start worker pool: {e}"))?;

        let changed = AtomicUsize::new(0);

        pool.install(|| {
            files.par_iter().try_for_each(|path| {
                if self.convert_file(path)? {
                    changed.fetch_add(1, Ordering::Relaxed);
                }
                Ok::<_, ConvertError>(())
            })
        })?;

        Ok(changed.into_inner())
    }

    /// Rewrites one file in place. Returns `true` if its content changed.
    fn convert_file(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let converted = self.rewriter.convert(&content, self.dialect);

        fs::write(path, &converted).map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        let changed = converted != content;
        if self.progress {
            let display = self.display_path(path);
            if changed {
                println!("{:>12} {}", "Converted".green().bold(), display);
            } else {
                println!("{:>12} {}", "Unchanged".dimmed(), display.dimmed());
            }
        }
        log::debug!("Processed {} (changed: {})", path.display(), changed);

        Ok(changed)
    }

    fn display_path(&self, path: &Path) -> String {
        let relative =
            pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }
}
