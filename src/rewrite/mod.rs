//! Class rewriting for a single file's content.
//!
//! Two passes, applied in order:
//!
//! 1. **`normalize`** (PrimeFlex 2.x only): regex renames from 2.x to 3.x
//! 2. **`literal`**: dictionary translation of every quoted class list
//!
//! Both passes are pure `&str → String` functions; file I/O lives in
//! [`crate::fs`].

pub mod literal;
pub mod normalize;
pub mod prefix;

pub use literal::{Literal, Literals, rewrite_class_list, rewrite_literals, translate_token};
pub use normalize::normalize;
pub use prefix::apply_prefix;

use crate::options::Dialect;
use crate::tables::ClassTables;

/// Where legacy rename rules may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationScope {
    /// Anywhere in the file.
    #[default]
    Document,
    /// Only inside quoted literals.
    QuotedLiterals,
}

/// Behaviour switches of the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriterConfig {
    /// Skip literals bound to Angular structural directives (`*ngIf="..."`).
    pub guard_directive_bindings: bool,
    /// Prepend the class prefix to every legacy rename output.
    pub prefix_normalization_output: bool,
    pub normalization_scope: NormalizationScope,
}

impl RewriterConfig {
    /// Configuration used for PrimeFlex 3.x sources.
    pub const fn guarded() -> Self {
        Self {
            guard_directive_bindings: true,
            prefix_normalization_output: true,
            normalization_scope: NormalizationScope::Document,
        }
    }

    /// Configuration used for PrimeFlex 2.x sources.
    ///
    /// Every literal is rewritten and legacy renames are never prefixed, so
    /// the dictionary pass still recognizes their output.
    pub const fn legacy_aware() -> Self {
        Self {
            guard_directive_bindings: false,
            prefix_normalization_output: false,
            normalization_scope: NormalizationScope::Document,
        }
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::PrimeFlex3 => Self::guarded(),
            Dialect::PrimeFlex2 => Self::legacy_aware(),
        }
    }

    #[must_use]
    pub fn with_normalization_scope(mut self, scope: NormalizationScope) -> Self {
        self.normalization_scope = scope;
        self
    }
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self::guarded()
    }
}

/// Converts file contents using a fixed set of tables, prefix and config.
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'a> {
    tables: &'a ClassTables,
    prefix: Option<&'a str>,
    config: RewriterConfig,
}

impl<'a> Rewriter<'a> {
    pub fn new(tables: &'a ClassTables, prefix: Option<&'a str>, config: RewriterConfig) -> Self {
        Self {
            tables,
            prefix: prefix.filter(|p| !p.is_empty()),
            config,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RewriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RewriterConfig {
        &self.config
    }

    /// Runs the legacy rename pass.
    pub fn normalize(&self, content: &str) -> String {
        normalize(content, &self.tables.legacy, self.prefix, &self.config)
    }

    /// Runs the dictionary pass over every quoted literal.
    pub fn rewrite_literals(&self, content: &str) -> String {
        rewrite_literals(
            content,
            self.tables,
            self.prefix,
            self.config.guard_directive_bindings,
        )
    }

    /// Converts one file's content from `dialect` to Tailwind.
    pub fn convert(&self, content: &str, dialect: Dialect) -> String {
        if dialect.is_legacy() {
            let normalized = self.normalize(content);
            self.rewrite_literals(&normalized)
        } else {
            self.rewrite_literals(content)
        }
    }
}
