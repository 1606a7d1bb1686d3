//! PrimeFlex 2.x → 3.x rename rules.
//!
//! PrimeFlex 2 namespaced every utility with `p-` and abbreviated several
//! families (`p-d-flex`, `p-jc-between`, `p-mt-md-2`). Each rule is a regex
//! with a replacement template, e.g.
//!
//! ```text
//! \bp-jc-(start|end|center|between|around|evenly)\b  →  justify-content-$1
//! ```
//!
//! Rules run in declaration order and each sees the previous rule's output,
//! so breakpoint-qualified forms are listed before their plain forms.

use crate::error::{ConvertError, Result};
use regex::Regex;
use serde::Deserialize;

/// A compiled rename rule.
#[derive(Debug, Clone)]
pub struct NormalizationRule {
    pattern: Regex,
    replacement: String,
}

impl NormalizationRule {
    /// Compiles `pattern`; `replacement` may reference groups as `$1` or `${name}`.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ConvertError::InvalidRule {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

#[derive(Deserialize)]
struct RuleSpec {
    pattern: String,
    replacement: String,
}

/// Ordered list of rename rules.
#[derive(Debug, Clone, Default)]
pub struct NormalizationTable {
    rules: Vec<NormalizationRule>,
}

impl NormalizationTable {
    /// Parses a JSON array of `{"pattern", "replacement"}` objects.
    ///
    /// Array order is rule order.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        Self::from_pairs(specs.iter().map(|s| (s.pattern.as_str(), s.replacement.as_str())))
    }

    /// Builds a table from `(pattern, replacement)` pairs, keeping their order.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| NormalizationRule::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
