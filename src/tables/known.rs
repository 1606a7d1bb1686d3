//! Recognized PrimeFlex 3.x class tokens.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashSet;

/// Membership set of PrimeFlex 3.x tokens.
///
/// Tokens without a translation entry still get the configured prefix when
/// they appear here (`relative` → `tw-relative`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct KnownClassSet {
    classes: HashSet<String>,
}

impl KnownClassSet {
    /// Parses a JSON array of tokens.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
