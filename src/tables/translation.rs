//! PrimeFlex → Tailwind token dictionary.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Exact-match mapping from one source token to one or more Tailwind tokens.
///
/// Values hold space-separated tokens, e.g. `"col-6"` →
/// `"flex-none p-2 w-6/12"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Parses a JSON object of `token → replacement` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
