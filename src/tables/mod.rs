//! Static class lookup tables.
//!
//! Three tables drive a conversion, all bundled into the binary as JSON and
//! parsed once per process:
//!
//! - **`translation`**: PrimeFlex 3.x token → Tailwind token(s)
//! - **`known`**: PrimeFlex 3.x tokens that receive a prefix even without a
//!   translation entry
//! - **`legacy`**: ordered regex rules rewriting PrimeFlex 2.x names into
//!   PrimeFlex 3.x names
//!
//! Tables are immutable after loading and shared by reference across the
//! worker pool.

pub mod known;
pub mod legacy;
pub mod translation;

pub use known::KnownClassSet;
pub use legacy::{NormalizationRule, NormalizationTable};
pub use translation::TranslationTable;

use crate::error::Result;
use std::sync::OnceLock;

const TRANSLATION_JSON: &str = include_str!("data/translation.json");
const KNOWN_CLASSES_JSON: &str = include_str!("data/known_classes.json");
const LEGACY_RULES_JSON: &str = include_str!("data/legacy_rules.json");

static BUNDLED: OnceLock<ClassTables> = OnceLock::new();

/// The lookup structures a conversion run reads from.
#[derive(Debug)]
pub struct ClassTables {
    pub translation: TranslationTable,
    pub known: KnownClassSet,
    pub legacy: NormalizationTable,
}

impl ClassTables {
    pub fn new(
        translation: TranslationTable,
        known: KnownClassSet,
        legacy: NormalizationTable,
    ) -> Self {
        Self {
            translation,
            known,
            legacy,
        }
    }

    /// Returns the tables embedded in the binary.
    ///
    /// Parsed on first call; later calls return the same instance.
    ///
    /// # Errors
    ///
    /// - `Asset`: a bundled JSON document is malformed
    /// - `InvalidRule`: a bundled legacy rule does not compile
    pub fn bundled() -> Result<&'static ClassTables> {
        if let Some(tables) = BUNDLED.get() {
            return Ok(tables);
        }

        let tables = Self::new(
            TranslationTable::from_json(TRANSLATION_JSON)?,
            KnownClassSet::from_json(KNOWN_CLASSES_JSON)?,
            NormalizationTable::from_json(LEGACY_RULES_JSON)?,
        );
        log::debug!(
            "Loaded class tables: {} translations, {} known classes, {} legacy rules",
            tables.translation.len(),
            tables.known.len(),
            tables.legacy.len()
        );

        // A racing initializer may have won; both parsed the same bytes.
        Ok(BUNDLED.get_or_init(|| tables))
    }
}
