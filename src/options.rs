//! Run options shared by every stage of a conversion.

/// Source vocabulary of the files being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// PrimeFlex 3.x class names, translated directly.
    PrimeFlex3,
    /// PrimeFlex 2.x class names, renamed to 3.x before translation.
    PrimeFlex2,
}

impl Dialect {
    /// Returns `true` if files need the 2.x → 3.x rename pass.
    pub fn is_legacy(self) -> bool {
        self == Dialect::PrimeFlex2
    }

    pub fn label(self) -> &'static str {
        match self {
            Dialect::PrimeFlex3 => "PrimeFlex 3.x",
            Dialect::PrimeFlex2 => "PrimeFlex 2.x",
        }
    }
}

/// User-facing conversion options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Also convert style sheets (`.css`, `.scss`, `.sass`).
    pub styles: bool,
    /// Prepended to every emitted Tailwind class.
    pub prefix: Option<String>,
}

impl ConvertOptions {
    pub fn new(styles: bool, prefix: Option<String>) -> Self {
        Self { styles, prefix }
    }

    /// Returns the configured prefix; an empty string counts as none.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefix_is_none() {
        let options = ConvertOptions::new(false, Some(String::new()));
        assert_eq!(options.prefix(), None);
    }

    #[test]
    fn test_prefix_passthrough() {
        let options = ConvertOptions::new(true, Some("tw-".into()));
        assert_eq!(options.prefix(), Some("tw-"));
        assert!(options.styles);
    }

    #[test]
    fn test_dialect_is_legacy() {
        assert!(Dialect::PrimeFlex2.is_legacy());
        assert!(!Dialect::PrimeFlex3.is_legacy());
    }
}
