//! PrimeFlex 2.x → 3.x rename pass.
//!
//! Runs before literal rewriting when converting from the legacy dialect.
//! In [`NormalizationScope::Document`] every rule is a global substitution
//! over the whole file, so matching text outside class attributes is renamed
//! too. [`NormalizationScope::QuotedLiterals`] confines the rules to literal
//! interiors.

use crate::rewrite::literal::Literals;
use crate::rewrite::{NormalizationScope, RewriterConfig};
use crate::tables::NormalizationTable;
use std::borrow::Cow;

/// Applies every rule of `rules`, in order, to `content`.
///
/// When `config.prefix_normalization_output` is set, each replacement is
/// prepended with `prefix`.
pub fn normalize(
    content: &str,
    rules: &NormalizationTable,
    prefix: Option<&str>,
    config: &RewriterConfig,
) -> String {
    // `$` in a prefix would otherwise be read as a group reference.
    let prefix = prefix
        .filter(|p| config.prefix_normalization_output && !p.is_empty())
        .map(|p| p.replace('$', "$$"));

    match config.normalization_scope {
        NormalizationScope::Document => apply_rules(content, rules, prefix.as_deref()),
        NormalizationScope::QuotedLiterals => {
            let mut output = String::with_capacity(content.len());
            let mut copied = 0;

            for literal in Literals::new(content, config.guard_directive_bindings) {
                output.push_str(&content[copied..=literal.open]);
                output.push_str(&apply_rules(
                    literal.interior(content),
                    rules,
                    prefix.as_deref(),
                ));
                copied = literal.close;
            }

            output.push_str(&content[copied..]);
            output
        }
    }
}

fn apply_rules(text: &str, rules: &NormalizationTable, prefix: Option<&str>) -> String {
    let mut output = text.to_string();

    for rule in rules.iter() {
        let replacement = match prefix {
            Some(p) => Cow::Owned(format!("{p}{}", rule.replacement())),
            None => Cow::Borrowed(rule.replacement()),
        };

        if let Cow::Owned(replaced) = rule.pattern().replace_all(&output, replacement.as_ref()) {
            log::trace!("Rule '{}' matched", rule.pattern().as_str());
            output = replaced;
        }
    }

    output
}
