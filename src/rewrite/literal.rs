//! Quoted string literal scanning and class-list rewriting.
//!
//! Class lists live inside string literals in every format we touch:
//!
//! ```text
//! <div class="flex align-items-center">          HTML / Vue templates
//! const cls = 'col-12 md:col-6';                 JS / TS
//! <Box className={`grid ${extra}`} />            JSX template strings
//! ```
//!
//! ## Literal boundaries
//!
//! A literal opens with `"`, `'` or `` ` `` and closes with the same
//! character. A backslash-escaped delimiter (`\"`) stays inside the literal.
//! Literals never span a line terminator. When no unescaped delimiter is
//! found before the line ends, the literal closes at the last escaped
//! delimiter seen; if there is none, the opening character is not a literal
//! and scanning continues with the next character.
//!
//! ## Directive guard
//!
//! Angular structural directives (`*ngIf="items.length > 0"`,
//! `[*ngClass]="..."`) hold expressions, not class lists. With the guard
//! enabled, a literal directly preceded by `*ng<Upper><word>` + optional `]`
//! + `=` is skipped whole.
//!
//! ## Token rewriting
//!
//! The literal interior is split on single spaces, each token is translated
//! (see [`rewrite_class_list`]) and the tokens are rejoined with single
//! spaces. Runs of spaces yield empty tokens, so the split/join round trip
//! keeps the original spacing.

use crate::rewrite::prefix::apply_prefix;
use crate::tables::ClassTables;
use std::borrow::Cow;

/// Byte span of one quoted literal, delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    /// Offset of the opening delimiter.
    pub open: usize,
    /// Offset of the closing delimiter.
    pub close: usize,
}

impl Literal {
    /// Returns the text between the delimiters.
    pub fn interior<'a>(&self, content: &'a str) -> &'a str {
        &content[self.open + 1..self.close]
    }
}

/// Iterator over the quoted literals of a text, in order.
pub struct Literals<'a> {
    bytes: &'a [u8],
    pos: usize,
    guard_directive_bindings: bool,
}

impl<'a> Literals<'a> {
    pub fn new(content: &'a str, guard_directive_bindings: bool) -> Self {
        Self {
            bytes: content.as_bytes(),
            pos: 0,
            guard_directive_bindings,
        }
    }
}

impl Iterator for Literals<'_> {
    type Item = Literal;

    fn next(&mut self) -> Option<Literal> {
        // Delimiters and `\` are ASCII, so byte offsets always land on
        // char boundaries.
        while self.pos < self.bytes.len() {
            let open = self.pos;
            if !is_delimiter(self.bytes[open]) {
                self.pos += 1;
                continue;
            }

            let Some(close) = find_close(self.bytes, open) else {
                self.pos += 1;
                continue;
            };
            self.pos = close + 1;

            if self.guard_directive_bindings && follows_directive_binding(&self.bytes[..open]) {
                log::trace!("Skipping directive binding literal at byte {}", open);
                continue;
            }

            return Some(Literal { open, close });
        }

        None
    }
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b'`')
}

/// `\n`, `\r`, U+2028 and U+2029.
fn is_line_terminator_at(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'\n' | b'\r' => true,
        0xE2 => matches!(bytes.get(i + 1..i + 3), Some([0x80, 0xA8 | 0xA9])),
        _ => false,
    }
}

fn find_close(bytes: &[u8], open: usize) -> Option<usize> {
    let quote = bytes[open];
    let mut last_escaped = None;
    let mut i = open + 1;

    while i < bytes.len() {
        match bytes[i] {
            b if b == quote => return Some(i),
            b'\\' if bytes.get(i + 1) == Some(&quote) => {
                last_escaped = Some(i + 1);
                i += 2;
            }
            _ if is_line_terminator_at(bytes, i) => break,
            _ => i += 1,
        }
    }

    last_escaped
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks whether `before` ends with `*ng<Upper><word chars>` + `]?` + `=`.
fn follows_directive_binding(before: &[u8]) -> bool {
    let Some(mut end) = before.strip_suffix(b"=").map(<[u8]>::len) else {
        return false;
    };
    if before[..end].ends_with(b"]") {
        end -= 1;
    }

    let start = before[..end]
        .iter()
        .rposition(|b| !is_word_byte(*b))
        .map_or(0, |p| p + 1);
    let word = &before[start..end];

    start > 0
        && before[start - 1] == b'*'
        && word.len() >= 4
        && word.starts_with(b"ng")
        && word[2].is_ascii_uppercase()
}

/// Rewrites the class lists of every quoted literal in `content`.
///
/// Text outside literals, and the delimiters themselves, are copied as-is.
pub fn rewrite_literals(
    content: &str,
    tables: &ClassTables,
    prefix: Option<&str>,
    guard_directive_bindings: bool,
) -> String {
    let mut output = String::with_capacity(content.len());
    let mut copied = 0;

    for literal in Literals::new(content, guard_directive_bindings) {
        output.push_str(&content[copied..=literal.open]);
        output.push_str(&rewrite_class_list(
            literal.interior(content),
            tables,
            prefix,
        ));
        copied = literal.close;
    }

    output.push_str(&content[copied..]);
    output
}

/// Rewrites a space-separated class list.
pub fn rewrite_class_list(list: &str, tables: &ClassTables, prefix: Option<&str>) -> String {
    list.split(' ')
        .map(|token| translate_token(token, tables, prefix))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translates a single token.
///
/// 1. Dictionary hit: each replacement class is prefixed independently.
/// 2. Known PrimeFlex class with a prefix configured: the token is prefixed.
/// 3. Anything else is returned unchanged.
pub fn translate_token<'a>(
    token: &'a str,
    tables: &ClassTables,
    prefix: Option<&str>,
) -> Cow<'a, str> {
    if let Some(replacement) = tables.translation.get(token) {
        let classes: Vec<_> = replacement
            .split(' ')
            .map(|class| apply_prefix(class, prefix))
            .collect();
        return Cow::Owned(classes.join(" "));
    }

    match prefix {
        Some(p) if !p.is_empty() && tables.known.contains(token) => apply_prefix(token, prefix),
        _ => Cow::Borrowed(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{KnownClassSet, NormalizationTable, TranslationTable};

    fn tables() -> ClassTables {
        ClassTables::new(
            TranslationTable::from_iter([
                ("flex", "flex"),
                ("align-items-center", "items-center"),
                ("flex-column", "flex-col"),
                ("col-6", "flex-none p-2 w-6/12"),
                ("-mt-2", "-mt-2"),
                ("md:-mt-2", "md:-mt-2"),
            ]),
            KnownClassSet::from_iter([
                "flex",
                "align-items-center",
                "flex-column",
                "col-6",
                "relative",
                "md:relative",
            ]),
            NormalizationTable::default(),
        )
    }

    fn spans(content: &str, guard: bool) -> Vec<&str> {
        Literals::new(content, guard)
            .map(|l| l.interior(content))
            .collect()
    }

    #[test]
    fn test_finds_all_delimiter_kinds() {
        let content = r#"a "one" b 'two' c `three`"#;
        assert_eq!(spans(content, true), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_mixed_delimiters_do_not_pair() {
        let content = r#"x = "it's here""#;
        assert_eq!(spans(content, true), vec!["it's here"]);
    }

    #[test]
    fn test_escaped_delimiter_stays_inside() {
        let content = r#"x = "say \"hi\" now";"#;
        assert_eq!(spans(content, true), vec![r#"say \"hi\" now"#]);
    }

    #[test]
    fn test_unterminated_closes_at_last_escaped_delimiter() {
        let content = "x = \"a\\\" b\\\" c\ny";
        assert_eq!(spans(content, true), vec!["a\\\" b\\"]);
    }

    #[test]
    fn test_literal_does_not_span_lines() {
        let content = "'abc\ndef'";
        assert!(spans(content, true).is_empty());
    }

    #[test]
    fn test_literal_does_not_span_unicode_line_separator() {
        let content = "\"abc\u{2028}def\"";
        assert!(spans(content, true).is_empty());
    }

    #[test]
    fn test_unmatched_quote_is_skipped() {
        let content = "don't \"flex\"";
        assert_eq!(spans(content, true), vec!["flex"]);
    }

    #[test]
    fn test_directive_guard() {
        let content = r#"<div *ngIf="show" class="flex">"#;
        assert_eq!(spans(content, true), vec!["flex"]);
        assert_eq!(spans(content, false), vec!["show", "flex"]);
    }

    #[test]
    fn test_directive_guard_with_bracket() {
        let content = r#"<div [*ngClass]="flex">"#;
        assert!(spans(content, true).is_empty());
    }

    #[test]
    fn test_directive_guard_requires_star_and_uppercase() {
        assert!(!follows_directive_binding(b"ngIf="));
        assert!(!follows_directive_binding(b"*ngif="));
        assert!(!follows_directive_binding(b"*ngI="));
        assert!(!follows_directive_binding(b"*ngIf"));
        assert!(follows_directive_binding(b"<li *ngFor="));
        assert!(follows_directive_binding(b"*ngIf]="));
    }

    #[test]
    fn test_rewrite_html_attribute() {
        let out = rewrite_literals(r#"class="flex align-items-center""#, &tables(), None, true);
        assert_eq!(out, r#"class="flex items-center""#);
    }

    #[test]
    fn test_rewrite_with_prefix() {
        let out = rewrite_literals(
            r#"class="flex align-items-center""#,
            &tables(),
            Some("tw-"),
            true,
        );
        assert_eq!(out, r#"class="tw-flex tw-items-center""#);
    }

    #[test]
    fn test_multi_class_replacement_prefixes_each() {
        let out = rewrite_class_list("col-6", &tables(), Some("tw-"));
        assert_eq!(out, "tw-flex-none tw-p-2 tw-w-6/12");
    }

    #[test]
    fn test_negative_and_responsive_prefixing() {
        let out = rewrite_class_list("-mt-2 md:-mt-2", &tables(), Some("tw-"));
        assert_eq!(out, "-tw-mt-2 md:-tw-mt-2");
    }

    #[test]
    fn test_known_class_prefixed_only_with_prefix() {
        assert_eq!(rewrite_class_list("relative", &tables(), None), "relative");
        assert_eq!(
            rewrite_class_list("relative md:relative", &tables(), Some("tw-")),
            "tw-relative md:tw-relative"
        );
    }

    #[test]
    fn test_unknown_token_unchanged() {
        assert_eq!(
            rewrite_class_list("my-card p-button", &tables(), Some("tw-")),
            "my-card p-button"
        );
    }

    #[test]
    fn test_spacing_is_preserved() {
        assert_eq!(
            rewrite_class_list("  flex   flex-column ", &tables(), None),
            "  flex   flex-col "
        );
    }

    #[test]
    fn test_guarded_literal_left_intact() {
        let content = r#"<p *ngIf="flex" class="flex-column">"#;
        assert_eq!(
            rewrite_literals(content, &tables(), None, true),
            r#"<p *ngIf="flex" class="flex-col">"#
        );
        assert_eq!(
            rewrite_literals(content, &tables(), None, false),
            r#"<p *ngIf="flex" class="flex-col">"#
        );
    }

    #[test]
    fn test_unguarded_rewrites_directive_value() {
        let content = r#"<p *ngIf="flex-column">"#;
        assert_eq!(
            rewrite_literals(content, &tables(), None, false),
            r#"<p *ngIf="flex-col">"#
        );
        assert_eq!(rewrite_literals(content, &tables(), None, true), content);
    }

    #[test]
    fn test_text_outside_literals_untouched() {
        let content = "flex = 'flex-column'; // flex-column";
        assert_eq!(
            rewrite_literals(content, &tables(), None, true),
            "flex = 'flex-col'; // flex-column"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent_on_translated_content() {
        let content = r#"<div class="flex items-center flex-col">"#;
        let once = rewrite_literals(content, &tables(), None, true);
        let twice = rewrite_literals(&once, &tables(), None, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multibyte_text_around_literals() {
        let content = "é «\"flex-column\"» ü";
        assert_eq!(
            rewrite_literals(content, &tables(), None, true),
            "é «\"flex-col\"» ü"
        );
    }
}
