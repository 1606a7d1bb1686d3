//! Tailwind prefix insertion.
//!
//! Tailwind expects the prefix after any variant and after the negative
//! sign: with prefix `tw-`, `md:-mt-2` becomes `md:-tw-mt-2`.

use std::borrow::Cow;

/// Applies `prefix` to a single class.
///
/// | class      | result (prefix `tw-`) |
/// |------------|-----------------------|
/// | `flex`     | `tw-flex`             |
/// | `-mt-2`    | `-tw-mt-2`            |
/// | `sm:flex`  | `sm:tw-flex`          |
/// | `sm:-mt-2` | `sm:-tw-mt-2`         |
/// | `a:b:c`    | `a:b:c` (unchanged)   |
///
/// `None` or an empty prefix leaves the class untouched.
pub fn apply_prefix<'a>(class: &'a str, prefix: Option<&str>) -> Cow<'a, str> {
    let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
        return Cow::Borrowed(class);
    };

    let mut segments = class.split(':');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(name), None, _) => Cow::Owned(prefix_name(name, prefix)),
        (Some(screen), Some(name), None) => {
            Cow::Owned(format!("{screen}:{}", prefix_name(name, prefix)))
        }
        _ => Cow::Borrowed(class),
    }
}

fn prefix_name(name: &str, prefix: &str) -> String {
    match name.strip_prefix('-') {
        Some(rest) => format!("-{prefix}{rest}"),
        None => format!("{prefix}{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        assert_eq!(apply_prefix("flex", Some("tw-")), "tw-flex");
    }

    #[test]
    fn test_negative_class() {
        assert_eq!(apply_prefix("-mt-2", Some("tw-")), "-tw-mt-2");
    }

    #[test]
    fn test_responsive_class() {
        assert_eq!(apply_prefix("sm:flex", Some("p")), "sm:pflex");
        assert_eq!(apply_prefix("sm:-mt-2", Some("p")), "sm:-pmt-2");
    }

    #[test]
    fn test_multiple_variants_pass_through() {
        assert_eq!(apply_prefix("md:hover:flex", Some("tw-")), "md:hover:flex");
    }

    #[test]
    fn test_no_prefix() {
        assert!(matches!(apply_prefix("flex", None), Cow::Borrowed("flex")));
        assert!(matches!(apply_prefix("flex", Some("")), Cow::Borrowed("flex")));
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(apply_prefix("", Some("tw-")), "tw-");
    }
}
