//! Locale-aware ordering for relative paths.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring.
//! Punctuation is non-ignorable, so `guide.md` sorts before `guide/intro.md`
//! and `a_b.md` before `a.md`. Ties fall back to code point order.

use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

pub struct PathCollator {
    inner: Collator,
}

impl PathCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::new(Tailoring::Cldr(Locale::Root), false, true),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for PathCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison. Prefer a shared [`PathCollator`] when sorting.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    PathCollator::new().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        let mut collator = PathCollator::new();
        items.sort_by(|a, b| collator.compare(a, b));
        items
    }

    #[test]
    fn case_insensitive_letters() {
        assert_eq!(
            sorted(vec!["beta.md", "Alpha.md", "gamma.md"]),
            vec!["Alpha.md", "beta.md", "gamma.md"]
        );
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(sorted(vec!["Readme.md", "readme.md"]), vec!["readme.md", "Readme.md"]);
    }

    #[test]
    fn punctuation_and_digits_before_letters() {
        assert_eq!(
            sorted(vec!["a.md", "1.md", "_draft.md"]),
            vec!["_draft.md", "1.md", "a.md"]
        );
    }

    #[test]
    fn underscore_sorts_before_dot() {
        assert_eq!(sorted(vec!["a.md", "a_b.md"]), vec!["a_b.md", "a.md"]);
    }

    #[test]
    fn accents_share_base_letter_weight() {
        assert_eq!(sorted(vec!["eb.md", "éa.md"]), vec!["éa.md", "eb.md"]);
    }

    #[test]
    fn katakana_and_hiragana_share_weight() {
        assert_eq!(sorted(vec!["いa.md", "アb.md"]), vec!["アb.md", "いa.md"]);
    }

    #[test]
    fn dot_sorts_before_separator() {
        assert_eq!(locale_cmp("beta.md", "Beta/a.html"), Ordering::Less);
        assert_eq!(locale_cmp("api/x.md", "apiary.md"), Ordering::Less);
    }

    #[test]
    fn identical_strings_are_equal() {
        assert_eq!(locale_cmp("notes/todo.md", "notes/todo.md"), Ordering::Equal);
    }
}
