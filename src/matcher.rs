//! Fuzzy name matching.
//!
//! Patterns are not patterns in the sense of a regular expression. They are
//! literal text used to make a best guess among artist, album and track
//! names. Both sides are normalized (lowercased, stripped to letters, digits
//! and whitespace) and the candidate must contain the pattern. Among the
//! candidates that do, the one carrying the least extra text wins.

use crate::library::Entry;

/// How well a candidate matched. `None` means no match; lower is better.
pub type MatchScore = Option<usize>;

/// First code point of each run of ten decimal digits (`Nd`) in the BMP.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Decimal digits only: superscripts, fractions and roman numerals are
/// numeric but not digits.
fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if !c.is_numeric() {
        return false;
    }
    let cp = u32::from(c);
    DECIMAL_ZEROS.iter().any(|&zero| (zero..zero + 10).contains(&cp))
}

/// Returns `s` without any chars that are not letters, digits or whitespace.
///
/// Case is preserved and whitespace runs are kept as-is, so
/// `clean("Bob Dylan & The Band")` is `"Bob Dylan  The Band"`.
#[must_use]
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|&c| c.is_alphabetic() || is_digit(c) || c.is_whitespace())
        .collect()
}

/// Lowercases and [`clean`]s `s`. Idempotent.
#[must_use]
pub fn normalize(s: &str) -> String {
    clean(&s.to_lowercase())
}

/// Scores `candidate` against `pattern`.
///
/// ```
/// use splay::matcher::match_score;
///
/// assert_eq!(match_score("acdc", "AC/DC"), Some(0));
/// assert_eq!(match_score("bob dylan", "Bob Dylan & The Band"), Some(10));
/// assert_eq!(match_score("nirvana", "Bob Dylan"), None);
/// ```
#[must_use]
pub fn match_score(pattern: &str, candidate: &str) -> MatchScore {
    Pattern::new(pattern).score(candidate)
}

/// A pattern normalized once, for scoring against many candidates.
struct Pattern {
    text: String,
    len: usize,
}

impl Pattern {
    fn new(pattern: &str) -> Self {
        let text = normalize(pattern);
        let len = text.chars().count();
        Self { text, len }
    }

    fn score(&self, candidate: &str) -> MatchScore {
        let candidate = normalize(candidate);
        if !candidate.contains(&self.text) {
            return None;
        }
        // Containment guarantees candidate is at least as long as pattern.
        Some(candidate.chars().count() - self.len)
    }
}

/// Anything that can be matched by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Entry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Finds where to resume within `items`.
///
/// An empty pattern selects the first item. Otherwise the item with the
/// lowest [`match_score`] wins and ties go to the earliest. Returns `None`
/// when nothing matches, or when `items` is empty.
#[must_use]
pub fn select_index<T: Named>(items: &[T], pattern: &str) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    if pattern.is_empty() {
        return Some(0);
    }

    let normalized = Pattern::new(pattern);
    let mut best: Option<(usize, usize)> = None;
    for (i, item) in items.iter().enumerate() {
        let Some(score) = normalized.score(item.name()) else {
            continue;
        };
        log::trace!("`{}' scored {} against {:?}", item.name(), score, pattern);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let cases = [
            ("Bob Dylan", "Bob Dylan"),
            ("Bob Dylan & The Band", "Bob Dylan  The Band"),
            ("AC/DC", "ACDC"),
            ("Sigur Rós", "Sigur Rós"),
            ("Kid A²½", "Kid A"),
            ("١٩٨٤ Live", "١٩٨٤ Live"),
            ("ＦＦ１０", "ＦＦ１０"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "clean({input:?})");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["Bob Dylan & The Band", "AC/DC", "  Mixed CASE!! 99 ", "", "Ünïcödé/Ñame"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize({s:?})");
        }
    }

    #[test]
    fn test_match_score_fixtures() {
        let cases = [
            ("The Who", "The Who", Some(0)),
            ("acdc", "AC/DC", Some(0)),
            ("bob dylan", "Bob Dylan", Some(0)),
            ("bob dylan", "Bob Dylan & The Band", Some(10)),
            ("the band", "Bob Dylan & The Band", Some(11)),
            ("nirvana", "Bob Dylan", None),
        ];
        for (pattern, candidate, expected) in cases {
            assert_eq!(
                match_score(pattern, candidate),
                expected,
                "match_score({pattern:?}, {candidate:?})"
            );
        }
    }

    #[test]
    fn test_match_score_zero_iff_equal_after_normalizing() {
        let pairs = [("Blonde on Blonde", "blonde on blonde!"), ("Blonde", "Blonde on Blonde")];
        for (p, s) in pairs {
            let equal = normalize(p) == normalize(s);
            assert_eq!(match_score(p, s) == Some(0), equal, "{p:?} vs {s:?}");
        }
    }

    #[test]
    fn test_empty_pattern_scores_candidate_length() {
        assert_eq!(match_score("", "Nirvana"), Some(7));
        assert_eq!(match_score("&&", "AC/DC"), Some(4));
    }

    #[test]
    fn test_select_prefers_exact_match() {
        let names = ["Nirvana", "Nirvana Tribute"];
        assert_eq!(select_index(&names, "nirvana"), Some(0));

        let names = ["Nirvana Tribute", "Nirvana"];
        assert_eq!(select_index(&names, "nirvana"), Some(1));
    }

    #[test]
    fn test_select_ties_go_to_first() {
        let names = ["Abba", "Dada", "Mama"];
        // "a" scores 3 against all three.
        assert_eq!(select_index(&names, "a"), Some(0));
        let names = ["Cure X", "Cure Y"];
        assert_eq!(select_index(&names, "cure"), Some(0));
    }

    #[test]
    fn test_select_empty_pattern_is_first() {
        let names = vec!["Zappa".to_string(), "Abba".to_string()];
        assert_eq!(select_index(&names, ""), Some(0));
    }

    #[test]
    fn test_select_no_match() {
        let names = ["Nirvana", "Pixies"];
        assert_eq!(select_index(&names, "beatles"), None);

        let empty: [&str; 0] = [];
        assert_eq!(select_index(&empty, "beatles"), None);
        assert_eq!(select_index(&empty, ""), None);
    }

    #[test]
    fn test_non_decimal_numerals_do_not_match() {
        assert_eq!(match_score("kid a", "Kid A²"), Some(0));
        assert_eq!(match_score("½", "Half"), Some(4));
        assert_eq!(match_score("1984", "1984 (Remastered)"), Some(11));
    }

    #[test]
    fn test_select_ignores_punctuation() {
        let names = ["Crosby, Stills & Nash", "AC/DC"];
        assert_eq!(select_index(&names, "acdc"), Some(1));
        assert_eq!(select_index(&names, "stills  nash"), Some(0));
    }
}
