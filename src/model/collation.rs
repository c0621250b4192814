//! Locale-aware comparison of person names.
//!
//! Names are decomposed to NFD and compared in three levels, the way the default collation
//! of a Latin-script locale does:
//!
//! 1. base letters, ignoring case and diacritics (`"Šimon"` sorts with `"Simon"`, before
//!    `"Zoe"`);
//! 2. unaccented before accented (`"Jose"` < `"José"`);
//! 3. lowercase before uppercase (`"ana"` < `"Ana"`).
//!
//! Precomposed and decomposed spellings of a name compare as `Equal`, as do strings equal on
//! all three levels, which keeps stable sorts stable.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Stands in for the stroke or ligature of letters NFD leaves whole (`ł`, `ø`, `æ`).
const STROKE: char = '\u{338}';

/// One base letter with the marks attached to it.
struct Element {
    base: char,
    marks: String,
    upper: bool,
}

/// Compares two names the way a person reading a sorted list expects.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a, b) = (elements(a), elements(b));
    a.iter()
        .map(|e| e.base)
        .cmp(b.iter().map(|e| e.base))
        .then_with(|| {
            a.iter()
                .map(|e| e.marks.as_str())
                .cmp(b.iter().map(|e| e.marks.as_str()))
        })
        .then_with(|| a.iter().map(|e| e.upper).cmp(b.iter().map(|e| e.upper)))
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            // A mark with nothing before it carries no letter to sort on.
            if let Some(last) = out.last_mut() {
                last.marks.push(c);
            }
            continue;
        }
        let upper = c.is_uppercase();
        for lower in c.to_lowercase() {
            match fold_undecomposable(lower) {
                Some(letters) => out.extend(letters.chars().map(|base| Element {
                    base,
                    marks: STROKE.to_string(),
                    upper,
                })),
                None => out.push(Element {
                    base: lower,
                    marks: String::new(),
                    upper,
                }),
            }
        }
    }
    out
}

/// Latin letters with no canonical decomposition, mapped to the letters they sort with.
fn fold_undecomposable(c: char) -> Option<&'static str> {
    let letters = match c {
        'ł' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ŧ' => "t",
        'ı' => "i",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        _ => return None,
    };
    Some(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_accents_first() {
        assert_eq!(compare_names("Ágata", "Bruno"), Ordering::Less);
        assert_eq!(compare_names("ana", "Bruno"), Ordering::Less);
        assert_eq!(compare_names("Élio", "Eduardo"), Ordering::Greater);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(compare_names("Šimon", "Zoe"), Ordering::Less);
        assert_eq!(compare_names("Čapek", "Dvořák"), Ordering::Less);
        assert_eq!(compare_names("Ąžuolas", "Bruno"), Ordering::Less);
    }

    #[test]
    fn stroke_letters_sort_with_their_base_letter() {
        assert_eq!(compare_names("Łukasz", "Maria"), Ordering::Less);
        assert_eq!(compare_names("Øystein", "Paulo"), Ordering::Less);
        assert_eq!(compare_names("Lukasz", "Łukasz"), Ordering::Less);
    }

    #[test]
    fn decomposed_input_matches_precomposed() {
        assert_eq!(compare_names("Jose\u{301}", "Josef"), Ordering::Less);
        assert_eq!(compare_names("Jose\u{301}", "José"), Ordering::Equal);
    }

    #[test]
    fn plain_letters_before_accented() {
        assert_eq!(compare_names("Jose", "José"), Ordering::Less);
        assert_eq!(compare_names("Conceição", "Conceicao"), Ordering::Greater);
    }

    #[test]
    fn lowercase_before_uppercase() {
        assert_eq!(compare_names("ana", "Ana"), Ordering::Less);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(compare_names("Paulo Henrique", "Paulo Henrique"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Ana", "Ana Gabrielle"), Ordering::Less);
    }
}
