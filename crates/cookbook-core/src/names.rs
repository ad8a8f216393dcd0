// ABOUTME: Free-text name normalization into canonical display names
// ABOUTME: Strips non-letters, collapses whitespace, and capitalizes each word
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Canonical display names
//!
//! A normalized name is non-empty and contains only letters separated by
//! single spaces, each word capitalized.

/// Normalize a handwritten label into a display name
///
/// Hyphens and underscores become spaces, every character that is neither a
/// letter nor whitespace is dropped, and the remaining words are capitalized
/// and joined by single spaces. Returns `None` when nothing is left.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let filtered: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    let words: Vec<String> = filtered.split_whitespace().map(capitalize).collect();
    if words.is_empty() {
        return None;
    }

    Some(words.join(" "))
}

/// Display name for a new entry, falling back to the raw name verbatim
///
/// Entry creation never fails because of the name's shape: a name with no
/// letters at all is stored as submitted.
#[must_use]
pub fn display_name_or_raw(raw: &str) -> String {
    normalize_name(raw).unwrap_or_else(|| raw.to_owned())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_word_is_capitalized() {
        assert_eq!(normalize_name("mayonnaise").as_deref(), Some("Mayonnaise"));
    }

    #[test]
    fn test_separators_collapse_to_single_space() {
        assert_eq!(
            normalize_name("butter_-_-_knife").as_deref(),
            Some("Butter Knife")
        );
        assert_eq!(
            normalize_name("  riz   ZA_pizza  ").as_deref(),
            Some("Riz Za Pizza")
        );
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("    "), None);
        assert_eq!(normalize_name("\t\n"), None);
    }

    #[test]
    fn test_digits_and_punctuation_are_dropped() {
        assert_eq!(normalize_name("4-Step Recipe").as_deref(), Some("Step Recipe"));
        assert_eq!(normalize_name("Skibidi!! Toilet?").as_deref(), Some("Skibidi Toilet"));
        assert_eq!(normalize_name("123 _-_ 456"), None);
    }

    #[test]
    fn test_mixed_case_words_are_lowered_after_first_letter() {
        assert_eq!(normalize_name("mEaT bALLs").as_deref(), Some("Meat Balls"));
    }

    #[test]
    fn test_non_ascii_letters_are_kept() {
        assert_eq!(normalize_name("crème brûlée").as_deref(), Some("Crème Brûlée"));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in [
            "mayonnaise",
            "butter_-_-_knife",
            "4-Step Recipe",
            "  MIXED__case--Words 99 ",
            "crème brûlée",
        ] {
            let once = normalize_name(raw).unwrap();
            assert_eq!(normalize_name(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_display_name_falls_back_to_raw() {
        assert_eq!(display_name_or_raw("beef_stock"), "Beef Stock");
        assert_eq!(display_name_or_raw("1234"), "1234");
        assert_eq!(display_name_or_raw("   "), "   ");
    }
}
