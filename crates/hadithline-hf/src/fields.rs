//! Per-hadith field derivation: hadith number, narrator, grade

use std::sync::LazyLock;

use regex::Regex;

/// Trailing `:<digits>` on a sunnah.com reference URL
static REFERENCE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\d+)$").expect("valid reference regex"));

/// `Hadith <digits>` inside an in-book reference
static IN_BOOK_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Hadith\s+(\d+)").expect("valid in-book regex"));

/// Leading attribution clause: "Narrated X:", "It was narrated from X that ...:"
static NARRATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:It was )?[Nn]arrated (?:from |by |that )?[^:]{3,80}:)")
        .expect("valid narrator regex")
});

/// Hadith number from the reference URL, else from the in-book reference.
///
/// `"https://sunnah.com/bukhari:123"` → `"123"`,
/// `"Book 1, Hadith 42"` → `"42"`. `None` when neither carries one; the
/// caller falls back to the entry's position.
pub fn hadith_number(reference: Option<&str>, in_book_reference: Option<&str>) -> Option<String> {
    let capture = |re: &Regex, s: Option<&str>| {
        s.filter(|s| !s.is_empty())
            .and_then(|s| re.captures(s))
            .map(|c| c[1].to_string())
    };
    capture(&REFERENCE_NUMBER, reference).or_else(|| capture(&IN_BOOK_NUMBER, in_book_reference))
}

/// Narration clause at the very start of the English text, trimmed.
///
/// Heuristic only: a sentence that happens to start with "Narrated" and
/// contain a colon within 80 chars is taken as an attribution.
pub fn narrator(english_text: Option<&str>) -> Option<String> {
    let text = english_text.filter(|t| !t.is_empty())?;
    NARRATOR
        .captures(text)
        .map(|c| c[1].trim().to_string())
}

/// Trimmed grade; empty or whitespace-only is no grade.
pub fn normalize_grade(grade: Option<&str>) -> Option<String> {
    grade
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_from_reference_url() {
        assert_eq!(
            hadith_number(Some("https://sunnah.com/bukhari:123"), None),
            Some("123".to_string())
        );
    }

    #[test]
    fn reference_wins_over_in_book() {
        assert_eq!(
            hadith_number(Some("https://sunnah.com/muslim:8"), Some("Book 1, Hadith 1")),
            Some("8".to_string())
        );
    }

    #[test]
    fn number_from_in_book_reference() {
        assert_eq!(
            hadith_number(Some(""), Some("Book 1, Hadith 42")),
            Some("42".to_string())
        );
        assert_eq!(
            hadith_number(Some("https://sunnah.com/bukhari"), Some("Book 2, Hadith  7")),
            Some("7".to_string())
        );
    }

    #[test]
    fn reference_suffix_must_be_trailing() {
        // Letter suffix after the number ("8a") is not a plain number
        assert_eq!(hadith_number(Some("https://sunnah.com/muslim:8a"), None), None);
    }

    #[test]
    fn no_number_found() {
        assert_eq!(hadith_number(None, None), None);
        assert_eq!(hadith_number(Some(""), Some("")), None);
        assert_eq!(hadith_number(None, Some("Book 1")), None);
    }

    #[test]
    fn narrator_simple() {
        assert_eq!(
            narrator(Some("Narrated Aisha: The Prophet said...")),
            Some("Narrated Aisha:".to_string())
        );
    }

    #[test]
    fn narrator_it_was_narrated_from() {
        assert_eq!(
            narrator(Some("It was narrated from Abu Hurairah that the Messenger of Allah said: ...")),
            Some("It was narrated from Abu Hurairah that the Messenger of Allah said:".to_string())
        );
    }

    #[test]
    fn narrator_lowercase_and_by() {
        assert_eq!(
            narrator(Some("narrated by Ibn 'Umar: text")),
            Some("narrated by Ibn 'Umar:".to_string())
        );
    }

    #[test]
    fn narrator_must_lead() {
        assert_eq!(narrator(Some("The Prophet said: Narrated Aisha: ...")), None);
        assert_eq!(narrator(Some("text only")), None);
    }

    #[test]
    fn narrator_name_length_bounds() {
        // fewer than 3 chars before the colon
        assert_eq!(narrator(Some("Narrated X:")), None);
        let long = format!("Narrated {}: text", "a".repeat(81));
        assert_eq!(narrator(Some(&long)), None);
    }

    #[test]
    fn narrator_absent_text() {
        assert_eq!(narrator(None), None);
        assert_eq!(narrator(Some("")), None);
    }

    #[test]
    fn grade_trimmed() {
        assert_eq!(
            normalize_grade(Some("  Sahih (Darussalam)  ")),
            Some("Sahih (Darussalam)".to_string())
        );
    }

    #[test]
    fn grade_blank_is_none() {
        assert_eq!(normalize_grade(Some("")), None);
        assert_eq!(normalize_grade(Some(" \t\n")), None);
        assert_eq!(normalize_grade(None), None);
    }
}
