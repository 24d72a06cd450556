use std::cmp::Ordering;

const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Trims and lower-cases free-text input.
///
/// Lower-casing is Unicode-aware, so Cyrillic input folds the same way Latin input does.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Compares two strings in an order suitable for mixed Ukrainian and English vocabulary.
///
/// Characters are ranked as separators, digits, Latin letters, letters of the Ukrainian
/// alphabet and everything else, in this order. Letter case is ignored unless the strings
/// are otherwise equal.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> Vec<(u8, u32)> {
    text.to_lowercase().chars().map(collation_weight).collect()
}

fn collation_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() || c.is_ascii_punctuation() || c == '\'' || c == '’' {
        return (0, u32::from(c));
    }
    if let Some(digit) = c.to_digit(10) {
        return (1, digit);
    }
    if c.is_ascii_lowercase() {
        return (2, u32::from(c) - u32::from('a'));
    }
    if let Some(position) = UKRAINIAN_ALPHABET.chars().position(|l| l == c) {
        #[allow(clippy::cast_possible_truncation)]
        return (3, position as u32);
    }
    (4, u32::from(c))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("  Squat ", "squat")]
    #[case("ПРИСІДАННЯ", "присідання")]
    #[case("Їжак Ґанок Єнот", "їжак ґанок єнот")]
    #[case("   ", "")]
    #[case("", "")]
    fn test_normalize(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(normalize(text), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case(" \t\n", true)]
    #[case(" a ", false)]
    fn test_is_blank(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_blank(text), expected);
    }

    #[rstest]
    #[case("гантелі", "ґрунт", Ordering::Less)]
    #[case("ґрунт", "дельта", Ordering::Less)]
    #[case("єдність", "жим", Ordering::Less)]
    #[case("іній", "їжак", Ordering::Less)]
    #[case("їжак", "йога", Ordering::Less)]
    #[case("squat", "присідання", Ordering::Less)]
    #[case("3/4 sit-up", "air bike", Ordering::Less)]
    #[case("Барбел", "барбел", Ordering::Less)]
    #[case("планка", "планка", Ordering::Equal)]
    fn test_collate(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(collate(a, b), expected);
    }

    #[test]
    fn test_collate_sort() {
        let mut words = vec!["яйце", "біцепси", "ґудзик", "abs", "гантелі", "їжа", "іграшка"];
        words.sort_by(|a, b| collate(a, b));
        assert_eq!(
            words,
            vec!["abs", "біцепси", "гантелі", "ґудзик", "іграшка", "їжа", "яйце"]
        );
    }
}
