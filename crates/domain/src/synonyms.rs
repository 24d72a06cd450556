use indexmap::IndexSet;

/// Muscle and category names, Ukrainian key to equivalent terms.
pub const CATEGORY_TERMS: &[(&str, &[&str])] = &[
    ("прес", &["abs", "abdominal", "прес"]),
    ("біцепси", &["biceps", "біцепси"]),
    ("груди", &["pectorals", "chest", "груди"]),
    ("серратні", &["serratus anterior", "serratus", "серратні"]),
    ("кардіо", &["cardiovascular system", "cardio", "кардіо"]),
    ("аддуктори", &["adductors", "аддуктори"]),
    ("широчі", &["lats", "latissimus", "широчі"]),
    ("трапеції", &["traps", "trapezius", "трапеції"]),
    ("трицепси", &["triceps", "трицепси"]),
    ("литки", &["calves", "calf", "литки"]),
    ("леватор", &["levator scapulae", "levator", "леватор"]),
    ("квадри", &["quads", "quadriceps", "квадри"]),
];

/// Exercise name phrases, Ukrainian key to equivalent English phrases.
pub const EXERCISE_NAME_TERMS: &[(&str, &[&str])] = &[
    ("3/4 підйому тулуба", &["3/4 sit-up", "3/4 sit up"]),
    ("підйому тулуба", &["sit-up", "sit up"]),
    ("бічний нахил 45°", &["45° side bend", "45 side bend", "side bend"]),
    ("бічний нахил 45", &["45° side bend", "45 side bend", "side bend"]),
    ("бічний нахил", &["side bend"]),
    ("велосипед", &["air bike", "bicycle", "bicycle crunches"]),
    ("скручування", &["crunches", "crunch"]),
    ("підйоми ніг", &["leg raises", "leg raise"]),
    ("планка", &["plank"]),
];

/// Splits a normalized query into independently matched clauses.
///
/// Text before the first colon forms one clause and the rest is split on commas. Without a
/// colon the whole query is split on commas. Empty clauses are dropped.
#[must_use]
pub fn split_clauses(query: &str) -> Vec<&str> {
    let clauses: Vec<&str> = match query.split_once(':') {
        Some((head, tail)) => std::iter::once(head).chain(tail.split(',')).collect(),
        None => query.split(',').collect(),
    };
    clauses
        .into_iter()
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}

/// Expands a normalized query into the ordered set of equivalent search terms.
#[must_use]
pub fn expand(query: &str) -> IndexSet<String> {
    let mut terms = IndexSet::new();
    for clause in split_clauses(query) {
        terms.insert(clause.to_string());
        expand_clause(clause, CATEGORY_TERMS, &mut terms);
        expand_clause(clause, EXERCISE_NAME_TERMS, &mut terms);
    }
    terms
}

fn expand_clause(clause: &str, table: &[(&str, &[&str])], terms: &mut IndexSet<String>) {
    for (key, equivalents) in table {
        if overlaps(clause, key) {
            terms.extend(equivalents.iter().map(|e| (*e).to_string()));
        }
        for equivalent in *equivalents {
            if overlaps(clause, equivalent) {
                terms.insert((*key).to_string());
            }
        }
    }
}

fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("squat", vec!["squat"])]
    #[case("calf raise, burpee", vec!["calf raise", "burpee"])]
    #[case("прес: скручування, планка", vec!["прес", "скручування", "планка"])]
    #[case("прес: a:b, c", vec!["прес", "a:b", "c"])]
    #[case(" , ,plank,", vec!["plank"])]
    #[case("", vec![])]
    fn test_split_clauses(#[case] query: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_clauses(query), expected);
    }

    #[test]
    fn test_expand_english_category() {
        assert!(expand("quads").contains("квадри"));
    }

    #[test]
    fn test_expand_ukrainian_category() {
        let terms = expand("квадри");
        assert!(terms.contains("quads"));
        assert!(terms.contains("quadriceps"));
    }

    #[test]
    fn test_expand_exercise_name() {
        assert_eq!(
            expand("планка").into_iter().collect::<Vec<_>>(),
            vec!["планка", "plank"]
        );
        assert!(expand("plank").contains("планка"));
    }

    #[test]
    fn test_expand_unknown_clause() {
        assert_eq!(
            expand("zottman").into_iter().collect::<Vec<_>>(),
            vec!["zottman"]
        );
    }

    #[test]
    fn test_expand_is_duplicate_free() {
        let terms = expand("прес, прес");
        assert_eq!(terms.iter().filter(|t| *t == "прес").count(), 1);
        assert!(terms.contains("abs"));
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand("").is_empty());
    }
}
