//! Keyword search and autocomplete over the exercise corpus.

use indexmap::IndexSet;

use crate::{
    Exercise,
    dedup::{dedup_exercises, dedup_strings},
    synonyms::expand,
    text::{collate, normalize},
    translation::translate_exercise_name,
};

/// Returns all exercises matching any term of the expanded query.
///
/// An exercise matches if a term is contained in its name, description, target, body part or
/// translated name. Each exercise is returned at most once, in corpus order.
#[must_use]
pub fn search(exercises: &[Exercise], query: &str) -> Vec<Exercise> {
    let query = normalize(query);
    if query.is_empty() {
        return vec![];
    }
    let terms = expand(&query);
    dedup_exercises(
        exercises
            .iter()
            .filter(|exercise| matches_any_term(exercise, &terms))
            .cloned(),
    )
}

fn matches_any_term(exercise: &Exercise, terms: &IndexSet<String>) -> bool {
    let mut fields = vec![
        exercise.name.to_lowercase(),
        exercise.description.to_lowercase(),
        exercise.target.to_lowercase(),
        exercise.body_part.to_lowercase(),
    ];
    if !exercise.name.is_empty() {
        fields.push(translate_exercise_name(&exercise.name).to_lowercase());
    }
    terms
        .iter()
        .any(|term| fields.iter().any(|field| field.contains(term.as_str())))
}

/// Returns up to `limit` field values starting with or containing a part of the query.
///
/// The query is split on commas. Values with a word starting with one of the parts come first,
/// each group is ordered alphabetically.
#[must_use]
pub fn suggest(exercises: &[Exercise], query: &str, limit: usize) -> Vec<String> {
    let query = normalize(query);
    let parts = query
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if parts.is_empty() || limit == 0 {
        return vec![];
    }

    let mut suggestions = vec![];
    for exercise in exercises {
        let translated_name =
            (!exercise.name.is_empty()).then(|| translate_exercise_name(&exercise.name));
        let candidates = [
            translated_name.as_deref(),
            Some(exercise.name.as_str()),
            Some(exercise.target.as_str()),
            Some(exercise.equipment.as_str()),
        ];
        for candidate in candidates.into_iter().flatten() {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                continue;
            }
            let candidate_lower = candidate.to_lowercase();
            if parts.iter().any(|part| {
                starts_with_part(&candidate_lower, part) || candidate_lower.contains(part)
            }) {
                suggestions.push(candidate.to_string());
            }
        }
    }

    let mut suggestions = dedup_strings(suggestions)
        .into_iter()
        .map(|suggestion| {
            let suggestion_lower = suggestion.to_lowercase();
            let is_prefix_match = parts
                .iter()
                .any(|part| starts_with_part(&suggestion_lower, part));
            (is_prefix_match, suggestion)
        })
        .collect::<Vec<_>>();
    suggestions.sort_by(|(a_is_prefix, a), (b_is_prefix, b)| {
        b_is_prefix.cmp(a_is_prefix).then_with(|| collate(a, b))
    });
    suggestions
        .into_iter()
        .take(limit)
        .map(|(_, suggestion)| suggestion)
        .collect()
}

fn starts_with_part(text: &str, part: &str) -> bool {
    text.starts_with(part) || text.split_whitespace().any(|word| word.starts_with(part))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{ExerciseID, built_in_exercises};

    fn exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: ExerciseID::from(id),
            name: name.to_string(),
            ..Exercise::default()
        }
    }

    fn corpus(remote: Vec<Exercise>) -> Vec<Exercise> {
        dedup_exercises(built_in_exercises().iter().cloned().chain(remote))
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(" , ")]
    fn test_search_blank_query(#[case] query: &str) {
        assert!(search(&corpus(vec![]), query).is_empty());
    }

    #[test]
    fn test_search_ukrainian_name() {
        let ids = search(&corpus(vec![]), "присідання")
            .into_iter()
            .map(|e| e.id.to_string())
            .collect::<Vec<_>>();
        assert!(ids.contains(&"mock-squats".to_string()));
    }

    #[test]
    fn test_search_translated_name() {
        let remote = vec![exercise("r1", "barbell full squat")];
        let result = search(&corpus(remote), "Присідання");
        assert!(result.iter().any(|e| e.id.as_str() == "r1"));
        assert!(result.iter().any(|e| e.id.as_str() == "mock-squats"));
    }

    #[test]
    fn test_search_synonyms() {
        let remote = vec![Exercise {
            target: "quads".to_string(),
            ..exercise("r1", "lever leg extension")
        }];
        let result = search(&corpus(remote), "квадри");
        assert!(result.iter().any(|e| e.id.as_str() == "r1"));
    }

    #[test]
    fn test_search_clauses_are_unioned_without_duplicates() {
        let remote = vec![
            exercise("r1", "burpee"),
            exercise("r2", "calf raise burpee combo"),
            exercise("r1", "burpee"),
        ];
        let result = search(&corpus(remote), "calf raise, burpee");
        let ids = result.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
        assert!(ids.contains(&"r1"));
        assert!(ids.contains(&"r2"));
        assert!(ids.contains(&"mock-calf-raise"));
    }

    #[test]
    fn test_search_results_contain_a_term() {
        let exercises = corpus(vec![exercise("r1", "dumbbell biceps curl")]);
        for query in ["прес", "biceps", "plank", "leg raise, прес: скручування"] {
            let terms = expand(&normalize(query));
            for exercise in search(&exercises, query) {
                assert!(
                    matches_any_term(&exercise, &terms),
                    "{} does not match {query}",
                    exercise.id
                );
            }
        }
    }

    #[test]
    fn test_search_no_match() {
        assert!(search(&corpus(vec![]), "zzzz").is_empty());
    }

    #[test]
    fn test_suggest_prefix_matches_first() {
        let exercises = vec![
            exercise("r1", "pistol-squat hold"),
            exercise("r2", "barbell full squat"),
        ];
        assert_eq!(
            suggest(&exercises, "sq", 10),
            vec!["barbell full squat", "pistol-squat hold"]
        );
    }

    #[test]
    fn test_suggest_translated_name() {
        assert_eq!(
            suggest(&[exercise("r1", "barbell full squat")], "прис", 10),
            vec!["Присідання"]
        );
    }

    #[test]
    fn test_suggest_prefix_matches_before_containment_in_corpus() {
        let exercises = corpus(vec![
            exercise("r1", "pistol-squat hold"),
            exercise("r2", "barbell full squat"),
        ]);

        let suggestions = suggest(&exercises, "sq", 100);

        let position = |value: &str| suggestions.iter().position(|s| s == value).unwrap();
        assert!(position("barbell full squat") < position("pistol-squat hold"));
        let first_containment = suggestions
            .iter()
            .position(|s| !starts_with_part(&s.to_lowercase(), "sq"))
            .unwrap();
        assert!(
            suggestions[first_containment..]
                .iter()
                .all(|s| !starts_with_part(&s.to_lowercase(), "sq"))
        );
        assert!(
            suggestions
                .iter()
                .all(|s| s.to_lowercase().contains("sq"))
        );
    }

    #[test]
    fn test_suggest_orders_groups_alphabetically() {
        let exercises = vec![
            Exercise {
                equipment: "гантелі".to_string(),
                ..exercise("r1", "")
            },
            Exercise {
                equipment: "гиря".to_string(),
                ..exercise("r2", "")
            },
            Exercise {
                equipment: "власна вага".to_string(),
                ..exercise("r3", "")
            },
            Exercise {
                target: "ґудзик".to_string(),
                ..exercise("r4", "")
            },
        ];
        assert_eq!(
            suggest(&exercises, "г", 10),
            vec!["гантелі", "гиря", "власна вага"]
        );
    }

    #[test]
    fn test_suggest_deduplicates_values() {
        let exercises = vec![
            Exercise {
                target: "біцепси".to_string(),
                ..exercise("r1", "")
            },
            Exercise {
                target: "Біцепси".to_string(),
                ..exercise("r2", "")
            },
        ];
        assert_eq!(suggest(&exercises, "біц", 10), vec!["біцепси"]);
    }

    #[test]
    fn test_suggest_multiple_parts() {
        let exercises = vec![exercise("r1", "plank"), exercise("r2", "burpee")];
        assert_eq!(
            suggest(&exercises, "plank, burp", 10),
            vec!["burpee", "plank"]
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(10)]
    fn test_suggest_limit(#[case] limit: usize) {
        let suggestions = suggest(&corpus(vec![]), "а", limit);
        assert!(suggestions.len() <= limit);
        assert!(suggestions.iter().all(|s| !s.is_empty()));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case(",")]
    fn test_suggest_blank_query(#[case] query: &str) {
        assert_eq!(suggest(&corpus(vec![]), query, 10), Vec::<String>::new());
    }
}
