use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{Exercise, text::normalize};

/// Removes duplicate exercises while keeping the first occurrence.
///
/// Exercises with an id are duplicates if the id was seen before. Exercises without an id are
/// duplicates if their name equals the name of any exercise kept before, ignoring case.
pub fn dedup_exercises(exercises: impl IntoIterator<Item = Exercise>) -> Vec<Exercise> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    let mut result = vec![];
    for exercise in exercises {
        let name = exercise.name.to_lowercase();
        let is_new = if exercise.id.is_empty() {
            !names.contains(&name)
        } else {
            ids.insert(exercise.id.clone())
        };
        if is_new {
            names.insert(name);
            result.push(exercise);
        }
    }
    result
}

/// Removes strings that are equal after normalization, keeping the first spelling.
pub fn dedup_strings(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique = IndexMap::new();
    for value in values {
        unique.entry(normalize(&value)).or_insert(value);
    }
    unique.into_values().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ExerciseID;

    fn exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: ExerciseID::from(id),
            name: name.to_string(),
            ..Exercise::default()
        }
    }

    fn ids(exercises: &[Exercise]) -> Vec<&str> {
        exercises.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_dedup_exercises_by_id() {
        let result = dedup_exercises(vec![
            exercise("a", "squat"),
            exercise("b", "lunge"),
            exercise("a", "other squat"),
        ]);
        assert_eq!(ids(&result), vec!["a", "b"]);
        assert_eq!(result[0].name, "squat");
    }

    #[test]
    fn test_dedup_exercises_without_id_by_name() {
        let result = dedup_exercises(vec![
            exercise("a", "Squat"),
            exercise("", "squat"),
            exercise("", "Plank"),
            exercise("", "plank"),
            exercise("b", "plank"),
        ]);
        assert_eq!(
            result
                .iter()
                .map(|e| (e.id.as_str(), e.name.as_str()))
                .collect::<Vec<_>>(),
            vec![("a", "Squat"), ("", "Plank"), ("b", "plank")]
        );
    }

    #[test]
    fn test_dedup_exercises_empty() {
        assert!(dedup_exercises(vec![]).is_empty());
    }

    #[test]
    fn test_dedup_strings() {
        assert_eq!(
            dedup_strings(vec![
                "Присідання".to_string(),
                "squat".to_string(),
                "присідання ".to_string(),
                "SQUAT".to_string(),
            ]),
            vec!["Присідання", "squat"]
        );
    }
}
