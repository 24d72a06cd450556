use std::cell::{Cell, RefCell};

use futures_util::future::{join, join_all};
use log::debug;

use crate::{
    Exercise, ExerciseRepository, FilterKind, built_in_exercises, dedup::dedup_exercises,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of categories fetched per filter kind when loading the corpus.
    pub category_limit: u32,
    /// Number of exercises fetched per category when loading the corpus.
    pub exercise_limit: u32,
    /// Page size of exercise listings.
    pub page_limit: u32,
    pub suggestion_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            category_limit: 100,
            exercise_limit: 20,
            page_limit: 10,
            suggestion_limit: 10,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CorpusState {
    #[default]
    Empty,
    Loading,
    Loaded,
}

/// The searchable set of exercises: the built-in exercises followed by the exercises fetched
/// for all body part and equipment categories.
///
/// The remote part is fetched at most once. The corpus is meant for a single-threaded
/// executor and therefore not `Sync`.
#[derive(Debug, Default)]
pub struct Corpus {
    state: Cell<CorpusState>,
    body_part_exercises: RefCell<Vec<Exercise>>,
    equipment_exercises: RefCell<Vec<Exercise>>,
}

impl Corpus {
    #[must_use]
    pub fn state(&self) -> CorpusState {
        self.state.get()
    }

    /// Fetches the remote part of the corpus.
    ///
    /// Calls while loading or after loading return immediately. Failed requests contribute no
    /// exercises. If the returned future is dropped before completion, the corpus becomes empty
    /// again and the next call starts over.
    pub async fn load<R: ExerciseRepository>(&self, repository: &R, config: &CatalogConfig) {
        if self.state.get() != CorpusState::Empty {
            return;
        }
        self.state.set(CorpusState::Loading);
        let _reset = ResetOnCancel(&self.state);

        let (body_part_exercises, equipment_exercises) = join(
            read_category_exercises(repository, FilterKind::BodyParts, config),
            read_category_exercises(repository, FilterKind::Equipment, config),
        )
        .await;

        debug!(
            "loaded {} body part and {} equipment exercises",
            body_part_exercises.len(),
            equipment_exercises.len()
        );
        *self.body_part_exercises.borrow_mut() = body_part_exercises;
        *self.equipment_exercises.borrow_mut() = equipment_exercises;
        self.state.set(CorpusState::Loaded);
    }

    /// Returns the deduplicated union of built-in and fetched exercises.
    #[must_use]
    pub fn exercises(&self) -> Vec<Exercise> {
        dedup_exercises(
            built_in_exercises()
                .iter()
                .chain(self.body_part_exercises.borrow().iter())
                .chain(self.equipment_exercises.borrow().iter())
                .cloned()
                .collect::<Vec<_>>(),
        )
    }
}

/// Resets an unfinished load.
struct ResetOnCancel<'a>(&'a Cell<CorpusState>);

impl Drop for ResetOnCancel<'_> {
    fn drop(&mut self) {
        if self.0.get() == CorpusState::Loading {
            debug!("loading of exercises cancelled");
            self.0.set(CorpusState::Empty);
        }
    }
}

async fn read_category_exercises<R: ExerciseRepository>(
    repository: &R,
    kind: FilterKind,
    config: &CatalogConfig,
) -> Vec<Exercise> {
    let categories = match repository
        .read_categories(kind, 1, config.category_limit)
        .await
    {
        Ok(page) => page.results,
        Err(err) => {
            debug!("failed to read {} categories: {err}", kind.as_ref());
            return vec![];
        }
    };

    join_all(categories.iter().map(|category| async move {
        let criteria = kind.criteria(category.value(), 1, config.exercise_limit);
        match repository.read_exercises(&criteria).await {
            Ok(page) => page.results,
            Err(err) => {
                debug!(
                    "failed to read exercises of {} category {}: {err}",
                    kind.as_ref(),
                    category.value()
                );
                vec![]
            }
        }
    }))
    .await
    .into_iter()
    .flatten()
    .collect()
}
