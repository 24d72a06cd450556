use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::poll_fn,
    task::Poll,
};

use crate::{
    CachedQuote, Category, CreateError, DeleteError, Email, Exercise, ExerciseCriteria,
    ExerciseID, ExerciseRepository, FavoriteRepository, FilterKind, Page, Quote, QuoteRepository,
    Rating, ReadError, StorageError, SubscriptionRepository, UpdateError,
};

/// In-memory repository whose futures are ready on first poll unless `park_once` is set.
#[derive(Default)]
pub(crate) struct MockRepository {
    pub body_parts: Option<Vec<Category>>,
    pub equipment: Option<Vec<Category>>,
    pub muscles: Option<Vec<Category>>,
    /// Exercise listings by criterion value, missing values fail.
    pub exercises: HashMap<String, Vec<Exercise>>,
    pub details: HashMap<String, Exercise>,
    pub park_once: Cell<bool>,
    pub category_requests: Cell<usize>,
    pub category_limits: RefCell<Vec<u32>>,
    pub exercise_requests: Cell<usize>,
    pub criteria: RefCell<Vec<ExerciseCriteria>>,
    pub detail_requests: Cell<usize>,
    pub ratings: RefCell<Vec<(ExerciseID, Rating, Option<Email>)>>,
    pub subscriptions: RefCell<Vec<Email>>,
    pub favorites: RefCell<Vec<Exercise>>,
    pub favorites_unavailable: bool,
    pub quote: Option<Quote>,
    pub quote_requests: Cell<usize>,
    pub cached_quote: RefCell<Option<CachedQuote>>,
    pub quote_cache_unavailable: bool,
}

pub(crate) fn category(value: &str) -> Category {
    Category {
        filter: String::new(),
        name: value.to_string(),
        image: String::new(),
    }
}

pub(crate) fn exercise(id: &str, name: &str) -> Exercise {
    Exercise {
        id: ExerciseID::from(id),
        name: name.to_string(),
        ..Exercise::default()
    }
}

fn no_connection() -> StorageError {
    StorageError::NoConnection
}

impl ExerciseRepository for MockRepository {
    async fn read_categories(
        &self,
        kind: FilterKind,
        page: u32,
        limit: u32,
    ) -> Result<Page<Category>, ReadError> {
        self.category_requests.set(self.category_requests.get() + 1);
        self.category_limits.borrow_mut().push(limit);
        if self.park_once.replace(false) {
            let mut parked = false;
            poll_fn(|_| {
                if parked {
                    Poll::Ready(())
                } else {
                    parked = true;
                    Poll::Pending
                }
            })
            .await;
        }
        let categories = match kind {
            FilterKind::Muscles => &self.muscles,
            FilterKind::BodyParts => &self.body_parts,
            FilterKind::Equipment => &self.equipment,
        };
        match categories {
            Some(results) => Ok(Page {
                page,
                per_page: limit,
                total_pages: 1,
                results: results.clone(),
            }),
            None => Err(no_connection().into()),
        }
    }

    async fn read_exercises(
        &self,
        criteria: &ExerciseCriteria,
    ) -> Result<Page<Exercise>, ReadError> {
        self.exercise_requests.set(self.exercise_requests.get() + 1);
        self.criteria.borrow_mut().push(criteria.clone());
        let value = criteria
            .body_part
            .as_ref()
            .or(criteria.equipment.as_ref())
            .or(criteria.muscle.as_ref())
            .or(criteria.keyword.as_ref());
        match value.and_then(|v| self.exercises.get(v)) {
            Some(results) => Ok(Page {
                page: criteria.page,
                per_page: criteria.limit,
                total_pages: 3,
                results: results.clone(),
            }),
            None => Err(no_connection().into()),
        }
    }

    async fn read_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        self.detail_requests.set(self.detail_requests.get() + 1);
        self.details
            .get(id.as_str())
            .cloned()
            .ok_or(ReadError::NotFound)
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn rate_exercise(
        &self,
        id: &ExerciseID,
        rating: Rating,
        email: Option<Email>,
    ) -> Result<Exercise, UpdateError> {
        self.ratings
            .borrow_mut()
            .push((id.clone(), rating, email));
        self.details
            .get(id.as_str())
            .map(|exercise| Exercise {
                rating: rating.value() as f32,
                ..exercise.clone()
            })
            .ok_or(UpdateError::NotFound)
    }
}

impl SubscriptionRepository for MockRepository {
    async fn create_subscription(&self, email: Email) -> Result<String, CreateError> {
        let mut subscriptions = self.subscriptions.borrow_mut();
        if subscriptions.contains(&email) {
            return Err(CreateError::Conflict);
        }
        subscriptions.push(email.clone());
        Ok(format!("subscribed {email}"))
    }
}

impl FavoriteRepository for MockRepository {
    async fn read_favorites(&self) -> Result<Vec<Exercise>, ReadError> {
        if self.favorites_unavailable {
            return Err(no_connection().into());
        }
        Ok(self.favorites.borrow().clone())
    }

    async fn replace_favorites(
        &self,
        favorites: Vec<Exercise>,
    ) -> Result<Vec<Exercise>, UpdateError> {
        if self.favorites_unavailable {
            return Err(no_connection().into());
        }
        self.favorites.replace(favorites.clone());
        Ok(favorites)
    }
}

impl QuoteRepository for MockRepository {
    async fn read_quote(&self) -> Result<Quote, ReadError> {
        self.quote_requests.set(self.quote_requests.get() + 1);
        self.quote.clone().ok_or(no_connection().into())
    }

    async fn read_cached_quote(&self) -> Result<Option<CachedQuote>, ReadError> {
        Ok(self.cached_quote.borrow().clone())
    }

    async fn replace_cached_quote(&self, quote: CachedQuote) -> Result<CachedQuote, UpdateError> {
        if self.quote_cache_unavailable {
            return Err(StorageError::Other("quota exceeded".into()).into());
        }
        self.cached_quote.replace(Some(quote.clone()));
        Ok(quote)
    }

    async fn delete_cached_quote(&self) -> Result<(), DeleteError> {
        self.cached_quote.replace(None);
        Ok(())
    }
}
