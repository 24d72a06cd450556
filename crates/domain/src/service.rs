use chrono::NaiveDate;
use log::{debug, error, warn};

use crate::{
    CachedQuote, CatalogConfig, Category, Corpus, CreateError, Exercise, ExerciseCriteria,
    ExerciseID, ExerciseRepository, ExerciseService, FavoriteRepository, FavoriteService,
    FilterKind, MuscleGroup, Page, Quote, QuoteRepository, QuoteService, ReadError, SubmitError,
    SubscriptionRepository, SubscriptionService, UpdateError, built_in_exercise,
    built_in_exercise_by_name, search, suggest, translation::anatomical_image,
};

pub struct Service<R> {
    repository: R,
    corpus: Corpus,
    config: CatalogConfig,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, CatalogConfig::default())
    }

    pub fn with_config(repository: R, config: CatalogConfig) -> Self {
        Self {
            repository,
            corpus: Corpus::default(),
            config,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Exercises of the current corpus matching the criteria, used if the API has none.
    fn fallback_exercises(&self, criteria: &ExerciseCriteria) -> Option<Vec<Exercise>> {
        if let Some(keyword) = criteria.keyword() {
            let exercises = search(&self.corpus.exercises(), keyword);
            if !exercises.is_empty() {
                debug!("found {} exercises for {keyword:?} locally", exercises.len());
                return Some(exercises);
            }
        }
        if let Some(muscle) = criteria.muscle() {
            let exercises = MuscleGroup::from_filter(muscle)
                .map(MuscleGroup::exercises)
                .unwrap_or_default();
            if !exercises.is_empty() {
                debug!("using {} built-in exercises for {muscle:?}", exercises.len());
                return Some(exercises);
            }
        }
        None
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_categories(
        &self,
        kind: FilterKind,
        page: u32,
        limit: u32,
    ) -> Result<Page<Category>, ReadError> {
        log_on_error!(
            self.repository.read_categories(kind, page, limit),
            ReadError,
            "get",
            "categories"
        )
    }

    async fn get_exercises(
        &self,
        criteria: &ExerciseCriteria,
    ) -> Result<Page<Exercise>, ReadError> {
        let result = log_on_error!(
            self.repository.read_exercises(criteria),
            ReadError,
            "get",
            "exercises"
        );
        if matches!(result, Ok(ref page) if !page.is_empty()) {
            return result;
        }
        match self.fallback_exercises(criteria) {
            Some(exercises) => Ok(Page::paginate(
                exercises,
                criteria.page,
                self.config.page_limit,
            )),
            None => result,
        }
    }

    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        if id.is_built_in() {
            return built_in_exercise(id).cloned().ok_or(ReadError::NotFound);
        }
        match log_on_error!(
            self.repository.read_exercise(id),
            ReadError,
            "get",
            "exercise"
        ) {
            Ok(exercise) => Ok(with_anatomical_image(exercise)),
            Err(err) => built_in_exercise(id).cloned().ok_or(err),
        }
    }

    async fn rate_exercise(
        &self,
        id: &ExerciseID,
        rating: f64,
        email: &str,
    ) -> Result<Exercise, SubmitError> {
        let (rating, email) = self.validate_rating(rating, email)?;
        if id.is_built_in() {
            return Ok(built_in_exercise(id)
                .cloned()
                .ok_or(UpdateError::NotFound)?);
        }
        Ok(log_on_error!(
            self.repository.rate_exercise(id, rating, email),
            UpdateError,
            "rate",
            "exercise"
        )?)
    }

    async fn load_corpus(&self) {
        self.corpus.load(&self.repository, &self.config).await;
    }

    fn search_exercises(&self, query: &str) -> Vec<Exercise> {
        search(&self.corpus.exercises(), query)
    }

    fn suggest_exercises(&self, query: &str) -> Vec<String> {
        suggest(
            &self.corpus.exercises(),
            query,
            self.config.suggestion_limit,
        )
    }
}

/// Adds the anatomical illustration of the matching built-in exercise or the illustration table.
fn with_anatomical_image(mut exercise: Exercise) -> Exercise {
    let image = built_in_exercise(&exercise.id)
        .or_else(|| built_in_exercise_by_name(&exercise.name))
        .map(|built_in| built_in.media.anatomical_image.clone())
        .filter(|image| !image.is_empty())
        .or_else(|| anatomical_image(&exercise.name).map(str::to_string));
    if let Some(image) = image {
        exercise.media.anatomical_image = image;
    }
    exercise
}

impl<R: SubscriptionRepository> SubscriptionService for Service<R> {
    async fn subscribe(&self, email: &str) -> Result<String, SubmitError> {
        let email = self.validate_email(email)?;
        Ok(log_on_error!(
            self.repository.create_subscription(email),
            CreateError,
            "create",
            "subscription"
        )?)
    }
}

impl<R: FavoriteRepository> FavoriteService for Service<R> {
    async fn get_favorites(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_favorites(),
            ReadError,
            "get",
            "favorites"
        )
    }

    async fn add_favorite(&self, exercise: Exercise) -> Result<Vec<Exercise>, UpdateError> {
        let mut favorites = self.get_favorites().await?;
        if favorites.iter().any(|f| f.id == exercise.id) {
            return Ok(favorites);
        }
        favorites.push(exercise);
        log_on_error!(
            self.repository.replace_favorites(favorites),
            UpdateError,
            "replace",
            "favorites"
        )
    }

    async fn remove_favorite(&self, id: &ExerciseID) -> Result<Vec<Exercise>, UpdateError> {
        let mut favorites = self.get_favorites().await?;
        favorites.retain(|f| f.id != *id);
        log_on_error!(
            self.repository.replace_favorites(favorites),
            UpdateError,
            "replace",
            "favorites"
        )
    }
}

impl<R: QuoteRepository> QuoteService for Service<R> {
    async fn get_quote(&self, today: NaiveDate) -> Result<Quote, ReadError> {
        match self.repository.read_cached_quote().await {
            Ok(Some(cached)) if cached.is_valid_on(today) => return Ok(cached.quote),
            Ok(Some(_)) => {
                if let Err(err) = self.repository.delete_cached_quote().await {
                    warn!("failed to delete outdated quote: {err}");
                }
            }
            Ok(None) => {}
            Err(err) => warn!("failed to read cached quote: {err}"),
        }

        let quote = log_on_error!(self.repository.read_quote(), ReadError, "get", "quote")?;
        if let Err(err) = self
            .repository
            .replace_cached_quote(CachedQuote {
                quote: quote.clone(),
                date: today,
            })
            .await
        {
            error!("failed to cache quote: {err}");
        }
        Ok(quote)
    }
}
