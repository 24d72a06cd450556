//! Cached REST
//!
//! The `REST` API is the only source of the exercise catalog, while local storage holds the
//! user-specific data: favorites and the quote of the day. Nothing of the catalog is cached
//! between page loads.

use log::warn;
use your_energy_domain as domain;

use crate::local_storage::{Favorites, QuoteCache};
use crate::rest::{GlooNetSendRequest, REST, SendRequest};

#[derive(Clone)]
pub struct CachedREST<S: SendRequest> {
    pub rest: REST<S>,
}

impl CachedREST<GlooNetSendRequest> {
    #[must_use]
    pub fn new() -> Self {
        Self { rest: REST::new() }
    }
}

impl Default for CachedREST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> domain::ExerciseRepository for CachedREST<S> {
    async fn read_categories(
        &self,
        kind: domain::FilterKind,
        page: u32,
        limit: u32,
    ) -> Result<domain::Page<domain::Category>, domain::ReadError> {
        self.rest.read_categories(kind, page, limit).await
    }

    async fn read_exercises(
        &self,
        criteria: &domain::ExerciseCriteria,
    ) -> Result<domain::Page<domain::Exercise>, domain::ReadError> {
        self.rest.read_exercises(criteria).await
    }

    async fn read_exercise(
        &self,
        id: &domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        self.rest.read_exercise(id).await
    }

    async fn rate_exercise(
        &self,
        id: &domain::ExerciseID,
        rating: domain::Rating,
        email: Option<domain::Email>,
    ) -> Result<domain::Exercise, domain::UpdateError> {
        let exercise = self.rest.rate_exercise(id, rating, email).await?;
        refresh_favorite(&exercise).await;
        Ok(exercise)
    }
}

/// Replaces the stored snapshot of a favorite exercise by its updated version.
async fn refresh_favorite(exercise: &domain::Exercise) {
    use domain::FavoriteRepository;

    let Ok(mut favorites) = Favorites.read_favorites().await else {
        return;
    };
    let Some(favorite) = favorites.iter_mut().find(|f| f.id == exercise.id) else {
        return;
    };
    *favorite = exercise.clone();
    if let Err(err) = Favorites.replace_favorites(favorites).await {
        warn!("failed to update favorite: {err}");
    }
}

impl<S: SendRequest> domain::SubscriptionRepository for CachedREST<S> {
    async fn create_subscription(
        &self,
        email: domain::Email,
    ) -> Result<String, domain::CreateError> {
        self.rest.create_subscription(email).await
    }
}

impl<S: SendRequest> domain::FavoriteRepository for CachedREST<S> {
    async fn read_favorites(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Favorites.read_favorites().await
    }

    async fn replace_favorites(
        &self,
        favorites: Vec<domain::Exercise>,
    ) -> Result<Vec<domain::Exercise>, domain::UpdateError> {
        Favorites.replace_favorites(favorites).await
    }
}

impl<S: SendRequest> domain::QuoteRepository for CachedREST<S> {
    async fn read_quote(&self) -> Result<domain::Quote, domain::ReadError> {
        self.rest.read_quote().await
    }

    async fn read_cached_quote(&self) -> Result<Option<domain::CachedQuote>, domain::ReadError> {
        QuoteCache.read()
    }

    async fn replace_cached_quote(
        &self,
        quote: domain::CachedQuote,
    ) -> Result<domain::CachedQuote, domain::UpdateError> {
        QuoteCache.write(quote)
    }

    async fn delete_cached_quote(&self) -> Result<(), domain::DeleteError> {
        QuoteCache.delete();
        Ok(())
    }
}
