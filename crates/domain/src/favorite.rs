use crate::{Exercise, ExerciseID, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait FavoriteRepository {
    async fn read_favorites(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn replace_favorites(
        &self,
        favorites: Vec<Exercise>,
    ) -> Result<Vec<Exercise>, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait FavoriteService {
    async fn get_favorites(&self) -> Result<Vec<Exercise>, ReadError>;
    /// Adds a snapshot of the exercise unless an exercise with the same id is stored already.
    async fn add_favorite(&self, exercise: Exercise) -> Result<Vec<Exercise>, UpdateError>;
    async fn remove_favorite(&self, id: &ExerciseID) -> Result<Vec<Exercise>, UpdateError>;

    async fn is_favorite(&self, id: &ExerciseID) -> bool {
        self.get_favorites()
            .await
            .is_ok_and(|favorites| favorites.iter().any(|f| f.id == *id))
    }

    /// Returns whether the exercise is a favorite afterwards.
    async fn toggle_favorite(&self, exercise: Exercise) -> Result<bool, UpdateError> {
        if self.is_favorite(&exercise.id).await {
            self.remove_favorite(&exercise.id).await?;
            Ok(false)
        } else {
            self.add_favorite(exercise).await?;
            Ok(true)
        }
    }
}
