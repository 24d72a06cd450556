#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod dedup;
pub mod synonyms;
pub mod text;
pub mod translation;

mod corpus;
mod error;
mod exercise;
mod favorite;
mod quote;
mod rating;
mod search;
mod service;

#[cfg(test)]
mod mock;

pub use catalog::{
    BUILT_IN_PREFIX, MuscleGroup, built_in_exercise, built_in_exercise_by_name,
    built_in_exercises,
};
pub use corpus::{CatalogConfig, Corpus, CorpusState};
pub use error::{
    CreateError, DeleteError, ReadError, StorageError, SubmitError, UpdateError, ValidationError,
};
pub use exercise::{
    Category, Exercise, ExerciseCriteria, ExerciseID, ExerciseRepository, ExerciseService,
    FilterKind, Media, Page, first_non_empty, split_instructions,
};
pub use favorite::{FavoriteRepository, FavoriteService};
pub use quote::{CachedQuote, Quote, QuoteRepository, QuoteService};
pub use rating::{
    Email, EmailError, Rating, RatingError, SubscriptionRepository, SubscriptionService,
    format_rating,
};
pub use search::{search, suggest};
pub use service::Service;
