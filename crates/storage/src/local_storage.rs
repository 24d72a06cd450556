use std::collections::VecDeque;

use chrono::NaiveDate;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use ::log::warn;
use serde::{Deserialize, Serialize};
use your_energy_domain as domain;
use your_energy_web_app::{Settings, SettingsRepository, log};

use crate::rest;

const KEY_FAVORITES: &str = "your_energy_favorites";
const KEY_QUOTE: &str = "your_energy_quote";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

/// Favorite exercises, stored as exercise documents of the API.
pub struct Favorites;

impl domain::FavoriteRepository for Favorites {
    async fn read_favorites(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        match LocalStorage::get::<Vec<rest::Exercise>>(KEY_FAVORITES) {
            Ok(favorites) => Ok(favorites.into_iter().map(domain::Exercise::from).collect()),
            Err(StorageError::KeyNotFound(_)) => Ok(vec![]),
            Err(StorageError::SerdeError(err)) => {
                warn!("ignoring corrupted favorites: {err}");
                Ok(vec![])
            }
            Err(err) => Err(storage_error(err).into()),
        }
    }

    async fn replace_favorites(
        &self,
        favorites: Vec<domain::Exercise>,
    ) -> Result<Vec<domain::Exercise>, domain::UpdateError> {
        LocalStorage::set(
            KEY_FAVORITES,
            favorites.iter().map(rest::Exercise::from).collect::<Vec<_>>(),
        )
        .map_err(storage_error)?;
        Ok(favorites)
    }
}

/// The quote of the day together with the date it was fetched on.
pub struct QuoteCache;

#[derive(Serialize, Deserialize)]
struct StoredQuote {
    #[serde(flatten)]
    quote: rest::Quote,
    date: NaiveDate,
}

impl QuoteCache {
    pub fn read(&self) -> Result<Option<domain::CachedQuote>, domain::ReadError> {
        match LocalStorage::get::<StoredQuote>(KEY_QUOTE) {
            Ok(stored) => Ok(Some(domain::CachedQuote {
                quote: stored.quote.into(),
                date: stored.date,
            })),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(err)) => {
                warn!("ignoring corrupted quote: {err}");
                Ok(None)
            }
            Err(err) => Err(storage_error(err).into()),
        }
    }

    pub fn write(
        &self,
        quote: domain::CachedQuote,
    ) -> Result<domain::CachedQuote, domain::UpdateError> {
        LocalStorage::set(
            KEY_QUOTE,
            StoredQuote {
                quote: quote.quote.clone().into(),
                date: quote.date,
            },
        )
        .map_err(storage_error)?;
        Ok(quote)
    }

    pub fn delete(&self) {
        LocalStorage::delete(KEY_QUOTE);
    }
}

pub struct UI;

impl SettingsRepository for UI {
    async fn read_settings(&self) -> Result<Settings, String> {
        match LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(StorageError::KeyNotFound(_)) => Ok(Settings::default()),
            Err(err) => Err(err.to_string()),
        }
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(StorageError::KeyNotFound(_)) => Ok(VecDeque::new()),
            Err(err) => Err(log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        LocalStorage::set(KEY_LOG, entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

fn storage_error(err: StorageError) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}
