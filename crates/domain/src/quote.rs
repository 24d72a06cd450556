use chrono::NaiveDate;

use crate::{DeleteError, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait QuoteRepository {
    async fn read_quote(&self) -> Result<Quote, ReadError>;
    async fn read_cached_quote(&self) -> Result<Option<CachedQuote>, ReadError>;
    async fn replace_cached_quote(&self, quote: CachedQuote) -> Result<CachedQuote, UpdateError>;
    async fn delete_cached_quote(&self) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait QuoteService {
    /// Returns the quote of the given day, fetching it at most once per day.
    async fn get_quote(&self, today: NaiveDate) -> Result<Quote, ReadError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedQuote {
    pub quote: Quote,
    pub date: NaiveDate,
}

impl CachedQuote {
    #[must_use]
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), true)]
    #[case(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), false)]
    #[case(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), false)]
    fn test_cached_quote_is_valid_on(#[case] today: NaiveDate, #[case] expected: bool) {
        let cached = CachedQuote {
            quote: Quote::default(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(cached.is_valid_on(today), expected);
    }
}
