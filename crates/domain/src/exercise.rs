use std::sync::LazyLock;

use derive_more::{Deref, Display};
use regex::Regex;

use crate::{
    BUILT_IN_PREFIX, Email, Rating, ReadError, SubmitError, UpdateError, ValidationError,
    text::is_blank,
};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_categories(
        &self,
        kind: FilterKind,
        page: u32,
        limit: u32,
    ) -> Result<Page<Category>, ReadError>;
    async fn read_exercises(
        &self,
        criteria: &ExerciseCriteria,
    ) -> Result<Page<Exercise>, ReadError>;
    async fn read_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError>;
    async fn rate_exercise(
        &self,
        id: &ExerciseID,
        rating: Rating,
        email: Option<Email>,
    ) -> Result<Exercise, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_categories(
        &self,
        kind: FilterKind,
        page: u32,
        limit: u32,
    ) -> Result<Page<Category>, ReadError>;
    async fn get_exercises(
        &self,
        criteria: &ExerciseCriteria,
    ) -> Result<Page<Exercise>, ReadError>;
    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError>;
    async fn rate_exercise(
        &self,
        id: &ExerciseID,
        rating: f64,
        email: &str,
    ) -> Result<Exercise, SubmitError>;

    /// Populates the search corpus with exercises of all body part and equipment categories.
    async fn load_corpus(&self);
    fn search_exercises(&self, query: &str) -> Vec<Exercise>;
    fn suggest_exercises(&self, query: &str) -> Vec<String>;

    fn validate_rating(
        &self,
        rating: f64,
        email: &str,
    ) -> Result<(Rating, Option<Email>), ValidationError> {
        let rating = Rating::new(rating)?;
        if is_blank(email) {
            return Ok((rating, None));
        }
        Ok((rating, Some(Email::new(email)?)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub target: String,
    pub body_part: String,
    pub equipment: String,
    pub rating: f32,
    pub burned_calories: u32,
    pub time: u32,
    pub popularity: u32,
    pub media: Media,
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_built_in(&self) -> bool {
        self.0.starts_with(BUILT_IN_PREFIX)
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media {
    pub image: String,
    pub anatomical_image: String,
}

/// Returns the first candidate that is present and not blank, or an empty string.
#[must_use]
pub fn first_non_empty<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub filter: String,
    pub name: String,
    pub image: String,
}

impl Category {
    /// The value used as exercise list criterion.
    #[must_use]
    pub fn value(&self) -> &str {
        if self.name.is_empty() {
            &self.filter
        } else {
            &self.name
        }
    }
}

#[derive(strum::AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Muscles,
    #[strum(serialize = "Body parts")]
    BodyParts,
    Equipment,
}

impl FilterKind {
    #[must_use]
    pub fn criteria(self, value: &str, page: u32, limit: u32) -> ExerciseCriteria {
        let value = Some(value.to_string());
        let mut criteria = ExerciseCriteria {
            page,
            limit,
            ..ExerciseCriteria::default()
        };
        match self {
            FilterKind::Muscles => criteria.muscle = value,
            FilterKind::BodyParts => criteria.body_part = value,
            FilterKind::Equipment => criteria.equipment = value,
        }
        criteria
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseCriteria {
    pub body_part: Option<String>,
    pub muscle: Option<String>,
    pub equipment: Option<String>,
    pub keyword: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ExerciseCriteria {
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !is_blank(k))
    }

    #[must_use]
    pub fn muscle(&self) -> Option<&str> {
        self.muscle.as_deref().filter(|m| !is_blank(m))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns the given page of locally produced results.
    ///
    /// Pages are counted from 1. A page beyond the last one has no results.
    #[must_use]
    pub fn paginate(results: Vec<T>, page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = u32::try_from(results.len())
            .unwrap_or(u32::MAX)
            .div_ceil(per_page)
            .max(1);
        let results = results
            .into_iter()
            .skip(((page - 1) as usize).saturating_mul(per_page as usize))
            .take(per_page as usize)
            .collect();
        Self {
            page,
            per_page,
            total_pages,
            results,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

static STEP_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+|\.\s+").expect("valid regex"));
static STEP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?$").expect("valid regex"));

/// Splits instructions delivered as a single text into steps.
#[must_use]
pub fn split_instructions(text: &str) -> Vec<String> {
    STEP_SEPARATOR
        .split(text)
        .flat_map(split_before_step_numbers)
        .map(str::trim)
        .filter(|step| !step.is_empty() && !STEP_NUMBER.is_match(step))
        .map(str::to_string)
        .collect()
}

/// Splits before every digit run that is followed by a period.
///
/// Decimal numbers are split as well ("10.5" starts a new step), as step markers are not
/// distinguishable from them without a following space.
fn split_before_step_numbers(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = vec![];
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()) {
            let end = i + bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
            if bytes.get(end) == Some(&b'.') && i > start {
                parts.push(&text[start..i]);
                start = i;
            }
            i = end;
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}
