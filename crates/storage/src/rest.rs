//! REST client of the exercise API.
//!
//! The wire types mirror the JSON documents of the API. The API is not consistent in naming
//! image fields and in encoding numbers, so deserialization is lenient and the conversion into
//! domain types picks the first non-empty alternative.

use gloo_net::http::{Request, Response};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use your_energy_domain as domain;

pub const BASE_URL: &str = "https://your-energy.b.goit.study/api";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub base_url: String,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_sender(GlooNetSendRequest)
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> REST<S> {
    pub fn with_sender(sender: S) -> Self {
        Self {
            sender,
            base_url: BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn read_categories(
        &self,
        kind: domain::FilterKind,
        page: u32,
        limit: u32,
    ) -> Result<domain::Page<domain::Category>, domain::ReadError> {
        let request = Request::get(&self.url("filters"))
            .query([
                ("filter", kind.as_ref().to_string()),
                ("page", page.to_string()),
                ("limit", limit.to_string()),
            ])
            .build();
        let page = self.fetch::<Page<Category>>(request).await?;
        Ok(page.into())
    }

    pub async fn read_exercises(
        &self,
        criteria: &domain::ExerciseCriteria,
    ) -> Result<domain::Page<domain::Exercise>, domain::ReadError> {
        let mut params = vec![];
        for (key, value) in [
            ("bodypart", &criteria.body_part),
            ("muscles", &criteria.muscle),
            ("equipment", &criteria.equipment),
            ("keyword", &criteria.keyword),
        ] {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }
        params.push(("page", criteria.page.to_string()));
        params.push(("limit", criteria.limit.to_string()));
        let request = Request::get(&self.url("exercises")).query(params).build();
        let page = self.fetch::<Page<Exercise>>(request).await?;
        Ok(page.into())
    }

    pub async fn read_exercise(
        &self,
        id: &domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        let request = Request::get(&self.url(&exercise_path(id))).build();
        Ok(self.fetch::<Exercise>(request).await?.into())
    }

    pub async fn rate_exercise(
        &self,
        id: &domain::ExerciseID,
        rating: domain::Rating,
        email: Option<domain::Email>,
    ) -> Result<domain::Exercise, domain::UpdateError> {
        let request = Request::patch(&self.url(&format!("{}/rating", exercise_path(id)))).json(
            &RatingRequest {
                rate: rating.value(),
                email: email.map(|email| email.to_string()),
            },
        );
        Ok(self.fetch::<Exercise>(request).await?.into())
    }

    pub async fn create_subscription(
        &self,
        email: domain::Email,
    ) -> Result<String, domain::CreateError> {
        let request = Request::post(&self.url("subscription")).json(&SubscriptionRequest {
            email: email.to_string(),
        });
        Ok(self.fetch::<Message>(request).await?.message)
    }

    pub async fn read_quote(&self) -> Result<domain::Quote, domain::ReadError> {
        let request = Request::get(&self.url("quote")).build();
        Ok(self.fetch::<Quote>(request).await?.into())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn fetch<T>(&self, request: Result<Request, gloo_net::Error>) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = request.map_err(FetchError::Request)?;
        let response = self.sender.send_request(request).await.map_err(|err| {
            debug!("request failed: {err}");
            FetchError::NoConnection
        })?;
        if !response.ok() {
            return Err(FetchError::from_response(response).await);
        }
        response.json::<T>().await.map_err(FetchError::Deserialization)
    }
}

/// Ids are opaque to the client and may contain characters with a meaning in URLs.
fn exercise_path(id: &domain::ExerciseID) -> String {
    format!("exercises/{}", urlencoding::encode(id.as_str()))
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("no connection")]
    NoConnection,
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("{status} {message}")]
    Status { status: u16, message: String },
    #[error("invalid request: {0}")]
    Request(gloo_net::Error),
    #[error("deserialization failed: {0}")]
    Deserialization(gloo_net::Error),
}

impl FetchError {
    async fn from_response(response: Response) -> Self {
        match response.status() {
            404 => FetchError::NotFound,
            409 => FetchError::Conflict,
            status => {
                let message = match response.json::<Message>().await {
                    Ok(Message { message }) if !message.is_empty() => message,
                    _ => response.status_text(),
                };
                FetchError::Status { status, message }
            }
        }
    }

    fn into_storage_error(self) -> domain::StorageError {
        match self {
            FetchError::NoConnection => domain::StorageError::NoConnection,
            err => domain::StorageError::Other(Box::new(err)),
        }
    }
}

impl From<FetchError> for domain::ReadError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NotFound => domain::ReadError::NotFound,
            err => domain::ReadError::Storage(err.into_storage_error()),
        }
    }
}

impl From<FetchError> for domain::CreateError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::Conflict => domain::CreateError::Conflict,
            err => domain::CreateError::Storage(err.into_storage_error()),
        }
    }
}

impl From<FetchError> for domain::UpdateError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NotFound => domain::UpdateError::NotFound,
            err => domain::UpdateError::Storage(err.into_storage_error()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub page: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T, U: From<T>> From<Page<T>> for domain::Page<U> {
    fn from(value: Page<T>) -> Self {
        Self {
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
            results: value.results.into_iter().map(U::from).collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Category {
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "imgURL", default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

impl From<Category> for domain::Category {
    fn from(value: Category) -> Self {
        Self {
            filter: value.filter,
            name: value.name,
            image: domain::first_non_empty([value.img_url.as_deref()]),
        }
    }
}

/// Exercise document of the API, also used for favorites in local storage.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: Option<Instructions>,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub body_part: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default, deserialize_with = "lenient_f32")]
    pub rating: f32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub burned_calories: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub time: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub popularity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
    #[serde(rename = "gifURL", default, skip_serializing_if = "Option::is_none")]
    pub gif_url_upper: Option<String>,
    #[serde(rename = "imgURL", default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anatomical_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_gif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_img: Option<String>,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        Self {
            media: domain::Media {
                image: domain::first_non_empty([
                    value.gif_url.as_deref(),
                    value.gif_url_upper.as_deref(),
                    value.img_url.as_deref(),
                    value.image_url.as_deref(),
                    value.image.as_deref(),
                    value.gif.as_deref(),
                    value.thumbnail.as_deref(),
                ]),
                anatomical_image: domain::first_non_empty([
                    value.muscle_image.as_deref(),
                    value.anatomical_image.as_deref(),
                    value.muscle_gif.as_deref(),
                    value.muscle_img.as_deref(),
                ]),
            },
            id: domain::ExerciseID::from(value.id.trim()),
            name: value.name.trim().to_string(),
            description: value.description,
            instructions: value.instructions.map(Vec::from).unwrap_or_default(),
            target: value.target,
            body_part: value.body_part,
            equipment: value.equipment,
            rating: value.rating,
            burned_calories: value.burned_calories,
            time: value.time,
            popularity: value.popularity,
        }
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            description: value.description.clone(),
            instructions: Some(Instructions::Steps(value.instructions.clone())),
            target: value.target.clone(),
            body_part: value.body_part.clone(),
            equipment: value.equipment.clone(),
            rating: value.rating,
            burned_calories: value.burned_calories,
            time: value.time,
            popularity: value.popularity,
            gif_url: non_empty(&value.media.image),
            muscle_image: non_empty(&value.media.anatomical_image),
            ..Self::default()
        }
    }
}

/// Instructions are delivered either as a list of steps or as a single text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Instructions {
    Steps(Vec<String>),
    Text(String),
}

impl From<Instructions> for Vec<String> {
    fn from(value: Instructions) -> Self {
        match value {
            Instructions::Steps(steps) => steps
                .into_iter()
                .map(|step| step.trim().to_string())
                .filter(|step| !step.is_empty())
                .collect(),
            Instructions::Text(text) => domain::split_instructions(&text),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Quote {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
}

impl From<Quote> for domain::Quote {
    fn from(value: Quote) -> Self {
        Self {
            quote: value.quote,
            author: value.author,
        }
    }
}

impl From<domain::Quote> for Quote {
    fn from(value: domain::Quote) -> Self {
        Self {
            quote: value.quote,
            author: value.author,
        }
    }
}

#[derive(Serialize, Debug)]
struct RatingRequest {
    rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

#[derive(Serialize, Debug)]
struct SubscriptionRequest {
    email: String,
}

#[derive(Deserialize, Debug, Default)]
struct Message {
    #[serde(default)]
    message: String,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.is_finite() && *n >= 0.0)
                    .map(|n| n.round() as u64)
            })
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn lenient_f32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().map_or(0.0, |n| n as f32),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::tests::data::{EXERCISE, exercise_json};

    #[rstest]
    #[case("64f389465ae26083f39b17a2", "exercises/64f389465ae26083f39b17a2")]
    #[case("a/b", "exercises/a%2Fb")]
    #[case("a?b#c", "exercises/a%3Fb%23c")]
    #[case("a b", "exercises/a%20b")]
    fn test_exercise_path(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(exercise_path(&domain::ExerciseID::from(id)), expected);
    }

    #[test]
    fn test_exercise_from_json() {
        let exercise = serde_json::from_value::<Exercise>(exercise_json()).unwrap();
        assert_eq!(domain::Exercise::from(exercise), EXERCISE.clone());
    }

    #[rstest]
    #[case(json!({ "gifUrl": "a.gif", "imgURL": "b.jpg" }), "a.gif")]
    #[case(json!({ "gifUrl": " ", "imgURL": "b.jpg" }), "b.jpg")]
    #[case(json!({ "imageURL": "c.jpg", "thumbnail": "d.jpg" }), "c.jpg")]
    #[case(json!({ "gif": "e.gif", "thumbnail": "d.jpg" }), "e.gif")]
    #[case(json!({}), "")]
    fn test_exercise_image(#[case] value: Value, #[case] expected: &str) {
        let exercise = serde_json::from_value::<Exercise>(value).unwrap();
        assert_eq!(domain::Exercise::from(exercise).media.image, expected);
    }

    #[rstest]
    #[case(json!({ "muscleImage": "1.png", "anatomicalImage": "2.png" }), "1.png")]
    #[case(json!({ "anatomicalImage": "2.png", "muscleGif": "3.gif" }), "2.png")]
    #[case(json!({ "muscleImg": "4.png" }), "4.png")]
    fn test_exercise_anatomical_image(#[case] value: Value, #[case] expected: &str) {
        let exercise = serde_json::from_value::<Exercise>(value).unwrap();
        assert_eq!(
            domain::Exercise::from(exercise).media.anatomical_image,
            expected
        );
    }

    #[rstest]
    #[case(json!(["Lie down.", " ", "Lift. "]), vec!["Lie down.", "Lift."])]
    #[case(json!("1. Lie down. 2. Lift"), vec!["Lie down", "Lift"])]
    #[case(json!(null), vec![])]
    fn test_exercise_instructions(#[case] instructions: Value, #[case] expected: Vec<&str>) {
        let exercise =
            serde_json::from_value::<Exercise>(json!({ "instructions": instructions })).unwrap();
        assert_eq!(domain::Exercise::from(exercise).instructions, expected);
    }

    #[test]
    fn test_exercise_lenient_numbers() {
        let exercise = serde_json::from_value::<Exercise>(json!({
            "rating": "4.5",
            "burnedCalories": 312.0,
            "time": "3",
            "popularity": null,
        }))
        .unwrap();
        assert_eq!(
            (
                exercise.rating,
                exercise.burned_calories,
                exercise.time,
                exercise.popularity
            ),
            (4.5, 312, 3, 0)
        );
    }

    #[test]
    fn test_exercise_to_json() {
        let value = serde_json::to_value(Exercise::from(&*EXERCISE)).unwrap();
        assert_eq!(value["_id"], json!("64f389465ae26083f39b17a2"));
        assert_eq!(value["bodyPart"], json!("waist"));
        assert_eq!(value["gifUrl"], json!("https://example.com/air-bike.gif"));
        assert_eq!(value["muscleImage"], json!("/images/3.png"));
        assert_eq!(value.get("imgURL"), None);
        assert_eq!(
            domain::Exercise::from(serde_json::from_value::<Exercise>(value).unwrap()),
            EXERCISE.clone()
        );
    }

    #[test]
    fn test_page_from_json() {
        let page = serde_json::from_value::<Page<Category>>(json!({
            "page": "2",
            "perPage": 12,
            "totalPages": 3,
            "results": [
                { "filter": "Muscles", "name": "abs", "imgURL": "abs.jpg" },
                { "filter": "Muscles", "name": "biceps" },
            ],
        }))
        .unwrap();
        assert_eq!(
            domain::Page::<domain::Category>::from(page),
            domain::Page {
                page: 2,
                per_page: 12,
                total_pages: 3,
                results: vec![
                    domain::Category {
                        filter: "Muscles".to_string(),
                        name: "abs".to_string(),
                        image: "abs.jpg".to_string(),
                    },
                    domain::Category {
                        filter: "Muscles".to_string(),
                        name: "biceps".to_string(),
                        image: String::new(),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_rating_request_to_json() {
        assert_eq!(
            serde_json::to_value(RatingRequest {
                rate: 4.0,
                email: None
            })
            .unwrap(),
            json!({ "rate": 4.0 })
        );
        assert_eq!(
            serde_json::to_value(RatingRequest {
                rate: 5.0,
                email: Some("alice@example.com".to_string())
            })
            .unwrap(),
            json!({ "rate": 5.0, "email": "alice@example.com" })
        );
    }

    #[rstest]
    #[case(FetchError::NoConnection, "storage: no connection")]
    #[case(FetchError::NotFound, "not found")]
    #[case(FetchError::Status { status: 500, message: "boom".to_string() }, "storage: 500 boom")]
    fn test_read_error_from_fetch_error(#[case] error: FetchError, #[case] expected: &str) {
        let error = domain::ReadError::from(error);
        let description = match error {
            domain::ReadError::NotFound => "not found".to_string(),
            domain::ReadError::Storage(err) => format!("storage: {err}"),
            domain::ReadError::Other(err) => format!("other: {err}"),
        };
        assert_eq!(description, expected);
    }

    #[test]
    fn test_create_error_from_fetch_error() {
        assert!(matches!(
            domain::CreateError::from(FetchError::Conflict),
            domain::CreateError::Conflict
        ));
        assert!(matches!(
            domain::CreateError::from(FetchError::NoConnection),
            domain::CreateError::Storage(domain::StorageError::NoConnection)
        ));
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::cell::RefCell;

        use gloo_net::http::Method;
        use pretty_assertions::assert_eq;
        use serde_json::json;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::*;

        #[wasm_bindgen_test]
        async fn test_read_categories() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).json(&json!({
                    "page": 1,
                    "perPage": 12,
                    "totalPages": 1,
                    "results": [{ "filter": "Body parts", "name": "waist" }],
                })),
            ));

            let page = rest
                .read_categories(domain::FilterKind::BodyParts, 1, 12)
                .await
                .unwrap();

            assert_eq!(page.results[0].name, "waist");
            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(
                request.url(),
                format!("{BASE_URL}/filters?filter=Body+parts&page=1&limit=12")
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_exercises() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&json!({ "page": 1, "perPage": 10, "totalPages": 2, "results": [exercise_json()] })),
            ));

            let page = rest
                .read_exercises(&domain::ExerciseCriteria {
                    muscle: Some("abs".to_string()),
                    keyword: Some(" ".to_string()),
                    page: 1,
                    limit: 10,
                    ..domain::ExerciseCriteria::default()
                })
                .await
                .unwrap();

            assert_eq!(page.results, vec![EXERCISE.clone()]);
            assert_eq!(page.total_pages, 2);
            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(
                request.url(),
                format!("{BASE_URL}/exercises?muscles=abs&page=1&limit=10")
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_exercise_not_found() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(404)
                    .json(&json!({ "message": "Exercise not found" })),
            ));

            assert!(matches!(
                rest.read_exercise(&domain::ExerciseID::from("x/../filters?y")).await,
                Err(domain::ReadError::NotFound)
            ));
            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(
                request.url(),
                format!("{BASE_URL}/exercises/x%2F..%2Ffilters%3Fy")
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_exercise_no_connection() {
            assert!(matches!(
                rest_with_response(None)
                    .read_exercise(&domain::ExerciseID::from("x"))
                    .await,
                Err(domain::ReadError::Storage(domain::StorageError::NoConnection))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_rate_exercise() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).json(&exercise_json()),
            ));

            assert_eq!(
                rest.rate_exercise(
                    &domain::ExerciseID::from("64f389465ae26083f39b17a2"),
                    domain::Rating::new(4.0).unwrap(),
                    None
                )
                .await
                .unwrap(),
                EXERCISE.clone()
            );
            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(request.method(), Method::PATCH);
            assert_eq!(
                request.url(),
                format!("{BASE_URL}/exercises/64f389465ae26083f39b17a2/rating")
            );
        }

        #[wasm_bindgen_test]
        async fn test_rate_exercise_error_message() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(400)
                    .json(&json!({ "message": "Such email already exists" })),
            ));

            let error = rest
                .rate_exercise(
                    &domain::ExerciseID::from("x"),
                    domain::Rating::new(4.0).unwrap(),
                    None,
                )
                .await
                .unwrap_err();

            assert_eq!(error.to_string(), "400 Such email already exists");
        }

        #[wasm_bindgen_test]
        async fn test_create_subscription() {
            let email = domain::Email::new("alice@example.com").unwrap();

            assert_eq!(
                rest_with_response(Some(
                    Response::builder()
                        .status(201)
                        .json(&json!({ "message": "We're excited to have you on board!" })),
                ))
                .create_subscription(email.clone())
                .await
                .unwrap(),
                "We're excited to have you on board!"
            );
            assert!(matches!(
                rest_with_response(Some(
                    Response::builder()
                        .status(409)
                        .json(&json!({ "message": "Subscription already exists" })),
                ))
                .create_subscription(email)
                .await,
                Err(domain::CreateError::Conflict)
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_quote() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&json!({ "author": "Tom Brady", "quote": "A winner is ..." })),
            ))
            .with_base_url("http://localhost:3000/api/");

            assert_eq!(
                rest.read_quote().await.unwrap(),
                domain::Quote {
                    quote: "A winner is ...".to_string(),
                    author: "Tom Brady".to_string(),
                }
            );
            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(request.url(), "http://localhost:3000/api/quote");
        }

        fn rest_with_response(
            response: Option<Result<Response, gloo_net::Error>>,
        ) -> REST<MockSendRequest> {
            REST::with_sender(MockSendRequest {
                request: RefCell::new(None),
                response: RefCell::new(response),
            })
        }

        struct MockSendRequest {
            request: RefCell<Option<Request>>,
            response: RefCell<Option<Result<Response, gloo_net::Error>>>,
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
                *self.request.borrow_mut() = Some(request);
                (*self.response.borrow_mut())
                    .take()
                    .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
            }
        }
    }
}
