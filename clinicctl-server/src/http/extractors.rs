//! Custom Axum extractors

use axum::extract::{FromRequest, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Form;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;

/// Flat key-value request parameters.
///
/// Read from the query string. When the request carries an
/// `application/x-www-form-urlencoded` body, its fields fill in or override
/// the query values. Only decoding happens here; type coercion is left to
/// the handler, so `T` should hold string fields.
pub struct Params<T>(pub T);

impl<S, T> FromRequest<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        if has_form_body(req.headers()) {
            let Form(form) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest {
                    message: e.body_text(),
                })?;
            pairs.extend(form);
        }

        // Later pairs win, so form fields override the query string
        let fields: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|e| ApiError::BadRequest {
                message: format!("Failed to decode request parameters: {e}"),
            })
    }
}

fn has_form_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}
