//! HTTP client for the admin REST API.
//!
//! Every call resolves to the decoded reply body whatever the HTTP status, so
//! a `success: false` body from a `4xx`/`5xx` answer still reaches the screen
//! with the server's own message. Only a request that gets no answer, or an
//! answer that does not decode, becomes an `ApiError`.

pub mod auth;
pub mod soil;

use common::api::ApiError;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Base URL of the API, fixed at build time from `REACT_APP_API_URL`, or
/// `API_URL` when that is unset. Empty means same origin.
const API_URL: &str = match option_env!("REACT_APP_API_URL") {
    Some(url) => url,
    None => match option_env!("API_URL") {
        Some(url) => url,
        None => "",
    },
};

fn url(path: &str) -> String {
    format!("{}{}", API_URL.trim_end_matches('/'), path)
}

fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", token),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(
    response: Result<Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let response = response.map_err(|e| ApiError::Transport(e.to_string()))?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
