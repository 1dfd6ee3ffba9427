use super::{decode, url, with_token};
use common::api::{user_auth_path, ApiError};
use common::responses::AuthCheck;
use gloo_net::http::Request;

/// Asks the server whether `token` is a valid session.
pub async fn user_auth(token: &str) -> Result<AuthCheck, ApiError> {
    let request = with_token(Request::get(&url(&user_auth_path())), Some(token));
    decode(request.send().await).await
}
