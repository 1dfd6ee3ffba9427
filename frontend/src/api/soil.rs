use super::{decode, url, with_token};
use common::api::{create_soil_path, delete_soil_path, get_soil_path, ApiError};
use common::requests::CreateSoilRequest;
use common::responses::{ApiMessage, SoilListResponse};
use gloo_net::http::Request;

pub async fn list(token: Option<&str>) -> Result<SoilListResponse, ApiError> {
    let request = with_token(Request::get(&url(&get_soil_path())), token);
    decode(request.send().await).await
}

pub async fn create(
    token: Option<&str>,
    body: &CreateSoilRequest,
) -> Result<ApiMessage, ApiError> {
    let request = with_token(Request::post(&url(&create_soil_path())), token)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    decode(request.send().await).await
}

pub async fn delete(token: Option<&str>, id: &str) -> Result<ApiMessage, ApiError> {
    let request = with_token(Request::delete(&url(&delete_soil_path(id))), token);
    decode(request.send().await).await
}
