//! Endpoint paths shared by the backend router and the frontend client, and
//! the error type every client call resolves to when no usable reply arrives.

use thiserror::Error;

/// Base path of the soil-testing collection.
pub const SOIL_API_PATH: &str = "/api/v1/soil";

/// Base path of the authentication endpoints.
pub const AUTH_API_PATH: &str = "/api/v1/auth";

pub const GET_SOIL: &str = "/get-soil";
pub const CREATE_SOIL: &str = "/create-soil";
pub const DELETE_SOIL: &str = "/delete-soil";
pub const USER_AUTH: &str = "/user-auth";

pub fn get_soil_path() -> String {
    format!("{}{}", SOIL_API_PATH, GET_SOIL)
}

pub fn create_soil_path() -> String {
    format!("{}{}", SOIL_API_PATH, CREATE_SOIL)
}

pub fn delete_soil_path(id: &str) -> String {
    format!("{}{}/{}", SOIL_API_PATH, DELETE_SOIL, id)
}

pub fn user_auth_path() -> String {
    format!("{}{}", AUTH_API_PATH, USER_AUTH)
}

/// Failure of a request that never produced a usable reply.
///
/// A reply that arrives and decodes is never an `ApiError`, even when it
/// carries `success: false`; that case is a business failure and is handled
/// by the caller with the server's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Encode(String),
}
