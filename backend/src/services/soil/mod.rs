//! # Soil Testing Service Module
//!
//! This module aggregates the API endpoints of the soil-testing collection
//! managed from the admin panel. Every reply is a JSON object carrying a
//! `success` flag and a `message`; failures go through `AppError` and keep
//! the same shape.
//!
//! ## Sub-modules:
//! - `get`: Lists the whole collection.
//! - `create`: Validates and stores a new entry.
//! - `delete`: Removes an entry by id.

mod create;
mod delete;
mod get;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;
use common::api::{CREATE_SOIL, DELETE_SOIL, GET_SOIL, SOIL_API_PATH};

/// Configures and returns the Actix `Scope` for all soil-testing routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/v1/soil/get-soil`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns `{ success, message, soil }` with every entry in
///       insertion order. There is no pagination.
///
/// *   **`POST /api/v1/soil/create-soil`**:
///     - **Handler**: `create::process`
///     - **Description**: Expects `{ name, descriptions }`. A blank `name` is rejected
///       with `400` and `"Name is required"`; otherwise the entry is stored under a new id.
///
/// *   **`DELETE /api/v1/soil/delete-soil/{id}`**:
///     - **Handler**: `delete::process`
///     - **Description**: Deletes the entry with `id`, answering `404` when there is none.
pub fn configure_routes() -> Scope {
    scope(SOIL_API_PATH)
        .route(GET_SOIL, get().to(get::process))
        .route(CREATE_SOIL, post().to(create::process))
        .route(&format!("{}/{{id}}", DELETE_SOIL), delete().to(delete::process))
}
