//! # Soil Test Listing Service
//!
//! Backend logic for `GET /api/v1/soil/get-soil`, which returns every stored
//! soil test for the admin table.
//!
//! ## Workflow
//!
//! 1.  **Query**: `DbState::list_soil` reads all records in insertion order,
//!     decoding each one's descriptions from its JSON column.
//!
//! 2.  **HTTP Response**: the records go out wrapped in a `SoilListResponse`
//!     with `success: true`. Any storage failure is turned into an
//!     `ApiMessage` error body by `AppError`.

use crate::database::DbState;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::responses::SoilListResponse;

/// Actix web handler for `GET /api/v1/soil/get-soil`.
///
/// # Arguments
/// * `db` - Shared database state.
///
/// # Returns
/// - `200 OK` with `{ success: true, message: "All soil tests", soil: [...] }`.
/// - `503 Service Unavailable` when the database never connected.
/// - `500 Internal Server Error` when a query or a stored record fails.
pub async fn process(db: web::Data<DbState>) -> Result<HttpResponse, AppError> {
    let soil = db.list_soil().await?;
    Ok(HttpResponse::Ok().json(SoilListResponse {
        success: true,
        message: "All soil tests".to_string(),
        soil,
    }))
}
