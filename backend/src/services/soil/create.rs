//! # Soil Test Creation Service
//!
//! Backend logic for `POST /api/v1/soil/create-soil`.
//!
//! ## Workflow
//!
//! 1.  **Body Decoding**: the JSON body is decoded into a `CreateSoilRequest`.
//!     A body that does not decode is answered by the app-wide JSON error
//!     handler with a `400` `ApiMessage`.
//!
//! 2.  **Validation**: a blank name is refused. Descriptions are not checked.
//!
//! 3.  **Storage**: `DbState::insert_soil` stores the record under a new id.

use crate::database::DbState;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::requests::CreateSoilRequest;
use common::responses::ApiMessage;
use log::info;

/// Actix web handler for `POST /api/v1/soil/create-soil`.
///
/// Only the name is validated; descriptions are stored exactly as sent,
/// blank entries included.
///
/// # Arguments
/// * `payload` - The new record's name and ordered descriptions.
/// * `db` - Shared database state.
///
/// # Returns
/// - `201 Created` with `{ success: true, message: "New soil test created" }`.
/// - `400 Bad Request` with `"Name is required"` for a blank name.
/// - `503`/`500` with an error body when the record cannot be stored.
pub async fn process(
    payload: web::Json<CreateSoilRequest>,
    db: web::Data<DbState>,
) -> Result<HttpResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let created = db.insert_soil(&payload).await?;
    info!("Soil test {} created", created.id);

    Ok(HttpResponse::Created().json(ApiMessage::ok("New soil test created")))
}
