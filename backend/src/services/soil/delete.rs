//! # Soil Test Deletion Service
//!
//! Backend logic for `DELETE /api/v1/soil/delete-soil/{id}`. The id is the
//! `_id` the listing returned; no request body is read.

use crate::database::DbState;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::responses::ApiMessage;
use log::info;

/// Actix web handler for `DELETE /api/v1/soil/delete-soil/{id}`.
///
/// # Arguments
/// * `id` - Identifier of the record to remove, from the URL path.
/// * `db` - Shared database state.
///
/// # Returns
/// - `200 OK` with `{ success: true, message: "Soil deleted successfully" }`.
/// - `404 Not Found` with `"Soil not found"` when no record has that id.
/// - `503`/`500` with an error body when the database cannot be reached.
pub async fn process(
    id: web::Path<String>,
    db: web::Data<DbState>,
) -> Result<HttpResponse, AppError> {
    if !db.delete_soil(&id).await? {
        return Err(AppError::NotFound("Soil not found".to_string()));
    }

    info!("Soil test {} deleted", id);
    Ok(HttpResponse::Ok().json(ApiMessage::ok("Soil deleted successfully")))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use common::requests::CreateSoilRequest;
    use common::responses::ApiMessage;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn removes_only_the_addressed_entry() {
        let db = crate::database::connect_db(":memory:");
        let mut ids = Vec::new();
        for name in ["a", "b"] {
            let created = db
                .insert_soil(&CreateSoilRequest {
                    name: name.to_string(),
                    descriptions: vec![],
                })
                .await
                .unwrap();
            ids.push(created.id);
        }
        let app = test_app!(db.clone());

        let req = test::TestRequest::delete()
            .uri(&common::api::delete_soil_path(&ids[0]))
            .to_request();
        let body: ApiMessage = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);

        let remaining = db.list_soil().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, ids[1]);
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let app = test_app!(crate::database::connect_db(":memory:"));

        let req = test::TestRequest::delete()
            .uri("/api/v1/soil/delete-soil/does-not-exist")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ApiMessage = test::read_body_json(resp).await;
        assert_eq!(body, ApiMessage::failed("Soil not found"));
    }
}
