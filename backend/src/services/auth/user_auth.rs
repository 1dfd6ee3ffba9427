//! # Session Verification Service
//!
//! Backend logic for `GET /api/v1/auth/user-auth`, the call the frontend's
//! auth gate makes before it renders a protected view.
//!
//! ## Workflow
//!
//! 1.  **Token Extraction**: `session_token` reads the `Authorization` header.
//!     The token may be sent raw or after a `Bearer` scheme, which is matched
//!     without regard to case.
//!
//! 2.  **Lookup**: the token is checked against the `sessions` table through
//!     `DbState::token_exists`. Tokens are issued elsewhere; `ADMIN_TOKEN`
//!     seeds one at start.
//!
//! 3.  **HTTP Response**: the reply is always an `AuthCheck` body, so the
//!     client can decode it whatever the status. Only a known token yields
//!     `ok: true`.

use crate::database::DbState;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest, HttpResponse};
use common::responses::AuthCheck;
use log::{error, warn};

/// Actix web handler for `GET /api/v1/auth/user-auth`.
///
/// # Arguments
/// * `req` - The incoming request, carrying the token in `Authorization`.
/// * `db` - Shared database state.
///
/// # Returns
/// - `200 OK` with `{ "ok": true }` for a known token.
/// - `401 Unauthorized` with `{ "ok": false }` for an unknown or missing token.
/// - `500 Internal Server Error` with `{ "ok": false }` when the lookup fails,
///   including a disconnected database.
pub async fn process(req: HttpRequest, db: web::Data<DbState>) -> HttpResponse {
    let Some(token) = session_token(&req) else {
        return HttpResponse::Unauthorized().json(AuthCheck { ok: false });
    };

    match db.token_exists(token).await {
        Ok(true) => HttpResponse::Ok().json(AuthCheck { ok: true }),
        Ok(false) => {
            warn!("Rejected unknown session token");
            HttpResponse::Unauthorized().json(AuthCheck { ok: false })
        }
        Err(e) => {
            error!("Session lookup failed: {}", e);
            HttpResponse::InternalServerError().json(AuthCheck { ok: false })
        }
    }
}

/// Token from the `Authorization` header, either raw or as `Bearer <token>`
/// with the scheme in any case.
fn session_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}
