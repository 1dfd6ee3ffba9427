//! Authentication endpoints consumed by the admin panel.
//!
//! Only verification lives here: tokens are issued elsewhere and reach this
//! server through the `sessions` table (see `ADMIN_TOKEN` in `config`).

mod user_auth;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::api::{AUTH_API_PATH, USER_AUTH};

/// Configures and returns the Actix `Scope` for the authentication routes.
///
/// *   **`GET /api/v1/auth/user-auth`**: answers `{ "ok": true }` when the
///     `Authorization` header carries a known token, `401 { "ok": false }` otherwise.
pub fn configure_routes() -> Scope {
    scope(AUTH_API_PATH).route(USER_AUTH, get().to(user_auth::process))
}
