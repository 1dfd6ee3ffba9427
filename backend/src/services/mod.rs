/// Builds an initialized test service with the API scopes and `$db` as shared state.
#[cfg(test)]
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(crate::json_config())
                .app_data(actix_web::web::Data::new($db))
                .service(crate::services::soil::configure_routes())
                .service(crate::services::auth::configure_routes()),
        )
        .await
    };
}

pub mod auth;
pub mod soil;
