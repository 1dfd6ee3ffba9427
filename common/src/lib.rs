pub mod admin;
pub mod api;
pub mod auth;
pub mod model;
pub mod requests;
pub mod responses;
