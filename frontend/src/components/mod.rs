pub mod admin_layout;
pub mod private;
pub mod soil_admin;
pub mod spinner;
