pub mod draft;
pub mod soil;
