use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request payload for the soil creation endpoint.
/// Carries the stage name and its descriptions in display order.
pub struct CreateSoilRequest {
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
}
