//! Reply bodies of the admin REST API.
//!
//! Every soil endpoint answers with a `success` flag and a human readable
//! `message`; the listing additionally carries the full collection. The
//! verification endpoint answers with a bare `ok` flag.

use crate::model::soil::SoilTest;
use serde::{Deserialize, Serialize};

/// Reply of `GET /api/v1/soil/get-soil`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub soil: Vec<SoilTest>,
}

/// Reply of the create and delete endpoints, and of any failed soil request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Reply of `GET /api/v1/auth/user-auth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCheck {
    #[serde(default)]
    pub ok: bool,
}
