//! State and update logic of the soil-testing admin screen.
//!
//! The screen follows an Elm-style loop: the view turns user actions and
//! network replies into `SoilEvent`s, `SoilAdmin::handle` mutates the state and
//! returns the side effects to run (HTTP requests, toasts, console logs). The
//! component executes those effects and feeds the replies back as events.
//!
//! Policy
//! - The collection shown is always the last successful listing; no local merge
//!   happens after a create or delete, a fresh listing is requested instead.
//! - A reply with `success: false` surfaces the server message (the listing
//!   uses a fixed text). A request that produced no usable reply surfaces a
//!   generic text and logs the cause.
//! - Nothing here retries.

use crate::api::ApiError;
use crate::model::draft::SoilDraft;
use crate::model::soil::SoilTest;
use crate::requests::CreateSoilRequest;
use crate::responses::{ApiMessage, SoilListResponse};

pub const LIST_FAILED: &str = "Failed to fetch soil testing data";
pub const LIST_ERROR: &str = "Something went wrong while fetching soil test data";
pub const DELETED: &str = "Soil is deleted";
pub const DELETE_ERROR: &str = "Something went wrong while deleting soil";
pub const DELETE_CONFIRMATION: &str = "Are you sure to delete?";

/// Requests the screen issues through the soil client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoilRequest {
    List,
    Create(CreateSoilRequest),
    Delete(String),
}

/// User-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(SoilRequest),
    Notify(Notice),
    Log(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SoilEvent {
    Mounted,
    NameChanged(String),
    DescriptionAdded,
    DescriptionChanged(usize, String),
    DescriptionRemoved(usize),
    Submitted,
    Listed(Result<SoilListResponse, ApiError>),
    Created(Result<ApiMessage, ApiError>),
    /// The outcome of the confirmation prompt for deleting `id`.
    DeleteRequested { id: String, confirmed: bool },
    Deleted(Result<ApiMessage, ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilAdmin {
    pub soil: Vec<SoilTest>,
    pub draft: SoilDraft,
    pub loading: bool,
}

impl Default for SoilAdmin {
    fn default() -> Self {
        Self::new()
    }
}

impl SoilAdmin {
    pub fn new() -> Self {
        Self {
            soil: Vec::new(),
            draft: SoilDraft::new(),
            loading: true,
        }
    }

    pub fn handle(&mut self, event: SoilEvent) -> Vec<Effect> {
        match event {
            SoilEvent::Mounted => vec![Effect::Request(SoilRequest::List)],
            SoilEvent::NameChanged(name) => {
                self.draft.set_name(name);
                Vec::new()
            }
            SoilEvent::DescriptionAdded => {
                self.draft.add_description();
                Vec::new()
            }
            SoilEvent::DescriptionChanged(index, value) => {
                self.draft.update_description(index, value);
                Vec::new()
            }
            SoilEvent::DescriptionRemoved(index) => {
                self.draft.remove_description(index);
                Vec::new()
            }
            SoilEvent::Submitted => {
                vec![Effect::Request(SoilRequest::Create(self.draft.to_request()))]
            }
            SoilEvent::Listed(result) => {
                self.loading = false;
                match result {
                    Ok(reply) if reply.success => {
                        self.soil = reply.soil;
                        vec![Effect::Notify(Notice::Success(reply.message))]
                    }
                    Ok(_) => vec![Effect::Notify(Notice::Error(LIST_FAILED.to_string()))],
                    Err(e) => vec![
                        Effect::Log(format!("Error fetching soil tests: {}", e)),
                        Effect::Notify(Notice::Error(LIST_ERROR.to_string())),
                    ],
                }
            }
            SoilEvent::Created(result) => match result {
                Ok(reply) if reply.success => {
                    self.draft.clear();
                    vec![
                        Effect::Notify(Notice::Success(reply.message)),
                        Effect::Request(SoilRequest::List),
                    ]
                }
                Ok(reply) => vec![Effect::Notify(Notice::Error(reply.message))],
                Err(e) => vec![
                    Effect::Log(format!("Error creating soil test: {}", e)),
                    Effect::Notify(Notice::Error(format!("Something went wrong: {}", e))),
                ],
            },
            SoilEvent::DeleteRequested { id, confirmed } => {
                if confirmed {
                    vec![Effect::Request(SoilRequest::Delete(id))]
                } else {
                    Vec::new()
                }
            }
            SoilEvent::Deleted(result) => match result {
                Ok(reply) if reply.success => vec![
                    Effect::Notify(Notice::Success(DELETED.to_string())),
                    Effect::Request(SoilRequest::List),
                ],
                Ok(reply) => vec![Effect::Notify(Notice::Error(reply.message))],
                Err(e) => vec![
                    Effect::Log(format!("Error deleting soil test: {}", e)),
                    Effect::Notify(Notice::Error(DELETE_ERROR.to_string())),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, name: &str) -> SoilTest {
        SoilTest {
            id: id.to_string(),
            name: name.to_string(),
            descriptions: vec![],
        }
    }

    fn loaded(records: Vec<SoilTest>) -> SoilAdmin {
        let mut admin = SoilAdmin::new();
        admin.handle(SoilEvent::Listed(Ok(SoilListResponse {
            success: true,
            message: "All soil tests".to_string(),
            soil: records,
        })));
        admin
    }

    fn requests(effects: &[Effect]) -> Vec<SoilRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Request(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn mount_lists_once_and_starts_loading() {
        let mut admin = SoilAdmin::new();
        assert!(admin.loading);
        let effects = admin.handle(SoilEvent::Mounted);
        assert_eq!(effects, vec![Effect::Request(SoilRequest::List)]);
    }

    #[test]
    fn successful_listing_replaces_collection() {
        let mut admin = loaded(vec![record("1", "old")]);
        let effects = admin.handle(SoilEvent::Listed(Ok(SoilListResponse {
            success: true,
            message: "All soil tests".to_string(),
            soil: vec![record("2", "new")],
        })));

        assert_eq!(admin.soil, vec![record("2", "new")]);
        assert!(!admin.loading);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Success("All soil tests".to_string()))]
        );
    }

    #[test]
    fn failed_listing_keeps_collection_and_clears_loading() {
        let mut admin = loaded(vec![record("1", "kept")]);
        admin.loading = true;

        let effects = admin.handle(SoilEvent::Listed(Ok(SoilListResponse {
            success: false,
            message: "ignored".to_string(),
            soil: vec![],
        })));

        assert_eq!(admin.soil, vec![record("1", "kept")]);
        assert!(!admin.loading);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Error(LIST_FAILED.to_string()))]
        );
    }

    #[test]
    fn listing_transport_error_logs_and_keeps_collection() {
        let mut admin = loaded(vec![record("1", "kept")]);
        admin.loading = true;

        let effects = admin.handle(SoilEvent::Listed(Err(ApiError::Transport(
            "Network Error".to_string(),
        ))));

        assert_eq!(admin.soil.len(), 1);
        assert!(!admin.loading);
        assert!(matches!(effects[0], Effect::Log(_)));
        assert_eq!(
            effects[1],
            Effect::Notify(Notice::Error(LIST_ERROR.to_string()))
        );
    }

    #[test]
    fn submit_creates_refreshes_then_clears_draft() {
        let mut admin = loaded(vec![]);
        admin.handle(SoilEvent::NameChanged("चरण 1".to_string()));
        admin.handle(SoilEvent::DescriptionAdded);
        admin.handle(SoilEvent::DescriptionChanged(0, "d1".to_string()));
        admin.handle(SoilEvent::DescriptionAdded);
        admin.handle(SoilEvent::DescriptionChanged(1, "d2".to_string()));

        let effects = admin.handle(SoilEvent::Submitted);
        assert_eq!(
            requests(&effects),
            vec![SoilRequest::Create(CreateSoilRequest {
                name: "चरण 1".to_string(),
                descriptions: vec!["d1".to_string(), "d2".to_string()],
            })]
        );

        let effects = admin.handle(SoilEvent::Created(Ok(ApiMessage::ok("Soil created"))));
        assert_eq!(requests(&effects), vec![SoilRequest::List]);
        assert_eq!(
            effects[0],
            Effect::Notify(Notice::Success("Soil created".to_string()))
        );
        assert_eq!(admin.draft.name, "");
        assert!(admin.draft.descriptions().is_empty());
    }

    #[test]
    fn submit_sends_blank_draft_unvalidated() {
        let mut admin = SoilAdmin::new();
        let effects = admin.handle(SoilEvent::Submitted);
        assert_eq!(
            requests(&effects),
            vec![SoilRequest::Create(CreateSoilRequest {
                name: String::new(),
                descriptions: vec![],
            })]
        );
    }

    #[test]
    fn rejected_create_keeps_draft_and_shows_server_message() {
        let mut admin = SoilAdmin::new();
        admin.handle(SoilEvent::DescriptionAdded);

        let effects = admin.handle(SoilEvent::Created(Ok(ApiMessage::failed("Name is required"))));

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Error("Name is required".to_string()))]
        );
        assert_eq!(admin.draft.descriptions().len(), 1);
    }

    #[test]
    fn create_transport_error_includes_cause() {
        let mut admin = SoilAdmin::new();
        admin.handle(SoilEvent::NameChanged("x".to_string()));

        let effects = admin.handle(SoilEvent::Created(Err(ApiError::Transport(
            "Network Error".to_string(),
        ))));

        assert!(requests(&effects).is_empty());
        assert_eq!(
            effects.last(),
            Some(&Effect::Notify(Notice::Error(
                "Something went wrong: Network Error".to_string()
            )))
        );
        assert_eq!(admin.draft.name, "x");
    }

    #[test]
    fn declined_delete_issues_nothing() {
        let mut admin = loaded(vec![record("1", "a")]);
        let effects = admin.handle(SoilEvent::DeleteRequested {
            id: "1".to_string(),
            confirmed: false,
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn confirmed_delete_then_refresh() {
        let mut admin = loaded(vec![record("1", "a")]);
        let effects = admin.handle(SoilEvent::DeleteRequested {
            id: "1".to_string(),
            confirmed: true,
        });
        assert_eq!(requests(&effects), vec![SoilRequest::Delete("1".to_string())]);

        let effects = admin.handle(SoilEvent::Deleted(Ok(ApiMessage::ok("whatever"))));
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notice::Success(DELETED.to_string())),
                Effect::Request(SoilRequest::List),
            ]
        );
        // the row stays until the refresh lands
        assert_eq!(admin.soil.len(), 1);
    }

    #[test]
    fn failed_delete_leaves_list_untouched() {
        let mut admin = loaded(vec![record("1", "a")]);

        let effects = admin.handle(SoilEvent::Deleted(Ok(ApiMessage::failed("Soil not found"))));
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Error("Soil not found".to_string()))]
        );

        let effects = admin.handle(SoilEvent::Deleted(Err(ApiError::Decode("eof".to_string()))));
        assert_eq!(
            effects.last(),
            Some(&Effect::Notify(Notice::Error(DELETE_ERROR.to_string())))
        );
        assert_eq!(admin.soil, vec![record("1", "a")]);
    }
}
