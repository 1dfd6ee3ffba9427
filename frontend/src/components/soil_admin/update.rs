//! Update function for the soil-testing admin screen.
//!
//! State changes are delegated to `SoilAdmin::handle`; this module only runs
//! the effects it returns: HTTP requests through `crate::api::soil` (whose
//! replies come back as new messages), toasts, and console logs.

use common::admin::soil::{Effect, SoilEvent, SoilRequest, DELETE_CONFIRMATION};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SoilAdminComponent;
use crate::api;
use crate::helpers::{confirm, show_toast};

pub fn update(
    component: &mut SoilAdminComponent,
    ctx: &Context<SoilAdminComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Soil(event) => {
            let effects = component.admin.handle(event);
            for effect in effects {
                run_effect(component, ctx.link(), effect);
            }
            true
        }
        Msg::ConfirmDelete(id) => {
            ctx.link()
                .send_message(Msg::Soil(delete_request(id, confirm)));
            false
        }
        Msg::SessionChanged(context) => {
            component.token = context.session.token().map(str::to_string);
            false
        }
    }
}

fn run_effect(component: &SoilAdminComponent, link: &Scope<SoilAdminComponent>, effect: Effect) {
    match effect {
        Effect::Request(request) => send(link.clone(), component.token.clone(), request),
        Effect::Notify(notice) => show_toast(&notice),
        Effect::Log(line) => gloo_console::error!(line),
    }
}

/// Asks the user about deleting `id`; the answer travels with the event.
fn delete_request(id: String, ask: impl FnOnce(&str) -> bool) -> SoilEvent {
    let confirmed = ask(DELETE_CONFIRMATION);
    SoilEvent::DeleteRequested { id, confirmed }
}

/// Issues `request` in the background and feeds its outcome back as a message.
fn send(link: Scope<SoilAdminComponent>, token: Option<String>, request: SoilRequest) {
    spawn_local(async move {
        let event = dispatch(token.as_deref(), request).await;
        link.send_message(Msg::Soil(event));
    });
}

async fn dispatch(token: Option<&str>, request: SoilRequest) -> SoilEvent {
    match request {
        SoilRequest::List => SoilEvent::Listed(api::soil::list(token).await),
        SoilRequest::Create(body) => SoilEvent::Created(api::soil::create(token, &body).await),
        SoilRequest::Delete(id) => SoilEvent::Deleted(api::soil::delete(token, &id).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::admin::soil::SoilAdmin;
    use common::model::soil::SoilTest;
    use common::requests::CreateSoilRequest;
    use common::responses::SoilListResponse;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    fn loaded_admin() -> SoilAdmin {
        let mut admin = SoilAdmin::new();
        admin.handle(SoilEvent::Listed(Ok(SoilListResponse {
            success: true,
            message: "All soil tests".to_string(),
            soil: vec![SoilTest {
                id: "1".to_string(),
                name: "a".to_string(),
                descriptions: vec![],
            }],
        })));
        admin
    }

    #[wasm_bindgen_test]
    fn declined_prompt_issues_no_request() {
        let asked = RefCell::new(None);
        let event = delete_request("1".to_string(), |message| {
            *asked.borrow_mut() = Some(message.to_string());
            false
        });

        assert_eq!(asked.into_inner().as_deref(), Some(DELETE_CONFIRMATION));
        assert_eq!(
            event,
            SoilEvent::DeleteRequested {
                id: "1".to_string(),
                confirmed: false,
            }
        );
        assert!(loaded_admin().handle(event).is_empty());
    }

    #[wasm_bindgen_test]
    fn accepted_prompt_deletes_the_pressed_row() {
        let event = delete_request("1".to_string(), |_| true);
        assert_eq!(
            loaded_admin().handle(event),
            vec![Effect::Request(SoilRequest::Delete("1".to_string()))]
        );
    }

    #[wasm_bindgen_test]
    async fn each_request_resolves_to_its_own_reply_event() {
        // no API server is reachable from the test runner, so every call errors
        assert!(matches!(
            dispatch(None, SoilRequest::List).await,
            SoilEvent::Listed(Err(_))
        ));
        assert!(matches!(
            dispatch(
                Some("t1"),
                SoilRequest::Create(CreateSoilRequest {
                    name: "x".to_string(),
                    descriptions: vec![],
                })
            )
            .await,
            SoilEvent::Created(Err(_))
        ));
        assert!(matches!(
            dispatch(None, SoilRequest::Delete("1".to_string())).await,
            SoilEvent::Deleted(Err(_))
        ));
    }
}
