//! Route guard for the protected part of the panel.
//!
//! The component reads the `AuthContext`, drives a `common::auth::AuthGate`
//! with it, and renders its children only once the gate reports the session
//! as verified. Until then, and for good when there is no token, it shows the
//! spinner. A failed verification request keeps the spinner and adds a retry
//! button.

use common::api::ApiError;
use common::auth::{AuthGate, GateView, Resolution};
use common::responses::AuthCheck;
use yew::context::ContextHandle;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::auth::AuthContext;
use crate::components::spinner::Spinner;

pub enum Msg {
    SessionChanged(AuthContext),
    VerificationDone {
        token: String,
        result: Result<AuthCheck, ApiError>,
    },
    Retry,
}

#[derive(Properties, PartialEq)]
pub struct PrivateProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct Private {
    gate: AuthGate,
    context: Option<AuthContext>,
    _context_handle: Option<ContextHandle<AuthContext>>,
}

impl Component for Private {
    type Message = Msg;
    type Properties = PrivateProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (context, handle) = ctx
            .link()
            .context::<AuthContext>(ctx.link().callback(Msg::SessionChanged))
            .unzip();

        if context.is_none() {
            gloo_console::error!("Private rendered outside of an AuthContext provider");
        }

        let mut private = Self {
            gate: AuthGate::new(),
            context,
            _context_handle: handle,
        };
        private.sync(ctx.link());
        private
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(context) => {
                self.context = Some(context);
                self.sync(ctx.link());
                true
            }
            Msg::VerificationDone { token, result } => {
                match self.gate.resolve(&token, result) {
                    Resolution::Verified(token) => {
                        if let Some(context) = &self.context {
                            context.on_verified.emit(token);
                        }
                    }
                    Resolution::Failed(reason) => {
                        gloo_console::error!(format!("Session verification failed: {}", reason));
                    }
                    Resolution::Rejected | Resolution::Stale => {}
                }
                true
            }
            Msg::Retry => {
                if let Some(context) = &self.context {
                    if let Some(token) = self.gate.retry(&context.session) {
                        verify(ctx.link().clone(), token);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.gate.view() {
            GateView::Protected => ctx.props().children.clone(),
            GateView::Loading { can_retry } => html! {
                <div class="gate-loading">
                    <Spinner />
                    if can_retry {
                        <button class="retry-btn" onclick={ctx.link().callback(|_| Msg::Retry)}>
                            {"फिर से प्रयास करें"}
                        </button>
                    }
                </div>
            },
        }
    }
}

impl Private {
    /// Aligns the gate with the current session, verifying the token if needed.
    fn sync(&mut self, link: &Scope<Self>) {
        let Some(context) = &self.context else {
            return;
        };
        if let Some(token) = self.gate.sync(&context.session) {
            verify(link.clone(), token);
        }
    }
}

fn verify(link: Scope<Private>, token: String) {
    spawn_local(async move {
        let result = api::auth::user_auth(&token).await;
        link.send_message(Msg::VerificationDone { token, result });
    });
}
