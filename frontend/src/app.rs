use common::auth::AuthSession;
use yew::context::ContextProvider;
use yew::{html, Component, Context, Html};

use crate::auth::{clear_stored_auth, stored_token, AuthContext};
use crate::components::admin_layout::AdminLayout;
use crate::components::private::Private;
use crate::components::soil_admin::SoilAdminComponent;

pub enum Msg {
    Verified(String),
    Logout,
}

/// Root component. Owns the session so a verification survives the
/// protected views being torn down and mounted again.
pub struct App {
    session: AuthSession,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: AuthSession::new(stored_token()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Verified(token) => self.session.mark_verified(&token),
            Msg::Logout => {
                clear_stored_auth();
                self.session.set_token(None);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let context = AuthContext {
            session: self.session.clone(),
            on_verified: ctx.link().callback(Msg::Verified),
        };

        html! {
            <ContextProvider<AuthContext> context={context}>
                <Private>
                    <AdminLayout on_logout={ctx.link().callback(|_| Msg::Logout)}>
                        <SoilAdminComponent />
                    </AdminLayout>
                </Private>
            </ContextProvider<AuthContext>>
        }
    }
}
