use common::admin::soil::SoilAdmin;
use yew::context::ContextHandle;
use yew::prelude::*;

use super::messages::Msg;
use crate::auth::AuthContext;

/// Main state container for the `SoilAdminComponent`.
pub struct SoilAdminComponent {
    /// Loaded collection, staged draft and loading flag.
    pub admin: SoilAdmin,

    /// Session token attached to every request, when there is one.
    pub token: Option<String>,

    /// Guard to run the first listing only once.
    pub loaded: bool,

    _context_handle: Option<ContextHandle<AuthContext>>,
}

impl SoilAdminComponent {
    pub fn new(ctx: &Context<Self>) -> Self {
        let (context, handle) = ctx
            .link()
            .context::<AuthContext>(ctx.link().callback(Msg::SessionChanged))
            .unzip();

        Self {
            admin: SoilAdmin::new(),
            token: context.and_then(|c| c.session.token().map(str::to_string)),
            loaded: false,
            _context_handle: handle,
        }
    }
}
