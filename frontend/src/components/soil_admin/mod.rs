//! Soil-testing admin screen: root module wiring the Yew `Component`
//! implementation with submodules for messages, state, update logic and view
//! rendering.
//!
//! Responsibilities
//! - Re-export the component and its message type.
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, load the collection once; the reducer in
//!   `common::admin::soil` decides everything that follows.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use common::admin::soil::SoilEvent;
pub use messages::Msg;
pub use state::SoilAdminComponent;

impl Component for SoilAdminComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        SoilAdminComponent::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Soil(SoilEvent::Mounted));
        }
    }
}
