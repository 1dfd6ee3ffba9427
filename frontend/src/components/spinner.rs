use yew::{html, Component, Context, Html};

pub struct Spinner;

impl Component for Spinner {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Spinner
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="spinner-wrapper" role="status">
                <div class="spinner" />
                <span class="spinner-label">{"लोड हो रहा है..."}</span>
            </div>
        }
    }
}
