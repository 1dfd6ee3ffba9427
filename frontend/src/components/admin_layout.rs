use yew::{html, Callback, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub on_logout: Callback<()>,
    pub children: Children,
}

/// Frame of every admin page: a side bar with the section title and the
/// logout action, and the page content next to it.
pub struct AdminLayout;

impl Component for AdminLayout {
    type Message = ();
    type Properties = AdminLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_logout = props.on_logout.reform(|_| ());

        html! {
            <div class="admin-layout">
                <aside class="admin-sidebar">
                    <h1 class="admin-title">{"एडमिन पैनल"}</h1>
                    <nav>
                        <span class="admin-nav-item active">{"मिट्टी परीक्षण"}</span>
                    </nav>
                    <button class="icon-btn" title="लॉग आउट" onclick={on_logout}>
                        <i class="material-icons">{"logout"}</i>
                    </button>
                </aside>
                <main class="admin-content">
                    { for props.children.iter() }
                </main>
            </div>
        }
    }
}
