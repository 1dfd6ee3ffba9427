//! View rendering for the soil-testing admin screen.
//!
//! Two parts: the form composing a new entry (a stage name plus any number of
//! description rows) and the table of stored entries with a delete action per
//! row. While the collection is loading a spinner sits above the table.
//!
//! Notes
//! - User-facing labels are in Hindi, like the rest of the panel.
//! - Description rows are keyed by their draft key, so removing a row never
//!   moves the text typed in the rows below it.

use common::admin::soil::SoilEvent;
use common::model::soil::SoilTest;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SoilAdminComponent;
use crate::components::spinner::Spinner;

pub fn view(component: &SoilAdminComponent, ctx: &Context<SoilAdminComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="soil-admin">
            <h2 class="page-title">{"मिट्टी परीक्षण"}</h2>
            { build_form(component, link) }
            if component.admin.loading {
                <Spinner />
            }
            { build_table(&component.admin.soil, link) }
        </div>
    }
}

fn build_form(component: &SoilAdminComponent, link: &Scope<SoilAdminComponent>) -> Html {
    let draft = &component.admin.draft;

    html! {
        <form
            class="soil-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Soil(SoilEvent::Submitted)
            })}
        >
            <input
                type="text"
                class="text-input"
                placeholder="चरण दर्ज करें"
                value={draft.name.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Soil(SoilEvent::NameChanged(input.value()))
                })}
            />
            { for draft.descriptions().iter().enumerate().map(|(index, entry)| html! {
                <div key={entry.key.to_string()} class="description-row">
                    <textarea
                        rows="3"
                        class="text-input"
                        placeholder="विवरण दर्ज करें"
                        value={entry.text.clone()}
                        oninput={link.callback(move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::Soil(SoilEvent::DescriptionChanged(index, input.value()))
                        })}
                    />
                    <button
                        type="button"
                        class="icon-btn danger"
                        title="विवरण हटाएँ"
                        onclick={link.callback(move |_| Msg::Soil(SoilEvent::DescriptionRemoved(index)))}
                    >
                        <i class="material-icons">{"delete"}</i>
                    </button>
                </div>
            }) }
            <div class="form-actions">
                <button
                    type="button"
                    class="primary-btn"
                    onclick={link.callback(|_| Msg::Soil(SoilEvent::DescriptionAdded))}
                >
                    {"विवरण जोड़ें"}
                </button>
                <button type="submit" class="primary-btn">{"जोड़ें"}</button>
            </div>
        </form>
    }
}

fn build_table(soil: &[SoilTest], link: &Scope<SoilAdminComponent>) -> Html {
    html! {
        <div class="table-wrapper">
            <table class="soil-table">
                <thead>
                    <tr>
                        <th>{"चरण"}</th>
                        <th>{"विवरण"}</th>
                        <th>{"कार्रवाई"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for soil.iter().map(|record| build_row(record, link)) }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(record: &SoilTest, link: &Scope<SoilAdminComponent>) -> Html {
    let id = record.id.clone();

    html! {
        <tr key={record.id.clone()}>
            <td class="cell-name">{ record.name.clone() }</td>
            <td class="cell-descriptions">
                { for record.descriptions.iter().map(|description| html! {
                    <p>{ description.clone() }</p>
                }) }
            </td>
            <td>
                <button
                    class="icon-btn danger"
                    title="हटाएँ"
                    onclick={link.callback(move |_| Msg::ConfirmDelete(id.clone()))}
                >
                    <i class="material-icons">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}
