use super::org_card::OrgCardItem;
use crate::search::{count_label, visible, OrgCard};
use crate::ui::search_context::use_search;
use chrono::Local;
use dioxus::prelude::*;

/// Counter and cards for the loaded page, after the local status filter
#[component]
pub fn ResultList() -> Element {
    let search_ctx = use_search();
    let load_state = search_ctx.load_state.read().clone();
    let filter = search_ctx.filter.read().clone();

    if load_state.is_loading() || load_state.error().is_some() {
        return rsx! {};
    }

    let today = Local::now().date_naive();
    let mode = filter.mode();
    let cards: Vec<OrgCard> = visible(load_state.organizations(), filter.status())
        .into_iter()
        .map(|org| OrgCard::build(org, filter.query(), today))
        .collect();
    let counter = count_label(cards.len(), load_state.total_elements());

    rsx! {
        div { class: "mt-4 text-sm opacity-70", "{counter}" }
        if cards.is_empty() {
            div { class: "mt-4 rounded-2xl border p-6 text-sm opacity-70",
                "Ingen treff på disse filtrene."
            }
        } else {
            ul { class: "mt-4 grid gap-3",
                for card in cards {
                    OrgCardItem { key: "{card.org_number}", card: card.clone(), mode }
                }
            }
        }
    }
}
