use crate::ui::search_context::use_search;
use dioxus::prelude::*;

#[component]
pub fn SearchStatus() -> Element {
    let search_ctx = use_search();
    let load_state = search_ctx.load_state.read().clone();

    rsx! {
        if load_state.is_loading() {
            div { class: "mt-6 animate-pulse rounded-2xl border p-6 shadow-sm", "Laster…" }
        } else if let Some(error) = load_state.error() {
            div { class: "mt-6 rounded-2xl border border-red-300 bg-red-50 p-4 text-red-800",
                "{error}"
            }
        }
    }
}
