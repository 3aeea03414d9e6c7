use crate::search::Paginator;
use crate::ui::search_context::use_search;
use dioxus::prelude::*;

/// Previous/next controls. Out-of-range clicks are prevented by disabling the
/// buttons, not by the handlers.
#[component]
pub fn PaginationControls() -> Element {
    let search_ctx = use_search();
    let mut filter = search_ctx.filter;
    let load_state = search_ctx.load_state.read().clone();

    if load_state.is_loading() || load_state.error().is_some() {
        return rsx! {};
    }

    let paginator = Paginator::new(filter.read().page(), load_state.total_pages());

    rsx! {
        div { class: "mt-6 flex items-center justify-between gap-4",
            button {
                class: "rounded-xl border px-4 py-2 disabled:opacity-50",
                disabled: !paginator.has_previous(),
                onclick: move |_| filter.write().previous_page(),
                "Forrige"
            }
            div { class: "text-sm opacity-80", "{paginator.label()}" }
            button {
                class: "rounded-xl border px-4 py-2 disabled:opacity-50",
                disabled: !paginator.has_next(),
                onclick: move |_| filter.write().next_page(),
                "Neste"
            }
        }
    }
}
