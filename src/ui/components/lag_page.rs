use super::pagination::PaginationControls;
use super::result_list::ResultList;
use super::search_form::SearchForm;
use super::search_status::SearchStatus;
use crate::config::use_config;
use dioxus::prelude::*;

/// Search page for voluntary organizations in the configured municipality
#[component]
pub fn LagPage() -> Element {
    let config = use_config();

    rsx! {
        div { class: "mx-auto max-w-5xl p-4 sm:p-8",
            h1 { class: "text-2xl font-bold tracking-tight",
                "Lag og foreninger i {config.municipality_name}"
            }
            p { class: "text-sm opacity-70", "Kildedata fra Brønnøysundregistrene" }

            SearchForm {}
            SearchStatus {}
            ResultList {}
            PaginationControls {}

            footer { class: "mt-8 text-xs opacity-60",
                "Kilde: Enhetsregisteret & Frivillighetsregisteret (NLOD)."
            }
        }
    }
}
