use crate::brreg::Registry;
use crate::search::{PageSize, StatusFilter};
use crate::ui::search_context::use_search;
use dioxus::prelude::*;

fn mode_key(mode: Registry) -> &'static str {
    match mode {
        Registry::Enhetsregisteret => "enhet",
        Registry::Frivillighetsregisteret => "frivillig",
    }
}

fn mode_from_key(key: &str) -> Option<Registry> {
    match key {
        "enhet" => Some(Registry::Enhetsregisteret),
        "frivillig" => Some(Registry::Frivillighetsregisteret),
        _ => None,
    }
}

/// Name, dataset, category, status and page size controls
#[component]
pub fn SearchForm() -> Element {
    let search_ctx = use_search();
    let mut filter = search_ctx.filter;
    let categories = search_ctx.categories.read().clone();

    let current = filter.read().clone();
    let mode = current.mode();
    let categories_enabled = mode.supports_categories();

    rsx! {
        div { class: "mt-4 grid gap-3 sm:grid-cols-2 lg:grid-cols-5 rounded-2xl border p-4 shadow-sm",
            input {
                class: "rounded-2xl border p-3 shadow-sm lg:col-span-2",
                placeholder: "Søk på navn (idrett, kor, speider...)",
                value: "{current.query()}",
                oninput: move |event: FormEvent| {
                    filter.write().set_query(event.value());
                },
            }
            select {
                class: "rounded-2xl border p-3 shadow-sm",
                value: "{mode_key(mode)}",
                onchange: move |event: FormEvent| {
                    if let Some(mode) = mode_from_key(&event.value()) {
                        filter.write().set_mode(mode);
                    }
                },
                option { value: "enhet", selected: mode == Registry::Enhetsregisteret,
                    "Enhetsregisteret (FLI)"
                }
                option { value: "frivillig", selected: mode == Registry::Frivillighetsregisteret,
                    "Frivillighetsregisteret"
                }
            }
            select {
                class: "rounded-2xl border p-3 shadow-sm disabled:opacity-50",
                disabled: !categories_enabled,
                value: "{current.category()}",
                onchange: move |event: FormEvent| {
                    filter.write().set_category(event.value());
                },
                option { value: "", "Alle kategorier" }
                for category in categories.iter() {
                    option {
                        key: "{category.code}",
                        value: "{category.code}",
                        selected: category.code == current.category(),
                        "{category.code} — {category.label}"
                    }
                }
            }
            div { class: "flex gap-3",
                select {
                    class: "flex-1 rounded-2xl border p-3 shadow-sm",
                    value: "{current.status().key()}",
                    onchange: move |event: FormEvent| {
                        if let Some(status) = StatusFilter::from_key(&event.value()) {
                            filter.write().set_status(status);
                        }
                    },
                    for status in StatusFilter::ALL {
                        option {
                            value: "{status.key()}",
                            disabled: !status.available_for(mode),
                            selected: status == current.status(),
                            "{status.label()}"
                        }
                    }
                }
                select {
                    class: "rounded-2xl border p-3 shadow-sm",
                    value: "{current.page_size()}",
                    onchange: move |event: FormEvent| {
                        let size = event.value().parse::<u32>().ok().and_then(PageSize::from_value);
                        if let Some(size) = size {
                            filter.write().set_page_size(size);
                        }
                    },
                    for size in PageSize::ALL {
                        option { value: "{size}", selected: size == current.page_size(), "{size} per side" }
                    }
                }
            }
        }
    }
}
