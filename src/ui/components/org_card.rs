use crate::brreg::Registry;
use crate::search::{OrgCard, OrgStatus};
use dioxus::prelude::*;

fn badge_class(status: &OrgStatus) -> &'static str {
    match status {
        OrgStatus::Active => "bg-green-100 text-green-800",
        OrgStatus::UnderDissolution => "bg-amber-100 text-amber-800",
        OrgStatus::Bankrupt => "bg-red-100 text-red-800",
        OrgStatus::Unclassified(_) => "bg-gray-100 text-gray-700",
    }
}

/// One organization in the result list
#[component]
pub fn OrgCardItem(card: OrgCard, mode: Registry) -> Element {
    let org_form = card.org_form.clone().unwrap_or_else(|| "-".to_string());
    let badge = badge_class(&card.status);

    rsx! {
        li { class: "rounded-2xl border p-4 shadow-sm",
            div { class: "flex items-start justify-between gap-4",
                div {
                    h3 { class: "text-lg font-semibold leading-tight",
                        "{card.name.before}"
                        if !card.name.matched.is_empty() {
                            mark { class: "rounded bg-yellow-200", "{card.name.matched}" }
                        }
                        "{card.name.after}"
                    }
                    div { class: "mt-1 text-sm opacity-80", "Org.nr: {card.org_number}" }

                    if mode == Registry::Enhetsregisteret {
                        div { class: "mt-1 text-sm",
                            span { class: "opacity-80", "Orgform: " }
                            "{org_form}"
                            if let Some(locality) = card.locality.as_ref() {
                                span { class: "opacity-80", " • Poststed: " }
                                "{locality}"
                            }
                        }
                    } else if let Some(category) = card.category.as_ref() {
                        div { class: "mt-1 text-sm", "ICNPO: {category}" }
                    } else {
                        div { class: "mt-1 text-sm opacity-70", "(Ingen kategori)" }
                    }

                    if let Some(label) = card.status_label.as_ref() {
                        span { class: "mt-2 inline-block rounded-full px-2 py-0.5 text-xs font-medium {badge}",
                            "{label}"
                        }
                    }

                    if let Some(founded) = card.founded.as_ref() {
                        div { class: "mt-1 text-sm",
                            "Stiftet {founded.date} ({founded.age} år)"
                        }
                    }
                    if let Some(homepage) = card.homepage.as_ref() {
                        div { class: "mt-1 text-sm",
                            a {
                                class: "text-blue-700 hover:underline",
                                href: "{homepage}",
                                target: "_blank",
                                rel: "noreferrer",
                                "{homepage}"
                            }
                        }
                    }
                    if let Some(email) = card.email.as_ref() {
                        div { class: "mt-1 text-sm",
                            a { class: "text-blue-700 hover:underline", href: "mailto:{email}", "{email}" }
                        }
                    }
                    if let Some(phone) = card.phone.as_ref() {
                        div { class: "mt-1 text-sm", "Telefon: {phone}" }
                    }
                    if let Some(address) = card.address.as_ref() {
                        div { class: "mt-1 text-sm",
                            "{address}"
                            if let Some(map_url) = card.map_url.as_ref() {
                                " • "
                                a {
                                    class: "text-blue-700 hover:underline",
                                    href: "{map_url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    "Vis i kart"
                                }
                            }
                        }
                    }
                }
                a {
                    class: "rounded-xl border px-3 py-2 text-sm hover:shadow",
                    href: "{card.detail_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Åpne"
                }
            }
        }
    }
}
