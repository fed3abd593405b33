use super::anchors;
use dioxus::prelude::*;
use vls_domain::{SectionCopy, ServiceItem};

/// Two-column grid of service cards, each linking to the contact block.
#[component]
pub fn Services(section: SectionCopy, services: Vec<ServiceItem>, cta: String) -> Element {
    let SectionCopy { heading, lead } = section;
    let contact = anchors::href(anchors::CONTACT);

    rsx! {
        section {
            id: anchors::SERVICES,
            "aria-labelledby": "servicios-title",
            class: "mx-auto max-w-7xl px-4 py-16",
            div { class: "mx-auto max-w-3xl text-center",
                h2 { id: "servicios-title", class: "text-2xl font-semibold", "{heading}" }
                if let Some(lead) = lead {
                    p { class: "mt-3 text-neutral-700", "{lead}" }
                }
            }
            div { class: "mt-10 grid gap-6 sm:grid-cols-2",
                for ServiceItem { title, description } in services {
                    article {
                        key: "{title}",
                        class: "service-card rounded-2xl border border-neutral-200 p-6",
                        h3 { class: "text-lg font-semibold", "{title}" }
                        p { class: "mt-2 text-sm text-neutral-700", "{description}" }
                        div { class: "mt-4",
                            a {
                                class: "inline-block rounded-xl bg-neutral-900 px-4 py-2 text-sm text-white hover:bg-neutral-800",
                                href: "{contact}",
                                "{cta}"
                            }
                        }
                    }
                }
            }
        }
    }
}
