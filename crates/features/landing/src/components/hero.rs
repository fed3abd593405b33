use super::anchors;
use dioxus::prelude::*;
use vls_domain::HeroCopy;

/// Banner with the primary calls to action.
#[component]
pub fn Hero(hero: HeroCopy) -> Element {
    let HeroCopy { heading, lead, primary_cta, secondary_cta } = hero;
    let contact = anchors::href(anchors::CONTACT);
    let services = anchors::href(anchors::SERVICES);

    rsx! {
        section { class: "hero relative isolate overflow-hidden bg-[url('/vzla_flag.jpg')] bg-center bg-cover text-white",
            div { class: "mx-auto max-w-7xl px-4 py-20 sm:py-28",
                div { class: "mx-auto max-w-3xl text-center",
                    h1 { class: "text-4xl font-bold tracking-tight sm:text-5xl", "{heading}" }
                    p { class: "mt-4 text-lg", "{lead}" }
                    div { class: "mt-8 flex flex-col items-center justify-center gap-3 sm:flex-row",
                        a {
                            class: "cta-primary inline-block rounded-2xl bg-neutral-900 px-6 py-3 text-white shadow-md transition hover:bg-neutral-800",
                            href: "{contact}",
                            "{primary_cta}"
                        }
                        a {
                            class: "cta-secondary inline-block rounded-2xl border border-neutral-300 px-6 py-3 transition hover:bg-neutral-50",
                            href: "{services}",
                            "{secondary_cta}"
                        }
                    }
                }
            }
        }
    }
}
