use dioxus::prelude::*;
use vls_domain::{ReasonItem, SectionCopy};

#[component]
pub fn Reasons(section: SectionCopy, reasons: Vec<ReasonItem>) -> Element {
    let SectionCopy { heading, lead } = section;

    rsx! {
        section { "aria-labelledby": "por-que", class: "border-y border-neutral-200 bg-neutral-50",
            div { class: "mx-auto max-w-7xl px-4 py-14",
                div { class: "mx-auto max-w-3xl text-center",
                    h2 { id: "por-que", class: "text-2xl font-semibold", "{heading}" }
                    if let Some(lead) = lead {
                        p { class: "mt-3 text-neutral-700", "{lead}" }
                    }
                }
                div { class: "mt-10 grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                    for ReasonItem { title, body } in reasons {
                        article {
                            key: "{title}",
                            class: "reason-card rounded-2xl bg-white p-6 shadow-sm ring-1 ring-neutral-200",
                            h3 { class: "text-base font-semibold", "{title}" }
                            p { class: "mt-2 text-sm text-neutral-700", "{body}" }
                        }
                    }
                }
            }
        }
    }
}
