use super::anchors;
use dioxus::prelude::*;
use vls_domain::{FaqItem, SectionCopy};

/// FAQ accordion built on native `<details>`; open/closed state lives in the browser.
#[component]
pub fn Faq(section: SectionCopy, faq: Vec<FaqItem>) -> Element {
    let SectionCopy { heading, lead } = section;

    rsx! {
        section { "aria-labelledby": anchors::FAQ, class: "mx-auto max-w-7xl px-4 py-16",
            div { class: "mx-auto max-w-3xl text-center",
                h2 { id: anchors::FAQ, class: "text-2xl font-semibold", "{heading}" }
                if let Some(lead) = lead {
                    p { class: "mt-3 text-neutral-700", "{lead}" }
                }
            }
            div { class: "mx-auto mt-8 max-w-3xl divide-y divide-neutral-200 rounded-2xl border border-neutral-200",
                for (position, FaqItem { question, answer }) in faq.into_iter().enumerate() {
                    details { key: "{position}", class: "faq-item group p-6", role: "group",
                        summary { class: "flex cursor-pointer list-none items-center justify-between gap-2 text-left font-medium",
                            span { class: "faq-question", "{question}" }
                            span { "aria-hidden": "true", class: "transition group-open:rotate-180", "▾" }
                        }
                        p { class: "faq-answer mt-3 text-sm text-neutral-700", "{answer}" }
                    }
                }
            }
        }
    }
}
