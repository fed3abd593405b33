use super::anchors;
use dioxus::prelude::*;
use vls_domain::{SectionCopy, StepItem};

#[component]
pub fn Steps(section: SectionCopy, steps: Vec<StepItem>) -> Element {
    let SectionCopy { heading, .. } = section;

    rsx! {
        section { class: "bg-neutral-50", "aria-labelledby": anchors::STEPS,
            div { class: "mx-auto max-w-7xl px-4 py-16",
                h2 { id: anchors::STEPS, class: "text-2xl font-semibold text-center", "{heading}" }
                ol { class: "mx-auto mt-8 grid max-w-4xl gap-6 sm:grid-cols-2",
                    for StepItem { label, body } in steps {
                        li {
                            key: "{label}",
                            class: "step-item rounded-2xl bg-white p-6 shadow-sm ring-1 ring-neutral-200",
                            p { class: "text-sm font-semibold", "{label}" }
                            p { class: "mt-1 text-sm text-neutral-700", "{body}" }
                        }
                    }
                }
            }
        }
    }
}
