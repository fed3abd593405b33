use dioxus::prelude::*;
use vls_domain::SectionCopy;

#[component]
pub fn About(section: SectionCopy, body: String) -> Element {
    let SectionCopy { heading, .. } = section;

    rsx! {
        section { "aria-labelledby": "about", class: "border-t border-neutral-200 bg-neutral-50",
            div { class: "mx-auto max-w-7xl px-4 py-16",
                div { class: "mx-auto max-w-4xl",
                    h2 { id: "about", class: "text-2xl font-semibold", "{heading}" }
                    p { class: "mt-4 text-neutral-700", "{body}" }
                }
            }
        }
    }
}
