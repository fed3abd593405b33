use super::anchors;
use dioxus::prelude::*;
use vls_domain::{ContactInfo, SectionCopy};

/// Closing call to action with the WhatsApp and mail deep-links.
#[component]
pub fn Contact(section: SectionCopy, contact: ContactInfo, whatsapp_cta: String) -> Element {
    let SectionCopy { heading, lead } = section;
    let mailto = contact.mailto_href();
    let ContactInfo { whatsapp_url, email } = contact;

    rsx! {
        section {
            id: anchors::CONTACT,
            "aria-labelledby": "cta",
            class: "mx-auto max-w-7xl px-4 py-16",
            div { class: "rounded-3xl bg-neutral-900 px-6 py-12 text-white sm:px-10",
                h2 { id: "cta", class: "text-2xl font-semibold", "{heading}" }
                if let Some(lead) = lead {
                    p { class: "mt-2 text-neutral-200", "{lead}" }
                }
                div { class: "mt-6 flex flex-col gap-3 sm:flex-row",
                    a {
                        class: "cta-whatsapp inline-block rounded-xl bg-white px-5 py-3 text-center text-neutral-900 hover:bg-neutral-100",
                        href: "{whatsapp_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{whatsapp_cta}"
                    }
                    a {
                        class: "cta-mail inline-block rounded-xl border border-white/20 px-5 py-3 text-center hover:bg-white/10",
                        href: "{mailto}",
                        "{email}"
                    }
                }
            }
        }
    }
}
