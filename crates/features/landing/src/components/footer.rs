use super::anchors;
use dioxus::prelude::*;
use vls_domain::{ServiceItem, SiteContent};

/// Brand block, secondary navigation back to in-page anchors, and the copyright line.
#[component]
pub fn Footer(content: SiteContent, year: i32) -> Element {
    let name = &content.organization.name;
    let tagline = &content.organization.tagline;
    let disclaimer = &content.disclaimer;
    let mailto = content.contact.mailto_href();
    let whatsapp = &content.contact.whatsapp_url;
    let services = anchors::href(anchors::SERVICES);
    let faq = anchors::href(anchors::FAQ);
    let steps = anchors::href(anchors::STEPS);

    rsx! {
        footer { class: "border-t border-neutral-200",
            div { class: "mx-auto grid max-w-7xl grid-cols-1 gap-10 px-4 py-12 sm:grid-cols-3",
                div {
                    p { class: "text-lg font-semibold", "{name}" }
                    p { class: "mt-2 text-sm text-neutral-700", "{tagline}" }
                }
                nav { "aria-label": "Navegación secundaria", class: "grid grid-cols-2 gap-6 sm:grid-cols-3",
                    div {
                        p { class: "text-sm font-semibold", "Servicios" }
                        ul { class: "mt-3 space-y-2 text-sm text-neutral-700",
                            for ServiceItem { title, .. } in content.services.iter() {
                                li { key: "{title}",
                                    a { class: "hover:underline", href: "{services}", "{title}" }
                                }
                            }
                        }
                    }
                    div {
                        p { class: "text-sm font-semibold", "Recursos" }
                        ul { class: "mt-3 space-y-2 text-sm text-neutral-700",
                            li { a { class: "hover:underline", href: "{faq}", "Preguntas frecuentes" } }
                            li { a { class: "hover:underline", href: "{steps}", "Cómo funciona" } }
                        }
                    }
                    div {
                        p { class: "text-sm font-semibold", "Contacto" }
                        ul { class: "mt-3 space-y-2 text-sm text-neutral-700",
                            li { a { class: "hover:underline", href: "{mailto}", "Email" } }
                            li {
                                a {
                                    class: "hover:underline",
                                    href: "{whatsapp}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "WhatsApp"
                                }
                            }
                        }
                    }
                }
                p { class: "copyright sm:col-span-3 text-xs text-neutral-500", "© {year} {name}. {disclaimer}" }
            }
        }
    }
}
