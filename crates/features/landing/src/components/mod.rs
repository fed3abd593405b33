//! Dioxus components for each region of the landing page.
//!
//! Components only read the content they are given; they hold no state and run
//! no hooks, so a server-side render is a single pass.

mod about;
mod contact;
mod faq;
mod footer;
mod head;
mod hero;
mod reasons;
mod services;
mod steps;

pub use about::About;
pub use contact::Contact;
pub use faq::Faq;
pub use footer::Footer;
pub use head::Head;
pub use hero::Hero;
pub use reasons::Reasons;
pub use services::Services;
pub use steps::Steps;

use dioxus::prelude::*;
use vls_domain::SiteContent;

/// In-page anchors shared by the hero, cards, and footer navigation.
pub mod anchors {
    pub const SERVICES: &str = "servicios";
    pub const STEPS: &str = "pasos";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contacto";

    #[must_use]
    pub fn href(anchor: &str) -> String {
        format!("#{anchor}")
    }
}

/// Root props: the content, the pre-encoded structured data, and the copyright year.
#[derive(Props, Clone, PartialEq, Debug)]
pub struct DocumentProps {
    pub content: SiteContent,
    pub structured_data: String,
    pub year: i32,
}

/// `<head>` and `<body>`; the `<html>` element is written by the renderer.
#[allow(non_snake_case)]
pub fn Document(props: DocumentProps) -> Element {
    let DocumentProps { content, structured_data, year } = props;

    rsx! {
        Head { metadata: content.metadata.clone(), structured_data: structured_data }
        body {
            main { class: "min-h-dvh bg-white text-neutral-900",
                header {}
                Hero { hero: content.hero.clone() }
                Reasons {
                    section: content.reasons_section.clone(),
                    reasons: content.reasons.clone(),
                }
                Services {
                    section: content.services_section.clone(),
                    services: content.services.clone(),
                    cta: content.service_cta.clone(),
                }
                Steps { section: content.steps_section.clone(), steps: content.steps.clone() }
                Faq { section: content.faq_section.clone(), faq: content.faq.clone() }
                About { section: content.about_section.clone(), body: content.about.clone() }
                Contact {
                    section: content.contact_section.clone(),
                    contact: content.contact.clone(),
                    whatsapp_cta: content.whatsapp_cta.clone(),
                }
                Footer { content: content.clone(), year: year }
            }
        }
    }
}
