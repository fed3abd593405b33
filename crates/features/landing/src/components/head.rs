use dioxus::prelude::*;
use vls_domain::PageMetadata;

/// `<head>` with SEO metadata and the JSON-LD block.
///
/// `structured_data` is inserted without HTML escaping; it must come from
/// [`crate::structured_data::LegalService::to_script_json`].
#[component]
pub fn Head(metadata: PageMetadata, structured_data: String) -> Element {
    let PageMetadata { title, description, canonical_url, locale, og_image, robots, twitter_card } =
        metadata;

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            meta { name: "description", content: "{description}" }
            meta { name: "robots", content: "{robots}" }
            link { rel: "canonical", href: "{canonical_url}" }
            meta { "property": "og:type", content: "website" }
            meta { "property": "og:title", content: "{title}" }
            meta { "property": "og:description", content: "{description}" }
            meta { "property": "og:url", content: "{canonical_url}" }
            meta { "property": "og:locale", content: "{locale}" }
            meta { "property": "og:image", content: "{og_image}" }
            meta { name: "twitter:card", content: "{twitter_card}" }
            meta { name: "twitter:title", content: "{title}" }
            meta { name: "twitter:description", content: "{description}" }
            meta { name: "twitter:image", content: "{og_image}" }
            script { r#type: "application/ld+json", dangerous_inner_html: "{structured_data}" }
        }
    }
}
