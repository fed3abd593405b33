use crate::components::{Document, DocumentProps};
use crate::error::RenderError;
use crate::structured_data::LegalService;
use chrono::{Datelike, Local};
use dioxus::prelude::*;
use tracing::debug;
use vls_domain::SiteContent;

pub const DOCTYPE: &str = "<!DOCTYPE html>";

const HTML_OPEN: &str = r#"<html lang="es">"#;
const HTML_CLOSE: &str = "</html>";

/// Inputs that are not part of the static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year printed in the footer copyright line.
    pub year: i32,
}

impl RenderOptions {
    #[must_use]
    pub const fn with_year(year: i32) -> Self {
        Self { year }
    }

    /// Uses the current local calendar year.
    #[must_use]
    pub fn current() -> Self {
        Self { year: Local::now().year() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::current()
    }
}

/// Renders the complete landing document, doctype included.
///
/// The output depends only on `content` and `options`: equal inputs give
/// byte-identical documents.
///
/// # Errors
/// Returns [`RenderError::Serialize`] if the structured data cannot be encoded.
pub fn render_page(content: &SiteContent, options: &RenderOptions) -> Result<String, RenderError> {
    let structured_data = LegalService::new(&content.organization, &content.faq).to_script_json()?;

    debug!(
        services = content.services.len(),
        reasons = content.reasons.len(),
        steps = content.steps.len(),
        faq = content.faq.len(),
        year = options.year,
        "Rendering landing page"
    );

    let props =
        DocumentProps { content: content.clone(), structured_data, year: options.year };
    let mut dom = VirtualDom::new_with_props(Document, props);
    dom.rebuild_in_place();

    let body = dioxus_ssr::render(&dom);
    let mut html =
        String::with_capacity(DOCTYPE.len() + HTML_OPEN.len() + body.len() + HTML_CLOSE.len());
    html.push_str(DOCTYPE);
    html.push_str(HTML_OPEN);
    html.push_str(&body);
    html.push_str(HTML_CLOSE);

    debug!(bytes = html.len(), "Landing page rendered");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_starts_with_doctype_and_html() {
        let html = render_page(&SiteContent::default(), &RenderOptions::with_year(2030)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn html_element_declares_spanish_and_opens_with_head() {
        let html = render_page(&SiteContent::default(), &RenderOptions::with_year(2030)).unwrap();
        assert!(html.contains(r#"<html lang="es"><head>"#));
        assert_eq!(html.matches("<html").count(), 1);
        assert_eq!(html.matches("<body").count(), 1);
    }

    #[test]
    fn only_the_year_changes_between_years() {
        let content = SiteContent::default();
        let a = render_page(&content, &RenderOptions::with_year(2030)).unwrap();
        let b = render_page(&content, &RenderOptions::with_year(2031)).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.replace("© 2030", "© 2031"), b);
    }

    #[test]
    fn default_options_use_current_year() {
        assert_eq!(RenderOptions::default().year, Local::now().year());
    }
}
