//! # Structured data
//!
//! schema.org `LegalService` description of the publisher with a nested `FAQPage`,
//! embedded in the page as `<script type="application/ld+json">`.
//!
//! Field names and nesting follow the schema.org vocabulary exactly; struct field
//! order fixes the key order, so encoding the same content twice yields the same bytes.

use crate::error::{RenderError, RenderErrorExt};
use serde::{Deserialize, Serialize};
use vls_domain::{FaqItem, Organization};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalService {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub slogan: String,
    pub area_served: Place,
    pub available_language: Vec<String>,
    pub same_as: Vec<String>,
    pub main_entity: FaqPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@type")]
    pub kind: String,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub text: String,
}

impl LegalService {
    /// Describes `organization` and lists `faq` in order as its FAQ page.
    #[must_use]
    pub fn new(organization: &Organization, faq: &[FaqItem]) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_owned(),
            kind: "LegalService".to_owned(),
            name: organization.name.clone(),
            url: organization.url.clone(),
            slogan: organization.slogan.clone(),
            area_served: Place {
                kind: "Country".to_owned(),
                name: organization.area_served.clone(),
            },
            available_language: organization.languages.clone(),
            same_as: organization.same_as.clone(),
            main_entity: FaqPage {
                kind: "FAQPage".to_owned(),
                main_entity: faq.iter().map(Question::from).collect(),
            },
        }
    }

    /// Compact JSON that is safe to place verbatim inside a `<script>` element.
    ///
    /// # Errors
    /// Returns [`RenderError::Serialize`] if encoding fails.
    pub fn to_script_json(&self) -> Result<String, RenderError> {
        let json = serde_json::to_string(self).context("Encoding structured data")?;
        Ok(escape_for_script(&json))
    }

    /// Indented JSON for humans; not escaped for embedding.
    ///
    /// # Errors
    /// Returns [`RenderError::Serialize`] if encoding fails.
    pub fn to_pretty_json(&self) -> Result<String, RenderError> {
        serde_json::to_string_pretty(self).context("Encoding structured data")
    }

    /// The FAQ listing as plain question/answer pairs.
    #[must_use]
    pub fn faq_pairs(&self) -> Vec<FaqItem> {
        self.main_entity
            .main_entity
            .iter()
            .map(|q| FaqItem { question: q.name.clone(), answer: q.accepted_answer.text.clone() })
            .collect()
    }
}

impl From<&FaqItem> for Question {
    fn from(item: &FaqItem) -> Self {
        Self {
            kind: "Question".to_owned(),
            name: item.question.clone(),
            accepted_answer: Answer { kind: "Answer".to_owned(), text: item.answer.clone() },
        }
    }
}

/// Rewrites characters that could end or confuse an HTML script context as JSON
/// `\uXXXX` escapes.
///
/// `<`, `>` and `&` never appear in JSON outside string literals, and inside
/// literals the escape decodes to the same character, so the output still parses
/// to an equal value. U+2028/U+2029 are escaped for pre-ES2019 script parsers.
#[must_use]
pub fn escape_for_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use vls_domain::SiteContent;

    fn published() -> LegalService {
        let content = SiteContent::default();
        LegalService::new(&content.organization, &content.faq)
    }

    #[test]
    fn field_names_follow_schema_org() {
        let value = serde_json::to_value(published()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "LegalService");
        assert_eq!(value["name"], "Venezuelan Legal Services");
        assert_eq!(value["url"], "https://www.venezuelanlegalservices.com/");
        assert_eq!(value["slogan"], "Tu proceso legal, más claro que nunca");
        assert_eq!(value["areaServed"], json!({"@type": "Country", "name": "United States"}));
        assert_eq!(value["availableLanguage"], json!(["es", "en"]));
        assert_eq!(value["sameAs"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["mainEntity"]["@type"], "FAQPage");

        let first = &value["mainEntity"]["mainEntity"][0];
        assert_eq!(first["@type"], "Question");
        assert_eq!(first["name"], "¿Qué documento necesito para aplicar al asilo?");
        assert_eq!(first["acceptedAnswer"]["@type"], "Answer");
        assert!(first["acceptedAnswer"]["text"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[test]
    fn key_order_is_stable() {
        let json = published().to_script_json().unwrap();
        let positions: Vec<usize> = [
            "\"@context\"",
            "\"@type\"",
            "\"name\"",
            "\"url\"",
            "\"slogan\"",
            "\"areaServed\"",
            "\"availableLanguage\"",
            "\"sameAs\"",
            "\"mainEntity\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn script_json_is_deterministic() {
        assert_eq!(published().to_script_json().unwrap(), published().to_script_json().unwrap());
    }

    #[test]
    fn markup_characters_are_escaped() {
        let organization = Organization {
            slogan: "</script><script>alert('x')</script> & <!--".to_owned(),
            ..Organization::default()
        };
        let faq = [FaqItem { question: "a\u{2028}b".to_owned(), answer: "c\u{2029}d".to_owned() }];
        let data = LegalService::new(&organization, &faq);

        let json = data.to_script_json().unwrap();
        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
        assert!(!json.contains('&'));
        assert!(!json.contains('\u{2028}'));
        assert!(!json.contains('\u{2029}'));
        assert!(json.contains("\\u003c/script\\u003e"));

        let parsed: LegalService = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn escaping_leaves_plain_json_alone() {
        let plain = r#"{"a":"¿Qué?","b":[1,2]}"#;
        assert_eq!(escape_for_script(plain), plain);
    }

    #[test]
    fn faq_pairs_mirror_input() {
        let content = SiteContent::default();
        assert_eq!(published().faq_pairs(), content.faq);
    }

    #[test]
    fn pretty_json_parses_to_same_value() {
        let data = published();
        let pretty: Value = serde_json::from_str(&data.to_pretty_json().unwrap()).unwrap();
        let compact: Value = serde_json::from_str(&data.to_script_json().unwrap()).unwrap();
        assert_eq!(pretty, compact);
    }
}
