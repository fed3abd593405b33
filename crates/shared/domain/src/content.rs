//! Page content records and the published catalog.
//!
//! Every record is an immutable value built from literals; nothing here has an
//! identity beyond its display text.

use serde::{Deserialize, Serialize};

/// A service card with a call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
}

/// A benefit card in the "why us" grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonItem {
    pub title: String,
    pub body: String,
}

/// One entry of the ordered process list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepItem {
    pub label: String,
    pub body: String,
}

/// A question/answer pair.
///
/// The same list feeds the visible disclosure widgets and the structured-data
/// FAQ listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Publisher identity as advertised to search engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub slogan: String,
    pub tagline: String,
    /// Country name, e.g. `United States`.
    pub area_served: String,
    /// Language codes, in order of preference.
    pub languages: Vec<String>,
    /// Social profile URLs.
    pub same_as: Vec<String>,
}

/// Deep-link targets for the contact block and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub whatsapp_url: String,
    pub email: String,
}

impl ContactInfo {
    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Document-level metadata rendered into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Open Graph locale, e.g. `es_US`.
    pub locale: String,
    pub og_image: String,
    pub robots: String,
    pub twitter_card: String,
}

/// Hero banner copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub heading: String,
    pub lead: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

/// Heading and optional lead paragraph of a page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub heading: String,
    pub lead: Option<String>,
}

impl SectionCopy {
    fn new(heading: &str, lead: Option<&str>) -> Self {
        Self { heading: heading.to_owned(), lead: lead.map(str::to_owned) }
    }
}

/// Everything the landing page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub organization: Organization,
    pub contact: ContactInfo,
    pub metadata: PageMetadata,
    pub hero: HeroCopy,
    pub reasons_section: SectionCopy,
    pub reasons: Vec<ReasonItem>,
    pub services_section: SectionCopy,
    pub services: Vec<ServiceItem>,
    pub steps_section: SectionCopy,
    pub steps: Vec<StepItem>,
    pub faq_section: SectionCopy,
    pub faq: Vec<FaqItem>,
    pub about_section: SectionCopy,
    pub about: String,
    pub contact_section: SectionCopy,
    pub service_cta: String,
    pub whatsapp_cta: String,
    pub disclaimer: String,
}

fn service(title: &str, description: &str) -> ServiceItem {
    ServiceItem { title: title.to_owned(), description: description.to_owned() }
}

fn reason(title: &str, body: &str) -> ReasonItem {
    ReasonItem { title: title.to_owned(), body: body.to_owned() }
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem { question: question.to_owned(), answer: answer.to_owned() }
}

fn steps(bodies: &[&str]) -> Vec<StepItem> {
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| StepItem { label: format!("Paso {}", i + 1), body: (*body).to_owned() })
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            name: "Venezuelan Legal Services".to_owned(),
            url: "https://www.venezuelanlegalservices.com/".to_owned(),
            slogan: "Tu proceso legal, más claro que nunca".to_owned(),
            tagline: "El camino para ordenar tu futuro.".to_owned(),
            area_served: "United States".to_owned(),
            languages: strings(&["es", "en"]),
            same_as: strings(&[
                "https://www.facebook.com/",
                "https://www.instagram.com/",
                "https://www.linkedin.com/",
            ]),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            whatsapp_url: "https://wa.me/".to_owned(),
            email: "contacto@venezuelanlegalservices.com".to_owned(),
        }
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: "Venezuelan Legal Services | Asilo, TPS y permisos de trabajo".to_owned(),
            description: "Te guiamos paso a paso en asilo, TPS, permisos de trabajo y más. \
                          Documentos organizados, soporte humano por WhatsApp y un panel seguro."
                .to_owned(),
            canonical_url: "https://www.venezuelanlegalservices.com/".to_owned(),
            locale: "es_US".to_owned(),
            og_image: "https://www.venezuelanlegalservices.com/vzla_flag.jpg".to_owned(),
            robots: "index, follow".to_owned(),
            twitter_card: "summary_large_image".to_owned(),
        }
    }
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            heading: "¿Listo para empezar tu camino legal?".to_owned(),
            lead: "Te guiamos paso a paso en asilo, TPS, permisos de trabajo y más. Documentos \
                   organizados, soporte humano, y un panel seguro para ti."
                .to_owned(),
            primary_cta: "Agenda una consulta".to_owned(),
            secondary_cta: "Ver servicios".to_owned(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            organization: Organization::default(),
            contact: ContactInfo::default(),
            metadata: PageMetadata::default(),
            hero: HeroCopy::default(),
            reasons_section: SectionCopy::new(
                "¿Por qué Venezuelan Legal Services?",
                Some("Beneficios que simplifican tu proceso desde el día uno."),
            ),
            reasons: vec![
                reason(
                    "Fácil desde el celular",
                    "Carga documentos, revisa avances y firma de forma segura desde tu móvil.",
                ),
                reason(
                    "Soporte por WhatsApp",
                    "Acompañamiento cercano e ilimitado. Respuestas claras cuando las necesites.",
                ),
                reason(
                    "Seguridad real",
                    "Datos cifrados y accesos autenticados para proteger tu información.",
                ),
                reason("Acceso 24/7", "Consulta tus documentos y estado en cualquier momento."),
            ],
            services_section: SectionCopy::new(
                "Servicios legales",
                Some("Elige el trámite que necesitas. Te acompañamos de principio a fin."),
            ),
            services: vec![
                service(
                    "Solicitud de Asilo Político",
                    "Organizamos evidencias y formularios para presentar tu caso con claridad.",
                ),
                service(
                    "Permiso de Trabajo (EAD)",
                    "Validamos tu elegibilidad y preparamos tu solicitud para evitar retrasos.",
                ),
                service(
                    "Visas Estudiantiles",
                    "Asesoría sobre requisitos, formularios y tiempos de respuesta.",
                ),
                service(
                    "Visas Humanitarias",
                    "Orientación en opciones humanitarias según tu situación.",
                ),
            ],
            steps_section: SectionCopy::new("Tu proceso legal, más claro que nunca", None),
            steps: steps(&[
                "Agenda una consulta y cuéntanos tu caso. Te explicaremos opciones y requisitos.",
                "Preparamos tu documentación y te damos acceso a tu carpeta segura 24/7.",
                "Revisión final y envío del trámite. Seguimiento por WhatsApp.",
                "Acompañamiento continuo: notificaciones de plazos y próximos pasos.",
            ]),
            faq_section: SectionCopy::new(
                "¿Tienes dudas?",
                Some("Respuestas rápidas para preguntas frecuentes."),
            ),
            faq: vec![
                faq(
                    "¿Qué documento necesito para aplicar al asilo?",
                    "Los requisitos pueden variar. Generalmente, necesitarás tu identificación, \
                     pruebas o relatos creíbles de persecución, dirección actual y cualquier \
                     documento que respalde tu caso. Te guiamos paso a paso para organizar todo.",
                ),
                faq(
                    "¿Puedo trabajar mientras espero mi caso?",
                    "Puedes solicitar el permiso de trabajo (EAD) si cumples con los tiempos y \
                     requisitos establecidos. Te ayudamos a preparar y enviar tu solicitud \
                     correctamente.",
                ),
                faq(
                    "¿Es seguro cargar mis documentos?",
                    "Sí. Usamos almacenamiento cifrado y accesos autenticados. Solo tú y el \
                     equipo autorizado pueden ver tus archivos.",
                ),
            ],
            about_section: SectionCopy::new("¿Quiénes somos?", None),
            about: "Somos un equipo bilingüe dedicado a que entiendas cada paso de tu proceso \
                    migratorio. Nuestro enfoque es práctico: explicar, organizar y acompañar. Te \
                    damos un panel seguro para tus archivos y te mantenemos al tanto por WhatsApp."
                .to_owned(),
            contact_section: SectionCopy::new(
                "¿Listo para empezar?",
                Some("Agenda una consulta y recibe una checklist personalizada de tu caso."),
            ),
            service_cta: "Empezar".to_owned(),
            whatsapp_cta: "Escríbenos por WhatsApp".to_owned(),
            disclaimer: "Todos los derechos reservados. *No ofrecemos asesoría legal; brindamos \
                         orientación y apoyo documental.*"
                .to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_catalog_sizes() {
        let content = SiteContent::default();
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.reasons.len(), 4);
        assert_eq!(content.steps.len(), 4);
        assert_eq!(content.faq.len(), 3);
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let labels: Vec<_> =
            SiteContent::default().steps.into_iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Paso 1", "Paso 2", "Paso 3", "Paso 4"]);
    }

    #[test]
    fn service_titles_are_unique_display_keys() {
        let content = SiteContent::default();
        let mut titles: Vec<_> = content.services.iter().map(|s| s.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), content.services.len());
    }

    #[test]
    fn mailto_uses_published_address() {
        assert_eq!(
            ContactInfo::default().mailto_href(),
            "mailto:contacto@venezuelanlegalservices.com"
        );
    }

    #[test]
    fn continued_literals_keep_single_spaces() {
        let content = SiteContent::default();
        assert!(!content.about.contains("  "));
        assert!(content.faq.iter().all(|f| !f.answer.contains("  ")));
    }
}
