use std::borrow::Cow;

/// Failures while producing the landing document.
#[vls_derive::vls_error]
pub enum RenderError {
    /// The structured-data object could not be encoded.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
