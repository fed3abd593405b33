use std::borrow::Cow;
use vls_derive::vls_error;

#[vls_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let failed: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    failed.context("Reading page")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading page): disk");

    let internal: Result<(), DemoError> = Err("boom".into());
    let err = internal.context("Rendering").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (Rendering): boom");
}
