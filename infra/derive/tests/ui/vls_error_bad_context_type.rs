use vls_derive::vls_error;

#[vls_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
