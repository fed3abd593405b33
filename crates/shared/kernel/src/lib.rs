//! Kernel utilities shared by the apps.
//! Keep this crate lightweight: it owns configuration loading and re-exports the domain.
//!
//! ## Config loading
//! ```rust,no_run
//! use vls_kernel::config::load_config;
//! use vls_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("vls.toml")).unwrap();
//! println!("{}", cfg.output.path.display());
//! ```
pub mod config;

pub use vls_domain as domain;
