//! # Venezuelan Legal Services CLI
//!
//! Renders the landing page to a static HTML file, or prints its JSON-LD.
//!
//! ## Example
//! ```no_run
//! use vls_cli::Site;
//!
//! fn main() -> anyhow::Result<()> {
//!     let site = Site::builder().build();
//!     site.render_to("dist/index.html")?;
//!     Ok(())
//! }
//! ```

pub mod args;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;
use vls_kernel::config::load_config;
use vls_kernel::domain::SiteContent;
use vls_kernel::domain::config::{LoggingConfig, SiteConfig};
use vls_landing::{LegalService, RenderOptions, render_page};
use vls_logger::Logger;

/// Fluent builder for [`Site`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct SiteBuilder {
    cfg: SiteConfig,
    year: Option<i32>,
}

impl SiteBuilder {
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Pins the copyright year instead of reading the clock.
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn build(self) -> Site {
        let mut content = SiteContent::default();
        content.contact = self.cfg.contact.apply(content.contact);
        let options = self.year.map_or_else(RenderOptions::current, RenderOptions::with_year);
        Site { cfg: self.cfg, content, options }
    }
}

/// The published content plus the settings it is rendered with.
#[derive(Debug)]
pub struct Site {
    cfg: SiteConfig,
    content: SiteContent,
    options: RenderOptions,
}

impl Site {
    pub fn builder() -> SiteBuilder {
        SiteBuilder::default()
    }

    /// # Errors
    /// Fails if the structured data cannot be encoded.
    pub fn render(&self) -> Result<String> {
        render_page(&self.content, &self.options).context("Failed to render landing page")
    }

    /// Renders into `path`, creating parent directories. Returns the document size.
    ///
    /// # Errors
    /// Fails on rendering errors or when the file cannot be written.
    pub fn render_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let html = self.render()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), bytes = html.len(), "Landing page written");
        Ok(html.len())
    }

    /// # Errors
    /// Fails if the structured data cannot be encoded.
    pub fn json_ld(&self, pretty: bool) -> Result<String> {
        let data = LegalService::new(&self.content.organization, &self.content.faq);
        let json = if pretty { data.to_pretty_json()? } else { data.to_script_json()? };
        Ok(json)
    }

    fn output_path(&self) -> &Path {
        &self.cfg.output.path
    }
}

/// Entry point shared by the binary: config, logging, then the subcommand.
///
/// # Errors
/// Returns the first failure with its context chain.
pub fn run(cli: Cli) -> Result<()> {
    let cfg: SiteConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logger(&cfg.logging)?;

    let site = Site::builder().config(cfg).build();

    match cli.command {
        Command::Render { stdout: true, .. } => write_stdout(&site.render()?),
        Command::Render { output, stdout: false } => {
            let path = output.as_deref().unwrap_or_else(|| site.output_path());
            site.render_to(path).map(|_| ())
        },
        Command::JsonLd { pretty } => write_stdout(&site.json_ld(pretty)?),
    }
}

fn init_logger(cfg: &LoggingConfig) -> Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level_name(&cfg.level)?;
    let logger = match &cfg.directory {
        Some(dir) => builder.directory(dir).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush().context("Failed to flush stdout")
}
