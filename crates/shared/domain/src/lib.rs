//! # Domain Models
//!
//! Content records for the Venezuelan Legal Services landing page and the
//! settings of the `vls` renderer. Keep it lean: no I/O, no rendering, just data.

pub mod config;
pub mod content;

pub use content::{
    ContactInfo, FaqItem, HeroCopy, Organization, PageMetadata, ReasonItem, SectionCopy,
    ServiceItem, SiteContent, StepItem,
};
