//! Core functionality for gdt-convert
//!
//! This crate turns a brand's Growth Diagnosis Tool (GDT) output bundle
//! (one summary JSON plus up to nine per-component documents) into the
//! single typed record the website front end consumes, together with a
//! completeness report describing what was extracted, derived, or missing.
//!
//! Pipeline order: [`bundle`] (load) → [`extract`] → [`resolve`] →
//! [`assemble`] → [`emit`] / [`report`].

pub mod assemble;
pub mod bundle;
pub mod component;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod model;
pub mod report;
pub mod resolve;
pub mod summary;
pub mod validate;

pub use assemble::{ConvertOptions, convert};
pub use bundle::AnalysisBundle;
pub use component::ComponentId;
pub use error::{ConvertError, Result};
pub use model::GdtAnalysis;
pub use validate::ConversionReport;

/// Default brand accent color when neither CLI nor config supplies one
pub const DEFAULT_ACCENT_COLOR: &str = "#E54B7B";
