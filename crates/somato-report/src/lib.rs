//! somato-report
//!
//! Self-contained HTML report generation: builds a fully formatted view
//! model from a decoded payload and renders it through an embedded Tera
//! template. The output is one document with inlined CSS, an embedded logo,
//! and an inline SVG history chart.

pub mod error;
pub mod render;
pub mod styles;
pub mod view;
