//! whisperer-web — Web application for Data Whisperer.
//! Provides:
//!   - The mapping workbench page (paste JSON, review suggestions)
//!   - JSON APIs for analysis, preview, and config export
//!   - Static asset serving

pub mod handlers;
pub mod router;
pub mod state;
