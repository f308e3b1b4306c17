//! Export core modules shared across CLI and dashboard wrappers.

#[cfg(feature = "excel")]
pub mod excel_core;
