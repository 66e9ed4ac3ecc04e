//! Excel read/write module for the roster pipeline
//!
//! Two components, run sequentially per request:
//! - Extractor: front-office export (.xls/.xlsx) → guest directory
//! - Builder: guest directory → formatted roster workbook

mod builder;
mod extractor;
pub mod layout;

pub use builder::RosterSheetBuilder;
pub use extractor::GuestExtractor;
